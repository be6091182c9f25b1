//! 正規化モジュール
//!
//! CSVの生の行をデザイナーレコードに変換する。
//!
//! ## 処理フロー
//! 1. 名前を解決（欠損は "Unknown"）し、名前ごとの行数を数える
//! 2. 行順に id を振り、欠損フィールドを既定値で埋める
//! 3. 画像URLが無い行はプレースホルダURLを生成する

use crate::types::{columns, DesignerRecord, RawRow, UNKNOWN};
use std::collections::HashMap;

/// プレースホルダ画像URLの既定テンプレート（`{name}` を名前で置換）
pub const DEFAULT_PLACEHOLDER_TEMPLATE: &str = "https://via.placeholder.com/150x200?text={name}";

/// 正規化オプション
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// 画像URLが無い場合のテンプレート
    pub placeholder_template: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            placeholder_template: DEFAULT_PLACEHOLDER_TEMPLATE.to_string(),
        }
    }
}

impl NormalizeOptions {
    /// プレースホルダURLを生成する
    ///
    /// 名前はエスケープせずにそのまま埋め込む。
    pub fn placeholder_url(&self, name: &str) -> String {
        self.placeholder_template.replace("{name}", name)
    }
}

/// 既定オプションで正規化する
pub fn normalize(rows: &[RawRow]) -> Vec<DesignerRecord> {
    normalize_with(rows, &NormalizeOptions::default())
}

/// 生の行をデザイナーレコードに変換する
///
/// # Arguments
/// * `rows` - 読み込み順の生の行
/// * `options` - 正規化オプション
///
/// # Returns
/// 入力と同じ長さ・順序のレコード。空入力なら空。
pub fn normalize_with(rows: &[RawRow], options: &NormalizeOptions) -> Vec<DesignerRecord> {
    let occurrences = count_names(rows);

    rows.iter()
        .enumerate()
        .map(|(id, row)| {
            let name = resolve(row, columns::NAME);
            let image_url = row
                .get(columns::IMAGE_URL)
                .map(str::to_string)
                .unwrap_or_else(|| options.placeholder_url(name));

            DesignerRecord {
                id,
                name: name.to_string(),
                country: resolve(row, columns::COUNTRY).to_string(),
                region: resolve(row, columns::REGION).to_string(),
                gender: resolve(row, columns::GENDER).to_string(),
                image_url,
                occurrences: occurrences.get(name).copied().unwrap_or(1),
            }
        })
        .collect()
}

/// 解決済みの名前ごとの行数
pub fn count_names(rows: &[RawRow]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(resolve(row, columns::NAME)).or_insert(0) += 1;
    }
    counts
}

fn resolve<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).unwrap_or(UNKNOWN)
}
