//! CSV読み込みモジュール
//!
//! ファイルを読み、ヘッダ付きCSVを RawRow の列に変換する。
//! 正規化はしない（値は文字列のまま）。

use crate::error::{GalleryError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use designer_gallery_common::types::columns;
use designer_gallery_common::RawRow;
use std::path::Path;

/// ファイルを非同期に読み込んでパースする
pub async fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(GalleryError::LoadFailed(format!(
            "ファイルが見つかりません: {}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| GalleryError::LoadFailed(format!("{}: {}", path.display(), e)))?;

    let content = String::from_utf8(bytes).map_err(|e| {
        GalleryError::LoadFailed(format!("{}: UTF-8ではありません ({})", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "データファイルを読み込み");
    parse_rows(&content)
}

/// CSV文字列をパースする
///
/// 列が足りない行は欠損扱い、空行はスキップする。
pub fn parse_rows(content: &str) -> Result<Vec<RawRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| GalleryError::ParseFailed(format!("ヘッダを読めません: {}", e)))?
        .clone();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(GalleryError::ParseFailed("ヘッダ行がありません".into()));
    }

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        tracing::warn!(columns = ?missing, "ヘッダに列がありません（既定値で埋めます）");
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            GalleryError::ParseFailed(format!("{}行目を解析できません: {}", index + 2, e))
        })?;

        if record.iter().all(|v| v.is_empty()) {
            continue;
        }

        rows.push(to_raw_row(&headers, &record));
    }

    tracing::debug!(rows = rows.len(), "CSVを解析");
    Ok(rows)
}

fn to_raw_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    headers
        .iter()
        .zip(record.iter())
        .map(|(header, value)| (header.to_string(), value.to_string()))
        .collect()
}

fn missing_columns(headers: &StringRecord) -> Vec<&'static str> {
    columns::EXPECTED
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect()
}
