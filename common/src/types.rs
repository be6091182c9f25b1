//! ギャラリーの型定義
//!
//! CLIとフィルタエンジンで共有される型:
//! - RawRow: CSVから読んだ生の行
//! - DesignerRecord: 正規化済みのデザイナーレコード
//! - FilterState / Selection / OccurrenceBucket: フィルタの選択状態
//! - FilterVocabulary / AggregateStats: フィルタ結果から導出される値

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// 「すべて」を表すセンチネル値
pub const ALL: &str = "All";

/// 欠損フィールドの既定値
pub const UNKNOWN: &str = "Unknown";

/// CSVの列名
pub mod columns {
    pub const NAME: &str = "name";
    pub const COUNTRY: &str = "country";
    pub const REGION: &str = "region";
    pub const GENDER: &str = "gender";
    pub const IMAGE_URL: &str = "image_url";

    /// ヘッダに含まれるべき列
    pub const EXPECTED: [&str; 5] = [NAME, COUNTRY, REGION, GENDER, IMAGE_URL];
}

/// CSVの1行（列名 → 値）
///
/// 空文字・空白のみの値は欠損として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// 列の値を取得（欠損・空文字は None）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// 正規化済みのデザイナーレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerRecord {
    /// 読み込み順の連番（0始まり）
    pub id: usize,
    pub name: String,
    pub country: String,
    pub region: String,
    pub gender: String,
    pub image_url: String,
    /// 同名の行数（読み込み時に一度だけ計算）
    pub occurrences: usize,
}

/// 文字列フィルタの選択値
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    pub fn value(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// レコードの値がこの選択に一致するか
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(v) => v == candidate,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Value(v) => v,
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL {
            Selection::All
        } else if trimmed.len() == value.len() {
            Selection::Value(value)
        } else {
            Selection::Value(trimmed.to_string())
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Value(v) => v,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 出現回数フィルタ（下限値、5+は5以上）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OccurrenceBucket {
    #[default]
    All,
    Two,
    Three,
    Four,
    FivePlus,
}

impl OccurrenceBucket {
    /// 選択肢の並び順
    pub const BUCKETS: [OccurrenceBucket; 5] = [
        OccurrenceBucket::All,
        OccurrenceBucket::Two,
        OccurrenceBucket::Three,
        OccurrenceBucket::Four,
        OccurrenceBucket::FivePlus,
    ];

    /// 下限値（All は None）
    pub fn min(&self) -> Option<usize> {
        match self {
            OccurrenceBucket::All => None,
            OccurrenceBucket::Two => Some(2),
            OccurrenceBucket::Three => Some(3),
            OccurrenceBucket::Four => Some(4),
            OccurrenceBucket::FivePlus => Some(5),
        }
    }

    pub fn matches(&self, occurrences: usize) -> bool {
        self.min().map_or(true, |min| occurrences >= min)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceBucket::All => ALL,
            OccurrenceBucket::Two => "2",
            OccurrenceBucket::Three => "3",
            OccurrenceBucket::Four => "4",
            OccurrenceBucket::FivePlus => "5+",
        }
    }
}

impl FromStr for OccurrenceBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | ALL => Ok(OccurrenceBucket::All),
            "2" => Ok(OccurrenceBucket::Two),
            "3" => Ok(OccurrenceBucket::Three),
            "4" => Ok(OccurrenceBucket::Four),
            "5+" | "5" => Ok(OccurrenceBucket::FivePlus),
            other => Err(Error::InvalidBucket(other.to_string())),
        }
    }
}

impl TryFrom<String> for OccurrenceBucket {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OccurrenceBucket> for String {
    fn from(bucket: OccurrenceBucket) -> Self {
        bucket.as_str().to_string()
    }
}

impl fmt::Display for OccurrenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フィルタ対象のフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Region,
    Country,
    Gender,
    MinOccurrences,
}

impl FromStr for FilterField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" => Ok(FilterField::Region),
            "country" => Ok(FilterField::Country),
            "gender" => Ok(FilterField::Gender),
            "minoccurrences" | "min_occurrences" | "min-occurrences" | "occurrences" => {
                Ok(FilterField::MinOccurrences)
            }
            _ => Err(Error::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Region => write!(f, "region"),
            FilterField::Country => write!(f, "country"),
            FilterField::Gender => write!(f, "gender"),
            FilterField::MinOccurrences => write!(f, "minOccurrences"),
        }
    }
}

/// 現在のフィルタ選択
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub region: Selection,
    pub country: Selection,
    pub gender: Selection,
    pub min_occurrences: OccurrenceBucket,
}

impl FilterState {
    pub fn with_region(mut self, region: impl Into<Selection>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<Selection>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<Selection>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_min_occurrences(mut self, bucket: OccurrenceBucket) -> Self {
        self.min_occurrences = bucket;
        self
    }

    /// すべて All か
    pub fn is_unfiltered(&self) -> bool {
        self.region.is_all()
            && self.country.is_all()
            && self.gender.is_all()
            && self.min_occurrences == OccurrenceBucket::All
    }
}

/// 各フィルタの選択肢（先頭は常に "All"）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterVocabulary {
    pub regions: Vec<String>,
    pub countries: Vec<String>,
    pub genders: Vec<String>,
    pub occurrences: Vec<String>,
}

/// フィルタ後の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub gender: BTreeMap<String, usize>,
    pub region: BTreeMap<String, usize>,
}

impl AggregateStats {
    pub fn is_empty(&self) -> bool {
        self.gender.is_empty() && self.region.is_empty()
    }
}
