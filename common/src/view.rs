//! 表示用ビューモデル
//!
//! 描画側（CLI等）はこの構造体だけを見ればよい。

use crate::filter;
use crate::types::{AggregateStats, DesignerRecord, FilterState, FilterVocabulary};
use serde::{Deserialize, Serialize};

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStatus {
    /// 1件も読み込まれていない
    NoData,
    /// フィルタに一致するレコードが無い
    NoMatches,
    Ready,
}

impl ViewStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewStatus::NoData => Some("No designers loaded."),
            ViewStatus::NoMatches => Some("No designers match your current filters."),
            ViewStatus::Ready => None,
        }
    }
}

/// 選択肢（選択中のものは selected）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<FilterOption>,
    pub countries: Vec<FilterOption>,
    pub genders: Vec<FilterOption>,
    pub occurrences: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub title: String,
    pub filters: FilterState,
    pub options: FilterOptions,
    /// 表示対象のレコード（元の順序）
    pub cards: Vec<DesignerRecord>,
    pub shown: usize,
    pub total: usize,
    pub stats: AggregateStats,
    pub status: ViewStatus,
}

impl GalleryView {
    pub fn build(
        title: &str,
        filters: &FilterState,
        vocabulary: &FilterVocabulary,
        visible: &[DesignerRecord],
        total: usize,
    ) -> Self {
        let status = if total == 0 {
            ViewStatus::NoData
        } else if visible.is_empty() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Ready
        };

        Self {
            title: title.to_string(),
            filters: filters.clone(),
            options: FilterOptions {
                regions: mark_selected(&vocabulary.regions, filters.region.as_str()),
                countries: mark_selected(&vocabulary.countries, filters.country.as_str()),
                genders: mark_selected(&vocabulary.genders, filters.gender.as_str()),
                occurrences: mark_selected(
                    &vocabulary.occurrences,
                    filters.min_occurrences.as_str(),
                ),
            },
            cards: visible.to_vec(),
            shown: visible.len(),
            total,
            stats: filter::aggregate(visible),
            status,
        }
    }

    /// "Showing N of M designers"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} designers", self.shown, self.total)
    }
}

fn mark_selected(values: &[String], selected: &str) -> Vec<FilterOption> {
    values
        .iter()
        .map(|v| FilterOption {
            value: v.clone(),
            selected: v == selected,
        })
        .collect()
}
