//! ギャラリーの状態
//!
//! 1回の読み込みで得たレコードと現在のフィルタ状態を保持する。
//! 導出値はキャッシュせず、呼び出しのたびに計算し直す。

use crate::error::Result;
use crate::filter;
use crate::normalizer::{normalize_with, NormalizeOptions};
use crate::types::{
    AggregateStats, DesignerRecord, FilterField, FilterState, FilterVocabulary, RawRow,
};
use crate::view::GalleryView;

#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    records: Vec<DesignerRecord>,
    filters: FilterState,
    generation: u64,
    options: NormalizeOptions,
}

impl GallerySession {
    /// 正規化済みレコードから作成
    pub fn new(records: Vec<DesignerRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// 生の行から作成
    pub fn from_rows(rows: &[RawRow], options: NormalizeOptions) -> Self {
        Self {
            records: normalize_with(rows, &options),
            options,
            ..Default::default()
        }
    }

    /// レコード集合を丸ごと置き換える（フィルタは初期化）
    pub fn reload(&mut self, rows: &[RawRow]) {
        self.records = normalize_with(rows, &self.options);
        self.filters = filter::reset_filters();
        self.generation += 1;
    }

    pub fn records(&self) -> &[DesignerRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// 読み込み世代（reload ごとに増える）
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// データが1件も無いか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<&FilterState> {
        self.filters = filter::set_filter(&self.filters, field, value)?;
        Ok(&self.filters)
    }

    pub fn reset_filters(&mut self) -> &FilterState {
        self.filters = filter::reset_filters();
        &self.filters
    }

    pub fn vocabulary(&self) -> FilterVocabulary {
        filter::derive_vocabulary(&self.records, &self.filters.region)
    }

    pub fn visible(&self) -> Vec<DesignerRecord> {
        filter::apply(&self.records, &self.filters)
    }

    pub fn stats(&self) -> AggregateStats {
        filter::aggregate(&self.visible())
    }

    /// 表示用のビューモデルを組み立てる
    pub fn view(&self, title: &str) -> GalleryView {
        let visible = self.visible();
        GalleryView::build(
            title,
            &self.filters,
            &self.vocabulary(),
            &visible,
            self.records.len(),
        )
    }
}
