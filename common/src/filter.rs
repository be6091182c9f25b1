//! フィルタエンジン
//!
//! レコード集合とフィルタ状態から、表示対象・選択肢・集計を導出する。
//! すべて純粋関数で、状態変更のたびに呼び直す前提。

use crate::error::{Error, Result};
use crate::types::{
    AggregateStats, DesignerRecord, FilterField, FilterState, FilterVocabulary, OccurrenceBucket,
    Selection, ALL,
};
use std::collections::HashSet;

/// 各フィルタの選択肢を導出する
///
/// 国の選択肢は全レコードでの初出順を保ったまま、`current_region` が
/// All 以外ならその地域に属するレコードを持つ国だけに絞り込む。
pub fn derive_vocabulary(
    records: &[DesignerRecord],
    current_region: &Selection,
) -> FilterVocabulary {
    let mut countries = distinct_with_all(records.iter().map(|r| r.country.as_str()));
    if !current_region.is_all() {
        let in_region: HashSet<&str> = records
            .iter()
            .filter(|r| current_region.matches(&r.region))
            .map(|r| r.country.as_str())
            .collect();
        countries.retain(|c| c == ALL || in_region.contains(c.as_str()));
    }

    FilterVocabulary {
        regions: distinct_with_all(records.iter().map(|r| r.region.as_str())),
        countries,
        genders: distinct_with_all(records.iter().map(|r| r.gender.as_str())),
        occurrences: OccurrenceBucket::BUCKETS
            .iter()
            .map(|b| b.to_string())
            .collect(),
    }
}

/// 先頭に "All" を置き、初出順に重複を除く
///
/// データ中の値 "All" はセンチネルと区別できないので選択肢に含めない。
fn distinct_with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![ALL.to_string()];
    for value in values {
        if value != ALL && seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

/// `field=value` 形式のフィルタ指定を読み取る
pub fn parse_assignment(assignment: &str) -> Result<(FilterField, String)> {
    let (field, value) = assignment
        .split_once('=')
        .ok_or_else(|| Error::InvalidAssignment(assignment.to_string()))?;
    Ok((field.parse()?, value.trim().to_string()))
}

/// フィルタを1つ更新した新しい状態を返す
///
/// 地域を別の値に変えた場合、国は All に戻す。
pub fn set_filter(state: &FilterState, field: FilterField, value: &str) -> Result<FilterState> {
    let mut next = state.clone();
    match field {
        FilterField::Region => {
            let region = Selection::from(value);
            if region != state.region {
                next.country = Selection::All;
            }
            next.region = region;
        }
        FilterField::Country => next.country = Selection::from(value),
        FilterField::Gender => next.gender = Selection::from(value),
        FilterField::MinOccurrences => next.min_occurrences = value.parse()?,
    }
    Ok(next)
}

/// 全フィルタを All に戻す
pub fn reset_filters() -> FilterState {
    FilterState::default()
}

/// レコードがフィルタ条件をすべて満たすか
pub fn matches(record: &DesignerRecord, state: &FilterState) -> bool {
    state.region.matches(&record.region)
        && state.country.matches(&record.country)
        && state.gender.matches(&record.gender)
        && state.min_occurrences.matches(record.occurrences)
}

/// フィルタを適用する（元の順序を保つ）
pub fn apply(records: &[DesignerRecord], state: &FilterState) -> Vec<DesignerRecord> {
    records
        .iter()
        .filter(|r| matches(r, state))
        .cloned()
        .collect()
}

/// 性別・地域ごとの件数を集計する
pub fn aggregate(records: &[DesignerRecord]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    for record in records {
        *stats.gender.entry(record.gender.clone()).or_insert(0) += 1;
        *stats.region.entry(record.region.clone()).or_insert(0) += 1;
    }
    stats
}
