//! テキスト出力
//!
//! ビューモデルを端末向けの文字列にする。

use designer_gallery_common::view::FilterOption;
use designer_gallery_common::{AggregateStats, FilterVocabulary, GalleryView};
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn render_view(view: &GalleryView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}\n", view.title);
    let _ = writeln!(out, "Region:      {}", render_options(&view.options.regions));
    let _ = writeln!(out, "Country:     {}", render_options(&view.options.countries));
    let _ = writeln!(out, "Gender:      {}", render_options(&view.options.genders));
    let _ = writeln!(out, "Occurrences: {}", render_options(&view.options.occurrences));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.summary());

    if let Some(message) = view.status.message() {
        let _ = writeln!(out, "\n{}", message);
        return out;
    }

    let _ = writeln!(out);
    for card in &view.cards {
        let _ = writeln!(
            out,
            "#{:<4} {} ({}, {}, {}) x{}",
            card.id, card.name, card.country, card.region, card.gender, card.occurrences
        );
        let _ = writeln!(out, "      {}", card.image_url);
    }

    let _ = writeln!(out);
    out.push_str(&render_stats(&view.stats));
    out
}

/// 選択中の値は [ ] で囲む
fn render_options(options: &[FilterOption]) -> String {
    options
        .iter()
        .map(|o| {
            if o.selected {
                format!("[{}]", o.value)
            } else {
                o.value.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_vocabulary(vocabulary: &FilterVocabulary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Region:      {}", vocabulary.regions.join(", "));
    let _ = writeln!(out, "Country:     {}", vocabulary.countries.join(", "));
    let _ = writeln!(out, "Gender:      {}", vocabulary.genders.join(", "));
    let _ = writeln!(out, "Occurrences: {}", vocabulary.occurrences.join(", "));
    out
}

pub fn render_stats(stats: &AggregateStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gender:");
    render_counts(&mut out, &stats.gender);
    let _ = writeln!(out, "Region:");
    render_counts(&mut out, &stats.region);
    out
}

fn render_counts(out: &mut String, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (key, count) in counts {
        let _ = writeln!(out, "  {:<20} {}", key, count);
    }
}
