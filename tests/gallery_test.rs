//! ギャラリー統合テスト
//!
//! CSVファイルの読み込みからフィルタ・集計・表示までを通しで検証

use designer_gallery::cli::FilterArgs;
use designer_gallery::config::Config;
use designer_gallery::gallery;
use designer_gallery::render;
use designer_gallery_common::{FilterField, OccurrenceBucket, Selection, ViewStatus};
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const DESIGNERS_CSV: &str = "\
name,country,region,gender,image_url
Dieter Rams,Germany,Europe,M,https://example.com/rams.jpg
Eileen Gray,Ireland,Europe,F,
Sori Yanagi,Japan,Asia,M
Dieter Rams,Germany,Europe,M,https://example.com/rams2.jpg
Lina Bo Bardi,Brazil,South America,F,
,Japan,Asia,,
Dieter Rams,Germany,Europe,M,
";

fn write_csv(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("designers.csv");
    std::fs::write(&path, content).expect("CSV書き込み失敗");
    (dir, path)
}

#[tokio::test]
async fn test_open_session_normalizes() {
    let (_dir, path) = write_csv(DESIGNERS_CSV);
    let session = gallery::open_session(&path, &Config::default())
        .await
        .expect("読み込み失敗");

    let records = session.records();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].occurrences, 3);
    assert_eq!(records[1].occurrences, 1);
    assert_eq!(records[5].name, "Unknown");
    assert_eq!(records[5].gender, "Unknown");
    assert_eq!(records[2].region, "Asia");
    assert_eq!(
        records[1].image_url,
        "https://via.placeholder.com/150x200?text=Eileen Gray"
    );
}

#[tokio::test]
async fn test_open_session_custom_placeholder() {
    let (_dir, path) = write_csv("name\nGray\n");
    let config = Config {
        placeholder_template: "/portraits/{name}.jpg".into(),
        ..Default::default()
    };

    let session = gallery::open_session(&path, &config).await.expect("読み込み失敗");
    assert_eq!(session.records()[0].image_url, "/portraits/Gray.jpg");
}

#[tokio::test]
async fn test_region_scopes_countries_and_resets_country() {
    let (_dir, path) = write_csv(DESIGNERS_CSV);
    let mut session = gallery::open_session(&path, &Config::default())
        .await
        .expect("読み込み失敗");

    session.set_filter(FilterField::Region, "Asia").unwrap();
    assert_eq!(session.vocabulary().countries, vec!["All", "Japan"]);

    session.set_filter(FilterField::Country, "Japan").unwrap();
    assert_eq!(session.visible().len(), 2);

    session.set_filter(FilterField::Region, "Europe").unwrap();
    assert_eq!(session.filters().country, Selection::All);
    assert_eq!(session.vocabulary().countries, vec!["All", "Germany", "Ireland"]);
    assert_eq!(session.visible().len(), 4);
}

#[tokio::test]
async fn test_filter_args_and_stats() {
    let (_dir, path) = write_csv(DESIGNERS_CSV);
    let mut session = gallery::open_session(&path, &Config::default())
        .await
        .expect("読み込み失敗");

    let args = FilterArgs {
        region: "Europe".into(),
        min_occurrences: OccurrenceBucket::Three,
        ..Default::default()
    };
    gallery::apply_filter_args(&mut session, &args).unwrap();

    let visible = session.visible();
    let ids: Vec<usize> = visible.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 3, 6]);

    let stats = session.stats();
    assert_eq!(stats.gender.get("M"), Some(&3));
    assert_eq!(stats.region.get("Europe"), Some(&3));
    assert_eq!(stats.gender.len(), 1);
}

#[tokio::test]
async fn test_view_json_and_text() {
    let (_dir, path) = write_csv(DESIGNERS_CSV);
    let mut session = gallery::open_session(&path, &Config::default())
        .await
        .expect("読み込み失敗");
    session.set_filter(FilterField::Gender, "F").unwrap();

    let view = session.view("Design Canon");
    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(view.summary(), "Showing 2 of 7 designers");

    let json = serde_json::to_value(&view).expect("シリアライズ失敗");
    assert_eq!(json["shown"], 2);
    assert_eq!(json["total"], 7);
    assert_eq!(json["filters"]["gender"], "F");
    assert_eq!(json["stats"]["region"]["Europe"], 1);

    let text = render::render_view(&view);
    assert!(text.contains("Eileen Gray"));
    assert!(text.contains("Lina Bo Bardi"));
    assert!(!text.contains("Dieter Rams"));
}

#[tokio::test]
async fn test_header_only_file_is_no_data() {
    let (_dir, path) = write_csv("name,country,region,gender,image_url\n");
    let session = gallery::open_session(&path, &Config::default())
        .await
        .expect("読み込み失敗");

    assert!(session.is_empty());
    let view = session.view("Design Canon");
    assert_eq!(view.status, ViewStatus::NoData);
    assert!(render::render_view(&view).contains("No designers loaded."));
}
