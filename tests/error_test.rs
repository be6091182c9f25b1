//! エラーケーステスト
//!
//! 読み込み・解析・設定のエラーハンドリングを検証

use designer_gallery::config::Config;
use designer_gallery::error::GalleryError;
use designer_gallery::loader;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[tokio::test]
async fn test_load_nonexistent_file() {
    let result = loader::load_rows(Path::new("/nonexistent/path/designers.csv")).await;
    assert!(matches!(result, Err(GalleryError::LoadFailed(_))));
}

/// ディレクトリを読み込んだ場合
#[tokio::test]
async fn test_load_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = loader::load_rows(dir.path()).await;
    assert!(matches!(result, Err(GalleryError::LoadFailed(_))));
}

/// UTF-8でないファイル
#[tokio::test]
async fn test_load_invalid_utf8() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("latin1.csv");
    std::fs::write(&path, b"name,country\nJos\xe9,Spain\n").unwrap();

    let result = loader::load_rows(&path).await;
    assert!(matches!(result, Err(GalleryError::LoadFailed(_))));
}

/// 空ファイルはヘッダが無いので解析エラー
#[tokio::test]
async fn test_load_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let result = loader::load_rows(&path).await;
    assert!(matches!(result, Err(GalleryError::ParseFailed(_))));
}

/// ヘッダのみのファイルはエラーではなく空
#[tokio::test]
async fn test_load_header_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("header.csv");
    std::fs::write(&path, "name,country,region,gender,image_url\n").unwrap();

    let rows = loader::load_rows(&path).await.expect("読み込み失敗");
    assert!(rows.is_empty());
}

/// データファイル未指定
#[test]
fn test_missing_data_file() {
    let config = Config::default();
    let result = config.resolve_data_file_with(None, None);
    assert!(matches!(result, Err(GalleryError::MissingDataFile)));

    let result = config.resolve_data_file_with(None, Some(String::new()));
    assert!(matches!(result, Err(GalleryError::MissingDataFile)));
}

/// プレースホルダに {name} が無い場合
#[test]
fn test_placeholder_without_name() {
    let mut config = Config {
        default_data_file: Some(PathBuf::from("designers.csv")),
        ..Default::default()
    };
    let result = config.set_placeholder("https://example.com/fixed.png".into());
    assert!(matches!(result, Err(GalleryError::Config(_))));
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::Config("テスト設定エラー".to_string()),
        GalleryError::MissingDataFile,
        GalleryError::LoadFailed("designers.csv".to_string()),
        GalleryError::ParseFailed("2行目".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GalleryError = io_err.into();

    assert!(matches!(err, GalleryError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = designer_gallery_common::Error::InvalidBucket("9".to_string());
    let err: GalleryError = common_err.into();

    assert!(matches!(err, GalleryError::Common(_)));
    assert!(format!("{}", err).contains("Invalid occurrence bucket: 9"));
}
