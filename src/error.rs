use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データファイルが未指定です（引数か `config --set-data-file PATH` で指定）")]
    MissingDataFile,

    #[error("データの読み込みに失敗: {0}")]
    LoadFailed(String),

    #[error("CSVの解析に失敗: {0}")]
    ParseFailed(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] designer_gallery_common::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
