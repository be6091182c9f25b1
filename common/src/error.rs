//! エラー型定義
//!
//! フィルタ処理そのものは失敗しない。ここにあるのは
//! 文字列からフィルタ値を読み取る境界でのエラーのみ。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid occurrence bucket: {0} (use All, 2, 3, 4 or 5+)")]
    InvalidBucket(String),

    #[error("Invalid filter field: {0} (use region, country, gender or minOccurrences)")]
    InvalidField(String),

    #[error("Invalid filter assignment: {0} (use FIELD=VALUE)")]
    InvalidAssignment(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
