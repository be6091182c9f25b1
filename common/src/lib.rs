//! Designer Gallery Common Library
//!
//! デザイナー名鑑の正規化とフィルタエンジン（I/Oなし）

pub mod types;
pub mod error;
pub mod normalizer;
pub mod filter;
pub mod session;
pub mod view;

pub use types::{
    AggregateStats, DesignerRecord, FilterField, FilterState, FilterVocabulary, OccurrenceBucket,
    RawRow, Selection, ALL, UNKNOWN,
};
pub use error::{Error, Result};
pub use normalizer::{normalize, normalize_with, NormalizeOptions, DEFAULT_PLACEHOLDER_TEMPLATE};
pub use filter::{
    aggregate, apply, derive_vocabulary, parse_assignment, reset_filters, set_filter,
};
pub use session::GallerySession;
pub use view::{GalleryView, ViewStatus};
