use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use designer_gallery_common::{parse_assignment, FilterField, GallerySession, NormalizeOptions};
use std::path::Path;

/// データファイルを読み込んでセッションを作る
pub async fn open_session(path: &Path, config: &Config) -> Result<GallerySession> {
    let rows = loader::load_rows(path).await?;
    let options = NormalizeOptions {
        placeholder_template: config.placeholder_template.clone(),
    };

    let session = GallerySession::from_rows(&rows, options);
    if session.is_empty() {
        tracing::warn!(path = %path.display(), "デザイナーが1件もありません");
    } else {
        tracing::info!(
            path = %path.display(),
            records = session.records().len(),
            "デザイナーを読み込み"
        );
    }
    Ok(session)
}

/// CLI引数のフィルタを順に適用する
///
/// 地域を先に設定するので、国の指定は地域変更でリセットされない。
/// `--set` の指定はその後に書かれた順で適用する。
pub fn apply_filter_args(session: &mut GallerySession, args: &FilterArgs) -> Result<()> {
    session.set_filter(FilterField::Region, &args.region)?;
    session.set_filter(FilterField::Country, &args.country)?;
    session.set_filter(FilterField::Gender, &args.gender)?;
    session.set_filter(FilterField::MinOccurrences, args.min_occurrences.as_str())?;

    for assignment in &args.assignments {
        let (field, value) = parse_assignment(assignment)?;
        session.set_filter(field, &value)?;
    }

    tracing::debug!(filters = ?session.filters(), "フィルタを適用");
    Ok(())
}
