use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログを初期化する
///
/// RUST_LOG が無ければ `designer_gallery=info`（verbose なら debug）。
/// 標準出力はJSON出力に使うため、ログは標準エラーに出す。
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "designer_gallery=debug,designer_gallery_common=debug"
    } else {
        "designer_gallery=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // テストなどで二重初期化されても無視する
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
