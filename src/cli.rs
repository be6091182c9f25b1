use clap::{Args, Parser, Subcommand};
use designer_gallery_common::OccurrenceBucket;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "designer-gallery")]
#[command(about = "デザイナー名鑑ギャラリー（CSVを読み込みフィルタ表示）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フィルタを適用してギャラリーを表示
    Show {
        /// デザイナーCSVファイル（省略時は設定値）
        file: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// フィルタの選択肢を表示
    Options {
        /// デザイナーCSVファイル（省略時は設定値）
        file: Option<PathBuf>,

        /// 国の選択肢を絞り込む地域
        #[arg(short, long, default_value = "All")]
        region: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// フィルタ後の性別・地域ごとの件数を表示
    Stats {
        /// デザイナーCSVファイル（省略時は設定値）
        file: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のデータファイルを設定
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// プレースホルダ画像URLのテンプレートを設定（{name} を含める）
        #[arg(long)]
        set_placeholder: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// フィルタ指定（すべて既定は All）
#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    /// 地域
    #[arg(short, long, default_value = "All")]
    pub region: String,

    /// 国（地域に属さない国は地域変更時に All に戻る）
    #[arg(short, long, default_value = "All")]
    pub country: String,

    /// 性別
    #[arg(short, long, default_value = "All")]
    pub gender: String,

    /// 出現回数の下限 (All/2/3/4/5+)
    #[arg(short = 'm', long, default_value = "All")]
    pub min_occurrences: OccurrenceBucket,

    /// FIELD=VALUE 形式の追加指定（上の指定の後に順に適用、複数可）
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            region: "All".into(),
            country: "All".into(),
            gender: "All".into(),
            min_occurrences: OccurrenceBucket::All,
            assignments: Vec::new(),
        }
    }
}
