use anyhow::Context;
use clap::Parser;
use designer_gallery::{cli, config, gallery, logging, render};
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load().context("設定ファイルを読み込めません")?;

    match cli.command {
        Commands::Show { file, filters, json } => {
            let path = config.resolve_data_file(file)?;
            let mut session = gallery::open_session(&path, &config).await?;
            gallery::apply_filter_args(&mut session, &filters)?;

            let view = session.view(&config.title);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::render_view(&view));
            }
        }

        Commands::Options { file, region, json } => {
            let path = config.resolve_data_file(file)?;
            let mut session = gallery::open_session(&path, &config).await?;
            session.set_filter(designer_gallery_common::FilterField::Region, &region)?;

            let vocabulary = session.vocabulary();
            if json {
                println!("{}", serde_json::to_string_pretty(&vocabulary)?);
            } else {
                print!("{}", render::render_vocabulary(&vocabulary));
            }
        }

        Commands::Stats { file, filters, json } => {
            let path = config.resolve_data_file(file)?;
            let mut session = gallery::open_session(&path, &config).await?;
            gallery::apply_filter_args(&mut session, &filters)?;

            let stats = session.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render::render_stats(&stats));
            }
        }

        Commands::Config { set_data_file, set_placeholder, show } => {
            let mut config = config;

            if let Some(path) = set_data_file {
                config.set_data_file(path)?;
                println!("✔ データファイルを設定しました");
            }

            if let Some(template) = set_placeholder {
                config.set_placeholder(template)?;
                println!("✔ プレースホルダを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!(
                    "  データファイル: {}",
                    config
                        .default_data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  プレースホルダ: {}", config.placeholder_template);
                println!("  タイトル: {}", config.title);
            }
        }
    }

    Ok(())
}
