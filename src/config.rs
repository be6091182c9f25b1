use crate::error::{GalleryError, Result};
use designer_gallery_common::DEFAULT_PLACEHOLDER_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データファイルを上書きする環境変数
pub const DATA_FILE_ENV: &str = "DESIGNER_GALLERY_DATA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_data_file: Option<PathBuf>,
    pub placeholder_template: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_data_file: None,
            placeholder_template: DEFAULT_PLACEHOLDER_TEMPLATE.into(),
            title: "Design Canon Representation Project".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("designer-gallery").join("config.json"))
    }

    /// 使用するデータファイルを決める（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_data_file(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        self.resolve_data_file_with(arg, std::env::var(DATA_FILE_ENV).ok())
    }

    /// 環境変数の値を引数で受け取る版
    pub fn resolve_data_file_with(
        &self,
        arg: Option<PathBuf>,
        env_value: Option<String>,
    ) -> Result<PathBuf> {
        if let Some(path) = arg {
            return Ok(path);
        }

        if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }

        self.default_data_file.clone().ok_or(GalleryError::MissingDataFile)
    }

    pub fn set_data_file(&mut self, path: PathBuf) -> Result<()> {
        self.default_data_file = Some(path);
        self.save()
    }

    pub fn set_placeholder(&mut self, template: String) -> Result<()> {
        if !template.contains("{name}") {
            return Err(GalleryError::Config(format!(
                "テンプレートに {{name}} が含まれていません: {}",
                template
            )));
        }
        self.placeholder_template = template;
        self.save()
    }
}
