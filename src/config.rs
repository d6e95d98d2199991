//! 配置文件 (~/.config/itinerary/config.toml)
//!
//! 文件不存在时使用默认值

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// 图标字形风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glyphs: GlyphStyle,
    pub log: LogConfig,
}

/// 获取配置文件路径
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("itinerary").join("config.toml"))
}

/// 获取数据目录 (~/.local/share/itinerary/)，不存在则创建
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("itinerary");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
