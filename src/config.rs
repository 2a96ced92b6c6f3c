//! 設定
//!
//! `<config_dir>/plainpad/config.json` から読み込む。ファイルが無ければ既定値を使う。

use crate::error::{ConfigError, PadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// フォントサイズの下限
pub const MIN_FONT_SIZE: u16 = 10;
/// フォントサイズの上限
pub const MAX_FONT_SIZE: u16 = 30;
/// フォントサイズの既定値
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// エディタ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 起動時にダークモードにするか
    pub dark_mode: bool,
    /// 起動時のフォントサイズ
    pub font_size: u16,
    /// undo 履歴の上限（`None` は無制限）
    pub undo_limit: Option<usize>,
    /// ログ設定
    pub log: LogConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: DEFAULT_FONT_SIZE,
            undo_limit: None,
            log: LogConfig::default(),
        }
    }
}

/// ログ出力設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `error` / `warn` / `info` / `debug` / `trace` / `off`
    pub level: String,
    /// 出力先（未指定時は `<data_dir>/plainpad/plainpad.log`）
    pub path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
        }
    }
}

impl LogConfig {
    /// ログファイルの出力先
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(path.clone()),
            None => dirs::data_dir().map(|dir| dir.join("plainpad").join("plainpad.log")),
        }
    }

    /// ログレベル文字列を解釈
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level.parse::<log::LevelFilter>().map_err(|_| {
            PadError::Config(ConfigError::InvalidValue {
                key: "log.level".to_string(),
                value: self.level.clone(),
            })
        })
    }
}

impl EditorConfig {
    /// 既定の設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plainpad").join("config.json"))
    }

    /// 既定パスから読み込む
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む。存在しなければ既定値。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| invalid_file(path, e))?;
        Self::from_json(&raw).map_err(|err| match err {
            PadError::Config(ConfigError::InvalidFile { message, .. }) => {
                invalid_file(path, message)
            }
            other => other,
        })
    }

    /// JSON 文字列から解釈して検証
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: EditorConfig =
            serde_json::from_str(raw).map_err(|e| invalid_file(Path::new("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// 値の範囲を検証
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(PadError::Config(ConfigError::InvalidValue {
                key: "font_size".to_string(),
                value: self.font_size.to_string(),
            }));
        }
        if self.undo_limit == Some(0) {
            return Err(PadError::Config(ConfigError::InvalidValue {
                key: "undo_limit".to_string(),
                value: "0".to_string(),
            }));
        }
        self.log.level_filter()?;
        Ok(())
    }
}

fn invalid_file(path: &Path, message: impl ToString) -> PadError {
    PadError::Config(ConfigError::InvalidFile {
        path: path.display().to_string(),
        message: message.to_string(),
    })
}
