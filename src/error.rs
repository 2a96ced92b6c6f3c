//! エラーハンドリングシステム
//!
//! plainpad 全体で使用される統一されたエラー型を定義する。
//! ファイルI/O失敗のみがユーザーへ通知され、それ以外は局所的に吸収される。

use std::io;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PadError {
    /// ファイル読み込みエラー
    #[error("Failed to read file: {0}")]
    Read(FileError),

    /// ファイル保存エラー
    #[error("Failed to save file: {0}")]
    Write(FileError),

    /// パス・ファイル操作エラー（読み書き以外）
    #[error("File operation failed")]
    File(#[from] FileError),

    /// 編集操作エラー
    #[error("Edit operation failed")]
    Edit(#[from] EditError),

    /// UI操作エラー
    #[error("UI operation failed")]
    Ui(#[from] UiError),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

impl PadError {
    /// ユーザーへ表示する1行メッセージ
    pub fn user_message(&self) -> String {
        match self {
            PadError::Read(_) => "Failed to read file.".to_string(),
            PadError::Write(_) => "Failed to save file.".to_string(),
            PadError::File(err) => err.to_string(),
            PadError::Edit(err) => err.to_string(),
            PadError::Ui(err) => err.to_string(),
            PadError::Config(err) => err.to_string(),
            PadError::Application(message) => message.clone(),
        }
    }
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// `io::Error` をパス情報付きで変換
    pub fn from_io(err: &io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            io::ErrorKind::InvalidData => FileError::Encoding {
                message: err.to_string(),
            },
            _ => FileError::Io {
                message: err.to_string(),
            },
        }
    }
}

/// 編集操作エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Range {start}..{end} is out of bounds (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Offset {0} is outside the document")]
    InvalidOffset(usize),
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

// std::io::Error から PadError への変換
impl From<io::Error> for PadError {
    fn from(error: io::Error) -> Self {
        PadError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, PadError>;

/// 各モジュール固有のResult型
pub mod edit {
    pub type Result<T> = std::result::Result<T, super::EditError>;
}

/// パニックハンドラの設定
///
/// raw mode のままプロセスが落ちると端末が壊れるため、先に復旧してから報告する。
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut out = std::io::stdout();
        let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);

        let message: &str = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Unknown panic payload"
        };

        match panic_info.location() {
            Some(location) => {
                log::error!("panic at {}:{}: {}", location.file(), location.line(), message);
                eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
            }
            None => {
                log::error!("panic: {}", message);
                eprintln!("PANIC: {}", message);
            }
        }
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}
