//! plainpad - minimal plain-text editor
//!
//! テキストバッファ（文書・編集履歴・検索・ステータス）を中心に、
//! ファイルI/O・設定・ターミナルUIを周辺に配置する。

// コアモジュール
pub mod error;
pub mod logging;
pub mod config;

// データ層
pub mod buffer;
pub mod file;

// ロジック層
pub mod search;
pub mod status;
pub mod session;
pub mod input;

// 表示層
pub mod app;
pub mod ui;
pub mod frontend;

// 公開API
pub use buffer::{Edit, TextBuffer};
pub use config::EditorConfig;
pub use error::{PadError, Result};
pub use frontend::TuiApplication;
pub use search::MatchSpan;
pub use session::Session;
pub use status::EditorStatus;
