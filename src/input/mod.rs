//! 入力処理モジュール
//!
//! キー入力をエディタのアクションへ変換する

pub mod keybinding;

// 公開API
pub use keybinding::{Action, Key, KeyCode, KeyMap, KeyModifiers};
