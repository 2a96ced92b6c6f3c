//! パス処理ユーティリティ
//!
//! プロンプトに入力されたパス文字列の展開

use crate::error::{FileError, PadError, Result};
use std::path::PathBuf;

/// `~` と環境変数を展開してパスを返す
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PadError::File(FileError::InvalidPath {
            path: input.to_string(),
        }));
    }

    let expanded = shellexpand::full(trimmed).map_err(|e| {
        PadError::File(FileError::InvalidPath {
            path: format!("{}: {}", trimmed, e),
        })
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}
