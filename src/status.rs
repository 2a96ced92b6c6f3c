//! ステータス情報
//!
//! 単語数・文字数・カーソル行の計算

use crate::error::{edit, EditError};
use std::fmt;

/// ステータスラインに表示する集計値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorStatus {
    /// 空白区切りのトークン数
    pub words: usize,
    /// 改行を含む総文字数
    pub chars: usize,
    /// カーソル行（1始まり）
    pub line: usize,
}

impl EditorStatus {
    /// テキストとカーソル位置から集計
    ///
    /// カーソル位置が範囲外なら行番号は 1 にフォールバックする。
    pub fn compute(text: &str, caret: usize) -> Self {
        let line = match line_of_offset(text, caret) {
            Ok(line) => line,
            Err(err) => {
                log::debug!("status: {}; falling back to line 1", err);
                1
            }
        };

        Self {
            words: word_count(text),
            chars: char_count(text),
            line,
        }
    }
}

impl fmt::Display for EditorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Words: {} | Chars: {} | Line: {}",
            self.words, self.chars, self.line
        )
    }
}

/// 空白で区切られた最大長トークンの数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 改行を含む文字数
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// 行数（改行数 + 1）
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// オフセットを含む行番号（1始まり）
///
/// オフセットより左にある改行の数 + 1。文書長ちょうどのオフセットは有効。
pub fn line_of_offset(text: &str, offset: usize) -> edit::Result<usize> {
    let mut newlines = 0usize;
    let mut consumed = 0usize;

    for ch in text.chars() {
        if consumed == offset {
            return Ok(newlines + 1);
        }
        if ch == '\n' {
            newlines += 1;
        }
        consumed += 1;
    }

    if consumed == offset {
        Ok(newlines + 1)
    } else {
        Err(EditError::InvalidOffset(offset))
    }
}
