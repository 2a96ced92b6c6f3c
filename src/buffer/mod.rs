//! テキストバッファ
//!
//! 文書本体・編集履歴・検索・ステータス計算を一元管理する。
//! すべての内容変更は [`TextBuffer::edit`] を通り、履歴へ記録される。

pub mod history;

use crate::error::{edit, EditError};
use crate::search::{self, MatchSpan};
use crate::status::{self, EditorStatus};
use std::fmt;
use std::ops::Range;

pub use history::{Edit, HistoryStack};

/// 改行文字
pub const LINE_TERMINATOR: &str = "\n";

/// 編集可能なテキストと履歴を保持するバッファ
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    /// 文字数キャッシュ
    len_chars: usize,
    history: HistoryStack,
}

impl TextBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// undo 深さの上限を指定して作成（`None` は無制限）
    pub fn with_undo_limit(limit: Option<usize>) -> Self {
        Self {
            history: HistoryStack::with_limit(limit),
            ..Self::default()
        }
    }

    /// 現在の文書
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 文字数
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 行数（改行数 + 1）
    pub fn line_count(&self) -> usize {
        status::line_count(&self.text)
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// 文書全体を置き換える（ファイルを開く時など）
    pub fn set_text(&mut self, content: &str) {
        let range = 0..self.len_chars;
        // 全範囲の置換は常に有効
        if let Err(err) = self.edit(range, content) {
            log::error!("set_text rejected: {}", err);
        }
    }

    /// 末尾に `suffix` と改行を追加。空文字列は何もしない。
    pub fn append(&mut self, suffix: &str) {
        if suffix.is_empty() {
            return;
        }
        let mut inserted = String::with_capacity(suffix.len() + LINE_TERMINATOR.len());
        inserted.push_str(suffix);
        inserted.push_str(LINE_TERMINATOR);

        let end = self.len_chars;
        if let Err(err) = self.edit(end..end, &inserted) {
            log::error!("append rejected: {}", err);
        }
    }

    /// 位置 `position` に文字列を挿入
    pub fn insert(&mut self, position: usize, text: &str) -> edit::Result<()> {
        self.edit(position..position, text)
    }

    /// 範囲を削除し、削除した文字列を返す
    pub fn delete(&mut self, range: Range<usize>) -> edit::Result<String> {
        let removed = self.slice(range.clone())?.to_string();
        self.edit(range, "")?;
        Ok(removed)
    }

    /// 文字範囲を置換する唯一の変更経路
    ///
    /// 変更を適用し、undo スタックへ積み、redo スタックを破棄する。
    /// 範囲が不正な場合は文書も履歴も変更しない。
    pub fn edit(&mut self, range: Range<usize>, replacement: &str) -> edit::Result<()> {
        let removed = self.slice(range.clone())?.to_string();
        let edit = Edit::new(range.start, removed, replacement);
        if edit.is_noop() {
            // 記録はしないが、新しい編集として redo 分岐は捨てる
            self.history.discard_redo();
            return Ok(());
        }

        self.apply(&edit)?;
        log::debug!(
            "edit at {}: -{} +{} chars",
            edit.position,
            edit.removed_len(),
            edit.inserted_len()
        );
        self.history.push(edit);
        Ok(())
    }

    /// 直前の編集を取り消す。取り消すものがなければ `false`。
    pub fn undo(&mut self) -> bool {
        let Some(edit) = self.history.take_for_undo() else {
            return false;
        };
        match self.apply(&edit.invert()) {
            Ok(()) => {
                self.history.push_redo(edit);
                true
            }
            Err(err) => {
                log::error!("undo failed: {}", err);
                self.history.push_without_clearing(edit);
                false
            }
        }
    }

    /// 取り消した編集をやり直す。やり直すものがなければ `false`。
    pub fn redo(&mut self) -> bool {
        let Some(edit) = self.history.take_for_redo() else {
            return false;
        };
        match self.apply(&edit) {
            Ok(()) => {
                self.history.push_without_clearing(edit);
                true
            }
            Err(err) => {
                log::error!("redo failed: {}", err);
                self.history.push_redo(edit);
                false
            }
        }
    }

    /// 大文字小文字を区別しない重ならないマッチ区間
    pub fn search(&self, query: Option<&str>) -> Vec<MatchSpan> {
        search::find_all(&self.text, query)
    }

    /// カーソル位置のステータス
    pub fn status(&self, caret: usize) -> EditorStatus {
        EditorStatus::compute(&self.text, caret)
    }

    /// オフセットを含む行番号（1始まり）。範囲外はエラー。
    pub fn line_of_offset(&self, offset: usize) -> edit::Result<usize> {
        status::line_of_offset(&self.text, offset)
    }

    /// 文字範囲の部分文字列
    pub fn slice(&self, range: Range<usize>) -> edit::Result<&str> {
        self.check_range(&range)?;
        let start = self.char_to_byte(range.start);
        let end = self.char_to_byte(range.end);
        Ok(&self.text[start..end])
    }

    /// 行の開始オフセット（0始まりの行インデックス）
    pub fn line_start(&self, line_index: usize) -> Option<usize> {
        if line_index == 0 {
            return Some(0);
        }
        let mut seen = 0usize;
        for (offset, ch) in self.text.chars().enumerate() {
            if ch == '\n' {
                seen += 1;
                if seen == line_index {
                    return Some(offset + 1);
                }
            }
        }
        None
    }

    /// 行の長さ（改行を除く文字数）
    pub fn line_len(&self, line_index: usize) -> Option<usize> {
        self.text.split('\n').nth(line_index).map(|line| line.chars().count())
    }

    fn check_range(&self, range: &Range<usize>) -> edit::Result<()> {
        if range.start > range.end || range.end > self.len_chars {
            return Err(EditError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len_chars,
            });
        }
        Ok(())
    }

    fn apply(&mut self, edit: &Edit) -> edit::Result<()> {
        let range = edit.position..edit.position + edit.removed_len();
        self.check_range(&range)?;
        let start = self.char_to_byte(range.start);
        let end = self.char_to_byte(range.end);
        self.text.replace_range(start..end, &edit.inserted);
        self.len_chars = self.len_chars - edit.removed_len() + edit.inserted_len();
        Ok(())
    }

    fn char_to_byte(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
