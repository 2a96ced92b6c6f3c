//! 編集履歴
//!
//! 線形の undo/redo スタック。新しい編集を積むと redo スタックは破棄される。

use std::collections::VecDeque;

/// 1回の内容変更を表す可逆な記録
///
/// `position` は文字オフセット。挿入は `removed` が空、削除は `inserted` が空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub position: usize,
    pub removed: String,
    pub inserted: String,
}

impl Edit {
    pub fn new(position: usize, removed: impl Into<String>, inserted: impl Into<String>) -> Self {
        Self {
            position,
            removed: removed.into(),
            inserted: inserted.into(),
        }
    }

    /// 変更前の文字数
    pub fn removed_len(&self) -> usize {
        self.removed.chars().count()
    }

    /// 変更後の文字数
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    /// 何も変えない編集か
    pub fn is_noop(&self) -> bool {
        self.removed == self.inserted
    }

    /// 逆操作
    pub fn invert(&self) -> Edit {
        Edit {
            position: self.position,
            removed: self.inserted.clone(),
            inserted: self.removed.clone(),
        }
    }
}

/// 編集履歴スタック
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: VecDeque<Edit>,
    redo: Vec<Edit>,
    limit: Option<usize>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// undo 深さに上限を設ける。上限を超えた古い編集から捨てる。
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// 新しい編集を記録（redo は破棄）
    pub fn push(&mut self, edit: Edit) {
        self.discard_redo();
        self.push_without_clearing(edit);
    }

    /// 取り消し済みの分岐を捨てる
    pub fn discard_redo(&mut self) {
        if !self.redo.is_empty() {
            log::debug!("discarding {} redo entries", self.redo.len());
            self.redo.clear();
        }
    }

    pub fn take_for_undo(&mut self) -> Option<Edit> {
        self.undo.pop_back()
    }

    pub fn push_redo(&mut self, edit: Edit) {
        self.redo.push(edit);
    }

    pub fn take_for_redo(&mut self) -> Option<Edit> {
        self.redo.pop()
    }

    /// redo 適用後に undo 側へ戻す
    pub fn push_without_clearing(&mut self, edit: Edit) {
        self.undo.push_back(edit);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                if let Some(dropped) = self.undo.pop_front() {
                    log::debug!(
                        "undo limit {} reached, dropping edit at {}",
                        limit,
                        dropped.position
                    );
                }
            }
        }
    }
}
