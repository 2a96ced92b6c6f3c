//! 検索関連の共通型

use std::ops::Range;

/// 1件の検索ヒット（文字オフセットの半開区間）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    /// マッチ開始位置（文字インデックス）
    pub start: usize,
    /// マッチ終了位置（文字インデックス、排他的）
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// マッチ長（文字数）
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// マッチが空か判定
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 指定オフセットを含むか
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<MatchSpan> for Range<usize> {
    fn from(span: MatchSpan) -> Self {
        span.range()
    }
}
