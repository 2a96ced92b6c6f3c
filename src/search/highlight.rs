//! ハイライト状態
//!
//! 検索結果を描画側へ渡すための保持領域。新しい検索の前に必ず全消去される。

use super::types::MatchSpan;

/// 現在表示中のハイライト集合
#[derive(Debug, Clone, Default)]
pub struct HighlightSet {
    query: Option<String>,
    spans: Vec<MatchSpan>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべてのハイライトを除去
    pub fn clear(&mut self) {
        self.query = None;
        self.spans.clear();
    }

    /// 既存のハイライトを消してから新しい結果を適用
    pub fn apply(&mut self, query: &str, spans: Vec<MatchSpan>) {
        self.clear();
        if query.is_empty() {
            return;
        }
        self.query = Some(query.to_string());
        self.spans = spans;
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn spans(&self) -> &[MatchSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// 指定オフセットがハイライト対象か（spans は昇順なので二分探索）
    pub fn is_highlighted(&self, offset: usize) -> bool {
        let idx = self.spans.partition_point(|span| span.end <= offset);
        self.spans
            .get(idx)
            .map(|span| span.contains(offset))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_previous_spans() {
        let mut set = HighlightSet::new();
        set.apply("ab", vec![MatchSpan::new(0, 2), MatchSpan::new(5, 7)]);
        assert_eq!(set.len(), 2);

        set.apply("x", vec![MatchSpan::new(3, 4)]);
        assert_eq!(set.spans(), &[MatchSpan::new(3, 4)]);
        assert_eq!(set.query(), Some("x"));
    }

    #[test]
    fn empty_query_clears() {
        let mut set = HighlightSet::new();
        set.apply("ab", vec![MatchSpan::new(0, 2)]);
        set.apply("", Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.query(), None);
    }

    #[test]
    fn membership_lookup() {
        let mut set = HighlightSet::new();
        set.apply("ab", vec![MatchSpan::new(0, 2), MatchSpan::new(5, 7)]);
        assert!(set.is_highlighted(0));
        assert!(set.is_highlighted(1));
        assert!(!set.is_highlighted(2));
        assert!(!set.is_highlighted(4));
        assert!(set.is_highlighted(6));
        assert!(!set.is_highlighted(7));
    }
}
