//! 検索用マッチャー

use super::types::MatchSpan;

/// 文字列マッチング戦略
pub trait StringMatcher {
    /// 文字列内の重ならないマッチをすべて返す（開始位置の昇順）
    fn find_matches(&self, text: &str, pattern: &str) -> Vec<MatchSpan>;
}

/// 大文字小文字を区別しないリテラルマッチャー
///
/// 直前のマッチの終端から次の走査を始めるため、結果は互いに重ならない。
#[derive(Debug, Default, Clone)]
pub struct LiteralMatcher;

impl LiteralMatcher {
    /// インスタンスを作成
    pub fn new() -> Self {
        Self
    }
}

impl StringMatcher for LiteralMatcher {
    fn find_matches(&self, text: &str, pattern: &str) -> Vec<MatchSpan> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();

        if pattern_chars.len() > chars.len() {
            return Vec::new();
        }

        let last_start = chars.len() - pattern_chars.len();
        let mut matches = Vec::new();
        let mut start = 0usize;

        while start <= last_start {
            let hit = pattern_chars
                .iter()
                .enumerate()
                .all(|(offset, pat_ch)| chars_equal_ignore_case(chars[start + offset], *pat_ch));

            if hit {
                let end = start + pattern_chars.len();
                matches.push(MatchSpan::new(start, end));
                start = end;
            } else {
                start += 1;
            }
        }

        matches
    }
}

// 文字単位で小文字化して比較する。文書側の文字数は変わらないのでオフセットがずれない。
fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
