//! 検索モジュール
//!
//! 大文字小文字を区別しない部分文字列検索と、描画用のハイライト状態を提供

mod highlight;
mod matcher;
pub mod types;

pub use highlight::HighlightSet;
pub use matcher::{LiteralMatcher, StringMatcher};
pub use types::MatchSpan;

/// クエリに対するマッチ区間を計算する
///
/// `None` や空文字列は「マッチなし」として扱う。
pub fn find_all(text: &str, query: Option<&str>) -> Vec<MatchSpan> {
    match query {
        Some(pattern) if !pattern.is_empty() => LiteralMatcher::new().find_matches(text, pattern),
        _ => Vec::new(),
    }
}
