//! テキストエリア描画
//!
//! 文書を行に分割し、検索ハイライトを Span として付与する

use crate::search::HighlightSet;
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// 表示用に文字を置き換える（タブは1セル）
fn display_char(ch: char) -> char {
    if ch == '\t' {
        ' '
    } else {
        ch
    }
}

/// 表示セル幅
pub fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(display_char(ch)).unwrap_or(0)
}

/// 行頭から `column` 文字分の表示幅
pub fn column_to_width(line: &str, column: usize) -> usize {
    line.chars().take(column).map(char_display_width).sum()
}

/// 表示する行を組み立てる
///
/// `top_line` から最大 `height` 行。ハイライト区間は文字オフセットで判定する。
pub fn prepare_lines(
    content: &str,
    highlights: &HighlightSet,
    theme: &Theme,
    top_line: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let normal = theme.text_style();
    let marked = theme.highlight_style();

    let mut lines = Vec::with_capacity(height);
    let mut offset = 0usize;

    for (index, raw_line) in content.split('\n').enumerate() {
        let line_chars = raw_line.chars().count();
        if index < top_line {
            offset += line_chars + 1;
            continue;
        }
        if lines.len() >= height {
            break;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_marked = false;

        for (i, ch) in raw_line.chars().enumerate() {
            let is_marked = highlights.is_highlighted(offset + i);
            if is_marked != run_marked && !run.is_empty() {
                let style = if run_marked { marked } else { normal };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_marked = is_marked;
            run.push(display_char(ch));
        }
        if !run.is_empty() {
            let style = if run_marked { marked } else { normal };
            spans.push(Span::styled(run, style));
        }

        lines.push(Line::from(spans).style(normal));
        offset += line_chars + 1;
    }

    lines
}
