//! テーマ
//!
//! ライト/ダークの2種類の配色

use crate::session::ViewSettings;
use ratatui::style::{Color, Modifier, Style};

/// 配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub highlight_background: Color,
    pub highlight_foreground: Color,
    pub status_background: Color,
    pub status_foreground: Color,
    pub prompt: Color,
    pub error: Color,
}

impl Theme {
    /// 白背景・黒文字
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            highlight_background: Color::Yellow,
            highlight_foreground: Color::Black,
            status_background: Color::Gray,
            status_foreground: Color::Black,
            prompt: Color::Blue,
            error: Color::Red,
        }
    }

    /// 黒背景・緑文字
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::Green,
            highlight_background: Color::Yellow,
            highlight_foreground: Color::Black,
            status_background: Color::DarkGray,
            status_foreground: Color::White,
            prompt: Color::Cyan,
            error: Color::LightRed,
        }
    }

    pub fn for_view(view: ViewSettings) -> Self {
        if view.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_foreground)
            .bg(self.highlight_background)
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.status_foreground)
            .bg(self.status_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).bg(self.background)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}
