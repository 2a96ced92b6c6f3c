//! UIモジュール
//!
//! ratatuiベースのターミナルUI機能

pub mod renderer;
pub mod text_area;
pub mod theme;
pub mod viewport;

// 公開API
pub use renderer::Renderer;
pub use theme::Theme;
pub use viewport::Viewport;
