//! ビューポート
//!
//! カーソル行が常に見えるよう縦スクロール位置を調整する

/// 表示範囲
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// 先頭に表示する行（0始まり）
    pub top_line: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// カーソル行が `height` 行の窓に収まるようにスクロール
    pub fn follow(&mut self, cursor_line: usize, height: usize) {
        if height == 0 {
            return;
        }
        if cursor_line < self.top_line {
            self.top_line = cursor_line;
        } else if cursor_line >= self.top_line + height {
            self.top_line = cursor_line + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_down_and_up() {
        let mut viewport = Viewport::new();
        viewport.follow(3, 5);
        assert_eq!(viewport.top_line, 0);
        viewport.follow(9, 5);
        assert_eq!(viewport.top_line, 5);
        viewport.follow(2, 5);
        assert_eq!(viewport.top_line, 2);
    }

    #[test]
    fn zero_height_is_ignored() {
        let mut viewport = Viewport { top_line: 4 };
        viewport.follow(0, 0);
        assert_eq!(viewport.top_line, 4);
    }
}
