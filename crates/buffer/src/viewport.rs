/// Visible window onto the document.
///
/// Tracks which lines and grapheme columns are on screen. Nothing is drawn
/// here; hosts read `top_line`/`left_column` to decide what to render.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible line (0-based)
    pub top_line: usize,
    /// Number of visible lines
    pub height: usize,
    /// Horizontal scroll (left column)
    pub left_column: usize,
    /// Width of visible area
    pub width: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top_line: 0,
            height,
            left_column: 0,
            width,
        }
    }

    /// Get index of last visible line (exclusive)
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.height
    }

    /// Get index of last visible column (exclusive)
    pub fn right_column(&self) -> usize {
        self.left_column + self.width
    }

    /// Check if line is visible
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.bottom_line()
    }

    /// Check if column is visible
    pub fn is_column_visible(&self, column: usize) -> bool {
        column >= self.left_column && column < self.right_column()
    }

    /// Scroll the minimum amount that brings `(line, column)` on screen.
    ///
    /// Vertically the target has to land inside the viewport shrunk by
    /// `within_margin * height` lines at the top and at the bottom. The
    /// margin fraction is clamped to `[0, 0.49]`. Returns true if the
    /// viewport moved.
    pub fn scroll_to(
        &mut self,
        line: usize,
        column: usize,
        within_margin: f32,
        total_lines: usize,
    ) -> bool {
        if self.height == 0 || self.width == 0 {
            return false;
        }
        let old = (self.top_line, self.left_column);

        let fraction = if within_margin.is_finite() {
            within_margin.clamp(0.0, 0.49)
        } else {
            0.0
        };
        let margin = (self.height as f32 * fraction).floor() as usize;

        if line < self.top_line + margin {
            self.top_line = line.saturating_sub(margin);
        } else if line + margin >= self.bottom_line() {
            self.top_line = (line + margin + 1).saturating_sub(self.height);
        }

        // Limit top_line to avoid empty space at bottom
        let max_top = total_lines.saturating_sub(self.height);
        self.top_line = self.top_line.min(max_top);

        if column < self.left_column {
            self.left_column = column;
        } else if column >= self.right_column() {
            self.left_column = column.saturating_sub(self.width - 1);
        }

        old != (self.top_line, self.left_column)
    }

    /// Scroll to document start
    pub fn scroll_to_top(&mut self) -> bool {
        let changed = self.top_line != 0 || self.left_column != 0;
        self.top_line = 0;
        self.left_column = 0;
        changed
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_visibility() {
        let vp = Viewport::new(80, 24);
        assert!(vp.is_line_visible(0));
        assert!(vp.is_line_visible(23));
        assert!(!vp.is_line_visible(24));
        assert!(vp.is_column_visible(79));
        assert!(!vp.is_column_visible(80));
    }

    #[test]
    fn test_visible_target_does_not_scroll() {
        let mut vp = Viewport::new(80, 20);
        assert!(!vp.scroll_to(10, 5, 0.15, 100));
        assert_eq!(vp.top_line, 0);
    }

    #[test]
    fn test_scroll_down_keeps_margin() {
        let mut vp = Viewport::new(80, 20);
        // margin = 3 lines
        assert!(vp.scroll_to(50, 0, 0.15, 100));
        assert_eq!(vp.top_line, 34);
        assert!(vp.is_line_visible(50 + 3));
        assert!(!vp.is_line_visible(50 + 4));
    }

    #[test]
    fn test_scroll_up_keeps_margin() {
        let mut vp = Viewport::new(80, 20);
        vp.top_line = 60;
        assert!(vp.scroll_to(40, 0, 0.15, 100));
        assert_eq!(vp.top_line, 37);
    }

    #[test]
    fn test_scroll_clamped_at_document_end() {
        let mut vp = Viewport::new(80, 20);
        vp.scroll_to(99, 0, 0.15, 100);
        assert_eq!(vp.top_line, 80);
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut vp = Viewport::new(10, 5);
        assert!(vp.scroll_to(0, 25, 0.0, 1));
        assert_eq!(vp.left_column, 16);
        assert!(vp.scroll_to(0, 3, 0.0, 1));
        assert_eq!(vp.left_column, 3);
    }

    #[test]
    fn test_scroll_to_top() {
        let mut vp = Viewport::new(10, 5);
        vp.top_line = 7;
        assert!(vp.scroll_to_top());
        assert!(!vp.scroll_to_top());
    }
}
