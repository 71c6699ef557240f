use anyhow::Result;

use crate::{Position, TextBuffer, Viewport};

/// Text surface: a buffer plus the view state a host window keeps for it.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    buffer: TextBuffer,
    viewport: Viewport,
    focused: bool,
}

impl TextView {
    pub fn new(buffer: TextBuffer, viewport: Viewport) -> Self {
        Self {
            buffer,
            viewport,
            focused: false,
        }
    }

    /// View over `text` with a default-sized viewport
    pub fn from_text(text: &str) -> Self {
        Self::new(TextBuffer::from_text(text), Viewport::default())
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Bring `position` on screen, keeping `within_margin` of the height
    /// free above and below it when scrolling is needed.
    pub fn scroll_to(&mut self, position: Position, within_margin: f32) -> Result<bool> {
        let (line, column) = self.buffer.line_column(position)?;
        let total_lines = self.buffer.line_count();
        Ok(self
            .viewport
            .scroll_to(line, column, within_margin, total_lines))
    }

    pub fn grab_focus(&mut self) {
        self.focused = true;
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }
}
