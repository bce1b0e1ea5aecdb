//! Vertical cursor driving pagination.

/// Position of the next drawable unit.
///
/// Offsets are measured in millimetres from the top edge of the page.
/// `y` never passes `bottom_limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    /// Current vertical offset
    pub y: f32,

    /// Zero-based index of the current page
    pub page_index: usize,

    top: f32,
    bottom_limit: f32,
}

impl LayoutCursor {
    /// Cursor at the top of the first page.
    pub fn new(top: f32, bottom_limit: f32) -> Self {
        Self {
            y: top,
            page_index: 0,
            top,
            bottom_limit,
        }
    }

    /// Offset where content starts on a fresh page.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Lowest offset content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.bottom_limit
    }

    /// Space left on the current page.
    pub fn remaining(&self) -> f32 {
        self.bottom_limit - self.y
    }

    /// Whether a unit of `height` fits below the cursor.
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.bottom_limit
    }

    /// Whether nothing has been placed on the current page yet.
    pub fn at_top(&self) -> bool {
        self.y <= self.top
    }

    /// Move past a unit of `height` and its trailing `spacing`.
    ///
    /// Spacing that would cross the bottom limit is dropped.
    pub fn advance(&mut self, height: f32, spacing: f32) {
        self.y = (self.y + height + spacing).min(self.bottom_limit);
    }

    /// Move down by blank space, clamped like [`advance`](Self::advance).
    pub fn skip(&mut self, space: f32) {
        self.advance(0.0, space);
    }

    /// Start the next page.
    pub fn next_page(&mut self) {
        self.page_index += 1;
        self.y = self.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_and_advance() {
        let mut cursor = LayoutCursor::new(40.0, 247.0);
        assert!(cursor.at_top());
        assert!(cursor.fits(207.0));
        assert!(!cursor.fits(207.5));

        cursor.advance(7.0, 8.0);
        assert_eq!(cursor.y, 55.0);
        assert!(!cursor.at_top());
        assert_eq!(cursor.remaining(), 192.0);
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut cursor = LayoutCursor::new(40.0, 247.0);
        cursor.advance(200.0, 15.0);
        assert_eq!(cursor.y, 247.0);
        cursor.skip(10.0);
        assert_eq!(cursor.y, 247.0);
    }

    #[test]
    fn test_next_page_resets() {
        let mut cursor = LayoutCursor::new(40.0, 247.0);
        cursor.advance(100.0, 0.0);
        cursor.next_page();
        assert_eq!(cursor.page_index, 1);
        assert_eq!(cursor.y, cursor.top());
    }
}
