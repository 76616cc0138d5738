// src/views/scroll.rs
//
// Normalizes scroll input over a virtual page into a progress value
// in [0,1]. The page is a configurable multiple of the window height;
// the scrollable range is recomputed whenever the viewport changes,
// so window resizes are picked up continuously.

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: f32, // pixels scrolled from the top of the page
    viewport_height: f32,
    page_screens: f32,
    line_height: f32,
}

impl ScrollTracker {
    pub fn new(page_screens: f32, line_height: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_height: 0.0,
            page_screens: page_screens.max(1.0),
            line_height,
        }
    }

    /// Pixels of scrollable travel: page height minus one viewport.
    pub fn scroll_range(&self) -> f32 {
        (self.viewport_height * (self.page_screens - 1.0)).max(0.0)
    }

    /// False when there is nothing to scroll over. The page then
    /// renders as a static, unanimated layout.
    pub fn is_active(&self) -> bool {
        self.scroll_range() > 0.0
    }

    /// Normalized scroll position, clamped at both ends.
    pub fn progress(&self) -> f32 {
        let range = self.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.scroll_range());
    }

    pub fn scroll_pixels(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.scroll_range());
    }

    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_pixels(lines * self.line_height);
    }

    pub fn page_down(&mut self) {
        self.scroll_pixels(self.viewport_height * 0.9);
    }

    pub fn page_up(&mut self) {
        self.scroll_pixels(-self.viewport_height * 0.9);
    }

    pub fn to_top(&mut self) {
        self.offset = 0.0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.scroll_range();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        // viewport 600, page 3 screens -> 1200px of travel
        let mut tracker = ScrollTracker::new(3.0, 40.0);
        tracker.set_viewport_height(600.0);
        tracker
    }

    #[test]
    fn test_starts_at_top() {
        let tracker = tracker();
        assert_eq!(tracker.progress(), 0.0);
        assert!(tracker.is_active());
    }

    #[test]
    fn test_progress_is_offset_over_range() {
        let mut tracker = tracker();
        tracker.scroll_pixels(600.0);
        assert!((tracker.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut tracker = tracker();
        tracker.scroll_pixels(-500.0);
        assert_eq!(tracker.progress(), 0.0);
        tracker.scroll_pixels(99999.0);
        assert_eq!(tracker.progress(), 1.0);
        assert_eq!(tracker.offset(), tracker.scroll_range());
    }

    #[test]
    fn test_wheel_lines_use_line_height() {
        let mut tracker = tracker();
        tracker.scroll_lines(3.0);
        assert_eq!(tracker.offset(), 120.0);
    }

    #[test]
    fn test_zero_range_is_inactive() {
        let mut tracker = ScrollTracker::new(1.0, 40.0);
        tracker.set_viewport_height(600.0);
        assert!(!tracker.is_active());
        tracker.scroll_pixels(300.0);
        assert_eq!(tracker.progress(), 0.0);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut tracker = tracker();
        tracker.to_bottom();
        assert_eq!(tracker.offset(), 1200.0);
        tracker.set_viewport_height(300.0);
        assert_eq!(tracker.offset(), 600.0);
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn test_paging_and_jumps() {
        let mut tracker = tracker();
        tracker.page_down();
        assert_eq!(tracker.offset(), 540.0);
        tracker.page_up();
        assert_eq!(tracker.offset(), 0.0);
        tracker.to_bottom();
        assert_eq!(tracker.progress(), 1.0);
        tracker.to_top();
        assert_eq!(tracker.progress(), 0.0);
    }
}
