//! Back-to-top / go-to-bottom buttons.

use crate::dom::PageDom;

/// Vertical scroll geometry of the document, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Largest scroll offset, i.e. the position that shows the last line.
    pub fn bottom(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

pub fn back_to_top<D: PageDom + ?Sized>(dom: &D) {
    dom.set_scroll_top(0.0);
}

pub fn go_to_bottom<D: PageDom + ?Sized>(dom: &D) {
    let bottom = dom.scroll_metrics().bottom();
    dom.set_scroll_top(bottom);
}
