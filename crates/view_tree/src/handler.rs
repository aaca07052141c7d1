//! Optional per-view capabilities for the rendering and input layers.
//!
//! Layout never consults a handler. The tree only hands handlers the frame it computed.

use geometry::Rect;

/// Hooks a view can implement. Every hook defaults to doing nothing, so an implementation only
/// overrides what it needs.
pub trait Handler {
    /// Called once per tick for every view, after the view's frame is up to date.
    fn update(&mut self, frame: Rect) {
        let _ = frame;
    }

    /// Called by [`crate::ViewTree::draw`] for every visible view in paint order.
    fn draw(&mut self, frame: Rect) {
        let _ = frame;
    }
}
