//! The tick driver: re-running layout for dirty views.
//!
//! A pass over one view lays out its in-flow children first, in whatever frames they currently
//! have, so their intrinsic sizes are known. It then places absolutely-positioned children, runs
//! the flex algorithm, and commits the results. A committed frame that differs from the stored
//! one dirties the child, so the same tick reaches it again with its final frame.

use std::time::Instant;

use flexbox::{FlexItem, layout_flex_container, position_absolute};
use geometry::{Rect, Size};
use indextree::NodeId;
use log::{debug, warn};

use crate::tree::ViewTree;

impl ViewTree {
    /// Bring `root` and everything below it up to date.
    ///
    /// Dirty views are laid out, then every view's handler sees its frame. Views are visited
    /// parent first, so frames a parent commits are picked up by its children in the same tick.
    pub fn tick(&mut self, root: NodeId) {
        self.passes = 0;
        self.update(root);
        debug!(
            target: "view_tree::tick",
            "[TICK] root={root} passes={}",
            self.passes
        );
    }

    /// Set the root's explicit size, marking it dirty only when it changed, then tick.
    pub fn tick_with_size(&mut self, root: NodeId, width: f32, height: f32) {
        let size = Size::new(width, height);
        let changed = self
            .style(root)
            .is_some_and(|style| Size::new(style.width, style.height) != size);
        if changed {
            self.update_style(root, |style| {
                style.width = width;
                style.height = height;
            });
        }
        self.tick(root);
    }

    fn update(&mut self, node: NodeId) {
        if self.is_dirty(node) {
            self.layout_view(node);
        }
        if let Some(view) = self.view_mut(node) {
            let frame = view.frame;
            if let Some(handler) = view.handler.as_mut() {
                handler.update(frame);
            }
        }
        let children: Vec<NodeId> = self.children(node).collect();
        for child in children {
            self.update(child);
        }
    }

    /// One layout pass over `node` and its direct children.
    pub(crate) fn layout_view(&mut self, node: NodeId) {
        let started = self.config.trace_passes.then(Instant::now);
        let is_root = self.parent(node).is_none();
        let Some(view) = self.view_mut(node) else {
            return;
        };
        if is_root {
            view.frame = view.style.root_frame();
        }
        let frame = view.frame;
        let container = view.style.container(frame);

        let children: Vec<NodeId> = self.children(node).collect();
        for &child in &children {
            if self.style(child).is_some_and(|style| style.is_flow()) {
                self.layout_view(child);
            }
        }

        let mut flow: Vec<NodeId> = Vec::with_capacity(children.len());
        let mut items: Vec<FlexItem> = Vec::with_capacity(children.len());
        for &child in &children {
            let Some(child_view) = self.view(child) else {
                continue;
            };
            let (style, computed) = (child_view.style, child_view.computed);
            if style.is_absolute() {
                self.commit_frame(child, position_absolute(frame, &style.absolute_offsets()));
            } else if style.is_flow() {
                flow.push(child);
                items.push(style.flex_item(computed));
            }
        }

        let layout = layout_flex_container(&container, &items);
        if self.config.warn_on_overflow && layout.overflowing_lines > 0 {
            warn!(
                target: "view_tree::layout",
                "[OVERFLOW] view={node} lines={} exceed main size of {frame:?}",
                layout.overflowing_lines
            );
        }
        for ((child, child_frame), computed) in flow
            .into_iter()
            .zip(layout.frames)
            .zip(layout.computed)
        {
            if let Some(child_view) = self.view_mut(child) {
                child_view.computed = computed;
            }
            self.commit_frame(child, child_frame);
        }

        if let Some(view) = self.view_mut(node) {
            view.computed = layout.intrinsic;
            view.dirty = false;
        }
        self.passes += 1;
        if let Some(started) = started {
            debug!(
                target: "view_tree::layout",
                "[PASS] view={node} children={} frame={frame:?} took={:?}",
                children.len(),
                started.elapsed()
            );
        }
    }

    /// Store `frame` for `child`; a changed frame dirties the child.
    fn commit_frame(&mut self, child: NodeId, frame: Rect) {
        if let Some(view) = self.view_mut(child)
            && view.frame != frame
        {
            view.frame = frame;
            view.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    /// # Panics
    /// Panics if a root is not seeded from its own offsets and size.
    fn root_frame_is_seeded() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style {
            left: 5.0,
            top: 6.0,
            width: 10.0,
            height: 20.0,
            ..Style::default()
        });
        assert_eq!(tree.frame(root), None);
        tree.tick(root);
        assert_eq!(tree.frame(root), Some(Rect::new(5.0, 6.0, 15.0, 26.0)));
    }

    #[test]
    /// # Panics
    /// Panics if resizing to the same size dirties the root.
    fn tick_with_same_size_is_clean() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style::default());
        tree.tick_with_size(root, 300.0, 200.0);
        assert_eq!(tree.frame(root), Some(Rect::new(0.0, 0.0, 300.0, 200.0)));
        tree.tick_with_size(root, 300.0, 200.0);
        assert_eq!(tree.last_pass_count(), 0);
        tree.tick_with_size(root, 400.0, 200.0);
        assert_eq!(tree.last_pass_count(), 1);
    }
}
