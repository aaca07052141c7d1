//! Read-side walks over a laid out tree: drawing, hit testing, lookup and debug dumps.

use core::fmt;

use geometry::Point;
use indextree::NodeId;
use log::trace;

use crate::tree::ViewTree;

impl ViewTree {
    /// Lay out `root` if needed, then hand every visible view's frame to its handler.
    ///
    /// Views are visited parent first, children in order. A hidden view or one with
    /// `display: none` is skipped together with its subtree.
    pub fn draw(&mut self, root: NodeId) {
        self.passes = 0;
        self.draw_view(root);
    }

    fn draw_view(&mut self, node: NodeId) {
        if self.is_dirty(node) {
            self.layout_view(node);
        }
        let Some(view) = self.view_mut(node) else {
            return;
        };
        if !view.style.is_visible() {
            return;
        }
        let frame = view.frame;
        if let Some(handler) = view.handler.as_mut() {
            handler.draw(frame);
        }
        let children: Vec<NodeId> = self.children(node).collect();
        for child in children {
            self.draw_view(child);
        }
    }

    /// The deepest visible view under `point`, preferring later siblings since they paint on top.
    ///
    /// Frames from the last tick are used as they are; call [`ViewTree::tick`] first.
    pub fn node_at(&self, root: NodeId, point: Point) -> Option<NodeId> {
        let view = self.view(root)?;
        if !view.style.is_visible() || !view.frame.contains(point) {
            return None;
        }
        let children: Vec<NodeId> = self.children(root).collect();
        let hit = children
            .into_iter()
            .rev()
            .find_map(|child| self.node_at(child, point))
            .unwrap_or(root);
        trace!(target: "view_tree::query", "[HIT] point={point:?} node={hit}");
        Some(hit)
    }

    /// The first view in document order below (and including) `root` tagged with `id`.
    pub fn find_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.view(root)?;
        root.descendants(&self.arena)
            .find(|&node| self.id(node) == Some(id))
    }

    /// An indented outline of `root`'s subtree for debugging.
    pub const fn dump(&self, root: NodeId) -> TreeDump<'_> {
        TreeDump { tree: self, root }
    }
}

/// Display adapter returned by [`ViewTree::dump`].
pub struct TreeDump<'tree> {
    tree: &'tree ViewTree,
    root: NodeId,
}

impl TreeDump<'_> {
    fn write_node(
        &self,
        formatter: &mut fmt::Formatter<'_>,
        node: NodeId,
        depth: usize,
    ) -> fmt::Result {
        let Some(view) = self.tree.view(node) else {
            return Ok(());
        };
        for _ in 0..depth {
            formatter.write_str("  ")?;
        }
        match view.id.as_deref() {
            Some(id) => write!(formatter, "#{id}")?,
            None => write!(formatter, "{node}")?,
        }
        let style = &view.style;
        write!(
            formatter,
            " {} {} justify={} align-items={} align-content={}",
            style.display, style.direction, style.justify, style.align_items, style.align_content
        )?;
        if style.is_absolute() {
            formatter.write_str(" absolute")?;
        }
        if style.hidden {
            formatter.write_str(" hidden")?;
        }
        let frame = view.frame;
        write!(
            formatter,
            " [{}, {}, {}, {}]",
            frame.min.x, frame.min.y, frame.max.x, frame.max.y
        )?;
        if view.dirty {
            formatter.write_str(" dirty")?;
        }
        writeln!(formatter)?;
        for child in self.tree.children(node) {
            self.write_node(formatter, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(formatter, self.root, 0)
    }
}
