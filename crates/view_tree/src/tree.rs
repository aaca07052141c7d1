//! The view arena: node storage, structure mutation and dirty propagation.

use anyhow::{Result, anyhow, bail};
use flexbox::{
    AlignContent, AlignItems, Display, Edges, FlexDirection, FlexWrap, JustifyContent, Position,
};
use geometry::{Rect, Size};
use indextree::{Arena, Node, NodeId};
use log::{debug, warn};

use crate::config::TreeConfig;
use crate::handler::Handler;
use crate::style::Style;

/// Per-view state stored in the arena.
pub(crate) struct ViewNode {
    pub(crate) style: Style,
    pub(crate) id: Option<String>,
    /// Set when the frame (and possibly the subtree) must be recomputed.
    pub(crate) dirty: bool,
    /// Absolute frame from the last pass that touched this view.
    pub(crate) frame: Rect,
    /// Intrinsic size from this view's own pass, overwritten by percentages its parent resolves.
    pub(crate) computed: Size,
    pub(crate) handler: Option<Box<dyn Handler>>,
}

impl ViewNode {
    const fn new(style: Style) -> Self {
        Self {
            style,
            id: None,
            dirty: true,
            frame: Rect::ZERO,
            computed: Size::ZERO,
            handler: None,
        }
    }
}

/// A tree of views laid out with flexbox.
///
/// Views are created detached and linked with [`ViewTree::attach`]. A view has at most one
/// parent; the parent link is an arena index and never keeps the parent alive. Every mutation
/// marks the affected views dirty and [`ViewTree::tick`] brings them back up to date.
pub struct ViewTree {
    pub(crate) arena: Arena<ViewNode>,
    pub(crate) config: TreeConfig,
    /// Layout passes run during the last tick or draw.
    pub(crate) passes: usize,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            arena: Arena::new(),
            config,
            passes: 0,
        }
    }

    #[inline]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Create a detached, dirty view.
    pub fn create(&mut self, style: Style) -> NodeId {
        self.arena.new_node(ViewNode::new(style))
    }

    /// Create a detached view carrying `handler`.
    pub fn create_with_handler(&mut self, style: Style, handler: impl Handler + 'static) -> NodeId {
        let node = self.create(style);
        self.set_handler(node, handler);
        node
    }

    pub fn set_handler(&mut self, node: NodeId, handler: impl Handler + 'static) {
        if let Some(view) = self.view_mut(node) {
            view.handler = Some(Box::new(handler));
        }
    }

    pub fn clear_handler(&mut self, node: NodeId) {
        if let Some(view) = self.view_mut(node) {
            view.handler = None;
        }
    }

    /// Tag a view so it can be found with [`ViewTree::find_by_id`].
    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) {
        if let Some(view) = self.view_mut(node) {
            view.id = Some(id.into());
        }
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.view(node).and_then(|view| view.id.as_deref())
    }

    /// Append `children` to `parent` in order.
    ///
    /// # Errors
    /// Fails without attaching anything when a child already has a parent, is `parent` itself or
    /// one of its ancestors, is listed twice, or has been discarded.
    pub fn try_attach(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        if self.view(parent).is_none() {
            bail!("cannot attach to {parent}: view was discarded");
        }
        for (index, &child) in children.iter().enumerate() {
            let Some(node) = self.arena.get(child) else {
                bail!("cannot attach {child}: view was discarded");
            };
            if node.is_removed() {
                bail!("cannot attach {child}: view was discarded");
            }
            if let Some(current) = node.parent() {
                bail!("cannot attach {child} to {parent}: already attached to {current}");
            }
            if parent.ancestors(&self.arena).any(|ancestor| ancestor == child) {
                bail!("cannot attach {child} to {parent}: it would contain itself");
            }
            if children.get(..index).is_some_and(|earlier| earlier.contains(&child)) {
                bail!("cannot attach {child} to {parent}: listed more than once");
            }
        }
        for &child in children {
            parent
                .checked_append(child, &mut self.arena)
                .map_err(|err| anyhow!("cannot attach {child} to {parent}: {err}"))?;
            debug!(target: "view_tree::structure", "[ATTACH] parent={parent} child={child}");
        }
        self.mark_needs_layout(parent);
        Ok(())
    }

    /// Append `children` to `parent` in order.
    ///
    /// # Panics
    /// Panics on the structural errors [`ViewTree::try_attach`] reports.
    #[allow(clippy::panic, reason = "attaching a parented view is a caller bug")]
    pub fn attach(&mut self, parent: NodeId, children: &[NodeId]) {
        if let Err(err) = self.try_attach(parent, children) {
            panic!("{err}");
        }
    }

    /// Remove `child` from `parent`. Returns false when `child` is not one of its children.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> bool {
        let is_child = self
            .arena
            .get(child)
            .is_some_and(|node| !node.is_removed() && node.parent() == Some(parent));
        if !is_child {
            return false;
        }
        child.detach(&mut self.arena);
        debug!(target: "view_tree::structure", "[DETACH] parent={parent} child={child}");
        self.mark_dirty(child);
        self.mark_needs_layout(parent);
        true
    }

    /// Remove and return the last child of `parent`.
    pub fn detach_last(&mut self, parent: NodeId) -> Option<NodeId> {
        let last = self.arena.get(parent)?.last_child()?;
        self.detach(parent, last).then_some(last)
    }

    /// Remove every child of `parent`.
    pub fn detach_all(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = self.children(parent).collect();
        for child in children {
            child.detach(&mut self.arena);
            self.mark_dirty(child);
        }
        self.mark_needs_layout(parent);
    }

    /// Release `node` and its whole subtree from the arena, detaching it first.
    ///
    /// Ids of discarded views must not be used again.
    pub fn discard(&mut self, node: NodeId) {
        if let Some(parent) = self.parent(node) {
            self.detach(parent, node);
        }
        if self.view(node).is_some() {
            node.remove_subtree(&mut self.arena);
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(Node::parent)
    }

    /// Children of `node` in paint order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let live = self.view(node).is_some();
        live.then(|| node.children(&self.arena))
            .into_iter()
            .flatten()
    }

    pub fn style(&self, node: NodeId) -> Option<&Style> {
        self.view(node).map(|view| &view.style)
    }

    /// Apply `edit` to the style of `node` and mark it for layout.
    pub fn update_style(&mut self, node: NodeId, edit: impl FnOnce(&mut Style)) {
        let Some(view) = self.view_mut(node) else {
            warn!(target: "view_tree::structure", "[STYLE] ignoring edit of discarded view {node}");
            return;
        };
        edit(&mut view.style);
        self.mark_needs_layout(node);
    }

    /// Replace the whole style of `node`.
    pub fn set_style(&mut self, node: NodeId, style: Style) {
        self.update_style(node, |current| *current = style);
    }

    /// The absolute frame of `node`, or `None` while it awaits layout.
    pub fn frame(&self, node: NodeId) -> Option<Rect> {
        self.view(node)
            .filter(|view| !view.dirty)
            .map(|view| view.frame)
    }

    /// The size last computed for `node`: its intrinsic size, or a percentage its parent resolved.
    pub fn computed_size(&self, node: NodeId) -> Option<Size> {
        self.view(node).map(|view| view.computed)
    }

    pub fn is_dirty(&self, node: NodeId) -> bool {
        self.view(node).is_some_and(|view| view.dirty)
    }

    /// Number of layout passes run by the last [`ViewTree::tick`] or [`ViewTree::draw`].
    #[inline]
    pub const fn last_pass_count(&self) -> usize {
        self.passes
    }

    /// Mark `node` and, if attached, its parent dirty.
    pub fn mark_needs_layout(&mut self, node: NodeId) {
        self.mark_dirty(node);
        if let Some(parent) = self.parent(node) {
            self.mark_dirty(parent);
        }
    }

    pub(crate) fn mark_dirty(&mut self, node: NodeId) {
        if let Some(view) = self.view_mut(node) {
            view.dirty = true;
        }
    }

    pub(crate) fn view(&self, node: NodeId) -> Option<&ViewNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    pub(crate) fn view_mut(&mut self, node: NodeId) -> Option<&mut ViewNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get_mut)
    }
}

/// Setters that replace one style attribute and mark the view for layout.
macro_rules! style_setters {
    ($($(#[$meta:meta])* $setter:ident => $field:ident: $ty:ty),+ $(,)?) => {
        impl ViewTree {
            $(
                $(#[$meta])*
                pub fn $setter(&mut self, node: NodeId, value: $ty) {
                    self.update_style(node, |style| style.$field = value);
                }
            )+
        }
    };
}

style_setters! {
    set_left => left: f32,
    set_top => top: f32,
    /// `None` unsets the edge.
    set_right => right: Option<f32>,
    /// `None` unsets the edge.
    set_bottom => bottom: Option<f32>,
    /// Zero means auto.
    set_width => width: f32,
    /// Zero means auto.
    set_height => height: f32,
    set_width_pct => width_pct: f32,
    set_height_pct => height_pct: f32,
    set_margin => margin: Edges,
    set_position => position: Position,
    set_direction => direction: FlexDirection,
    set_wrap => wrap: FlexWrap,
    set_justify => justify: JustifyContent,
    set_align_items => align_items: AlignItems,
    set_align_content => align_content: AlignContent,
    set_grow => grow: f32,
    set_shrink => shrink: f32,
    set_display => display: Display,
    set_hidden => hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if attaching a parented view succeeds or leaves partial state.
    fn attach_rejects_parented_child() {
        let mut tree = ViewTree::new();
        let first = tree.create(Style::default());
        let second = tree.create(Style::default());
        let child = tree.create(Style::default());
        let fresh = tree.create(Style::default());
        tree.attach(first, &[child]);

        assert!(tree.try_attach(second, &[fresh, child]).is_err());
        assert_eq!(tree.children(second).count(), 0);
        assert_eq!(tree.parent(child), Some(first));
        assert_eq!(tree.parent(fresh), None);
    }

    #[test]
    /// # Panics
    /// Panics if a cycle can be created.
    fn attach_rejects_cycles() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style::default());
        let child = tree.create(Style::default());
        tree.attach(root, &[child]);
        assert!(tree.try_attach(root, &[root]).is_err());
        assert!(tree.try_attach(child, &[root]).is_err());
    }

    #[test]
    #[should_panic(expected = "already attached")]
    /// # Panics
    /// Panics because the child is attached twice.
    fn attach_panics_on_parented_child() {
        let mut tree = ViewTree::new();
        let first = tree.create(Style::default());
        let second = tree.create(Style::default());
        let child = tree.create(Style::default());
        tree.attach(first, &[child]);
        tree.attach(second, &[child]);
    }

    #[test]
    /// # Panics
    /// Panics if detach reports the wrong outcome or keeps the back-reference.
    fn detach_reports_membership() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style::default());
        let child = tree.create(Style::default());
        let stranger = tree.create(Style::default());
        tree.attach(root, &[child]);

        assert!(!tree.detach(root, stranger));
        assert!(tree.detach(root, child));
        assert_eq!(tree.parent(child), None);
        assert!(!tree.detach(root, child));
    }

    #[test]
    /// # Panics
    /// Panics if `detach_last` and `detach_all` do not empty the children in order.
    fn detach_last_and_all() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style::default());
        let kids: Vec<NodeId> = (0..3).map(|_| tree.create(Style::default())).collect();
        tree.attach(root, &kids);

        assert_eq!(tree.detach_last(root), kids.last().copied());
        assert_eq!(tree.children(root).count(), 2);
        tree.detach_all(root);
        assert_eq!(tree.children(root).count(), 0);
        assert_eq!(tree.detach_last(root), None);
        assert!(kids.iter().all(|kid| tree.parent(*kid).is_none()));
    }

    #[test]
    /// # Panics
    /// Panics if discarded views are still reachable.
    fn discard_releases_subtree() {
        let mut tree = ViewTree::new();
        let root = tree.create(Style::default());
        let child = tree.create(Style::default());
        let grandchild = tree.create(Style::default());
        tree.attach(root, &[child]);
        tree.attach(child, &[grandchild]);

        tree.discard(child);
        assert_eq!(tree.children(root).count(), 0);
        assert!(tree.style(child).is_none());
        assert!(tree.style(grandchild).is_none());
        assert!(tree.try_attach(root, &[grandchild]).is_err());
    }

    #[test]
    /// # Panics
    /// Panics if ids are not stored per view.
    fn ids() {
        let mut tree = ViewTree::new();
        let node = tree.create(Style::default());
        assert_eq!(tree.id(node), None);
        tree.set_id(node, "palette");
        assert_eq!(tree.id(node), Some("palette"));
    }
}
