//! Retained view tree driven by the flexbox engine.
//!
//! Views live in an arena owned by [`ViewTree`] and are addressed by [`NodeId`]. Style setters
//! and structural edits mark views dirty; [`ViewTree::tick`] re-lays out only what changed and
//! hands the resulting frames to each view's [`Handler`].

mod config;
mod handler;
mod layout;
mod query;
mod style;
mod tree;

pub use config::TreeConfig;
pub use flexbox::{
    AlignContent, AlignItems, Display, Edges, FlexDirection, FlexWrap, JustifyContent, Position,
};
pub use geometry::{Point, Rect, Size};
pub use handler::Handler;
pub use indextree::NodeId;
pub use query::TreeDump;
pub use style::Style;
pub use tree::ViewTree;
