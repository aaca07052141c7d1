//! Whole-container scenarios for `layout_flex_container`.

use super::*;
use crate::chapter5::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
use crate::chapter6::Edges;


/// A 100x100 style container at the origin.
pub fn container(
    direction: FlexDirection,
    justify: JustifyContent,
    align_items: AlignItems,
) -> FlexContainer {
    FlexContainer {
        frame: Rect::new(0.0, 0.0, 100.0, 100.0),
        direction,
        justify,
        align_items,
        ..FlexContainer::default()
    }
}

/// Helper to create an item with an explicit size and nothing else.
pub fn sized(width: f32, height: f32) -> FlexItem {
    FlexItem {
        size: Size::new(width, height),
        ..FlexItem::default()
    }
}

/// Frame of item `index`, or a NaN rectangle when absent so comparisons fail loudly.
pub fn frame_at(layout: &FlexLayout, index: usize) -> Rect {
    layout
        .frames
        .get(index)
        .copied()
        .unwrap_or_else(|| Rect::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN))
}
