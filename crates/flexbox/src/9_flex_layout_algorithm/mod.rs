//! The flex layout algorithm.
//!
//! One call resolves one container: percentages, flex basis, line collection, flexible lengths,
//! line and item cross sizes, justification, cross alignment, line packing, the container's
//! intrinsic size, and finally the absolute frame of every child.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

mod alignment;
mod cross_sizing;
mod flexible_lengths;
mod intrinsic;
mod lines;
mod percentages;

#[cfg(test)]
mod tests;

use geometry::{Rect, Size};
use log::{debug, trace};

use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;
use crate::chapter7::{Axes, resolve_axes};

pub use alignment::{align_content_params, justify_params};
use lines::FlexLine;

/// Result of laying out one container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLayout {
    /// Absolute frame per input item, in input order.
    pub frames: Vec<Rect>,
    /// Per input item computed size after percentage resolution. Callers store it back so the
    /// next pass sees the same values.
    pub computed: Vec<Size>,
    /// The container's size derived from its children. Explicit container sizes shadow it.
    pub intrinsic: Size,
    /// Number of lines whose outer main size exceeds the container main size.
    pub overflowing_lines: usize,
}

/// Working state of one item while its container is resolved.
#[derive(Copy, Clone, Debug)]
struct Slot {
    item: FlexItem,
    basis: f32,
    main_size: f32,
    cross_size: f32,
    main_offset: f32,
    cross_offset: f32,
    main_margins: (f32, f32),
    cross_margins: (f32, f32),
    cross_fixed: bool,
}

impl Slot {
    fn new(axes: Axes, item: FlexItem) -> Self {
        let resolved = item.resolved_size();
        let basis = axes.main(resolved);
        Self {
            item,
            basis,
            main_size: basis,
            cross_size: axes.cross(resolved),
            main_offset: 0.0,
            cross_offset: 0.0,
            main_margins: axes.main_margins(item.margin),
            cross_margins: axes.cross_margins(item.margin),
            cross_fixed: axes.is_cross_fixed(&item),
        }
    }

    #[inline]
    fn main_margin_sum(&self) -> f32 {
        self.main_margins.0 + self.main_margins.1
    }

    #[inline]
    fn cross_margin_sum(&self) -> f32 {
        self.cross_margins.0 + self.cross_margins.1
    }

    /// Hypothetical outer main size used for line breaking.
    #[inline]
    fn outer_basis(&self) -> f32 {
        self.basis + self.main_margin_sum()
    }

    #[inline]
    fn outer_main(&self) -> f32 {
        self.main_size + self.main_margin_sum()
    }

    #[inline]
    fn outer_cross(&self) -> f32 {
        self.cross_size + self.cross_margin_sum()
    }
}

/// Lay out the in-flow children of `container`.
///
/// `items` must already exclude `display: none` and absolutely-positioned children. The returned
/// frames are absolute: relative placements are translated by the container frame's origin.
pub fn layout_flex_container(container: &FlexContainer, items: &[FlexItem]) -> FlexLayout {
    let axes = resolve_axes(container.direction);
    let container_size = container.frame.size();
    let container_main = axes.main(container_size);
    let container_cross = axes.cross(container_size);
    debug!(
        target: "flexbox::layout",
        "[FLEX] direction={} wrap={} items={} container_main={container_main:.3} container_cross={container_cross:.3}",
        container.direction,
        container.wrap,
        items.len()
    );

    let mut resolved = items.to_vec();
    percentages::resolve_percentages(axes, container_size, &mut resolved);
    let mut slots: Vec<Slot> = resolved
        .iter()
        .map(|item| Slot::new(axes, *item))
        .collect();

    let mut lines = lines::collect_lines(container.is_multi_line(), container_main, &slots);
    let overflowing_lines = lines
        .iter()
        .filter(|line| line.main_size > container_main)
        .count();
    for line in &lines {
        flexible_lengths::resolve_flexible_lengths(container_main, line, &mut slots);
    }

    cross_sizing::size_lines(
        container.align_content,
        container_cross,
        &mut lines,
        &slots,
    );
    cross_sizing::stretch_items(container.align_items, &lines, &mut slots);

    for line in &lines {
        alignment::justify_line(container.justify, container_main, line, &mut slots);
        alignment::align_items_in_line(container.align_items, line, &mut slots);
    }
    alignment::align_lines(
        container.align_content,
        container_cross,
        &mut lines,
        &mut slots,
    );

    let intrinsic = axes.size(
        intrinsic::intrinsic_main(&lines, &slots),
        intrinsic::intrinsic_cross(&lines, &slots),
    );

    let frames = commit_frames(axes, container.frame, &slots);
    FlexLayout {
        frames,
        computed: resolved.iter().map(|item| item.computed).collect(),
        intrinsic,
        overflowing_lines,
    }
}

/// Map every slot back to x/y and translate by the container origin.
fn commit_frames(axes: Axes, container_frame: Rect, slots: &[Slot]) -> Vec<Rect> {
    slots
        .iter()
        .map(|slot| {
            let relative = Rect::from_origin_size(
                axes.point(slot.main_offset, slot.cross_offset),
                axes.size(slot.main_size, slot.cross_size),
            );
            let frame = relative + container_frame.min;
            trace!(target: "flexbox::layout", "[FLEX-COMMIT] frame={frame:?}");
            frame
        })
        .collect()
}
