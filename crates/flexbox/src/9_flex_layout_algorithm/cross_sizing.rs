//! Cross sizes of lines and of stretched items.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>

use log::debug;

use super::Slot;
use super::lines::FlexLine;
use crate::chapter5::{AlignContent, AlignItems};

/// Size and stack the lines along the cross axis.
///
/// A single line takes the container's whole cross size. Multiple lines take their tallest outer
/// item and stack from the cross start; with `align-content: stretch` any leftover cross space is
/// shared equally between them.
pub fn size_lines(
    align_content: AlignContent,
    container_cross: f32,
    lines: &mut [FlexLine],
    slots: &[Slot],
) {
    if let [only] = lines {
        only.cross_offset = 0.0;
        only.cross_size = container_cross;
        return;
    }

    let mut offset = 0.0f32;
    for line in lines.iter_mut() {
        line.cross_offset = offset;
        line.cross_size = slots
            .get(line.range())
            .unwrap_or_default()
            .iter()
            .map(Slot::outer_cross)
            .fold(0.0, f32::max);
        offset += line.cross_size;
    }

    let remaining = container_cross - offset;
    debug!(
        target: "flexbox::cross",
        "[FLEX-LINES-CROSS] lines={} used={offset:.3} remaining={remaining:.3} align_content={align_content}",
        lines.len()
    );
    if align_content == AlignContent::Stretch && remaining > 0.0 {
        let add_each = remaining / lines.len() as f32;
        for (index, line) in lines.iter_mut().enumerate() {
            line.cross_offset = (index as f32).mul_add(add_each, line.cross_offset);
            line.cross_size += add_each;
        }
    }
}

/// Under `align-items: stretch`, give every item without a fixed cross size its line's cross
/// size minus its cross margins.
pub fn stretch_items(align_items: AlignItems, lines: &[FlexLine], slots: &mut [Slot]) {
    if align_items != AlignItems::Stretch {
        return;
    }
    for line in lines {
        let Some(line_slots) = slots.get_mut(line.range()) else {
            continue;
        };
        for slot in line_slots.iter_mut().filter(|slot| !slot.cross_fixed) {
            slot.cross_size = (line.cross_size - slot.cross_margin_sum()).max(0.0);
        }
    }
}
