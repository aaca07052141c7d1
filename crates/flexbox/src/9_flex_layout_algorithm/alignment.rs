//! Main-axis justification, cross-axis item alignment and line packing.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

use log::debug;

use super::Slot;
use super::lines::FlexLine;
use crate::chapter5::{AlignContent, AlignItems, JustifyContent};

/// Leading offset and between-item spacing for `justify-content`.
///
/// `remaining` may be negative when the line overflows. Space distribution with too few items
/// to space out falls back to no spacing.
pub fn justify_params(mode: JustifyContent, remaining: f32, count: usize) -> (f32, f32) {
    match (mode, count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            let spacing = remaining / count as f32;
            (spacing * 0.5, spacing)
        }
        _ => (0.0, 0.0),
    }
}

/// Leading offset and between-line spacing for `align-content`.
///
/// `Start` and `Stretch` pack at the cross start; stretch has already grown the lines.
pub fn align_content_params(mode: AlignContent, remaining: f32, count: usize) -> (f32, f32) {
    match (mode, count) {
        (AlignContent::End, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 => {
            let spacing = remaining / count as f32;
            (spacing * 0.5, spacing)
        }
        _ => (0.0, 0.0),
    }
}

/// Place the items of `line` along the main axis.
pub fn justify_line(
    mode: JustifyContent,
    container_main: f32,
    line: &FlexLine,
    slots: &mut [Slot],
) {
    let Some(line_slots) = slots.get_mut(line.range()) else {
        return;
    };
    let used: f32 = line_slots.iter().map(Slot::outer_main).sum();
    let remaining = container_main - used;
    let (start, between) = justify_params(mode, remaining, line.len());
    debug!(
        target: "flexbox::align",
        "[FLEX-JUSTIFY] mode={mode} items={} used={used:.3} remaining={remaining:.3} start={start:.3} between={between:.3}",
        line.len()
    );
    let mut cursor = start;
    for slot in line_slots {
        slot.main_offset = cursor + slot.main_margins.0;
        cursor += between + slot.outer_main();
    }
}

/// Place the items of `line` within the line along the cross axis.
pub fn align_items_in_line(mode: AlignItems, line: &FlexLine, slots: &mut [Slot]) {
    let Some(line_slots) = slots.get_mut(line.range()) else {
        return;
    };
    for slot in line_slots {
        let free = line.cross_size - slot.outer_cross();
        let shift = match mode {
            AlignItems::End => free,
            AlignItems::Center => free * 0.5,
            AlignItems::Start | AlignItems::Stretch => 0.0,
        };
        slot.cross_offset = line.cross_offset + slot.cross_margins.0 + shift;
    }
}

/// Distribute leftover cross space between lines. Lines are only moved when they fit.
pub fn align_lines(
    mode: AlignContent,
    container_cross: f32,
    lines: &mut [FlexLine],
    slots: &mut [Slot],
) {
    let Some(last) = lines.last() else {
        return;
    };
    let remaining = container_cross - (last.cross_offset + last.cross_size);
    if remaining <= 0.0 {
        return;
    }
    let (start, between) = align_content_params(mode, remaining, lines.len());
    debug!(
        target: "flexbox::align",
        "[ALIGN-CONTENT] mode={mode} lines={} remaining={remaining:.3} start={start:.3} between={between:.3}",
        lines.len()
    );
    let mut shift = start;
    for line in lines.iter_mut() {
        line.cross_offset += shift;
        if let Some(line_slots) = slots.get_mut(line.range()) {
            for slot in line_slots {
                slot.cross_offset += shift;
            }
        }
        shift += between;
    }
}
