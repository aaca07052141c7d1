//! Intrinsic size of a flex container, derived from its laid-out children.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-sizes>

use log::debug;

use super::Slot;
use super::lines::FlexLine;

impl Slot {
    /// How far the item was flexed from its basis, per unit of the factor that moved it.
    fn flex_fraction(&self) -> f32 {
        let diff = self.main_size - self.basis;
        if diff > 0.0 {
            diff / self.item.grow.max(1.0)
        } else {
            diff / (self.item.shrink * self.main_size).max(1.0)
        }
    }

    /// The item's main size when its line is flexed by `fraction`.
    fn contribution(&self, fraction: f32) -> f32 {
        if fraction > 0.0 {
            self.item.grow.mul_add(fraction, self.basis)
        } else {
            (self.item.shrink * self.main_size).mul_add(-fraction, self.basis)
        }
    }
}

/// Main-axis intrinsic size: per line, the largest item once the line is flexed by its largest
/// positive flex fraction, summed over lines.
pub fn intrinsic_main(lines: &[FlexLine], slots: &[Slot]) -> f32 {
    let total = lines
        .iter()
        .map(|line| {
            let line_slots = slots.get(line.range()).unwrap_or_default();
            let fraction = line_slots
                .iter()
                .map(Slot::flex_fraction)
                .fold(0.0, f32::max);
            line_slots
                .iter()
                .map(|slot| slot.contribution(fraction))
                .fold(0.0, f32::max)
        })
        .sum();
    debug!(target: "flexbox::intrinsic", "[FLEX-INTRINSIC] main={total:.3}");
    total
}

/// Cross-axis intrinsic size: the far edge of the last line, or the widest cross span of any
/// line's items, whichever is larger.
pub fn intrinsic_cross(lines: &[FlexLine], slots: &[Slot]) -> f32 {
    let mut extent = 0.0f32;
    for line in lines {
        extent = extent.max(line.cross_offset + line.cross_size);
        let line_slots = slots.get(line.range()).unwrap_or_default();
        let span = line_slots.iter().fold(None, |span, slot| {
            let (low, high) = (slot.cross_offset, slot.cross_offset + slot.cross_size);
            Some(span.map_or((low, high), |(min, max): (f32, f32)| {
                (min.min(low), max.max(high))
            }))
        });
        if let Some((min, max)) = span {
            extent = extent.max(max - min);
        }
    }
    debug!(target: "flexbox::intrinsic", "[FLEX-INTRINSIC] cross={extent:.3}");
    extent
}
