//! Collecting items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use core::mem;
use core::ops::Range;

use log::debug;

use super::Slot;

/// A run of consecutive items `[start, end)` placed on one line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    pub start: usize,
    pub end: usize,
    /// Sum of outer hypothetical main sizes of the line's items.
    pub main_size: f32,
    pub cross_offset: f32,
    pub cross_size: f32,
}

impl FlexLine {
    const fn starting_at(start: usize) -> Self {
        Self {
            start,
            end: start,
            main_size: 0.0,
            cross_offset: 0.0,
            cross_size: 0.0,
        }
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Break items into lines.
///
/// Without wrapping every item shares one line. With wrapping, a line is closed when the next
/// item's outer basis would push it past `container_main`; a line always takes at least one item
/// so oversized items get a line of their own. There is always at least one line, possibly empty.
pub fn collect_lines(multi_line: bool, container_main: f32, slots: &[Slot]) -> Vec<FlexLine> {
    let mut lines = Vec::new();
    let mut current = FlexLine::starting_at(0);
    for (index, slot) in slots.iter().enumerate() {
        let outer = slot.outer_basis();
        if multi_line && !current.is_empty() && current.main_size + outer > container_main {
            lines.push(mem::replace(&mut current, FlexLine::starting_at(index)));
        }
        current.end = index + 1;
        current.main_size += outer;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    debug!(
        target: "flexbox::lines",
        "[FLEX-LINES] items={} lines={} container_main={container_main:.3}",
        slots.len(),
        lines.len()
    );
    lines
}
