//! Resolving flexible lengths: growing or shrinking items to fill their line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::debug;

use super::Slot;
use super::lines::FlexLine;

/// Grow or shrink the items of `line` so their outer sizes fill `container_main`.
///
/// The line grows when its outer hypothetical size is below the container main size, otherwise
/// it shrinks. Items with a zero factor for that mode are frozen at their basis. When the
/// remaining factors sum to less than one only that fraction of the free space is handed out.
/// Shrinking is weighted by basis times shrink factor and never takes an item below zero.
pub fn resolve_flexible_lengths(container_main: f32, line: &FlexLine, slots: &mut [Slot]) {
    let Some(line_slots) = slots.get_mut(line.range()) else {
        return;
    };
    let growing = line.main_size < container_main;
    for slot in line_slots.iter_mut() {
        slot.main_size = slot.basis;
    }
    let outer_total: f32 = line_slots.iter().map(Slot::outer_basis).sum();
    let free_space = container_main - outer_total;
    let factor_sum: f32 = line_slots
        .iter()
        .map(|slot| factor(slot, growing))
        .filter(|value| *value > 0.0)
        .sum();
    if factor_sum <= 0.0 {
        return;
    }

    let mut remaining = free_space;
    if factor_sum < 1.0 {
        let scaled = free_space * factor_sum;
        if scaled.abs() < remaining.abs() {
            remaining = scaled;
        }
    }
    debug!(
        target: "flexbox::flex",
        "[FLEX-LENGTHS] growing={growing} free_space={free_space:.3} factor_sum={factor_sum:.3} remaining={remaining:.3}"
    );

    if growing {
        for slot in line_slots.iter_mut() {
            let grow = factor(slot, growing);
            if grow > 0.0 {
                slot.main_size = (grow / factor_sum).mul_add(remaining, slot.basis);
            }
        }
        return;
    }

    let scaled_sum: f32 = line_slots
        .iter()
        .filter(|slot| factor(slot, growing) > 0.0)
        .map(|slot| slot.basis * slot.item.shrink)
        .sum();
    if scaled_sum <= 0.0 {
        return;
    }
    let deficit = remaining.abs();
    for slot in line_slots.iter_mut() {
        let shrink = factor(slot, growing);
        if shrink > 0.0 {
            let ratio = slot.basis * shrink / scaled_sum;
            slot.main_size = ratio.mul_add(-deficit, slot.basis).max(0.0);
        }
    }
}

/// The factor that applies to `slot` in the current mode.
#[inline]
fn factor(slot: &Slot, growing: bool) -> f32 {
    if growing {
        slot.item.grow
    } else {
        slot.item.shrink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter5::FlexDirection;
    use crate::chapter6::{Edges, FlexItem};
    use crate::chapter7::resolve_axes;
    use geometry::Size;

    fn slot(width: f32, grow: f32, shrink: f32) -> Slot {
        Slot::new(
            resolve_axes(FlexDirection::Row),
            FlexItem {
                size: Size::new(width, 10.0),
                grow,
                shrink,
                ..FlexItem::default()
            },
        )
    }

    fn whole_line(slots: &[Slot]) -> FlexLine {
        FlexLine {
            start: 0,
            end: slots.len(),
            main_size: slots.iter().map(Slot::outer_basis).sum(),
            ..FlexLine::default()
        }
    }

    fn sizes(slots: &[Slot]) -> Vec<f32> {
        slots.iter().map(|slot| slot.main_size).collect()
    }

    #[test]
    /// # Panics
    /// Panics if free space is not split by grow factor.
    fn grow_splits_by_factor() {
        let mut slots = vec![slot(0.0, 1.0, 0.0), slot(0.0, 3.0, 0.0)];
        let line = whole_line(&slots);
        resolve_flexible_lengths(400.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![100.0, 300.0]);
    }

    #[test]
    /// # Panics
    /// Panics if margins are not subtracted from the free space.
    fn grow_respects_margins() {
        let axes = resolve_axes(FlexDirection::Row);
        let mut slots = vec![
            Slot::new(
                axes,
                FlexItem {
                    grow: 1.0,
                    margin: Edges {
                        right: 50.0,
                        ..Edges::ZERO
                    },
                    ..FlexItem::default()
                },
            ),
            Slot::new(
                axes,
                FlexItem {
                    grow: 1.0,
                    margin: Edges {
                        left: 50.0,
                        ..Edges::ZERO
                    },
                    ..FlexItem::default()
                },
            ),
        ];
        let line = whole_line(&slots);
        resolve_flexible_lengths(1000.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![450.0, 450.0]);
    }

    #[test]
    /// # Panics
    /// Panics if factors summing below one hand out more than their share.
    fn fractional_factors_take_partial_space() {
        let mut slots = vec![slot(0.0, 0.25, 0.0), slot(0.0, 0.25, 0.0)];
        let line = whole_line(&slots);
        resolve_flexible_lengths(400.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![100.0, 100.0]);
    }

    #[test]
    /// # Panics
    /// Panics if zero-factor items move away from their basis.
    fn zero_factor_items_stay_frozen() {
        let mut slots = vec![slot(100.0, 0.0, 0.0), slot(100.0, 1.0, 0.0)];
        let line = whole_line(&slots);
        resolve_flexible_lengths(500.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![100.0, 400.0]);
    }

    #[test]
    /// # Panics
    /// Panics if shrinking is not weighted by basis times shrink factor.
    fn shrink_weighted_by_basis() {
        let mut slots = vec![slot(100.0, 0.0, 1.0), slot(300.0, 0.0, 1.0)];
        let line = whole_line(&slots);
        resolve_flexible_lengths(200.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![50.0, 150.0]);
    }

    #[test]
    /// # Panics
    /// Panics if shrinking zero-basis items produces NaN or moves them.
    fn shrink_with_zero_scaled_sum_is_noop() {
        let axes = resolve_axes(FlexDirection::Row);
        let mut slots = vec![Slot::new(
            axes,
            FlexItem {
                shrink: 1.0,
                margin: Edges {
                    left: 300.0,
                    ..Edges::ZERO
                },
                ..FlexItem::default()
            },
        )];
        let line = whole_line(&slots);
        resolve_flexible_lengths(100.0, &line, &mut slots);
        let size = slots.first().map_or(f32::NAN, |slot| slot.main_size);
        assert!(size.abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a line that exactly fits is resized.
    fn exact_fit_is_untouched() {
        let mut slots = vec![slot(50.0, 1.0, 1.0), slot(50.0, 1.0, 1.0)];
        let line = whole_line(&slots);
        resolve_flexible_lengths(100.0, &line, &mut slots);
        assert_eq!(sizes(&slots), vec![50.0, 50.0]);
    }
}
