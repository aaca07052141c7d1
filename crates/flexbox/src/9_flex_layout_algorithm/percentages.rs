//! Percentage sizes resolved against the container before the flex basis is taken.

use geometry::Size;
use log::debug;

use crate::chapter6::FlexItem;
use crate::chapter7::Axes;

/// Resolve `percent` sizes into each item's `computed` size.
///
/// Main-axis percentages only resolve while explicitly sized siblings and all main margins leave
/// space, and each is capped at that remaining space. Cross-axis percentages always resolve
/// against the container's cross size.
pub fn resolve_percentages(axes: Axes, container: Size, items: &mut [FlexItem]) {
    let container_main = axes.main(container);
    let container_cross = axes.cross(container);
    let used: f32 = items
        .iter()
        .map(|item| {
            let (lead, trail) = axes.main_margins(item.margin);
            axes.main(item.size) + lead + trail
        })
        .sum();
    let remaining = container_main - used;
    debug!(
        target: "flexbox::percentages",
        "[FLEX-PCT] container_main={container_main:.3} used={used:.3} remaining={remaining:.3}"
    );

    for item in items.iter_mut() {
        let main_pct = axes.main(item.percent);
        let cross_pct = axes.cross(item.percent);
        let mut main = axes.main(item.computed);
        let mut cross = axes.cross(item.computed);
        if remaining > 0.0 && main_pct != 0.0 {
            main = (container_main * main_pct / 100.0).min(remaining);
        }
        if cross_pct != 0.0 {
            cross = container_cross * cross_pct / 100.0;
        }
        item.computed = axes.size(main, cross);
    }
}
