//! Flexible box layout for view trees.
//!
//! A pragmatic subset of CSS Flexible Box Layout Level 1: single pass flexible lengths, greedy
//! line wrapping, percentage sizes and absolutely positioned children. The engine works on plain
//! input structs and knows nothing about the tree that owns the boxes.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

/// Declares a keyword enum with a serde name and a `Display` impl that both use its CSS keyword.
///
/// Call sites import `core::fmt` and `serde::{Deserialize, Serialize}`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $keyword:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $($(#[$variant_meta])* #[serde(rename = $keyword)] $variant,)+
        }

        impl $name {
            /// The CSS keyword for this value.
            pub const fn as_keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(self.as_keyword())
            }
        }
    };
}

// Chapter modules follow the Flexbox Level 1 section numbering.
// Spec: §4 — Flex formatting context, absolutely-positioned children
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 — Flex containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis mapping
#[path = "7_axis/mod.rs"]
mod chapter7;
// Spec: §9 — Flex layout algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter4::{AbsoluteOffsets, Display, Position, is_flow_child, position_absolute};
pub use chapter5::{AlignContent, AlignItems, FlexContainer, FlexDirection, FlexWrap, JustifyContent};
pub use chapter6::{Edges, FlexItem};
pub use chapter7::{Axes, resolve_axes};
pub use chapter9::{FlexLayout, align_content_params, justify_params, layout_flex_container};
