//! Flex containers: container properties and the inputs the algorithm reads from them.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use core::fmt;
use geometry::Rect;
use serde::{Deserialize, Serialize};

keyword_enum! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
    FlexDirection {
        #[default]
        Row => "row",
        Column => "column",
    }
}

keyword_enum! {
    /// `WrapReverse` wraps like `Wrap`; lines are not stacked in reverse.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
    FlexWrap {
        #[default]
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Spec: <https://www.w3.org/TR/css-align-3/#propdef-justify-content>
    JustifyContent {
        #[default]
        Start => "start",
        End => "end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    /// Spec: <https://www.w3.org/TR/css-align-3/#propdef-align-items>
    AlignItems {
        #[default]
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
    }
}

keyword_enum! {
    /// Spec: <https://www.w3.org/TR/css-align-3/#propdef-align-content>
    AlignContent {
        #[default]
        Start => "start",
        End => "end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
}

/// Container-side inputs to [`crate::layout_flex_container`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexContainer {
    /// Absolute frame of the container; children are committed relative to its origin.
    pub frame: Rect,
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

impl FlexContainer {
    /// True when children may be broken into more than one line.
    #[inline]
    pub const fn is_multi_line(&self) -> bool {
        !matches!(self.wrap, FlexWrap::NoWrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the defaults differ from a freshly created view.
    fn defaults() {
        let container = FlexContainer::default();
        assert_eq!(container.direction, FlexDirection::Row);
        assert_eq!(container.wrap, FlexWrap::NoWrap);
        assert_eq!(container.justify, JustifyContent::Start);
        assert_eq!(container.align_items, AlignItems::Stretch);
        assert_eq!(container.align_content, AlignContent::Start);
        assert!(!container.is_multi_line());
    }

    #[test]
    /// # Panics
    /// Panics if keyword names do not match their CSS spelling.
    fn keyword_names() {
        assert_eq!(FlexWrap::NoWrap.to_string(), "nowrap");
        assert_eq!(JustifyContent::SpaceBetween.as_keyword(), "space-between");
        let parsed: AlignContent = serde_json::from_str("\"space-around\"").unwrap_or_default();
        assert_eq!(parsed, AlignContent::SpaceAround);
        assert!(serde_json::from_str::<FlexDirection>("\"row-reverse\"").is_err());
    }
}
