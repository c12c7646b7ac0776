//! Two-state model of the header's visual state.
//!
//! The state is never stored between notifications; it is recomputed from the
//! current scroll offset every time, so the marker class stays a pure function
//! of scroll position.

/// Visual state of the header relative to the scroll threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HeaderState {
    #[default]
    Unscrolled,
    Scrolled,
}

impl HeaderState {
    /// State for a vertical offset. The boundary is exclusive: an offset equal
    /// to the threshold is still `Unscrolled`. NaN compares false and so maps
    /// to `Unscrolled` as well.
    #[inline]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderState::Scrolled
        } else {
            HeaderState::Unscrolled
        }
    }

    #[inline]
    pub fn marker_present(self) -> bool {
        matches!(self, HeaderState::Scrolled)
    }

    pub fn name(self) -> &'static str {
        match self {
            HeaderState::Unscrolled => "unscrolled",
            HeaderState::Scrolled => "scrolled",
        }
    }
}
