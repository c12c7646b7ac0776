//! Scroll-reactive header styling, independent of any browser binding.
//!
//! The web frontend implements [`Page`] and [`ClassList`] over `web-sys`
//! handles; tests implement them over plain vectors.

use crate::constants::{HEADER_SELECTOR, SCROLLED_CLASS, SCROLL_THRESHOLD_PX};
use crate::error::StylerError;
use crate::state::HeaderState;

/// Class membership of a single element.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&self, class: &str) -> Result<(), StylerError>;
    fn remove(&self, class: &str) -> Result<(), StylerError>;
}

/// The browsing context as seen by the styler.
pub trait Page {
    type Header: ClassList;

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// First element matching `selector`, looked up fresh on every call.
    fn query_header(&self, selector: &str) -> Result<Option<Self::Header>, StylerError>;
}

/// What to do when the page has no header element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingHeader {
    /// Fail with [`StylerError::MissingTargetElement`] on every notification.
    #[default]
    Report,
    /// Treat the notification as a no-op.
    Ignore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StylerConfig {
    pub threshold_px: f64,
    pub marker_class: String,
    pub header_selector: String,
    pub missing_header: MissingHeader,
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self {
            threshold_px: SCROLL_THRESHOLD_PX,
            marker_class: SCROLLED_CLASS.to_string(),
            header_selector: HEADER_SELECTOR.to_string(),
            missing_header: MissingHeader::Report,
        }
    }
}

impl StylerConfig {
    /// Checks the values a `DOMTokenList` and `querySelector` would reject.
    pub fn validate(&self) -> Result<(), StylerError> {
        if !self.threshold_px.is_finite() {
            return Err(StylerError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold_px
            )));
        }
        if self.marker_class.is_empty() {
            return Err(StylerError::InvalidConfig(
                "marker class must not be empty".into(),
            ));
        }
        if self.marker_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(StylerError::InvalidConfig(format!(
                "marker class `{}` contains whitespace",
                self.marker_class
            )));
        }
        if self.header_selector.trim().is_empty() {
            return Err(StylerError::InvalidConfig(
                "header selector must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Result of handling one scroll notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The header was found and now reflects `state`. `changed` is false when
    /// the class list already matched.
    Updated { state: HeaderState, changed: bool },
    /// No header was found and the config says to ignore that.
    NoHeader,
}

#[derive(Clone, Debug)]
pub struct HeaderStyler {
    config: StylerConfig,
}

impl HeaderStyler {
    pub fn new(config: StylerConfig) -> Result<Self, StylerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StylerConfig {
        &self.config
    }

    #[inline]
    pub fn state_for(&self, offset: f64) -> HeaderState {
        HeaderState::for_offset(offset, self.config.threshold_px)
    }

    /// Handle one scroll notification: read the offset, look the header up and
    /// make its marker class agree with the threshold comparison.
    pub fn handle_scroll<P: Page>(&self, page: &P) -> Result<ScrollOutcome, StylerError> {
        let offset = page.scroll_offset();
        let selector = self.config.header_selector.as_str();

        let Some(header) = page.query_header(selector)? else {
            return match self.config.missing_header {
                MissingHeader::Report => Err(StylerError::MissingTargetElement {
                    selector: selector.to_string(),
                }),
                MissingHeader::Ignore => {
                    log::trace!("[header] no `{}` at offset {:.0}, skipped", selector, offset);
                    Ok(ScrollOutcome::NoHeader)
                }
            };
        };

        let state = self.state_for(offset);
        let changed = sync_marker(&header, &self.config.marker_class, state)?;
        if changed {
            log::debug!("[header] {} at offset {:.0}", state.name(), offset);
        }
        Ok(ScrollOutcome::Updated { state, changed })
    }

    /// Same as [`handle_scroll`](Self::handle_scroll), but an absent header is
    /// not an error: at load time the header may simply not be parsed yet,
    /// and the first scroll notification applies the configured policy.
    pub fn sync_at_load<P: Page>(&self, page: &P) -> Result<ScrollOutcome, StylerError> {
        match self.handle_scroll(page) {
            Err(StylerError::MissingTargetElement { selector }) => {
                log::debug!("[header] no `{}` at load, waiting for scroll", selector);
                Ok(ScrollOutcome::NoHeader)
            }
            other => other,
        }
    }
}

/// Add or remove `class` so that its presence matches `state`. Returns whether
/// the list was mutated.
pub fn sync_marker<L: ClassList + ?Sized>(
    list: &L,
    class: &str,
    state: HeaderState,
) -> Result<bool, StylerError> {
    let present = list.contains(class);
    match (state.marker_present(), present) {
        (true, false) => list.add(class).map(|_| true),
        (false, true) => list.remove(class).map(|_| true),
        _ => Ok(false),
    }
}
