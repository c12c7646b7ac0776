/// Browser-side wiring constants.
///
/// Styling and threshold defaults live in `header_core::constants`; this file
/// only holds what the web glue itself needs.
// Console verbosity for `console_log`
pub const LOG_LEVEL: log::Level = log::Level::Info;

// DOM event the styler listens to on `window`
pub const SCROLL_EVENT: &str = "scroll";

// Id of the injected `<style>` element; injection is skipped if it exists
pub const STYLE_ELEMENT_ID: &str = "header-scroll-style";
