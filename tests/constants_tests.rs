// Host-side tests for the web glue constants and the shared defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use header_core::constants::*;
use header_core::{HeaderStyle, StylerConfig};

#[test]
fn web_constants_are_usable_in_the_dom() {
    assert_eq!(SCROLL_EVENT, "scroll");
    assert!(!STYLE_ELEMENT_ID.is_empty());
    assert!(!STYLE_ELEMENT_ID.chars().any(|c| c.is_ascii_whitespace()));
    assert!(LOG_LEVEL <= log::Level::Info);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shared_defaults_have_expected_values() {
    assert_eq!(SCROLL_THRESHOLD_PX, 80.0);
    assert_eq!(SCROLLED_CLASS, "scrolled");
    assert_eq!(HEADER_SELECTOR, "header");
    assert!(TRANSITION_SECS > 0.0);
    assert!(SHADOW_ALPHA > 0.0 && SHADOW_ALPHA <= 1.0);
}

#[test]
fn injected_stylesheet_targets_default_marker() {
    let cfg = StylerConfig::default();
    let css = HeaderStyle::default().to_css(&cfg.header_selector, &cfg.marker_class);
    assert!(css.contains("header.scrolled {"));
    assert!(css.contains("transition: background-color 0.3s ease, box-shadow 0.3s ease;"));
}
