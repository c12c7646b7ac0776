//! Style rules keyed on the header tag and on tag + marker class.
//!
//! The rules are modelled as plain values so the web frontend can render them
//! into a `<style>` element and tests can check them without a browser.

use crate::constants::{
    SCROLLED_BACKGROUND_HEX, SCROLLED_TEXT_HEX, SHADOW_ALPHA, SHADOW_BLUR_PX, SHADOW_OFFSET_PX,
    TRANSITION_SECS, TRANSITION_TIMING,
};
use std::fmt;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hex(&'static str),
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => f.write_str(hex),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

// CSS lengths: zero is written unitless.
fn px(v: i64) -> String {
    if v == 0 {
        "0".to_string()
    } else {
        format!("{}px", v)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShadow {
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur: u32,
    pub color: Color,
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            px(self.offset_x as i64),
            px(self.offset_y as i64),
            px(self.blur as i64),
            self.color
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub secs: f32,
    pub timing: &'static str,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}s {}", self.property, self.secs, self.timing)
    }
}

/// Look of the header in its scrolled state, plus the transition into it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderStyle {
    pub background: Color,
    pub text: Color,
    pub shadow: BoxShadow,
    pub transition_secs: f32,
    pub transition_timing: &'static str,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            background: Color::Hex(SCROLLED_BACKGROUND_HEX),
            text: Color::Hex(SCROLLED_TEXT_HEX),
            shadow: BoxShadow {
                offset_x: SHADOW_OFFSET_PX.0,
                offset_y: SHADOW_OFFSET_PX.1,
                blur: SHADOW_BLUR_PX,
                color: Color::Rgba {
                    r: 0,
                    g: 0,
                    b: 0,
                    a: SHADOW_ALPHA,
                },
            },
            transition_secs: TRANSITION_SECS,
            transition_timing: TRANSITION_TIMING,
        }
    }
}

impl HeaderStyle {
    /// Properties animated when the marker class flips.
    pub fn transitions(&self) -> [Transition; 2] {
        ["background-color", "box-shadow"].map(|property| Transition {
            property,
            secs: self.transition_secs,
            timing: self.transition_timing,
        })
    }

    /// Render both rules: one on `selector`, one on each selector in the list
    /// compounded with `.marker`.
    pub fn to_css(&self, selector: &str, marker: &str) -> String {
        let transitions = self
            .transitions()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut css = String::new();
        _ = writeln!(css, "{} {{", selector);
        _ = writeln!(css, "    transition: {};", transitions);
        _ = writeln!(css, "}}");
        _ = writeln!(css);
        _ = writeln!(css, "{} {{", marked_selector(selector, marker));
        _ = writeln!(css, "    background-color: {};", self.background);
        _ = writeln!(css, "    color: {};", self.text);
        _ = writeln!(css, "    box-shadow: {};", self.shadow);
        _ = writeln!(css, "}}");
        css
    }
}

/// Append `.marker` to every selector of a comma-separated list. Commas nested
/// in parentheses, attribute brackets or quotes do not split the list.
pub fn marked_selector(selector: &str, marker: &str) -> String {
    split_selector_list(selector)
        .into_iter()
        .map(|part| format!("{}.{}", part, marker))
        .collect::<Vec<_>>()
        .join(", ")
}

fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}
