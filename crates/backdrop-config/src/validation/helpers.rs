//! Shared validation helpers used by all domain validators.

use backdrop_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Whether a string is an acceptable color value: `#rrggbb`/`#rrggbbaa` hex
/// or `rgba(r,g,b,a)` with numeric components.
pub(crate) fn is_css_color(value: &str) -> bool {
    Color::from_hex(value).is_some() || Color::from_rgba_string(value).is_some()
}
