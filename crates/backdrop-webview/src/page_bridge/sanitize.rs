//! Value sanitization for script injection.
//!
//! Color values only allow safe formats:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgba(r, g, b, a)` / `rgb(r, g, b)` with numeric arguments
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `import`, `;`, `}`, `{`, `<`, `>`

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS color value.
///
/// Accepts hex (`#rgb`, `#rrggbb`, etc.) and `rgb()`/`rgba()` with numeric args.
/// Rejects everything else, including named colors (to prevent injection).
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    // Check for injection patterns first
    check_injection_patterns(trimmed)?;

    // Hex color: #rgb, #rgba, #rrggbb, #rrggbbaa
    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    // rgba(r, g, b, a) or rgb(r, g, b)
    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Escape a value for embedding inside a single-quoted JS string literal.
pub fn escape_js_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "@import",
        "@charset",
        "behavior:",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    // Block structural characters that could escape CSS context
    for ch in [';', '{', '}', '<', '>'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

/// Validate a hex color string.
fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..]; // skip '#'

    // Must be 3, 4, 6, or 8 hex digits
    let valid_len = matches!(hex.len(), 3 | 4 | 6 | 8);
    if !valid_len {
        return Err(format!(
            "Invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

/// Validate an `rgb()` or `rgba()` function call.
fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();

    let expected_count = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected_count {
        return Err(format!(
            "Expected {expected_count} arguments in {}, got {}",
            if expected_count == 4 { "rgba()" } else { "rgb()" },
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "Non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Hex colors ---

    #[test]
    fn valid_hex_lengths() {
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#fffa").is_ok());
        assert!(validate_css_color("#3b82f6").is_ok());
        assert!(validate_css_color("#3b82f680").is_ok());
    }

    #[test]
    fn invalid_hex_wrong_length() {
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#fffff").is_err());
        assert!(validate_css_color("#fffffff").is_err());
    }

    #[test]
    fn invalid_hex_non_hex_chars() {
        assert!(validate_css_color("#gggggg").is_err());
        assert!(validate_css_color("#xyz").is_err());
    }

    // --- rgb/rgba ---

    #[test]
    fn valid_rgb_and_rgba() {
        assert!(validate_css_color("rgb(255, 0, 0)").is_ok());
        assert!(validate_css_color("rgba(0, 212, 255, 0.12)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,0.93)").is_ok());
    }

    #[test]
    fn invalid_rgb_arg_counts() {
        assert!(validate_css_color("rgba(0, 0, 0)").is_err());
        assert!(validate_css_color("rgb(0, 0)").is_err());
        assert!(validate_css_color("rgba(0, 0, 0, 0, 0)").is_err());
    }

    #[test]
    fn invalid_rgba_non_numeric() {
        assert!(validate_css_color("rgba(red, 0, 0, 1)").is_err());
    }

    // --- Injection attempts ---

    #[test]
    fn rejects_injection_patterns() {
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("url(https://evil.com)").is_err());
        assert!(validate_css_color("javascript:alert(1)").is_err());
        assert!(validate_css_color("red; background: url(evil)").is_err());
        assert!(validate_css_color("#fff } body { background: red").is_err());
        assert!(validate_css_color("@import url(evil.css)").is_err());
    }

    #[test]
    fn rejects_named_colors() {
        // Named colors are rejected because they could mask injection
        assert!(validate_css_color("red").is_err());
        assert!(validate_css_color("transparent").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_css_color("").is_err());
        assert!(validate_css_color("   ").is_err());
    }

    // --- JS escaping ---

    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(escape_js_string("url('x')"), "url(\\'x\\')");
        assert_eq!(escape_js_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn escape_handles_newlines() {
        assert_eq!(escape_js_string("a\nb\rc"), "a\\nb\\rc");
    }

    #[test]
    fn escape_leaves_plain_urls_alone() {
        let url = "https://www.pexels.com/download/video/3051490/";
        assert_eq!(escape_js_string(url), url);
    }
}
