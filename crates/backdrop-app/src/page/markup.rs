//! Page markup rendered from the wallpaper catalog.

use backdrop_common::MenuCategory;
use backdrop_config::schema::WallpaperEntry;
use backdrop_config::BackdropConfig;

/// Render the full demo page.
pub fn render_index(config: &BackdropConfig) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<title>{}</title>\n",
        escape_html(&config.window.title)
    ));
    html.push_str("<link rel=\"stylesheet\" href=\"backdrop://styles.css\">\n");
    html.push_str("<script src=\"backdrop://app.js\" defer></script>\n");
    html.push_str("</head>\n<body>\n");

    render_navbar(&mut html, config);
    render_showcase(&mut html);

    html.push_str("</body>\n</html>\n");
    html
}

// =============================================================================
// NAVBAR
// =============================================================================

fn render_navbar(html: &mut String, config: &BackdropConfig) {
    html.push_str("<nav class=\"navbar\">\n<div class=\"navbar-container\">\n");

    // Hidden inputs: always available regardless of dropdown state
    html.push_str(
        "<input type=\"color\" id=\"color-input\" class=\"hidden-input\">\n\
         <input type=\"file\" id=\"file-input\" class=\"hidden-input\" accept=\"image/*,video/*\">\n",
    );

    render_category(
        html,
        MenuCategory::Static,
        "Static Wallpapers",
        config.wallpapers.entries(MenuCategory::Static),
    );
    render_category(
        html,
        MenuCategory::Live,
        "Live Wallpapers",
        config.wallpapers.entries(MenuCategory::Live),
    );
    render_category(
        html,
        MenuCategory::Solid,
        "Solid Colors",
        config.wallpapers.entries(MenuCategory::Solid),
    );

    // Custom upload has no dropdown
    html.push_str(
        "<div class=\"nav-item-wrapper\">\n\
         <button class=\"nav-button\" id=\"upload-button\">Custom Upload</button>\n\
         </div>\n",
    );

    html.push_str("</div>\n</nav>\n");
}

fn render_category(
    html: &mut String,
    category: MenuCategory,
    label: &str,
    entries: &[WallpaperEntry],
) {
    let cat = category.as_str();
    html.push_str(&format!(
        "<div class=\"nav-item-wrapper\" data-category=\"{cat}\">\n\
         <button class=\"nav-button\" data-category=\"{cat}\">{label}</button>\n\
         <div class=\"dropdown-menu\">\n"
    ));

    for entry in entries {
        let name = escape_html(&entry.name);
        let value = escape_html(&entry.value);
        match category {
            MenuCategory::Solid => {
                html.push_str(&format!(
                    "<button class=\"dropdown-item\" data-mode=\"solid\" data-value=\"{value}\">\
                     <span class=\"color-preview\" style=\"background-color: {value}\"></span>{name}</button>\n"
                ));
            }
            _ => {
                html.push_str(&format!(
                    "<button class=\"dropdown-item\" data-mode=\"{cat}\" data-value=\"{value}\">{name}</button>\n"
                ));
            }
        }
    }

    // The solid dropdown also offers the free-form color picker
    if category == MenuCategory::Solid {
        html.push_str(
            "<button class=\"dropdown-item\" id=\"color-picker-item\">\
             <span class=\"color-preview color-preview-any\"></span>Color Picker</button>\n",
        );
    }

    html.push_str("</div>\n</div>\n");
}

// =============================================================================
// SHOWCASE
// =============================================================================

fn render_showcase(html: &mut String) {
    html.push_str(
        r#"<header class="intro">
<h1>Component Library Demo</h1>
<p>Welcome to the component showcase</p>
</header>
<div class="bento-grid">
<div class="card">
<h2>Buttons</h2>
<div class="row">
<button class="btn btn-primary" id="count-button">Count: <span id="count-label">0</span></button>
<button class="btn btn-secondary">Secondary</button>
<button class="btn btn-primary">Primary</button>
</div>
</div>
<div class="card">
<h2>Input</h2>
<input class="input" id="text-input" placeholder="Type something...">
<p class="muted">Value: <span id="input-echo">(empty)</span></p>
</div>
<div class="card">
<h2>Badges</h2>
<div class="row">
<span class="badge">Default</span>
<span class="badge badge-success">Success</span>
<span class="badge badge-warning">Warning</span>
<span class="badge badge-error">Error</span>
<span class="badge badge-info">Info</span>
</div>
</div>
<div class="card">
<h2>Controls</h2>
<div class="control-row">
<label class="switch"><input type="checkbox" id="switch-input"><span class="slider"></span></label>
<span>Toggle Switch: <span id="switch-label">OFF</span></span>
</div>
<div class="control-row">
<input type="checkbox" class="checkbox" id="checkbox-input">
<span>Checkbox: <span id="checkbox-label">Unchecked</span></span>
</div>
</div>
<div class="card">
<h2>Alert</h2>
<div class="alert alert-info">This is an informational alert message.</div>
</div>
<div class="card">
<h2>Progress</h2>
<div class="progress"><div class="progress-fill" id="progress-fill"></div></div>
<p class="muted">Progress: <span id="progress-label">0%</span></p>
</div>
</div>
"#,
    );
}

// =============================================================================
// ESCAPING
// =============================================================================

/// Escape a string for HTML text and attribute contexts.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_config::schema::WallpaperEntry;

    #[test]
    fn renders_all_catalog_entries() {
        let html = render_index(&BackdropConfig::default());
        assert!(html.contains("Static Wallpapers"));
        assert!(html.contains("Live Wallpapers"));
        assert!(html.contains("Solid Colors"));
        assert!(html.contains("Ocean Waves"));
        assert!(html.contains("Abstract Flow"));
        assert!(html.contains("data-mode=\"solid\" data-value=\"#3b82f6\""));
        assert!(html.contains("Custom Upload"));
        assert!(html.contains("Color Picker"));
    }

    #[test]
    fn references_generated_assets() {
        let html = render_index(&BackdropConfig::default());
        assert!(html.contains("backdrop://styles.css"));
        assert!(html.contains("backdrop://app.js"));
    }

    #[test]
    fn upload_input_accepts_images_and_videos() {
        let html = render_index(&BackdropConfig::default());
        assert!(html.contains("accept=\"image/*,video/*\""));
    }

    #[test]
    fn catalog_entries_are_html_escaped() {
        let mut config = BackdropConfig::default();
        config.wallpapers.static_entries = vec![WallpaperEntry::new(
            "<script>alert(1)</script>",
            "url('https://x/\"evil\".jpg')",
        )];
        let html = render_index(&config);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("url(&#39;https://x/&quot;evil&quot;.jpg&#39;)"));
    }

    #[test]
    fn static_values_keep_css_reference_shape() {
        let html = render_index(&BackdropConfig::default());
        // url('...') survives as an escaped attribute value
        assert!(html.contains("data-value=\"url(&#39;https://images.unsplash.com"));
    }

    #[test]
    fn showcase_widgets_are_present() {
        let html = render_index(&BackdropConfig::default());
        for id in [
            "count-button",
            "text-input",
            "switch-input",
            "checkbox-input",
            "progress-fill",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(html.contains("badge-success"));
        assert!(html.contains("alert-info"));
    }

    #[test]
    fn window_title_is_escaped() {
        let mut config = BackdropConfig::default();
        config.window.title = "A <b>title</b>".into();
        let html = render_index(&config);
        assert!(html.contains("<title>A &lt;b&gt;title&lt;/b&gt;</title>"));
    }
}
