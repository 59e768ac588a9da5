//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Backdrop Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Backdrop"
# width = 1280           # 320-7680
# height = 800           # 240-4320

[background]
# Background shown at startup. Never written back at runtime.
# mode = "live"          # static, live, solid
# value = "https://www.pexels.com/download/video/3051490/"

[background.video]
# loop = true
# muted = true
# autoplay = true

[logging]
# filter = "backdrop=info"

# Wallpaper catalog. Each category ships with five demo entries; defining
# any entry for a category replaces that category's defaults entirely.
# Files placed in the data directory's assets/ folder can be referenced
# as backdrop://assets/<file>.
#
# [[wallpapers.static]]
# name = "Mountains"
# value = "url('https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920')"
#
# [[wallpapers.live]]
# name = "Ocean Waves"
# value = "https://www.pexels.com/download/video/1918465/"
#
# [[wallpapers.solid]]
# name = "Blue"
# value = "#3b82f6"
"##
    .to_string()
}
