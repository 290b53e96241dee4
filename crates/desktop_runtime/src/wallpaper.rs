//! Built-in wallpaper catalog generated from `catalog/wallpapers.toml`.

use std::sync::OnceLock;

use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/wallpaper_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WallpaperOption {
    pub id: String,
    pub name: String,
    pub src: String,
    pub thumbnail: String,
    /// Accent used for the desktop glow around the menu bar and dock.
    pub glow_color: String,
    #[serde(default)]
    pub default: bool,
}

/// Returns the catalog in file order.
pub fn wallpaper_catalog() -> &'static [WallpaperOption] {
    static CATALOG: OnceLock<Vec<WallpaperOption>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WALLPAPER_CATALOG_JSON)
            .expect("generated wallpaper catalog should parse")
    })
}

pub fn find_wallpaper(id: &str) -> Option<&'static WallpaperOption> {
    wallpaper_catalog().iter().find(|entry| entry.id == id)
}

/// Id of the entry marked `default` (the build script guarantees there is exactly one).
pub fn default_wallpaper_id() -> &'static str {
    let catalog = wallpaper_catalog();
    catalog
        .iter()
        .find(|entry| entry.default)
        .or_else(|| catalog.first())
        .map(|entry| entry.id.as_str())
        .unwrap_or_default()
}

/// Resolves the active selection, falling back to the default entry.
pub fn active_wallpaper(id: &str) -> Option<&'static WallpaperOption> {
    find_wallpaper(id).or_else(|| find_wallpaper(default_wallpaper_id()))
}
