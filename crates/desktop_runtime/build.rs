use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WallpaperEntry {
    id: String,
    name: String,
    src: String,
    thumbnail: String,
    glow_color: String,
    #[serde(default)]
    default: bool,
}

#[derive(Debug, Deserialize)]
struct WallpaperCatalog {
    wallpaper: Vec<WallpaperEntry>,
}

fn validate(catalog: &WallpaperCatalog, path: &str) {
    if catalog.wallpaper.is_empty() {
        panic!("wallpaper catalog {path} is empty");
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.wallpaper {
        if entry.id.trim().is_empty() {
            panic!("wallpaper catalog {path} has an entry with an empty id");
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate wallpaper id `{}` in {path}", entry.id);
        }
        if !entry.glow_color.starts_with('#') {
            panic!(
                "wallpaper `{}` in {path}: glow_color must be a hex color, found `{}`",
                entry.id, entry.glow_color
            );
        }
    }

    let defaults = catalog.wallpaper.iter().filter(|entry| entry.default).count();
    if defaults != 1 {
        panic!("wallpaper catalog {path} must mark exactly one default, found {defaults}");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("wallpapers.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: WallpaperCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog.wallpaper).expect("serialize wallpaper catalog");
    let generated = format!(
        "/// Build-time generated wallpaper catalog JSON.\n\
pub const WALLPAPER_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("wallpaper_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
