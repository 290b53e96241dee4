//! Desktop state, window records, and pointer-session types.

use std::fmt;
use std::str::FromStr;

use desktop_app_portfolio::ContactLink;
use thiserror::Error;

use crate::wallpaper;

pub const DEFAULT_WINDOW_WIDTH: i32 = 560;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identity of a window kind. At most one window per id is open at a time.
pub enum AppId {
    About,
    Projects,
    Blog,
    Chat,
    Contact,
    Wallpapers,
}

impl AppId {
    pub const ALL: [AppId; 6] = [
        AppId::About,
        AppId::Projects,
        AppId::Blog,
        AppId::Chat,
        AppId::Contact,
        AppId::Wallpapers,
    ];

    /// Stable catalog and URL key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Blog => "blog",
            Self::Chat => "chat",
            Self::Contact => "contact",
            Self::Wallpapers => "wallpapers",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window key `{0}`")]
pub struct UnknownAppId(pub String);

impl FromStr for AppId {
    type Err = UnknownAppId;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.trim() {
            "about" => Ok(Self::About),
            "projects" => Ok(Self::Projects),
            "blog" => Ok(Self::Blog),
            "chat" => Ok(Self::Chat),
            "contact" => Ok(Self::Contact),
            "wallpapers" => Ok(Self::Wallpapers),
            other => Err(UnknownAppId(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Content mounted inside a window, with the props each view needs.
pub enum WindowContent {
    About,
    Projects { highlight_featured: bool },
    Blog,
    Chat { greeting: String },
    Contact { email: String, links: Vec<ContactLink> },
    Wallpapers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn position(self) -> WindowPosition {
        WindowPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(self) -> WindowSize {
        WindowSize {
            w: self.w,
            h: self.h,
        }
    }

    pub fn with_position(self, position: WindowPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    pub fn with_size(self, size: WindowSize) -> Self {
        Self {
            w: size.w,
            h: size.h,
            ..self
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 96,
            y: 56,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub content: WindowContent,
    pub rect: WindowRect,
    /// Geometry to return to when leaving the maximized state.
    pub restore_rect: Option<WindowRect>,
    /// Paint order; equals the record's stack position plus one.
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Drop-down menus hosted by the menu bar.
pub enum MenuId {
    Brand,
    Windows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    /// Open windows in paint order, bottom first.
    pub windows: Vec<WindowRecord>,
    pub wallpaper_id: String,
    pub menu_open: Option<MenuId>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            wallpaper_id: wallpaper::default_wallpaper_id().to_string(),
            menu_open: None,
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn is_open(&self, id: AppId) -> bool {
        self.window(id).is_some()
    }

    pub fn focused_window_id(&self) -> Option<AppId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn focused_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_focused)
    }

    pub fn top_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything needed to open a window that is not yet on the desktop.
pub struct OpenWindowRequest {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub content: WindowContent,
    pub rect: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer sessions for window drag and resize. Lives beside the desktop state.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Drops any session that targets `id`.
    pub fn forget(&mut self, id: AppId) {
        if self.dragging.as_ref().is_some_and(|s| s.window_id == id) {
            self.dragging = None;
        }
        if self.resizing.as_ref().is_some_and(|s| s.window_id == id) {
            self.resizing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_id_keys_round_trip_through_from_str() {
        for id in AppId::ALL {
            assert_eq!(id.as_str().parse::<AppId>(), Ok(id));
        }
        assert_eq!(
            "settings".parse::<AppId>(),
            Err(UnknownAppId("settings".to_string()))
        );
    }

    #[test]
    fn rect_helpers_split_position_and_size() {
        let rect = WindowRect {
            x: 10,
            y: 20,
            w: 300,
            h: 200,
        };
        assert_eq!(rect.position(), WindowPosition { x: 10, y: 20 });
        assert_eq!(rect.size(), WindowSize { w: 300, h: 200 });
        assert_eq!(
            rect.with_position(WindowPosition { x: -4, y: 9 }),
            WindowRect {
                x: -4,
                y: 9,
                w: 300,
                h: 200
            }
        );
        assert_eq!(rect.clamped_min(320, 100).w, 320);
    }
}
