//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{AppId, DesktopState, ResizeEdge, WindowPosition, WindowRect, WindowSize};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 280;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 180;

/// Focuses and raises `id`, un-minimizing it, so it becomes the top focused window.
///
/// Returns `false` when the window is not open.
pub fn focus_window_internal(state: &mut DesktopState, id: AppId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused && !w.minimized)
            .unwrap_or(false);
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Renumbers z-order from stack position and re-establishes the focus invariant.
///
/// After this runs at most one window is focused, minimized windows are never focused, and if no
/// window claimed focus the topmost visible one receives it.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(last_visible) = state.windows.iter_mut().rev().find(|w| !w.minimized) {
            last_visible.is_focused = true;
        }
    }
}

/// Moves `id` to `position`. A maximized window drops back to its floating state first.
pub fn move_window(state: &mut DesktopState, id: AppId, position: WindowPosition) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == id) else {
        return false;
    };
    if window.maximized {
        window.maximized = false;
        window.restore_rect = None;
    }
    window.rect = window.rect.with_position(position);
    true
}

/// Applies a new size to `id`, never below the minimum window size.
pub fn resize_window(state: &mut DesktopState, id: AppId, size: WindowSize) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == id) else {
        return false;
    };
    if window.maximized {
        window.maximized = false;
        window.restore_rect = None;
    }
    window.rect = window
        .rect
        .with_size(size)
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    true
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

/// Clamps a west/north edge drag so shrinking below the minimum pins the opposite edge.
pub fn pin_resized_rect(start: WindowRect, edge: ResizeEdge, resized: WindowRect) -> WindowRect {
    let clamped = resized.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    let moves_west = matches!(
        edge,
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
    );
    let moves_north = matches!(
        edge,
        ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
    );
    WindowRect {
        x: if moves_west {
            start.x + start.w - clamped.w
        } else {
            clamped.x
        },
        y: if moves_north {
            start.y + start.h - clamped.h
        } else {
            clamped.y
        },
        ..clamped
    }
}
