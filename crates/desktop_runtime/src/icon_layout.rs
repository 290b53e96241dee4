//! Desktop icon placement and free-form drag math.
//!
//! Icon positions are presentation state owned by each icon component; nothing here touches the
//! desktop store.

use crate::model::PointerPosition;

/// Width of one icon grid cell.
pub const ICON_CELL_WIDTH: i32 = 96;
/// Height of one icon grid cell.
pub const ICON_CELL_HEIGHT: i32 = 104;
/// Gap between the surface edge and the first row/column.
pub const ICON_MARGIN: i32 = 16;
/// Pointer travel (px, per axis) before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Size of the surface icons are constrained to.
pub struct SurfaceBounds {
    pub w: i32,
    pub h: i32,
}

/// Default placement: fill rows left to right, wrapping when the surface runs out of width.
pub fn default_icon_position(index: usize, surface_width: i32) -> IconPosition {
    let usable = (surface_width - 2 * ICON_MARGIN).max(ICON_CELL_WIDTH);
    let columns = (usable / ICON_CELL_WIDTH).max(1) as usize;
    let column = (index % columns) as i32;
    let row = (index / columns) as i32;
    IconPosition {
        x: ICON_MARGIN + column * ICON_CELL_WIDTH,
        y: ICON_MARGIN + row * ICON_CELL_HEIGHT,
    }
}

/// Keeps a full icon cell inside `surface`. A surface smaller than a cell pins to the origin.
pub fn clamp_icon_position(position: IconPosition, surface: SurfaceBounds) -> IconPosition {
    let max_x = (surface.w - ICON_CELL_WIDTH).max(0);
    let max_y = (surface.h - ICON_CELL_HEIGHT).max(0);
    IconPosition {
        x: position.x.clamp(0, max_x),
        y: position.y.clamp(0, max_y),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One press-move-release gesture on a desktop icon.
pub struct IconDrag {
    pointer_start: PointerPosition,
    origin: IconPosition,
    dragging: bool,
}

impl IconDrag {
    pub fn begin(pointer: PointerPosition, origin: IconPosition) -> Self {
        Self {
            pointer_start: pointer,
            origin,
            dragging: false,
        }
    }

    /// Returns the icon position for `pointer`, or `None` while still under the drag threshold.
    pub fn update(&mut self, pointer: PointerPosition, surface: SurfaceBounds) -> Option<IconPosition> {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        if !self.dragging && dx.abs() < DRAG_THRESHOLD_PX && dy.abs() < DRAG_THRESHOLD_PX {
            return None;
        }
        self.dragging = true;
        Some(clamp_icon_position(
            IconPosition {
                x: self.origin.x + dx,
                y: self.origin.y + dy,
            },
            surface,
        ))
    }

    /// Finishes the gesture; `true` when it moved the icon rather than being a click.
    pub fn end(self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SURFACE: SurfaceBounds = SurfaceBounds { w: 800, h: 600 };

    #[test]
    fn default_layout_fills_a_row_then_wraps() {
        // (400 - 32) / 96 = 3 columns
        assert_eq!(default_icon_position(0, 400), IconPosition { x: 16, y: 16 });
        assert_eq!(default_icon_position(2, 400), IconPosition { x: 208, y: 16 });
        assert_eq!(default_icon_position(3, 400), IconPosition { x: 16, y: 120 });
    }

    #[test]
    fn default_layout_keeps_one_column_on_tiny_surfaces() {
        assert_eq!(default_icon_position(0, 50), IconPosition { x: 16, y: 16 });
        assert_eq!(default_icon_position(1, 50), IconPosition { x: 16, y: 120 });
    }

    #[test]
    fn small_pointer_jitter_is_not_a_drag() {
        let mut drag = IconDrag::begin(PointerPosition { x: 100, y: 100 }, IconPosition::default());
        assert_eq!(drag.update(PointerPosition { x: 102, y: 97 }, SURFACE), None);
        assert!(!drag.end());
    }

    #[test]
    fn drag_follows_pointer_and_clamps_to_surface() {
        let origin = IconPosition { x: 16, y: 16 };
        let mut drag = IconDrag::begin(PointerPosition { x: 20, y: 20 }, origin);

        assert_eq!(
            drag.update(PointerPosition { x: 70, y: 45 }, SURFACE),
            Some(IconPosition { x: 66, y: 41 })
        );
        assert_eq!(
            drag.update(PointerPosition { x: -500, y: 5000 }, SURFACE),
            Some(IconPosition {
                x: 0,
                y: SURFACE.h - ICON_CELL_HEIGHT
            })
        );
        // Once dragging, moving back under the threshold still reports positions.
        assert_eq!(
            drag.update(PointerPosition { x: 21, y: 20 }, SURFACE),
            Some(IconPosition { x: 17, y: 16 })
        );
        assert!(drag.end());
    }
}
