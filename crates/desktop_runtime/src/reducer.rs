//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    apps,
    model::{
        AppId, DesktopState, DragSession, InteractionState, MenuId, OpenWindowRequest,
        PointerPosition, ResizeEdge, ResizeSession, WindowPosition, WindowRecord, WindowRect,
        WindowSize,
    },
    wallpaper,
    window_manager::{
        focus_window_internal, move_window, normalize_window_stack, pin_resized_rect,
        resize_rect, resize_window, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or raise it when a window with the same id is already open.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        id: AppId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        id: AppId,
    },
    /// Move a window's top-left corner.
    MoveWindow {
        /// Window to move.
        id: AppId,
        /// New top-left corner in desktop coordinates.
        position: WindowPosition,
    },
    /// Resize a window.
    ResizeWindow {
        /// Window to resize.
        id: AppId,
        /// Requested size; raised to the minimum window size if smaller.
        size: WindowSize,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        id: AppId,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        id: AppId,
    },
    /// Maximize into `viewport`, or restore the saved geometry if already maximized.
    ToggleMaximize {
        /// Window to toggle.
        id: AppId,
        /// Desktop area available to windows.
        viewport: WindowRect,
    },
    /// Dock and menu activation: open from the registry, restore, or focus.
    ActivateWindow {
        /// Window to activate.
        id: AppId,
    },
    /// Close every open window.
    CloseAllWindows,
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Select a wallpaper from the catalog. Unknown ids are ignored.
    SetWallpaper {
        /// Catalog wallpaper id.
        wallpaper_id: String,
    },
    /// Open `menu`, or close it when it is already open.
    ToggleMenu {
        /// Menu bar drop-down to toggle.
        menu: MenuId,
    },
    /// Close any open menu bar drop-down.
    CloseMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// UI-only side-effect intents emitted by [`reduce_desktop`].
pub enum RuntimeEffect {
    /// Move DOM focus into the window that just became focused.
    FocusWindowInput(AppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This is the only place desktop state changes. Actions that reference windows which are not open
/// are no-ops.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let id = req.id;
            if !state.is_open(id) {
                state.windows.push(WindowRecord {
                    id,
                    title: req.title,
                    icon: req.icon,
                    content: req.content,
                    rect: req.rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
                    restore_rect: None,
                    z_index: 0,
                    is_focused: false,
                    minimized: false,
                    maximized: false,
                });
            }
            focus_window_internal(state, id);
            state.menu_open = None;
            effects.push(RuntimeEffect::FocusWindowInput(id));
        }
        DesktopAction::CloseWindow { id } => {
            state.windows.retain(|w| w.id != id);
            interaction.forget(id);
        }
        DesktopAction::FocusWindow { id } => {
            if focus_window_internal(state, id) {
                state.menu_open = None;
                effects.push(RuntimeEffect::FocusWindowInput(id));
            }
        }
        DesktopAction::MoveWindow { id, position } => {
            move_window(state, id, position);
        }
        DesktopAction::ResizeWindow { id, size } => {
            resize_window(state, id, size);
        }
        DesktopAction::MinimizeWindow { id } => {
            if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
                window.minimized = true;
                window.is_focused = false;
                interaction.forget(id);
            }
        }
        DesktopAction::RestoreWindow { id } => {
            if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
                if window.maximized {
                    if let Some(restore_rect) = window.restore_rect.take() {
                        window.rect = restore_rect;
                    }
                    window.maximized = false;
                }
                focus_window_internal(state, id);
                effects.push(RuntimeEffect::FocusWindowInput(id));
            }
        }
        DesktopAction::ToggleMaximize { id, viewport } => {
            if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
                if window.maximized {
                    if let Some(restore_rect) = window.restore_rect.take() {
                        window.rect = restore_rect;
                    }
                    window.maximized = false;
                } else {
                    window.restore_rect = Some(window.rect);
                    window.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                    window.maximized = true;
                }
                interaction.forget(id);
                focus_window_internal(state, id);
                effects.push(RuntimeEffect::FocusWindowInput(id));
            }
        }
        DesktopAction::ActivateWindow { id } => {
            let action = if state.is_open(id) {
                DesktopAction::FocusWindow { id }
            } else {
                DesktopAction::OpenWindow(apps::default_open_request(id))
            };
            effects.extend(reduce_desktop(state, interaction, action));
            state.menu_open = None;
        }
        DesktopAction::CloseAllWindows => {
            state.windows.clear();
            state.menu_open = None;
            *interaction = InteractionState::default();
        }
        DesktopAction::BeginMove { id, pointer } => {
            if let Some(rect_start) = state.window(id).filter(|w| !w.maximized).map(|w| w.rect) {
                focus_window_internal(state, id);
                interaction.dragging = Some(DragSession {
                    window_id: id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let position = session.rect_start.offset(dx, dy).position();
                if !move_window(state, session.window_id, position) {
                    interaction.dragging = None;
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize { id, edge, pointer } => {
            if let Some(rect_start) = state.window(id).filter(|w| !w.maximized).map(|w| w.rect) {
                focus_window_internal(state, id);
                interaction.resizing = Some(ResizeSession {
                    window_id: id,
                    edge,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let rect = pin_resized_rect(
                    session.rect_start,
                    session.edge,
                    resize_rect(session.rect_start, session.edge, dx, dy),
                );
                let id = session.window_id;
                if resize_window(state, id, rect.size()) {
                    move_window(state, id, rect.position());
                } else {
                    interaction.resizing = None;
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            if wallpaper::find_wallpaper(&wallpaper_id).is_some() {
                state.wallpaper_id = wallpaper_id;
            }
        }
        DesktopAction::ToggleMenu { menu } => {
            state.menu_open = if state.menu_open == Some(menu) {
                None
            } else {
                Some(menu)
            };
        }
        DesktopAction::CloseMenu => {
            state.menu_open = None;
        }
    }

    normalize_window_stack(state);
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::default_open_request;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: AppId) {
        reduce(
            state,
            interaction,
            DesktopAction::OpenWindow(default_open_request(id)),
        );
    }

    fn window(state: &DesktopState, id: AppId) -> &WindowRecord {
        state.window(id).expect("window open")
    }

    fn assert_focus_invariant(state: &DesktopState) {
        let focused: Vec<_> = state.windows.iter().filter(|w| w.is_focused).collect();
        assert!(focused.len() <= 1, "more than one focused window");
        let top_visible = state.windows.iter().rev().find(|w| !w.minimized);
        assert_eq!(
            focused.first().map(|w| w.id),
            top_visible.map(|w| w.id),
            "focus must sit on the topmost visible window"
        );
        for (idx, w) in state.windows.iter().enumerate() {
            assert_eq!(w.z_index, (idx + 1) as u32);
        }
    }

    #[test]
    fn opening_an_unopened_id_adds_exactly_one_focused_record() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(default_open_request(AppId::About)),
        );

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, AppId::About);
        assert!(state.windows[0].is_focused);
        assert_eq!(state.windows[0].z_index, 1);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::About)]);
    }

    #[test]
    fn reopening_an_open_id_raises_it_without_duplicating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Blog);
        let before = state.windows.len();
        open(&mut state, &mut interaction, AppId::About);

        assert_eq!(state.windows.len(), before);
        assert_eq!(window(&state, AppId::About).z_index, state.top_z_index());
        assert!(window(&state, AppId::About).z_index > window(&state, AppId::Blog).z_index);
        assert_eq!(state.focused_window_id(), Some(AppId::About));
        assert_focus_invariant(&state);
    }

    #[test]
    fn reopening_keeps_existing_geometry_and_content() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Chat);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                id: AppId::Chat,
                position: WindowPosition { x: 5, y: 6 },
            },
        );
        let mut req = default_open_request(AppId::Chat);
        req.title = "Other title".to_string();
        reduce(&mut state, &mut interaction, DesktopAction::OpenWindow(req));

        let chat = window(&state, AppId::Chat);
        assert_eq!(chat.rect.position(), WindowPosition { x: 5, y: 6 });
        assert_eq!(chat.title, default_open_request(AppId::Chat).title);
    }

    #[test]
    fn reopening_a_minimized_window_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Projects);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                id: AppId::Projects,
            },
        );
        assert!(window(&state, AppId::Projects).minimized);

        open(&mut state, &mut interaction, AppId::Projects);
        assert!(!window(&state, AppId::Projects).minimized);
        assert!(window(&state, AppId::Projects).is_focused);
    }

    #[test]
    fn closing_an_unopened_id_is_a_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        let before = state.clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { id: AppId::Chat },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn closing_the_focused_window_passes_focus_down_the_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Blog);
        open(&mut state, &mut interaction, AppId::Chat);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { id: AppId::Chat },
        );

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(AppId::Blog));
        assert_focus_invariant(&state);
    }

    #[test]
    fn open_a_b_then_a_leaves_a_on_top() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Blog);
        open(&mut state, &mut interaction, AppId::About);

        let top = state
            .windows
            .iter()
            .max_by_key(|w| w.z_index)
            .map(|w| w.id);
        assert_eq!(top, Some(AppId::About));
    }

    #[test]
    fn focus_raises_window_and_ignores_unopened_ids() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Blog);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { id: AppId::About },
        );
        assert_eq!(state.focused_window_id(), Some(AppId::About));
        assert_eq!(window(&state, AppId::About).z_index, 2);

        let before = state.clone();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { id: AppId::Contact },
        );
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn moving_or_resizing_a_closed_id_leaves_state_unchanged() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        let before = state.clone();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                id: AppId::Blog,
                position: WindowPosition { x: 1, y: 2 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                id: AppId::Blog,
                size: WindowSize { w: 900, h: 700 },
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn move_is_not_clamped_and_resize_enforces_minimum() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                id: AppId::About,
                position: WindowPosition { x: -400, y: 5000 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                id: AppId::About,
                size: WindowSize { w: 10, h: 900 },
            },
        );

        let rect = window(&state, AppId::About).rect;
        assert_eq!(rect.position(), WindowPosition { x: -400, y: 5000 });
        assert_eq!(
            rect.size(),
            WindowSize {
                w: MIN_WINDOW_WIDTH,
                h: 900
            }
        );
    }

    #[test]
    fn drag_session_moves_window_by_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Blog);
        open(&mut state, &mut interaction, AppId::About);
        let original = window(&state, AppId::Blog).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                id: AppId::Blog,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.focused_window_id(), Some(AppId::Blog));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        let moved = window(&state, AppId::Blog).rect;
        assert_eq!(moved, original.offset(25, 40));

        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_session_from_the_west_edge_keeps_the_east_edge() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Chat);
        let start = window(&state, AppId::Chat).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                id: AppId::Chat,
                edge: ResizeEdge::West,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 2000, y: 0 },
            },
        );

        let rect = window(&state, AppId::Chat).rect;
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.x + rect.w, start.x + start.w);
        reduce(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn closing_a_dragged_window_ends_its_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                id: AppId::About,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { id: AppId::About },
        );

        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn minimize_moves_focus_and_restore_brings_it_back() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Blog);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { id: AppId::Blog },
        );
        assert!(window(&state, AppId::Blog).minimized);
        assert!(!window(&state, AppId::Blog).is_focused);
        assert_eq!(state.focused_window_id(), Some(AppId::About));
        assert_focus_invariant(&state);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { id: AppId::Blog },
        );
        assert!(!window(&state, AppId::Blog).minimized);
        assert_eq!(state.focused_window_id(), Some(AppId::Blog));
        assert_focus_invariant(&state);
    }

    #[test]
    fn minimizing_every_window_leaves_nothing_focused() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { id: AppId::About },
        );

        assert_eq!(state.focused_window_id(), None);
    }

    #[test]
    fn toggle_maximize_fills_viewport_and_restores_previous_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 700,
        };
        open(&mut state, &mut interaction, AppId::Projects);
        let original = window(&state, AppId::Projects).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                id: AppId::Projects,
                viewport,
            },
        );
        let maximized = window(&state, AppId::Projects);
        assert!(maximized.maximized);
        assert_eq!(maximized.rect, viewport);
        assert_eq!(maximized.restore_rect, Some(original));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                id: AppId::Projects,
                viewport,
            },
        );
        let restored = window(&state, AppId::Projects);
        assert!(!restored.maximized);
        assert_eq!(restored.rect, original);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn moving_a_maximized_window_returns_it_to_floating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                id: AppId::About,
                viewport: WindowRect {
                    x: 0,
                    y: 0,
                    w: 1000,
                    h: 600,
                },
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                id: AppId::About,
                position: WindowPosition { x: 40, y: 40 },
            },
        );

        let about = window(&state, AppId::About);
        assert!(!about.maximized);
        assert_eq!(about.restore_rect, None);
        assert_eq!(about.rect.position(), WindowPosition { x: 40, y: 40 });
    }

    #[test]
    fn drag_does_not_start_on_a_maximized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                id: AppId::About,
                viewport: WindowRect {
                    x: 0,
                    y: 0,
                    w: 1000,
                    h: 600,
                },
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                id: AppId::About,
                pointer: PointerPosition { x: 3, y: 3 },
            },
        );

        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn activate_opens_from_registry_then_restores_then_focuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow { id: AppId::Contact },
        );
        assert_eq!(
            window(&state, AppId::Contact).content,
            default_open_request(AppId::Contact).content
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { id: AppId::Contact },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow { id: AppId::Contact },
        );
        assert!(!window(&state, AppId::Contact).minimized);

        open(&mut state, &mut interaction, AppId::About);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow { id: AppId::Contact },
        );
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(AppId::Contact));
    }

    #[test]
    fn set_wallpaper_accepts_catalog_ids_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let initial = state.wallpaper_id.clone();
        let other = wallpaper::wallpaper_catalog()
            .iter()
            .find(|w| w.id != initial)
            .map(|w| w.id.clone())
            .expect("catalog has more than one wallpaper");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "does-not-exist".to_string(),
            },
        );
        assert_eq!(state.wallpaper_id, initial);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: other.clone(),
            },
        );
        assert_eq!(state.wallpaper_id, other);
    }

    #[test]
    fn menus_toggle_and_close_on_window_activity() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::Brand,
            },
        );
        assert_eq!(state.menu_open, Some(MenuId::Brand));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::Windows,
            },
        );
        assert_eq!(state.menu_open, Some(MenuId::Windows));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::Windows,
            },
        );
        assert_eq!(state.menu_open, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: MenuId::Brand,
            },
        );
        open(&mut state, &mut interaction, AppId::About);
        assert_eq!(state.menu_open, None);
    }

    #[test]
    fn close_all_windows_clears_stack_and_sessions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Chat);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                id: AppId::Chat,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        reduce(&mut state, &mut interaction, DesktopAction::CloseAllWindows);

        assert!(state.windows.is_empty());
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn open_enforces_minimum_window_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mut req = default_open_request(AppId::About);
        req.rect = WindowRect {
            x: 0,
            y: 0,
            w: 50,
            h: 50,
        };

        reduce(&mut state, &mut interaction, DesktopAction::OpenWindow(req));

        assert_eq!(
            window(&state, AppId::About).rect.size(),
            WindowSize {
                w: MIN_WINDOW_WIDTH,
                h: MIN_WINDOW_HEIGHT
            }
        );
    }
}
