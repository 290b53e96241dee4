use system_ui::{AppIcon, IconSize};

use super::*;
use crate::{
    apps::ShortcutRecord,
    icon_layout::{default_icon_position, IconDrag},
};

#[component]
/// A free-form draggable desktop shortcut.
///
/// Position and drag state are local to the icon; they reset to the default grid on reload.
/// Double-click or Enter calls `on_activate` and does nothing else.
pub(super) fn DesktopIcon(
    shortcut: ShortcutRecord,
    index: usize,
    surface_width: i32,
    on_activate: Callback<()>,
) -> impl IntoView {
    let position = create_rw_signal(default_icon_position(index, surface_width));
    let drag = create_rw_signal(None::<IconDrag>);
    let dragging = create_rw_signal(false);
    let selected = create_rw_signal(false);

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.stop_propagation();
        selected.set(true);
        drag.set(Some(IconDrag::begin(
            pointer_from_pointer_event(&ev),
            position.get_untracked(),
        )));
    };
    let on_pointermove = move |ev: web_sys::PointerEvent| {
        let Some(mut session) = drag.get_untracked() else {
            return;
        };
        if let Some(next) = session.update(pointer_from_pointer_event(&ev), desktop_surface_bounds()) {
            position.set(next);
            dragging.set(true);
        }
        drag.set(Some(session));
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if let Some(session) = drag.get_untracked() {
            drag.set(None);
            if session.end() {
                dragging.set(false);
            }
        }
    };

    view! {
        <button
            type="button"
            class="ui-desktop-icon"
            role="listitem"
            aria-label=shortcut.label
            style=move || {
                let p = position.get();
                format!("left:{}px;top:{}px;", p.x, p.y)
            }
            data-ui-primitive="true"
            data-ui-kind="desktop-icon"
            data-ui-selected=move || selected.get().to_string()
            data-ui-dragging=move || dragging.get().to_string()
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:blur=move |_| selected.set(false)
            on:dblclick=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                on_activate.call(());
            }
            on:keydown=move |ev: ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_activate.call(());
                }
            }
        >
            <AppIcon src=shortcut.icon size=IconSize::Lg />
            <span class="ui-desktop-icon-label">{shortcut.label}</span>
        </button>
    }
}
