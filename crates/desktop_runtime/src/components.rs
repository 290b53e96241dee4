//! Desktop shell UI composition and interaction surfaces.

mod desktop_icon;
mod dock;
mod menu_bar;
mod wallpaper_picker;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopIconLayer, DesktopRoot, DesktopWindowLayer};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{desktop_icon::DesktopIcon, dock::DesktopDock, menu_bar::DesktopMenuBar, window::DesktopWindow};
use crate::{
    apps,
    icon_layout::SurfaceBounds,
    model::{PointerPosition, WindowRect},
    reducer::DesktopAction,
    wallpaper,
};

pub use self::wallpaper_picker::WallpaperPicker;
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const MENU_BAR_HEIGHT_PX: i32 = 28;
const DOCK_HEIGHT_PX: i32 = 76;

/// Area between the menu bar and the dock, in window-layer coordinates.
pub(crate) fn desktop_viewport_rect() -> WindowRect {
    let chrome = MENU_BAR_HEIGHT_PX + DOCK_HEIGHT_PX;

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1280);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(800);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - chrome).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 800 - chrome,
    }
}

fn desktop_surface_bounds() -> SurfaceBounds {
    let viewport = desktop_viewport_rect();
    SurfaceBounds {
        w: viewport.w,
        h: viewport.h,
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary mouse button, or the primary touch/pen contact.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
fn DesktopWallpaper() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| wallpaper::active_wallpaper(&desktop.wallpaper_id))
    });

    view! {
        {move || {
            active
                .get()
                .map(|option| {
                    view! {
                        <img
                            data-ui-slot="wallpaper-layer"
                            data-ui-kind="wallpaper-layer"
                            src=option.src.clone()
                            alt=""
                            draggable="false"
                        />
                    }
                })
        }}
    }
}

#[component]
/// Renders the full desktop shell: menu bar, wallpaper, icons, windows, and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.with_untracked(|desktop| desktop.menu_open.is_some()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_pointer_end =
        Callback::new(move |_: web_sys::PointerEvent| end_active_pointer_interaction(runtime));
    let close_menu = Callback::new(move |_: ev::MouseEvent| {
        if state.with_untracked(|desktop| desktop.menu_open.is_some()) {
            runtime.dispatch_action(DesktopAction::CloseMenu);
        }
    });

    let wallpaper_id = Signal::derive(move || state.with(|desktop| desktop.wallpaper_id.clone()));
    let glow_style = Signal::derive(move || {
        state.with(|desktop| {
            wallpaper::active_wallpaper(&desktop.wallpaper_id)
                .map(|option| format!("--desktop-glow:{};", option.glow_color))
                .unwrap_or_default()
        })
    });
    let icon_surface_width = desktop_surface_bounds().w;

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            style=glow_style
            wallpaper=wallpaper_id
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
            on_click=close_menu
        >
            <DesktopMenuBar />
            <DesktopBackdrop>
                <DesktopWallpaper />
                <DesktopIconLayer>
                    {apps::desktop_shortcuts()
                        .iter()
                        .enumerate()
                        .map(|(index, shortcut)| {
                            let target = shortcut.target_id();
                            let shortcut_id = shortcut.id;
                            let on_activate = Callback::new(move |_: ()| match target {
                                Some(id) => runtime.dispatch_action(DesktopAction::ActivateWindow { id }),
                                None => logging::warn!("desktop shortcut `{shortcut_id}` has no window"),
                            });
                            view! {
                                <DesktopIcon
                                    shortcut=*shortcut
                                    index=index
                                    surface_width=icon_surface_width
                                    on_activate=on_activate
                                />
                            }
                        })
                        .collect_view()}
                </DesktopIconLayer>
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                        key=|id| *id
                        let:id
                    >
                        <DesktopWindow id=id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <DesktopDock />
        </DesktopRoot>
    }
}
