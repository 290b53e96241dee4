use system_ui::{
    AppIcon, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use super::*;
use crate::{
    effect_executor::window_frame_dom_id,
    model::{AppId, ResizeEdge},
};

#[component]
pub(super) fn DesktopWindow(id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.with(|desktop| desktop.window(id).cloned()));
    let flag = move |read: fn(&crate::model::WindowRecord) -> bool| {
        Signal::derive(move || window.with(|w| w.as_ref().map(read).unwrap_or(false)))
    };
    let focused = flag(|w| w.is_focused);
    let minimized = flag(|w| w.minimized);
    let maximized = flag(|w| w.maximized);
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let style = Signal::derive(move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        w.rect.x, w.rect.y, w.rect.w, w.rect.h, w.z_index
                    )
                })
                .unwrap_or_default()
        })
    });
    let icon = window.with_untracked(|w| w.as_ref().map(|w| w.icon.clone()).unwrap_or_default());
    // Content mounts once; geometry changes must not remount the view.
    let contents = runtime.state.with_untracked(|desktop| {
        desktop
            .window(id)
            .map(|w| crate::apps::render_window_contents(&w.content))
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let should_focus = window.with_untracked(|w| {
            w.as_ref()
                .map(|w| !w.is_focused || w.minimized)
                .unwrap_or(false)
        });
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            id,
            viewport: desktop_viewport_rect(),
        });
    };
    let titlebar_double_click = Callback::new(move |ev: ev::MouseEvent| {
        ev.prevent_default();
        toggle_maximize();
    });
    let zoom_label = Signal::derive(move || {
        if maximized.get() {
            "Restore window".to_string()
        } else {
            "Maximize window".to_string()
        }
    });

    view! {
        <WindowFrame
            id=window_frame_dom_id(id)
            style=style
            aria_label=title
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowControls>
                    <WindowControlButton
                        control="close"
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { id })
                        })
                    />
                    <WindowControlButton
                        control="minimize"
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { id })
                        })
                    />
                    <WindowControlButton
                        control="zoom"
                        aria_label=zoom_label
                        on_click=Callback::new(move |_| toggle_maximize())
                    />
                </WindowControls>
                <WindowTitle>
                    <AppIcon src=icon size=IconSize::Sm />
                    <span>{move || title.get()}</span>
                </WindowTitle>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle id=id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=on_pointerdown /> }
}
