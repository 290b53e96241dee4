use super::*;

#[component]
/// Root desktop surface. Hosts the global pointer handlers for window drag and resize.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] wallpaper: MaybeSignal<String>,
    #[prop(optional)] on_pointermove: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            tabindex="-1"
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-wallpaper=move || wallpaper.get()
            on:pointermove=move |ev| forward(on_pointermove, ev)
            on:pointerup=move |ev| forward(on_pointerup, ev)
            on:pointercancel=move |ev| forward(on_pointerup, ev)
            on:click=move |ev| forward(on_click, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Wallpaper and backdrop host between the menu bar and the dock.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Positioning surface for free-form desktop icons. Icons are clamped to its bounds.
pub fn DesktopIconLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-layer", layout_class)
            role="list"
            aria-label="Desktop"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window frame. Geometry and z-order arrive through `style`.
pub fn WindowFrame(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            tabindex="-1"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Window titlebar: drag handle and double-click target.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
            on:dblclick=move |ev| forward(on_dblclick, ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Window title group.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button (close, minimize, zoom).
///
/// Pointer-down is swallowed so pressing a control never starts a titlebar drag.
pub fn WindowControlButton(
    /// Control slot token: `close`, `minimize`, or `zoom`.
    control: &'static str,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=control
            on:pointerdown=move |ev: PointerEvent| {
                ev.stop_propagation();
            }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                forward(on_click, ev);
            }
        ></button>
    }
}

#[component]
/// Scrollable window content area.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Resize handle for one edge or corner.
pub fn ResizeHandle(
    /// Edge token such as `n`, `se`, or `w`.
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        ></div>
    }
}
