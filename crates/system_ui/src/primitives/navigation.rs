use super::*;

#[component]
/// Top menu bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            aria-label="Menu bar"
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Menu bar region (`leading` or `trailing`).
pub fn MenuBarSection(ui_slot: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-menubar-section"
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu bar title button that opens a drop-down menu.
pub fn MenuBarButton(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class="ui-menubar-button"
            role="menuitem"
            aria-haspopup="menu"
            aria-controls=aria_controls
            aria-expanded=move || bool_token(expanded.get())
            data-ui-primitive="true"
            data-ui-kind="menubar-button"
            data-ui-slot=ui_slot.unwrap_or("menu-title")
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                forward(on_click, ev);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Drop-down surface anchored under a menu bar button.
pub fn MenuSurface(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-menu-surface"
            role="menu"
            aria-label=aria_label
            style=style
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
            on:keydown=move |ev| forward(on_keydown, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Drop-down menu entry. Passing `checked` makes it a checkbox item.
pub fn MenuItem(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            role=if checked.is_some() { "menuitemcheckbox" } else { "menuitem" }
            aria-checked=move || checked.map(|checked| bool_token(checked.get()))
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                forward(on_click, ev);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Drop-down separator.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Bottom dock strip.
pub fn Dock(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-dock", layout_class)
            role="toolbar"
            aria-label="Dock"
            data-ui-primitive="true"
            data-ui-kind="dock"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Dock launcher. `running` draws the open-window indicator.
pub fn DockItem(
    #[prop(into)] label: String,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dock-item"
            title=label.clone()
            aria-label=label
            aria-pressed=move || bool_token(active.get())
            data-ui-primitive="true"
            data-ui-kind="dock-item"
            data-ui-running=move || bool_token(running.get())
            on:click=move |ev| forward(on_click, ev)
        >
            {children()}
            <span class="ui-dock-indicator" aria-hidden="true"></span>
        </button>
    }
}
