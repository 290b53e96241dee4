//! Desktop shell, navigation, and content-layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use web_sys::PointerEvent;

mod content;
mod navigation;
mod shell;

pub use content::{Card, EmptyState, Heading, Stack};
pub use navigation::{
    Dock, DockItem, MenuBar, MenuBarButton, MenuBarSection, MenuItem, MenuSeparator, MenuSurface,
};
pub use shell::{
    DesktopBackdrop, DesktopIconLayer, DesktopRoot, DesktopWindowLayer, ResizeHandle, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn forward<E>(handler: Option<Callback<E>>, ev: E) {
    if let Some(handler) = handler {
        handler.call(ev);
    }
}
