//! Shared UI primitives for the portfolio desktop shell and its window content.
//!
//! The crate owns the stable `data-ui-*` DOM contract consumed by the site stylesheet: desktop
//! surfaces, window chrome, the menu bar, the dock, and a few content-layout helpers. Shell and
//! app crates compose these instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{AppIcon, IconSize};
pub use primitives::{
    Card, DesktopBackdrop, DesktopIconLayer, DesktopRoot, DesktopWindowLayer, Dock, DockItem,
    EmptyState, Heading, MenuBar, MenuBarButton, MenuBarSection, MenuItem, MenuSeparator,
    MenuSurface, ResizeHandle, Stack, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppIcon, Card, DesktopBackdrop, DesktopIconLayer, DesktopRoot, DesktopWindowLayer, Dock,
        DockItem, EmptyState, Heading, IconSize, MenuBar, MenuBarButton, MenuBarSection, MenuItem,
        MenuSeparator, MenuSurface, ResizeHandle, Stack, WindowBody, WindowControlButton,
        WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
