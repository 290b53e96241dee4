//! Desktop window/state manager and shell components for the portfolio site.
//!
//! [`reduce_desktop`] is the single state-transition engine. [`DesktopProvider`] owns the state
//! signals and exposes the dispatch callback through [`DesktopRuntimeContext`]; [`DesktopShell`]
//! renders the menu bar, desktop icons, windows, and dock from that state.

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod icon_layout;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
