use system_ui::{AppIcon, Dock, DockItem, IconSize};

use super::*;

#[component]
/// Dock strip: one launcher per dock shortcut, with a running indicator for open windows.
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let items = apps::dock_shortcuts()
        .iter()
        .filter_map(|shortcut| {
            let Some(id) = shortcut.target_id() else {
                logging::warn!("dock shortcut `{}` has no window", shortcut.id);
                return None;
            };
            let running = Signal::derive(move || state.with(|desktop| desktop.is_open(id)));
            let active = Signal::derive(move || {
                state.with(|desktop| desktop.focused_window_id() == Some(id))
            });
            Some(view! {
                <DockItem
                    label=shortcut.label
                    running=running
                    active=active
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ActivateWindow { id })
                    })
                >
                    <AppIcon src=shortcut.icon size=IconSize::Md />
                </DockItem>
            })
        })
        .collect_view();

    view! { <Dock>{items}</Dock> }
}
