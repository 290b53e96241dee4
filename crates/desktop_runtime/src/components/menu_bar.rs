use std::time::Duration;

use system_ui::{MenuBar, MenuBarButton, MenuBarSection, MenuItem, MenuSeparator, MenuSurface};

use super::*;
use crate::model::{AppId, MenuId};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    weekday: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS
        .get(snapshot.weekday as usize)
        .copied()
        .unwrap_or("");
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{weekday} {hour}:{:02} {suffix}", snapshot.minute)
}

fn menu_surface_id(menu: MenuId) -> &'static str {
    match menu {
        MenuId::Brand => "menubar-brand-menu",
        MenuId::Windows => "menubar-windows-menu",
    }
}

#[component]
/// Top bar: brand menu, open-window menu, focused title, wallpaper shortcut, and clock.
pub(super) fn DesktopMenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let is_open = move |menu: MenuId| {
        Signal::derive(move || state.with(|desktop| desktop.menu_open == Some(menu)))
    };
    let toggle = move |menu: MenuId| {
        Callback::new(move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::ToggleMenu { menu })
        })
    };
    let activate = move |id: AppId| {
        Callback::new(move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::ActivateWindow { id })
        })
    };
    let brand_open = is_open(MenuId::Brand);
    let windows_open = is_open(MenuId::Windows);
    let has_windows = Signal::derive(move || state.with(|desktop| !desktop.windows.is_empty()));
    let focused_id = Signal::derive(move || state.with(|desktop| desktop.focused_window_id()));
    let focused_title = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .focused_window()
                .map(|w| w.title.clone())
                .unwrap_or_else(|| "Desktop".to_string())
        })
    });

    view! {
        <MenuBar>
            <MenuBarSection ui_slot="leading">
                <MenuBarButton
                    id="menubar-brand"
                    ui_slot="brand"
                    aria_controls=menu_surface_id(MenuId::Brand)
                    expanded=brand_open
                    on_click=toggle(MenuId::Brand)
                >
                    "Portfolio"
                </MenuBarButton>
                <Show when=move || brand_open.get() fallback=|| ()>
                    <MenuSurface id=menu_surface_id(MenuId::Brand) aria_label="Portfolio">
                        <MenuItem on_click=activate(AppId::About)>"About This Site"</MenuItem>
                        <MenuItem on_click=activate(AppId::Wallpapers)>"Change Wallpaper"</MenuItem>
                        <MenuSeparator />
                        <MenuItem
                            disabled=Signal::derive(move || !has_windows.get())
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::CloseAllWindows)
                            })
                        >
                            "Close All Windows"
                        </MenuItem>
                    </MenuSurface>
                </Show>

                <MenuBarButton
                    id="menubar-windows"
                    aria_controls=menu_surface_id(MenuId::Windows)
                    expanded=windows_open
                    on_click=toggle(MenuId::Windows)
                >
                    "Windows"
                </MenuBarButton>
                <Show when=move || windows_open.get() fallback=|| ()>
                    <MenuSurface id=menu_surface_id(MenuId::Windows) aria_label="Windows">
                        <MenuItem
                            disabled=Signal::derive(move || focused_id.get().is_none())
                            on_click=Callback::new(move |_| {
                                if let Some(id) = focused_id.get_untracked() {
                                    runtime.dispatch_action(DesktopAction::MinimizeWindow { id });
                                    runtime.dispatch_action(DesktopAction::CloseMenu);
                                }
                            })
                        >
                            "Minimize"
                        </MenuItem>
                        <MenuSeparator />
                        <Show
                            when=move || has_windows.get()
                            fallback=|| view! { <MenuItem disabled=true>"No Open Windows"</MenuItem> }
                        >
                            <For
                                each=move || {
                                    state
                                        .with(|desktop| {
                                            desktop
                                                .windows
                                                .iter()
                                                .map(|w| (w.id, w.title.clone()))
                                                .collect::<Vec<_>>()
                                        })
                                }
                                key=|(id, _)| *id
                                let:entry
                            >
                                {
                                    let (id, title) = entry;
                                    view! {
                                        <MenuItem
                                            checked=Signal::derive(move || focused_id.get() == Some(id))
                                            on_click=activate(id)
                                        >
                                            {title}
                                        </MenuItem>
                                    }
                                }
                            </For>
                        </Show>
                    </MenuSurface>
                </Show>

                <span class="ui-menubar-title" aria-live="polite">
                    {move || focused_title.get()}
                </span>
            </MenuBarSection>

            <MenuBarSection ui_slot="trailing">
                <MenuBarButton ui_slot="wallpaper" on_click=activate(AppId::Wallpapers)>
                    "Wallpaper"
                </MenuBarButton>
                <time class="ui-menubar-clock">{move || format_clock(clock.get())}</time>
            </MenuBarSection>
        </MenuBar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_uses_twelve_hour_time_with_weekday() {
        assert_eq!(
            format_clock(ClockSnapshot {
                weekday: 1,
                hour: 0,
                minute: 5
            }),
            "Mon 12:05 AM"
        );
        assert_eq!(
            format_clock(ClockSnapshot {
                weekday: 5,
                hour: 13,
                minute: 30
            }),
            "Fri 1:30 PM"
        );
    }
}
