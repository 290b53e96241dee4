use system_ui::{Heading, Stack};

use super::*;

#[component]
/// Window content listing the wallpaper catalog. Selecting a thumbnail applies it immediately.
pub fn WallpaperPicker() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active = Signal::derive(move || runtime.state.with(|desktop| desktop.wallpaper_id.clone()));

    let options = wallpaper::wallpaper_catalog()
        .iter()
        .map(|option| {
            let selected = {
                let id = option.id.clone();
                Signal::derive(move || active.with(|active| *active == id))
            };
            let id = option.id.clone();
            view! {
                <button
                    type="button"
                    class="wallpaper-option"
                    role="option"
                    aria-selected=move || selected.get().to_string()
                    data-ui-selected=move || selected.get().to_string()
                    style=format!("--wallpaper-glow:{};", option.glow_color)
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetWallpaper {
                            wallpaper_id: id.clone(),
                        })
                    }
                >
                    <img src=option.thumbnail.clone() alt="" loading="lazy" />
                    <span>{option.name.clone()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <Stack layout_class="wallpaper-picker">
            <Heading level=2 text="Wallpaper" />
            <div class="wallpaper-grid" role="listbox" aria-label="Wallpapers">
                {options}
            </div>
        </Stack>
    }
}
