use desktop_runtime::{AppId, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Parses a comma-separated `?open=` value into window ids, in order and without repeats.
///
/// Unknown keys are skipped.
pub fn parse_open_targets(raw: &str) -> Vec<AppId> {
    let mut targets = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|key| !key.is_empty()) {
        match key.parse::<AppId>() {
            Ok(id) if !targets.contains(&id) => targets.push(id),
            Ok(_) => {}
            Err(err) => logging::warn!("ignoring ?open target: {err}"),
        }
    }
    targets
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta
            name="description"
            content="A desktop-style portfolio: projects, writing, and an assistant you can ask about my work."
        />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Desktop with any windows requested through `?open=about,chat` already open.
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let initial_windows = query.with_untracked(|map| {
        map.get("open")
            .map(|raw| parse_open_targets(raw))
            .unwrap_or_default()
    });

    view! {
        <DesktopProvider initial_windows=initial_windows>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_targets_keep_order_and_drop_unknown_or_repeated_keys() {
        assert_eq!(
            parse_open_targets("chat, projects,,settings,chat"),
            vec![AppId::Chat, AppId::Projects]
        );
        assert_eq!(parse_open_targets(""), Vec::<AppId>::new());
    }
}
