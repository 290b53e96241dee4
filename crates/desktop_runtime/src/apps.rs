//! Window registry, desktop and dock shortcut catalogs, and window content mounting.

use desktop_app_portfolio::{AboutView, BlogView, ChatView, ContactLink, ContactView, ProjectsView};
use leptos::*;

use crate::components::WallpaperPicker;
use crate::model::{AppId, OpenWindowRequest, WindowContent, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Default presentation for one window kind.
pub struct WindowRegistryEntry {
    pub id: AppId,
    pub title: &'static str,
    pub icon: &'static str,
    pub default_rect: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static launch point shown on the desktop or in the dock.
pub struct ShortcutRecord {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Registry key of the window this shortcut opens.
    pub target: &'static str,
}

impl ShortcutRecord {
    /// Resolves the target key; `None` for keys that name no registered window.
    pub fn target_id(&self) -> Option<AppId> {
        self.target.parse().ok()
    }
}

const CONTACT_EMAIL: &str = "hello@portfolio.example";
const CHAT_GREETING: &str = "Hi! Ask me anything about my projects, writing, or experience.";

const DESKTOP_SHORTCUTS: [ShortcutRecord; 5] = [
    ShortcutRecord {
        id: "desktop-about",
        label: "About Me",
        icon: "/icons/about.png",
        target: "about",
    },
    ShortcutRecord {
        id: "desktop-projects",
        label: "Projects",
        icon: "/icons/projects.png",
        target: "projects",
    },
    ShortcutRecord {
        id: "desktop-blog",
        label: "Blog",
        icon: "/icons/blog.png",
        target: "blog",
    },
    ShortcutRecord {
        id: "desktop-chat",
        label: "Ask Me",
        icon: "/icons/chat.png",
        target: "chat",
    },
    ShortcutRecord {
        id: "desktop-contact",
        label: "Contact",
        icon: "/icons/contact.png",
        target: "contact",
    },
];

const DOCK_SHORTCUTS: [ShortcutRecord; 6] = [
    ShortcutRecord {
        id: "dock-about",
        label: "About",
        icon: "/icons/about.png",
        target: "about",
    },
    ShortcutRecord {
        id: "dock-projects",
        label: "Projects",
        icon: "/icons/projects.png",
        target: "projects",
    },
    ShortcutRecord {
        id: "dock-blog",
        label: "Blog",
        icon: "/icons/blog.png",
        target: "blog",
    },
    ShortcutRecord {
        id: "dock-chat",
        label: "Assistant",
        icon: "/icons/chat.png",
        target: "chat",
    },
    ShortcutRecord {
        id: "dock-contact",
        label: "Contact",
        icon: "/icons/contact.png",
        target: "contact",
    },
    ShortcutRecord {
        id: "dock-wallpapers",
        label: "Wallpapers",
        icon: "/icons/wallpapers.png",
        target: "wallpapers",
    },
];

pub fn desktop_shortcuts() -> &'static [ShortcutRecord] {
    &DESKTOP_SHORTCUTS
}

pub fn dock_shortcuts() -> &'static [ShortcutRecord] {
    &DOCK_SHORTCUTS
}

/// Registry entry for `id`. Every window kind has exactly one.
pub fn registry_entry(id: AppId) -> WindowRegistryEntry {
    let (title, icon, default_rect) = match id {
        AppId::About => ("About Me", "/icons/about.png", rect(120, 64, 560, 440)),
        AppId::Projects => ("Projects", "/icons/projects.png", rect(180, 88, 720, 520)),
        AppId::Blog => ("Blog", "/icons/blog.png", rect(220, 104, 680, 520)),
        AppId::Chat => ("Ask Me Anything", "/icons/chat.png", rect(260, 72, 460, 560)),
        AppId::Contact => ("Contact", "/icons/contact.png", rect(300, 140, 420, 340)),
        AppId::Wallpapers => ("Wallpapers", "/icons/wallpapers.png", rect(340, 120, 640, 440)),
    };
    WindowRegistryEntry {
        id,
        title,
        icon,
        default_rect,
    }
}

pub fn window_registry() -> Vec<WindowRegistryEntry> {
    AppId::ALL.into_iter().map(registry_entry).collect()
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
    WindowRect { x, y, w, h }
}

/// Props each window kind starts with.
pub fn default_content(id: AppId) -> WindowContent {
    match id {
        AppId::About => WindowContent::About,
        AppId::Projects => WindowContent::Projects {
            highlight_featured: true,
        },
        AppId::Blog => WindowContent::Blog,
        AppId::Chat => WindowContent::Chat {
            greeting: CHAT_GREETING.to_string(),
        },
        AppId::Contact => WindowContent::Contact {
            email: CONTACT_EMAIL.to_string(),
            links: vec![
                ContactLink::new("GitHub", "https://github.com/portfolio-example"),
                ContactLink::new("LinkedIn", "https://www.linkedin.com/in/portfolio-example"),
                ContactLink::new("Resume", "/resume.pdf"),
            ],
        },
        AppId::Wallpapers => WindowContent::Wallpapers,
    }
}

/// Builds the open request for `id` from its registry entry.
pub fn default_open_request(id: AppId) -> OpenWindowRequest {
    let entry = registry_entry(id);
    OpenWindowRequest {
        id,
        title: entry.title.to_string(),
        icon: entry.icon.to_string(),
        content: default_content(id),
        rect: entry.default_rect,
    }
}

/// Mounts the view for a window's content.
pub fn render_window_contents(content: &WindowContent) -> View {
    match content.clone() {
        WindowContent::About => view! { <AboutView /> }.into_view(),
        WindowContent::Projects { highlight_featured } => {
            view! { <ProjectsView highlight_featured=highlight_featured /> }.into_view()
        }
        WindowContent::Blog => view! { <BlogView /> }.into_view(),
        WindowContent::Chat { greeting } => view! { <ChatView greeting=greeting /> }.into_view(),
        WindowContent::Contact { email, links } => {
            view! { <ContactView email=email links=links /> }.into_view()
        }
        WindowContent::Wallpapers => view! { <WallpaperPicker /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn every_shortcut_target_resolves_to_a_registered_window() {
        for shortcut in desktop_shortcuts().iter().chain(dock_shortcuts()) {
            assert!(
                shortcut.target_id().is_some(),
                "shortcut `{}` targets unknown window `{}`",
                shortcut.id,
                shortcut.target
            );
        }
    }

    #[test]
    fn shortcut_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for shortcut in desktop_shortcuts().iter().chain(dock_shortcuts()) {
            assert!(seen.insert(shortcut.id), "duplicate shortcut `{}`", shortcut.id);
        }
    }

    #[test]
    fn registry_covers_every_window_kind_with_matching_content() {
        let registry = window_registry();
        assert_eq!(registry.len(), AppId::ALL.len());
        for entry in registry {
            let req = default_open_request(entry.id);
            assert_eq!(req.id, entry.id);
            assert!(entry.default_rect.w >= MIN_WINDOW_WIDTH);
            assert!(entry.default_rect.h >= MIN_WINDOW_HEIGHT);
            let content_matches = matches!(
                (entry.id, &req.content),
                (AppId::About, WindowContent::About)
                    | (AppId::Projects, WindowContent::Projects { .. })
                    | (AppId::Blog, WindowContent::Blog)
                    | (AppId::Chat, WindowContent::Chat { .. })
                    | (AppId::Contact, WindowContent::Contact { .. })
                    | (AppId::Wallpapers, WindowContent::Wallpapers)
            );
            assert!(content_matches, "content mismatch for {}", entry.id);
        }
    }

    #[test]
    fn dock_offers_the_wallpaper_picker() {
        assert!(dock_shortcuts()
            .iter()
            .any(|shortcut| shortcut.target_id() == Some(AppId::Wallpapers)));
    }
}
