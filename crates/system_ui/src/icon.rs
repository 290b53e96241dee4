//! Image-backed application icons.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Titlebar and menu size.
    Sm,
    /// Dock size.
    #[default]
    Md,
    /// Desktop icon size.
    Lg,
}

impl IconSize {
    /// Rendered edge length in CSS pixels.
    pub fn px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 48,
            Self::Lg => 56,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an application icon image. Decorative unless `alt` is supplied.
pub fn AppIcon(
    #[prop(into)] src: String,
    #[prop(optional)] size: IconSize,
    #[prop(optional, into)] alt: Option<String>,
) -> impl IntoView {
    let px = size.px();
    view! {
        <img
            src=src
            alt=alt.unwrap_or_default()
            width=px
            height=px
            draggable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        />
    }
}
