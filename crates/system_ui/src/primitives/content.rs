use super::*;

#[component]
/// Vertical flow container.
pub fn Stack(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
        >
            {children()}
        </div>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(into)] text: String,
) -> impl IntoView {
    let level = level.clamp(1, 4);
    view! {
        <div
            class="ui-heading"
            role="heading"
            aria-level=level
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-level=level
        >
            {text}
        </div>
    }
}

#[component]
/// Bordered content card, optionally linking out.
pub fn Card(
    #[prop(into)] title: String,
    #[prop(default = None)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let header = match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">{title}</a>
        }
        .into_view(),
        None => view! { <span>{title}</span> }.into_view(),
    };
    view! {
        <article class="ui-card" data-ui-primitive="true" data-ui-kind="card">
            <header class="ui-card-title">{header}</header>
            {children()}
        </article>
    }
}

#[component]
/// Placeholder for loading, empty, and error states.
pub fn EmptyState(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional)] tone: Option<&'static str>,
) -> impl IntoView {
    view! {
        <p
            class="ui-empty-state"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            data-ui-tone=tone.unwrap_or("neutral")
        >
            {move || message.get()}
        </p>
    }
}
