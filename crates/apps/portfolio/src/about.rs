use leptos::*;
use system_ui::{Heading, Stack};

const SKILLS: [&str; 8] = [
    "Rust",
    "TypeScript",
    "WebAssembly",
    "Distributed systems",
    "PostgreSQL",
    "Kubernetes",
    "UI engineering",
    "Technical writing",
];

#[component]
/// Static introduction and skill list.
pub fn AboutView() -> impl IntoView {
    view! {
        <Stack layout_class="about-view">
            <Heading level=1 text="Hi, I'm a software engineer." />
            <p>
                "I build fast, reliable software across the stack: browser front-ends, network "
                "services, and the tooling that keeps them healthy in production. This desktop is "
                "itself a small Rust and WebAssembly project."
            </p>
            <p>
                "Open the Projects and Blog windows to see what I have been working on, or ask the "
                "assistant anything about my experience."
            </p>
            <Heading level=2 text="Skills" />
            <ul class="about-skills">
                {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
            </ul>
        </Stack>
    }
}
