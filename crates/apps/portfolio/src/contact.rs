use leptos::*;
use system_ui::{Heading, Stack};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound contact link.
pub struct ContactLink {
    /// Visible link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl ContactLink {
    /// Builds a link from its label and target.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[component]
/// Contact details: an email address and a list of profile links.
pub fn ContactView(
    /// Address shown and linked with `mailto:`.
    #[prop(into)]
    email: String,
    /// Profile and document links.
    links: Vec<ContactLink>,
) -> impl IntoView {
    let mailto = format!("mailto:{email}");
    view! {
        <Stack layout_class="contact-view">
            <Heading level=2 text="Get in touch" />
            <p>
                "Email: " <a href=mailto data-autofocus="true">{email}</a>
            </p>
            <ul class="contact-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Stack>
    }
}
