use leptos::*;
use portfolio_contract::BlogPost;
use system_ui::{Card, EmptyState, Heading, Stack};

use crate::{use_remote_list, LoadState};

/// Shortens an ISO-8601 timestamp to its date; other formats pass through trimmed.
fn published_label(published: &str) -> String {
    let trimmed = published.trim();
    let date = trimmed.split('T').next().unwrap_or(trimmed);
    let looks_iso = date.len() == 10
        && date
            .char_indices()
            .all(|(idx, ch)| if idx == 4 || idx == 7 { ch == '-' } else { ch.is_ascii_digit() });
    if looks_iso {
        date.to_string()
    } else {
        trimmed.to_string()
    }
}

#[component]
/// Blog post list loaded from `/api/blogs`.
pub fn BlogView() -> impl IntoView {
    let state = use_remote_list("posts", portfolio_web::fetch_blogs);

    view! {
        <Stack layout_class="blog-view">
            <Heading level=2 text="Writing" />
            {move || match state.get() {
                LoadState::Loading => view! { <EmptyState message="Loading posts..." /> }.into_view(),
                LoadState::Failed(message) => {
                    view! { <EmptyState message=message tone="error" /> }.into_view()
                }
                LoadState::Loaded(posts) if posts.is_empty() => {
                    view! { <EmptyState message="No posts published yet." /> }.into_view()
                }
                LoadState::Loaded(posts) => posts.into_iter().map(post_card).collect_view(),
            }}
        </Stack>
    }
}

fn post_card(post: BlogPost) -> View {
    view! {
        <Card title=post.title href=post.url>
            {post
                .published
                .as_deref()
                .map(|published| view! { <time class="blog-date">{published_label(published)}</time> })}
            {post.summary.map(|summary| view! { <p>{summary}</p> })}
        </Card>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn iso_timestamps_are_shortened_to_the_date() {
        assert_eq!(published_label("2024-03-09T10:15:00Z"), "2024-03-09");
        assert_eq!(published_label(" 2024-03-09 "), "2024-03-09");
    }

    #[test]
    fn free_form_dates_pass_through() {
        assert_eq!(published_label("March 9, 2024"), "March 9, 2024");
        assert_eq!(published_label("2024/03/09"), "2024/03/09");
    }
}
