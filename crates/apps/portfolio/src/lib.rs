//! Window content views for the portfolio desktop: about, projects, blog, assistant chat, and
//! contact.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod about;
mod blog;
mod chat;
mod contact;
mod projects;

use std::{cell::Cell, future::Future, rc::Rc};

use leptos::*;
use portfolio_web::FetchError;

pub use about::AboutView;
pub use blog::BlogView;
pub use chat::ChatView;
pub use contact::{ContactLink, ContactView};
pub use projects::ProjectsView;

#[derive(Debug, Clone, PartialEq)]
/// Lifecycle of a list loaded from the proxy routes.
enum LoadState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

/// Starts `fetch` once for the mounting view and exposes its result as a signal.
///
/// A response arriving after the window closed is dropped.
fn use_remote_list<T, F, Fut>(what: &'static str, fetch: F) -> ReadSignal<LoadState<T>>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
{
    let (state, set_state) = create_signal(LoadState::Loading);
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    create_effect(move |_| {
        let alive = alive.clone();
        let request = fetch();
        spawn_local(async move {
            let next = match request.await {
                Ok(items) => LoadState::Loaded(items),
                Err(err) => {
                    logging::warn!("loading {what} failed: {err}");
                    LoadState::Failed(format!("Could not load {what}: {err}"))
                }
            };
            if alive.get() {
                set_state.set(next);
            }
        });
    });

    state
}
