use leptos::*;
use portfolio_contract::Project;
use system_ui::{Card, EmptyState, Heading, Stack};

use crate::{use_remote_list, LoadState};

const FEATURED_COUNT: usize = 3;

/// Orders projects by stars (most first, unknown last) and flags the top entries as featured.
///
/// Without highlighting the upstream order is kept and nothing is featured.
fn rank_projects(mut projects: Vec<Project>, highlight_featured: bool) -> Vec<(Project, bool)> {
    if !highlight_featured {
        return projects.into_iter().map(|p| (p, false)).collect();
    }
    projects.sort_by(|a, b| b.stars.unwrap_or(0).cmp(&a.stars.unwrap_or(0)));
    projects
        .into_iter()
        .enumerate()
        .map(|(idx, p)| {
            let featured = idx < FEATURED_COUNT && p.stars.is_some_and(|stars| stars > 0);
            (p, featured)
        })
        .collect()
}

#[component]
/// Project list loaded from `/api/projects`.
pub fn ProjectsView(
    /// Sort by stars and badge the top few.
    #[prop(optional)]
    highlight_featured: bool,
) -> impl IntoView {
    let state = use_remote_list("projects", portfolio_web::fetch_projects);

    view! {
        <Stack layout_class="projects-view">
            <Heading level=2 text="Projects" />
            {move || match state.get() {
                LoadState::Loading => view! { <EmptyState message="Loading projects..." /> }.into_view(),
                LoadState::Failed(message) => {
                    view! { <EmptyState message=message tone="error" /> }.into_view()
                }
                LoadState::Loaded(projects) if projects.is_empty() => {
                    view! { <EmptyState message="No projects to show yet." /> }.into_view()
                }
                LoadState::Loaded(projects) => rank_projects(projects, highlight_featured)
                    .into_iter()
                    .map(|(project, featured)| project_card(project, featured))
                    .collect_view(),
            }}
        </Stack>
    }
}

fn project_card(project: Project, featured: bool) -> View {
    let meta = [
        project.language.clone(),
        project.stars.map(|stars| format!("{stars} stars")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <Card title=project.name href=project.url>
            <div class="project-meta" data-featured=featured.to_string()>
                {featured.then(|| view! { <span class="project-badge">"Featured"</span> })}
                {(!meta.is_empty()).then(|| view! { <span>{meta}</span> })}
            </div>
            {project.description.map(|text| view! { <p>{text}</p> })}
        </Card>
    }
    .into_view()
}
