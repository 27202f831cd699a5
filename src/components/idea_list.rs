//! Idea List
//!
//! Home page listing: counter, title, status, comments and tags per idea.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::{ShowTag, StatusLabel, SupportCounter};
use crate::context::use_app_context;
use crate::format::{plural, time_ago};
use crate::markdown::render_markdown_inline;
use crate::models::{visible_tags, Idea, Tag};
use crate::store::{use_page_store, PageStateStoreFields};

const EXCERPT_CHARS: usize = 200;

fn excerpt(description: &str) -> String {
    let first_line = description.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut text: String = first_line.chars().take(EXCERPT_CHARS).collect();
    if first_line.chars().count() > EXCERPT_CHARS {
        text.push('…');
    }
    text
}

#[component]
fn IdeaListItem(idea: Idea, tags: Vec<Tag>, is_collaborator: bool) -> impl IntoView {
    let status = idea.status().ok();
    let tags = visible_tags(&tags, &idea.tags, is_collaborator);
    let url = idea.url();
    let created = time_ago(idea.created_on, Utc::now());
    let comments = plural(idea.total_comments, "comment", "comments");
    let summary = render_markdown_inline(&excerpt(&idea.description));
    let title = idea.title.clone();

    view! {
        <div class="item idea-item">
            <SupportCounter idea=idea />
            <div class="content">
                <a class="title" href=url>{title}</a>
                {status.map(|status| view! { <StatusLabel status=status /> })}
                <div class="description" inner_html=summary></div>
                <div class="meta">
                    <span class="comments">{comments}</span>
                    <span class="created">{created}</span>
                </div>
                <div class="tags">
                    {tags.into_iter().map(|tag| view! { <ShowTag tag=tag /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn IdeaList(ideas: Vec<Idea>) -> impl IntoView {
    let is_collaborator = use_app_context().session().is_collaborator();
    let tags = use_page_store().tags().get_untracked();

    if ideas.is_empty() {
        return view! { <p class="no-ideas">"No ideas yet. Be the first to share one!"</p> }.into_any();
    }

    view! {
        <div class="ui divided items idea-list">
            {ideas
                .into_iter()
                .map(|idea| view! { <IdeaListItem idea=idea tags=tags.clone() is_collaborator=is_collaborator /> })
                .collect_view()}
        </div>
    }
    .into_any()
}
