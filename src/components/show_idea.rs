//! Show Idea Page

use chrono::Utc;
use leptos::prelude::*;

use crate::components::{StatusLabel, SupportCounter, TagsPanel};
use crate::format::{plural, time_ago};
use crate::markdown::render_markdown;
use crate::models::{Idea, IdeaResponse, IdeaStatus};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
fn ResponseBlock(response: IdeaResponse, status: Option<IdeaStatus>) -> impl IntoView {
    let text = render_markdown(&response.text);
    let when = time_ago(response.responded_on, Utc::now());

    view! {
        <div class="ui segment response">
            {status.map(|status| view! { <StatusLabel status=status /> })}
            <div class="meta">{format!("{} · {}", response.user.name, when)}</div>
            <div class="content markdown-body" inner_html=text></div>
        </div>
    }
}

#[component]
pub fn ShowIdea(idea: Idea) -> impl IntoView {
    let tags = use_page_store().tags().get_untracked();
    let status = match idea.status() {
        Ok(status) => Some(status),
        Err(err) => {
            log::error!("[IDEA] idea {}: {}", idea.number, err);
            None
        }
    };
    let description = if idea.description.trim().is_empty() {
        "<em>No description provided.</em>".to_string()
    } else {
        render_markdown(&idea.description)
    };
    let byline = format!("{} · {}", idea.user.name, time_ago(idea.created_on, Utc::now()));
    let comments = plural(idea.total_comments, "comment", "comments");

    view! {
        <div class="ui grid show-idea-page">
            <div class="thirteen wide column">
                <div class="idea-header">
                    <SupportCounter idea=idea.clone() />
                    <h1 class="ui header">{idea.title.clone()}</h1>
                    <div class="meta">{byline}</div>
                </div>
                <div class="description markdown-body" inner_html=description></div>
                {idea.response.clone().map(|response| view! { <ResponseBlock response=response status=status /> })}
                <div class="comments-count">{comments}</div>
            </div>
            <div class="three wide column sidebar">
                <TagsPanel idea=idea tags=tags />
            </div>
        </div>
    }
}
