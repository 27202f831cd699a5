//! Tags Panel Component
//!
//! Sidebar panel on the idea page. Collaborators click the subtitle to
//! switch into editing mode and toggle tags from the full catalog.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ShowTag;
use crate::context::use_app_context;
use crate::models::{Idea, Tag};
use crate::widgets;

#[component]
pub fn TagsPanel(idea: Idea, tags: Vec<Tag>) -> impl IntoView {
    let ctx = use_app_context();
    let panel = widgets::TagsPanel::new(&idea, tags, &ctx.session(), &ctx.services());

    if !panel.is_visible() {
        return ().into_any();
    }

    let can_edit = panel.can_edit();
    let (state, set_state) = signal(panel.state());
    let (rows, set_rows) = signal(panel.rows());
    let panel = StoredValue::new_local(Rc::new(panel));

    let on_subtitle_click = move |_: web_sys::MouseEvent| {
        let panel = panel.get_value();
        panel.toggle_editing();
        set_state.set(panel.state());
    };

    let on_select = move |tag_id: u32| {
        let panel = panel.get_value();
        spawn_local(async move {
            panel.assign_or_unassign(tag_id).await;
            set_state.set(panel.state());
            set_rows.set(panel.rows());
        });
    };

    let subtitle_class = if can_edit { "subtitle active" } else { "subtitle" };

    view! {
        <div class="tags-panel">
            <span class=subtitle_class on:click=on_subtitle_click>
                "Tags "
                {can_edit.then(|| view! {
                    <i class=move || if state.get().is_editing { "check circle icon" } else { "setting icon" }></i>
                })}
            </span>

            {move || {
                let current = state.get();
                if current.is_editing {
                    view! {
                        <div class="ui list tag-list">
                            <For
                                each=move || rows.get()
                                key=|row| (row.tag.id, row.assigned)
                                children=move |row| {
                                    let tag_id = row.tag.id;
                                    let name = row.tag.name.clone();
                                    let icon = if row.assigned { "icon check" } else { "icon" };
                                    view! {
                                        <div class="item selectable" on:click=move |_| on_select(tag_id)>
                                            <i class=icon></i>
                                            <ShowTag tag=row.tag circular=true />
                                            <span>{name}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                } else if current.assigned.is_empty() {
                    view! { <span class="info">"None yet"</span> }.into_any()
                } else {
                    view! {
                        <div class="ui list tag-list">
                            {current
                                .assigned
                                .into_iter()
                                .map(|tag| view! { <div class="item"><ShowTag tag=tag /></div> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
    .into_any()
}
