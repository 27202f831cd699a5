//! Tag chip

use leptos::prelude::*;

use crate::models::Tag;

/// Colored tag label; `circular` renders just the color dot
#[component]
pub fn ShowTag(tag: Tag, #[prop(optional)] circular: bool) -> impl IntoView {
    let class = if circular { "ui label tag circular" } else { "ui label tag" };
    let style = format!("background-color: {};", tag.css_color());
    let title = if tag.is_public {
        tag.name.clone()
    } else {
        format!("{} (private)", tag.name)
    };

    view! {
        <div class=class style=style title=title>
            {(!tag.is_public && !circular).then(|| view! { <i class="lock icon"></i> })}
            {(!circular).then(|| tag.name.clone())}
        </div>
    }
}
