//! Status Label Component

use leptos::prelude::*;

use crate::models::IdeaStatus;

/// Colored status label; renders nothing for statuses that are not shown
#[component]
pub fn StatusLabel(status: IdeaStatus) -> impl IntoView {
    status.show().then(|| {
        let class = format!("ui {} label status-label {}", status.color().unwrap_or(""), status.slug());
        view! { <span class=class>{status.title()}</span> }
    })
}
