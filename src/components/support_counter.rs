//! Support Counter Component
//!
//! Vote button bound to a `widgets::SupportCounter`. Closed ideas get a
//! non-interactive counter.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Idea;
use crate::widgets;

fn is_touch_device() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &"ontouchstart".into()).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn SupportCounter(idea: Idea) -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.session().current_user();

    let counter = match widgets::SupportCounter::new(&idea, user.as_ref(), &ctx.services()) {
        Ok(counter) => counter,
        Err(err) => {
            log::error!("[SUPPORT] idea {}: {}", idea.number, err);
            return view! { <div class="support-counter ui"></div> }.into_any();
        }
    };

    let (state, set_state) = signal(counter.state());
    let disabled = counter.is_disabled();
    let counter = StoredValue::new_local(Rc::new(counter));
    let no_touch = if is_touch_device() { "" } else { "no-touch" };

    let on_click = move |_: web_sys::MouseEvent| {
        let counter = counter.get_value();
        spawn_local(async move {
            counter.support_or_undo().await;
            set_state.set(counter.state());
        });
    };

    let body = if disabled {
        view! {
            <div class="ui button disabled">
                <i class="medium caret up icon"></i>
                {move || state.get().total}
            </div>
        }
        .into_any()
    } else {
        view! {
            <button
                class=move || {
                    let supported = if state.get().supported { "supported" } else { "" };
                    format!("ui button {} {}", no_touch, supported)
                }
                on:click=on_click
            >
                <i class="medium caret up icon"></i>
                {move || state.get().total}
            </button>
        }
        .into_any()
    };

    view! { <div class="support-counter ui">{body}</div> }.into_any()
}
