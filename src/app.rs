//! Feedback Frontend App
//!
//! Wires the session and services into context and renders the page the
//! server prepared: a single idea when `idea` is present, the list otherwise.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AlertBox, AlertNotifier, IdeaList, ModalSignIn, ShowIdea, SignInModal};
use crate::context::AppContext;
use crate::services::{ApiClient, HttpIdeaService, HttpTagService, Services};
use crate::session::Session;
use crate::store::{PageState, PageStateStoreFields};

#[component]
pub fn App(session: Session) -> impl IntoView {
    let notifier = AlertNotifier::new();
    let sign_in = ModalSignIn::new();
    let client = ApiClient::default();

    let services = Services {
        ideas: Rc::new(HttpIdeaService::new(client.clone())),
        tags: Rc::new(HttpTagService::new(client)),
        notifier: Rc::new(notifier),
        sign_in: Rc::new(sign_in),
    };

    let page = PageState::from_session(&session).unwrap_or_else(|err| {
        log::error!("[APP] page state unavailable: {}", err);
        PageState::default()
    });
    let tenant_name = match session.current_tenant() {
        Ok(tenant) => tenant.name,
        Err(err) => {
            log::warn!("[APP] {}", err);
            String::new()
        }
    };

    let store = Store::new(page);
    provide_context(store);
    provide_context(AppContext::new(session, services));

    let content = match store.idea().get_untracked() {
        Some(idea) => view! { <ShowIdea idea=idea /> }.into_any(),
        None => view! { <IdeaList ideas=store.ideas().get_untracked() /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <AlertBox notifier=notifier />
            <main class="main-content">{content}</main>
            <SignInModal prompt=sign_in tenant_name=tenant_name />
        </div>
    }
}
