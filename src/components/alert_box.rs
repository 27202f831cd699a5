//! Alert Box
//!
//! Page-wide notices for failed actions. Each notice dismisses itself
//! after a few seconds or on click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::Notifier;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// `Notifier` that pushes into the alert box
#[derive(Clone, Copy)]
pub struct AlertNotifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u32>,
}

impl AlertNotifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }
}

impl Notifier for AlertNotifier {
    fn error(&self, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|notices| {
            notices.push(Notice {
                id,
                message: message.to_string(),
            })
        });

        let notifier = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notifier.dismiss(id);
        });
    }
}

#[component]
pub fn AlertBox(notifier: AlertNotifier) -> impl IntoView {
    view! {
        <div class="alert-box">
            <For
                each=move || notifier.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="ui negative message" on:click=move |_| notifier.dismiss(id)>
                            <i class="close icon"></i>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
