//! Sign-in Modal
//!
//! Shown when an anonymous viewer tries an action that needs an account.

use leptos::prelude::*;

use crate::services::SignInPrompt;

/// `SignInPrompt` that opens the modal
#[derive(Clone, Copy)]
pub struct ModalSignIn {
    open: RwSignal<bool>,
}

impl ModalSignIn {
    pub fn new() -> Self {
        Self { open: RwSignal::new(false) }
    }
}

impl SignInPrompt for ModalSignIn {
    fn show_sign_in(&self) {
        log::debug!("[SIGNIN] prompting anonymous viewer");
        self.open.set(true);
    }
}

#[component]
pub fn SignInModal(prompt: ModalSignIn, #[prop(into)] tenant_name: String) -> impl IntoView {
    view! {
        <Show when=move || prompt.open.get()>
            <div class="ui dimmer modals visible active" on:click=move |_| prompt.open.set(false)>
                <div class="ui modal small visible active" on:click=|ev| ev.stop_propagation()>
                    <div class="header">{format!("Sign in to {}", tenant_name)}</div>
                    <div class="content">
                        <p>"You need to sign in before supporting ideas."</p>
                        <a class="ui primary button" href="/signin">"Sign in"</a>
                        <button class="ui button" on:click=move |_| prompt.open.set(false)>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
