//! Feedback Frontend Entry Point

mod app;
mod components;
mod context;
mod error;
mod format;
mod logger;
mod markdown;
mod models;
mod services;
mod session;
mod store;
mod widgets;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;
use session::Session;

fn main() {
    console_error_panic_hook::set_once();

    let session = Session::browser();
    let settings = session.app_settings().ok();
    if let Err(e) = logger::init(logger::level_for(settings.as_ref())) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    if let Some(settings) = &settings {
        log::info!(
            "[APP] starting ({}, {} mode, v{})",
            settings.environment,
            settings.mode,
            settings.version
        );
    }

    mount_to_body(move || view! { <App session=session /> });
}
