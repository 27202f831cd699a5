//! Application Context
//!
//! Session and service collaborators provided via Leptos Context API.
//! Neither is reachable from `window`; components receive them only
//! through this context.

use leptos::prelude::*;

use crate::services::Services;
use crate::session::Session;

#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Session, LocalStorage>,
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(session: Session, services: Services) -> Self {
        Self {
            session: StoredValue::new_local(session),
            services: StoredValue::new_local(services),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }
}

/// Get the app context (panics outside `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
