//! Test fakes and fixtures

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::error::{ServiceError, ServiceResult, SessionResult};
use crate::models::{CurrentUser, Idea, IdeaNumber, Role, Tag, User};
use crate::services::{IdeaService, Notifier, Services, SignInPrompt, TagService};
use crate::session::{CacheStore, PageGlobals, Session};

#[derive(Default)]
pub struct MemoryPage {
    values: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryPage {
    pub fn with(values: &[(&str, serde_json::Value)]) -> Self {
        let page = Self::default();
        for (key, value) in values {
            page.values.borrow_mut().insert(key.to_string(), value.clone());
        }
        page
    }
}

impl PageGlobals for MemoryPage {
    fn read(&self, key: &str) -> Option<serde_json::Value> {
        self.values
            .borrow()
            .get(key)
            .filter(|v| !v.is_null())
            .cloned()
    }

    fn write(&self, key: &str, value: serde_json::Value) -> SessionResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCache {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

pub fn memory_session(page: MemoryPage) -> (Session, Rc<MemoryCache>) {
    let cache = Rc::new(MemoryCache::default());
    (Session::new(Rc::new(page), cache.clone()), cache)
}

/// Session whose viewer has `role`, or is anonymous
pub fn session_for(role: Option<Role>) -> Session {
    let page = match role {
        Some(role) => MemoryPage::with(&[("user", serde_json::to_value(current_user(role)).unwrap())]),
        None => MemoryPage::default(),
    };
    memory_session(page).0
}

// ========================
// Scripted services
// ========================

#[derive(Default)]
pub struct FakeIdeaService {
    calls: RefCell<Vec<(&'static str, IdeaNumber)>>,
    failure: RefCell<Option<ServiceError>>,
}

impl FakeIdeaService {
    pub fn fail_with(&self, err: ServiceError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<(&'static str, IdeaNumber)> {
        self.calls.borrow().clone()
    }

    async fn respond(&self, op: &'static str, idea: IdeaNumber) -> ServiceResult<()> {
        self.calls.borrow_mut().push((op, idea));
        tokio::task::yield_now().await;
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl IdeaService for FakeIdeaService {
    async fn add_support(&self, idea: IdeaNumber) -> ServiceResult<()> {
        self.respond("add", idea).await
    }

    async fn remove_support(&self, idea: IdeaNumber) -> ServiceResult<()> {
        self.respond("remove", idea).await
    }
}

#[derive(Default)]
pub struct FakeTagService {
    calls: RefCell<Vec<(&'static str, String, IdeaNumber)>>,
    failure: RefCell<Option<ServiceError>>,
}

impl FakeTagService {
    pub fn fail_with(&self, err: ServiceError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<(&'static str, String, IdeaNumber)> {
        self.calls.borrow().clone()
    }

    async fn respond(&self, op: &'static str, slug: &str, idea: IdeaNumber) -> ServiceResult<()> {
        self.calls.borrow_mut().push((op, slug.to_string(), idea));
        tokio::task::yield_now().await;
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TagService for FakeTagService {
    async fn assign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()> {
        self.respond("assign", tag_slug, idea).await
    }

    async fn unassign(&self, tag_slug: &str, idea: IdeaNumber) -> ServiceResult<()> {
        self.respond("unassign", tag_slug, idea).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct CountingSignIn {
    count: Cell<u32>,
}

impl CountingSignIn {
    pub fn count(&self) -> u32 {
        self.count.get()
    }
}

impl SignInPrompt for CountingSignIn {
    fn show_sign_in(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Fakes for every widget collaborator
#[derive(Default)]
pub struct Harness {
    pub ideas: Rc<FakeIdeaService>,
    pub tags: Rc<FakeTagService>,
    pub notifier: Rc<RecordingNotifier>,
    pub sign_in: Rc<CountingSignIn>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> Services {
        Services {
            ideas: self.ideas.clone(),
            tags: self.tags.clone(),
            notifier: self.notifier.clone(),
            sign_in: self.sign_in.clone(),
        }
    }
}

// ========================
// Fixtures
// ========================

pub fn current_user(role: Role) -> CurrentUser {
    CurrentUser {
        id: 1,
        name: "Jon Snow".to_string(),
        email: Some("jon.snow@got.com".to_string()),
        role,
    }
}

pub fn tag(id: u32, slug: &str) -> Tag {
    Tag {
        id,
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        color: "FF0000".to_string(),
        is_public: true,
    }
}

pub fn idea(number: IdeaNumber, status: i32, viewer_supported: bool, total_supporters: i32) -> Idea {
    Idea {
        id: number + 100,
        number,
        slug: format!("idea-{}", number),
        title: format!("Idea #{}", number),
        description: String::new(),
        created_on: Utc.with_ymd_and_hms(2017, 6, 1, 10, 0, 0).unwrap(),
        status,
        user: User {
            id: 2,
            name: "Arya Stark".to_string(),
            role: Role::Visitor,
        },
        viewer_supported,
        response: None,
        total_supporters,
        total_comments: 0,
        tags: Vec::new(),
        ranking: 0.0,
    }
}

pub fn idea_with_tags(number: IdeaNumber, tags: &[u32]) -> Idea {
    Idea {
        tags: tags.to_vec(),
        ..idea(number, 0, false, 0)
    }
}
