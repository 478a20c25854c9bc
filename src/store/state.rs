//! Resource state reducer

use serde::Serialize;

use crate::models::{Entity, EntityId};

/// Transition of a [`ResourceState`]
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    /// A request started; clears the previous error
    FetchStart,
    FetchAllSuccess(Vec<T>),
    FetchOneSuccess(T),
    FetchError(String),
    CreateSuccess(T),
    BulkCreateSuccess(Vec<T>),
    UpdateSuccess(T),
    DeleteSuccess(EntityId),
    /// A request succeeded without touching the cached entities
    Settled,
}

/// Local, advisory copy of one resource
///
/// The server is authoritative: successful mutations overwrite the cached
/// entry with the server response, failures leave everything but `error` and
/// `loading` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Entity + Clone> ResourceState<T> {
    pub fn apply(&mut self, action: ResourceAction<T>) {
        match action {
            ResourceAction::FetchStart => {
                self.loading = true;
                self.error = None;
                return;
            }
            ResourceAction::FetchAllSuccess(items) => {
                self.items = items;
            }
            ResourceAction::FetchOneSuccess(item) => {
                self.selected = Some(item);
            }
            ResourceAction::FetchError(message) => {
                self.error = Some(message);
            }
            ResourceAction::CreateSuccess(item) => {
                self.items.push(item);
            }
            ResourceAction::BulkCreateSuccess(items) => {
                self.items.extend(items);
            }
            ResourceAction::UpdateSuccess(item) => {
                let id = item.id();
                if self.selected.as_ref().is_some_and(|s| s.id() == id) {
                    self.selected = Some(item.clone());
                }
                if let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == id) {
                    *slot = item;
                }
            }
            ResourceAction::DeleteSuccess(id) => {
                self.items.retain(|item| item.id() != id);
                if self.selected.as_ref().is_some_and(|s| s.id() == id) {
                    self.selected = None;
                }
            }
            ResourceAction::Settled => {}
        }
        self.loading = false;
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}
