//! Generic CRUD over a REST resource

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::EntityId;

/// Static description of a REST resource
pub trait Resource: Send + Sync + 'static {
    /// Collection path, without slashes (`"users"`)
    const PATH: &'static str;
    /// Human name of one entity, used in user-facing messages
    const SINGULAR: &'static str;
    /// Human name of the collection
    const PLURAL: &'static str;

    type Entity: crate::models::Entity + DeserializeOwned + Clone + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    fn collection_path() -> String {
        format!("/{}", Self::PATH)
    }

    fn item_path(id: EntityId) -> String {
        format!("/{}/{}", Self::PATH, id)
    }
}

/// Typed request builders for one resource
pub struct ResourceApi<'a, R: Resource> {
    pub(crate) client: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceApi<'a, R> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `GET /<resource>`
    pub async fn get_all(&self) -> Result<Vec<R::Entity>, ApiError> {
        self.client.get(&R::collection_path()).await
    }

    /// `GET /<resource>/:id`
    pub async fn get_by_id(&self, id: EntityId) -> Result<R::Entity, ApiError> {
        self.client.get(&R::item_path(id)).await
    }

    /// `POST /<resource>`
    pub async fn create(&self, dto: &R::Create) -> Result<R::Entity, ApiError> {
        self.client.post(&R::collection_path(), dto).await
    }

    /// `PATCH /<resource>/:id`
    pub async fn update(&self, id: EntityId, dto: &R::Update) -> Result<R::Entity, ApiError> {
        self.client.patch(&R::item_path(id), dto).await
    }

    /// `DELETE /<resource>/:id`
    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&R::item_path(id)).await
    }

    /// Number of entities returned by `get_all`
    pub async fn count(&self) -> Result<usize, ApiError> {
        Ok(self.get_all().await?.len())
    }
}
