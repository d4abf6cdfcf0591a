//! Seams between page logic and the remote services.
//!
//! The front-end implements these over `gloo-net`; futures are `?Send`
//! because the browser runs everything on one thread.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Category, LinkType, Tag, error::ApiError, iterative::GithubCommit};

/// Response envelope of the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Business code, `200` on success.
    pub code: i32,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Payload.
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Business code the API uses for success.
    pub const OK: i32 = 200;

    /// Unwrap the payload or turn the code into an error.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.code == Self::OK {
            Ok(self.data)
        } else {
            Err(ApiError::Api {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// A server-owned collection that can be listed and deleted from.
#[async_trait(?Send)]
pub trait ListResource {
    /// Row type.
    type Entity: Clone;
    /// Filter body accepted by the list endpoint.
    type Query;

    /// List entities, optionally filtered. Server order is preserved.
    async fn list(&self, query: Option<&Self::Query>) -> Result<Vec<Self::Entity>, ApiError>;

    /// Delete one entity by id.
    async fn delete(&self, id: u32) -> Result<(), ApiError>;
}

/// A collection the console can also write to.
#[async_trait(?Send)]
pub trait MutableResource: ListResource {
    /// Create an entity that has no id yet.
    async fn create(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError>;

    /// Replace an existing entity.
    async fn update(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError>;
}

/// Reference lists used by filters and selects.
#[async_trait(?Send)]
pub trait TaxonomySource {
    /// Categories and navigation entries.
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Article tags.
    async fn tags(&self) -> Result<Vec<Tag>, ApiError>;

    /// Link directory types.
    async fn link_types(&self) -> Result<Vec<LinkType>, ApiError>;
}

/// Read-only commit history of a repository.
#[async_trait(?Send)]
pub trait CommitSource {
    /// The newest `per_page` commits of `repo`, newest first.
    async fn fetch_commits(&self, repo: &str, per_page: usize)
        -> Result<Vec<GithubCommit>, ApiError>;
}
