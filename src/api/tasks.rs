//! HTTP client for the task API.
//!
//! Wraps the four REST operations the client consumes: filtered list,
//! create, full-object update, and delete. All bodies are JSON. The
//! client is stateless apart from the connection pool and carries the
//! base URL it was constructed with, so independent instances can point
//! at different backends.

use crate::libs::config::Config;
use crate::libs::task::{Task, TaskFilter};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Errors produced by task API calls.
///
/// Distinguishes the failure classes the client reacts to: the network
/// round trip itself, a non-success HTTP status, and a response body that
/// fails to decode as JSON. None of them is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Classifies a reqwest error into the transport or decode class.
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Task API client addressing the collection at a fixed base URL.
#[derive(Debug, Clone)]
pub struct TaskApi {
    /// HTTP client for making API requests with connection pooling
    client: Client,
    /// Base URL of the task collection, e.g. `http://localhost:5000/api/tasks`
    base_url: String,
}

impl TaskApi {
    /// Creates a client from the application configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_url())
    }

    /// Creates a client addressing an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the task collection for a filter.
    ///
    /// `GET {base}?filter={all|active|completed}`
    pub async fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>, ApiError> {
        let url = format!("{}?filter={}", self.base_url, filter.as_str());
        let response = self.client.get(&url).send().await.map_err(ApiError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<Vec<Task>>().await.map_err(ApiError::from_reqwest)
    }

    /// Creates a task and returns the server's copy, including the
    /// assigned `id`.
    ///
    /// `POST {base}`
    pub async fn create(&self, task: &Task) -> Result<Task, ApiError> {
        let response = self.client.post(&self.base_url).json(task).send().await.map_err(ApiError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<Task>().await.map_err(ApiError::from_reqwest)
    }

    /// Updates a task by resending the full object. The response body is
    /// ignored.
    ///
    /// `PUT {base}/{id}`
    pub async fn update(&self, id: i64, task: &Task) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.put(&url).json(task).send().await.map_err(ApiError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }

    /// Deletes a task by id. The response body is ignored.
    ///
    /// `DELETE {base}/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await.map_err(ApiError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }
}
