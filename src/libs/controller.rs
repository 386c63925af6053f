//! Task view-controller: the single component mediating user input, API
//! calls, and rendering.
//!
//! The controller implements a `refresh-after-write` synchronization
//! policy: it never patches local state after a mutation. Every create,
//! toggle, or delete is followed by a full re-fetch of the collection
//! under the active filter, so the rendered list always equals the
//! server's response for that filter. The client holds no authoritative
//! copy of task state between renders.
//!
//! The controller is constructed from an explicit API client and filter
//! value, with no module-level globals, so independent instances can
//! point at different backends and tests can drive it against a mock
//! server.

use crate::api::TaskApi;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskForm};
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;

pub struct TaskController {
    api: TaskApi,
    filter: TaskFilter,
}

impl TaskController {
    pub fn new(api: TaskApi, filter: TaskFilter) -> Self {
        Self { api, filter }
    }

    pub fn active_filter(&self) -> TaskFilter {
        self.filter
    }

    /// Makes `filter` the sole active filter. The caller re-renders (and
    /// persists the UI state) afterwards.
    pub fn select_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Fetches the collection under the active filter and renders it.
    ///
    /// Fetch failures (network error, non-success status, or a body that
    /// is not JSON) are logged and collapse to the error placeholder; the
    /// failure is not retried.
    pub async fn refresh(&self) -> String {
        match self.api.fetch(self.filter).await {
            Ok(tasks) => View::tasks(&tasks),
            Err(e) => {
                msg_error!(Message::TasksFetchFailed(e.to_string()));
                View::error()
            }
        }
    }

    /// Submits a new task from the form.
    ///
    /// A title that is empty after trimming aborts before any network
    /// call. On success the form is cleared to its defaults and the
    /// rendered list under the active filter is returned. On failure the
    /// form keeps the user's input so they may retry, and the error
    /// propagates after being recorded.
    pub async fn submit(&self, form: &mut TaskForm) -> Result<String> {
        if form.title.trim().is_empty() {
            return Err(msg_error_anyhow!(Message::TitleRequired));
        }

        let task = form.clone().into_task();
        msg_debug!(format!("Sending task to back-end: {:?}", task));

        match self.api.create(&task).await {
            Ok(created) => {
                msg_debug!(format!("Task added successfully: {:?}", created));
                *form = TaskForm::default();
                msg_success!(Message::TaskCreated);
                Ok(self.refresh().await)
            }
            Err(e) => Err(msg_error_anyhow!(Message::TaskCreateFailed(e.to_string()))),
        }
    }

    /// Inverts a task's completion flag.
    ///
    /// The pre-toggle snapshot is the task as fetched under the active
    /// filter at the start of the operation; the update resends that
    /// snapshot wholesale with only `completed` inverted, without
    /// reconciling against concurrent server-side changes. The list is
    /// re-rendered whether or not the update succeeded.
    pub async fn toggle(&self, id: i64) -> Result<String> {
        let snapshot = match self.api.fetch(self.filter).await {
            Ok(tasks) => tasks,
            Err(e) => {
                msg_error!(Message::TasksFetchFailed(e.to_string()));
                return Ok(View::error());
            }
        };

        let Some(task) = snapshot.into_iter().find(|task| task.id == Some(id)) else {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        };

        let updated = Task {
            completed: !task.completed,
            ..task
        };
        if let Err(e) = self.api.update(id, &updated).await {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
        }

        Ok(self.refresh().await)
    }

    /// Deletes a task by id, then re-renders under the active filter
    /// regardless of the outcome. Delete failures are only logged.
    pub async fn delete(&self, id: i64) -> String {
        if let Err(e) = self.api.delete(id).await {
            msg_error!(Message::TaskDeleteFailed(e.to_string()));
        }

        self.refresh().await
    }
}
