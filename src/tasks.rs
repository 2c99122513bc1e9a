use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient, Query};
use crate::error::{require, Result};

/// A task on a project as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub estimate: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for creating a task. `name` is required.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TaskRequest {
    /// Returns a request with the required field set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Filters for [`ClockifyClient::find_all_tasks`]. Unset filters are
/// omitted from the query; `page` and `page_size` are always sent.
#[derive(Clone, Debug)]
pub struct TaskListOptions {
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub page: i32,
    pub page_size: i32,
}

impl Default for TaskListOptions {
    fn default() -> Self {
        Self {
            is_active: None,
            name: None,
            page: 1,
            page_size: 50,
        }
    }
}

impl ClockifyClient {
    /// Finds tasks on a project.
    pub async fn find_all_tasks(
        &self,
        workspace_id: &str,
        project_id: &str,
        options: &TaskListOptions,
    ) -> Result<ApiResponse<Vec<Task>>> {
        let path = format!("workspaces/{}/projects/{}/tasks", workspace_id, project_id);
        let mut query = Query::new();
        query.set_opt("is-active", &options.is_active);
        query.set_opt("name", &options.name);
        query.set("page", options.page);
        query.set("page-size", options.page_size);
        let request = query.apply(self.request(Method::GET, ApiSurface::Stable, &path));
        self.execute(request).await
    }

    /// Adds a new task to a project. Requires `name`.
    pub async fn create_task(
        &self,
        workspace_id: &str,
        project_id: &str,
        task_request: &TaskRequest,
    ) -> Result<ApiResponse<Task>> {
        require(&task_request.name, "name")?;
        let path = format!("workspaces/{}/projects/{}/tasks", workspace_id, project_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(task_request);
        self.execute(request).await
    }
}
