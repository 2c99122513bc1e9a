use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient};
use crate::error::{require, Result};
use crate::workspaces::HourlyRate;

/// A project as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub hourly_rate: Option<HourlyRate>,
}

/// Body for creating a project. `name` and `color` are required; the rest
/// is omitted from the JSON when unset.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRate>,
}

impl ProjectRequest {
    /// Returns a request with the required fields set.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

impl ClockifyClient {
    /// Finds all projects on a workspace.
    pub async fn find_all_projects_on_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<ApiResponse<Vec<Project>>> {
        let path = format!("workspaces/{}/projects", workspace_id);
        let request = self.request(Method::GET, ApiSurface::Stable, &path);
        self.execute(request).await
    }

    /// Adds a new project to a workspace. Requires `name` and `color`.
    pub async fn create_project(
        &self,
        workspace_id: &str,
        project_request: &ProjectRequest,
    ) -> Result<ApiResponse<Project>> {
        require(&project_request.name, "name")?;
        require(&project_request.color, "color")?;
        let path = format!("workspaces/{}/projects", workspace_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(project_request);
        self.execute(request).await
    }

    /// Deletes a project. Served by the experimental surface.
    pub async fn delete_project(&self, workspace_id: &str, id: &str) -> Result<ApiResponse<()>> {
        let path = format!("workspaces/{}/projects/{}", workspace_id, id);
        let request = self.request(Method::DELETE, ApiSurface::Experimental, &path);
        self.execute(request).await
    }
}
