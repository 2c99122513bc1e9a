use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient};
use crate::error::Result;

/// A workspace as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hourly_rate: Option<HourlyRate>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Monetary rate attached to workspaces and projects.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRate {
    pub amount: i64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Body for creating a workspace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    pub name: String,
}

impl ClockifyClient {
    /// Finds the workspaces accessible to the authenticated user.
    pub async fn get_workspaces(&self) -> Result<ApiResponse<Vec<Workspace>>> {
        let request = self.request(Method::GET, ApiSurface::Stable, "workspaces");
        self.execute(request).await
    }

    /// Creates a new workspace.
    pub async fn create_workspace(
        &self,
        workspace_request: &WorkspaceRequest,
    ) -> Result<ApiResponse<Workspace>> {
        let request = self
            .request(Method::POST, ApiSurface::Stable, "workspaces")
            .json(workspace_request);
        self.execute(request).await
    }

    /// Deletes a workspace. Served by the experimental surface.
    pub async fn delete_workspace(&self, id: &str) -> Result<ApiResponse<()>> {
        let path = format!("workspaces/{}", id);
        let request = self.request(Method::DELETE, ApiSurface::Experimental, &path);
        self.execute(request).await
    }
}
