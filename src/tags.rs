use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient};
use crate::error::{require, Result};

/// A tag as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub workspace_id: Option<String>,
}

/// Body for creating a tag. `name` is required.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TagRequest {
    /// Returns a request with the required field set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl ClockifyClient {
    /// Finds all tags on a workspace.
    pub async fn find_all_tags_on_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<ApiResponse<Vec<Tag>>> {
        let path = format!("workspaces/{}/tags", workspace_id);
        let request = self.request(Method::GET, ApiSurface::Stable, &path);
        self.execute(request).await
    }

    /// Adds a new tag to a workspace. Requires `name`.
    pub async fn create_tag(
        &self,
        workspace_id: &str,
        tag_request: &TagRequest,
    ) -> Result<ApiResponse<Tag>> {
        require(&tag_request.name, "name")?;
        let path = format!("workspaces/{}/tags", workspace_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(tag_request);
        self.execute(request).await
    }
}
