use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient};
use crate::error::Result;

/// A user as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub active_workspace: Option<String>,
    #[serde(default)]
    pub default_workspace: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ClockifyClient {
    /// Finds all users on a workspace.
    pub async fn find_all_users_on_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<ApiResponse<Vec<User>>> {
        let path = format!("workspaces/{}/users", workspace_id);
        let request = self.request(Method::GET, ApiSurface::Stable, &path);
        self.execute(request).await
    }

    /// Gets the currently authenticated user.
    pub async fn get_current_user(&self) -> Result<ApiResponse<User>> {
        let request = self.request(Method::GET, ApiSurface::Stable, "user");
        self.execute(request).await
    }
}
