use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient};
use crate::error::Result;

/// A client (customer) as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub workspace_id: Option<String>,
}

/// Body for creating a client on a workspace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub name: String,
}

impl ClockifyClient {
    /// Finds all clients on a workspace.
    pub async fn find_all_clients_on_workspace(
        &self,
        workspace_id: &str,
    ) -> Result<ApiResponse<Vec<Client>>> {
        let path = format!("workspaces/{}/clients", workspace_id);
        let request = self.request(Method::GET, ApiSurface::Stable, &path);
        self.execute(request).await
    }

    /// Adds a new client to a workspace.
    pub async fn create_client(
        &self,
        workspace_id: &str,
        client_request: &ClientRequest,
    ) -> Result<ApiResponse<Client>> {
        let path = format!("workspaces/{}/clients", workspace_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(client_request);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ClientRequest;
    use crate::client::ClockifyClient;

    #[tokio::test]
    async fn find_all_clients_decodes_the_list() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/w1/clients")
            .with_status(200)
            .with_body(
                json!([{"id": "c1", "name": "Globex", "workspaceId": "w1"}]).to_string(),
            )
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        let response = client.find_all_clients_on_workspace("w1").await.unwrap();

        mock.assert_async().await;
        let clients = response.data.unwrap();
        assert_eq!(clients[0].name, "Globex");
        assert_eq!(clients[0].workspace_id.as_deref(), Some("w1"));
    }

    #[tokio::test]
    async fn create_client_posts_a_camel_case_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/w1/clients")
            .match_body(mockito::Matcher::Json(json!({"name": "Globex"})))
            .with_status(201)
            .with_body(json!({"id": "c1", "name": "Globex"}).to_string())
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        let response = client
            .create_client(
                "w1",
                &ClientRequest {
                    name: "Globex".to_string(),
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.data.unwrap().id, "c1");
    }
}
