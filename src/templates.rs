use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient, Query};
use crate::error::{require, Result};

/// A time-entry template as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub projects_and_tasks: Option<Vec<ProjectTaskTuple>>,
}

/// One project/task assignment inside a template.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskTuple {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// Body for saving templates. `name` and `projects_and_tasks` are required,
/// and every tuple must carry both IDs.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_and_tasks: Option<Vec<ProjectTaskTupleRequest>>,
}

/// Write-side project/task assignment.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskTupleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl TemplateRequest {
    /// Returns a request with the required fields set.
    pub fn new(
        name: impl Into<String>,
        projects_and_tasks: Vec<ProjectTaskTupleRequest>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            projects_and_tasks: Some(projects_and_tasks),
        }
    }

    fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.projects_and_tasks, "projects_and_tasks")?;
        for tuple in self.projects_and_tasks.iter().flatten() {
            require(&tuple.project_id, "project_id")?;
            require(&tuple.task_id, "task_id")?;
        }
        Ok(())
    }
}

/// Body for renaming a template. `name` is required.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TemplatePatchRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Filters for [`ClockifyClient::find_all_templates_on_workspace`]. The
/// remote listing defaults to a page size of one.
#[derive(Clone, Debug)]
pub struct TemplateListOptions {
    pub name: Option<String>,
    pub cleansed: bool,
    pub hydrated: bool,
    pub page: i32,
    pub page_size: i32,
}

impl Default for TemplateListOptions {
    fn default() -> Self {
        Self {
            name: None,
            cleansed: false,
            hydrated: false,
            page: 1,
            page_size: 1,
        }
    }
}

/// Options for [`ClockifyClient::get_template`].
#[derive(Clone, Debug, Default)]
pub struct TemplateGetOptions {
    pub cleansed: bool,
    pub hydrated: bool,
}

impl ClockifyClient {
    /// Finds templates for the current user on a workspace.
    pub async fn find_all_templates_on_workspace(
        &self,
        workspace_id: &str,
        options: &TemplateListOptions,
    ) -> Result<ApiResponse<Vec<Template>>> {
        let path = format!("workspaces/{}/templates", workspace_id);
        let mut query = Query::new();
        query.set_opt("name", &options.name);
        query.set("cleansed", options.cleansed);
        query.set("hydrated", options.hydrated);
        query.set("page", options.page);
        query.set("page-size", options.page_size);
        let request = query.apply(self.request(Method::GET, ApiSurface::Stable, &path));
        self.execute(request).await
    }

    /// Gets a single template from a workspace.
    pub async fn get_template(
        &self,
        workspace_id: &str,
        template_id: &str,
        options: &TemplateGetOptions,
    ) -> Result<ApiResponse<Template>> {
        let path = format!("workspaces/{}/templates/{}", workspace_id, template_id);
        let mut query = Query::new();
        query.set("cleansed", options.cleansed);
        query.set("hydrated", options.hydrated);
        let request = query.apply(self.request(Method::GET, ApiSurface::Stable, &path));
        self.execute(request).await
    }

    /// Saves templates to a workspace. The body is a JSON array; every
    /// request must carry a name and fully-populated project/task tuples.
    pub async fn create_templates(
        &self,
        workspace_id: &str,
        template_requests: &[TemplateRequest],
    ) -> Result<ApiResponse<Vec<Template>>> {
        for template_request in template_requests {
            template_request.validate()?;
        }
        let path = format!("workspaces/{}/templates", workspace_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(template_requests);
        self.execute(request).await
    }

    /// Renames a template. Requires `name`.
    pub async fn update_template(
        &self,
        workspace_id: &str,
        template_id: &str,
        patch_request: &TemplatePatchRequest,
    ) -> Result<ApiResponse<Template>> {
        require(&patch_request.name, "name")?;
        let path = format!("workspaces/{}/templates/{}", workspace_id, template_id);
        let request = self
            .request(Method::PATCH, ApiSurface::Stable, &path)
            .json(patch_request);
        self.execute(request).await
    }

    /// Deletes a template and returns it.
    pub async fn delete_template(
        &self,
        workspace_id: &str,
        template_id: &str,
    ) -> Result<ApiResponse<Template>> {
        let path = format!("workspaces/{}/templates/{}", workspace_id, template_id);
        let request = self.request(Method::DELETE, ApiSurface::Stable, &path);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::{
        ProjectTaskTupleRequest, TemplateGetOptions, TemplateListOptions, TemplatePatchRequest,
        TemplateRequest,
    };
    use crate::client::ClockifyClient;
    use crate::error::Error;

    fn tuple(project_id: &str, task_id: &str) -> ProjectTaskTupleRequest {
        ProjectTaskTupleRequest {
            project_id: Some(project_id.to_string()),
            task_id: Some(task_id.to_string()),
        }
    }

    #[tokio::test]
    async fn find_all_templates_always_sends_the_flag_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/w1/templates")
            .match_query(Matcher::Exact(
                "cleansed=false&hydrated=false&page=1&page-size=1".to_string(),
            ))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        client
            .find_all_templates_on_workspace("w1", &TemplateListOptions::default())
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_template_sends_both_flags() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/w1/templates/tp1")
            .match_query(Matcher::Exact("cleansed=false&hydrated=true".to_string()))
            .with_status(200)
            .with_body(json!({"id": "tp1", "name": "Standup"}).to_string())
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        let options = TemplateGetOptions {
            hydrated: true,
            ..TemplateGetOptions::default()
        };
        let response = client.get_template("w1", "tp1", &options).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.data.unwrap().name, "Standup");
    }

    #[tokio::test]
    async fn create_templates_posts_a_json_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/w1/templates")
            .match_body(Matcher::Json(json!([{
                "name": "Standup",
                "projectsAndTasks": [{"projectId": "p1", "taskId": "t1"}]
            }])))
            .with_status(201)
            .with_body(json!([{"id": "tp1", "name": "Standup"}]).to_string())
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        let requests = vec![TemplateRequest::new("Standup", vec![tuple("p1", "t1")])];
        let response = client.create_templates("w1", &requests).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_templates_checks_every_tuple_before_dispatch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces/w1/templates")
            .expect(0)
            .create_async()
            .await;
        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();

        let missing_task = vec![TemplateRequest::new(
            "Standup",
            vec![ProjectTaskTupleRequest {
                project_id: Some("p1".to_string()),
                task_id: None,
            }],
        )];
        let err = client
            .create_templates("w1", &missing_task)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("task_id")));

        let missing_tuples = vec![TemplateRequest {
            name: Some("Standup".to_string()),
            projects_and_tasks: None,
        }];
        let err = client
            .create_templates("w1", &missing_tuples)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("projects_and_tasks")));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_template_patches_the_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/workspaces/w1/templates/tp1")
            .match_body(Matcher::Json(json!({"name": "Planning"})))
            .with_status(200)
            .with_body(json!({"id": "tp1", "name": "Planning"}).to_string())
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &server.url(), &server.url()).unwrap();
        let response = client
            .update_template("w1", "tp1", &TemplatePatchRequest::new("Planning"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.data.unwrap().name, "Planning");
    }

    #[tokio::test]
    async fn delete_template_stays_on_the_stable_surface() {
        let mut stable = mockito::Server::new_async().await;
        let mut experimental = mockito::Server::new_async().await;
        let stable_mock = stable
            .mock("DELETE", "/workspaces/w1/templates/tp1")
            .with_status(200)
            .with_body(json!({"id": "tp1", "name": "Standup"}).to_string())
            .create_async()
            .await;
        let experimental_mock = experimental
            .mock("DELETE", "/workspaces/w1/templates/tp1")
            .expect(0)
            .create_async()
            .await;

        let client =
            ClockifyClient::with_base_urls("abc123", &stable.url(), &experimental.url()).unwrap();
        let response = client.delete_template("w1", "tp1").await.unwrap();

        stable_mock.assert_async().await;
        experimental_mock.assert_async().await;
        assert_eq!(response.data.unwrap().id, "tp1");
    }
}
