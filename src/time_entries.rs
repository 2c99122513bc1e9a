use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, ApiSurface, ClockifyClient, Query};
use crate::error::{require, Result};

/// A time entry as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag_ids: Option<Vec<String>>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub time_interval: Option<TimeInterval>,
}

/// Start/end/duration triple of a time entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// Body for creating a time entry. `start` is required; leaving `end`
/// unset starts the entry in stopwatch mode.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

impl TimeEntryRequest {
    /// Returns a request with the required field set.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }
}

/// Body for a full time-entry update. `start` and `billable` are required.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

impl UpdateTimeEntryRequest {
    /// Returns a request with the required fields set.
    pub fn new(start: DateTime<Utc>, billable: bool) -> Self {
        Self {
            start: Some(start),
            billable: Some(billable),
            ..Self::default()
        }
    }
}

/// Options for [`ClockifyClient::get_time_entry`].
#[derive(Clone, Debug, Default)]
pub struct TimeEntryGetOptions {
    pub consider_duration_format: bool,
    pub hydrated: bool,
}

/// Filters for [`ClockifyClient::find_all_time_entries_for_user`]. Unset
/// filters are omitted from the query; `page` and `page_size` are always
/// sent. Each filter maps to exactly one wire parameter.
#[derive(Clone, Debug)]
pub struct TimeEntryListOptions {
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub project: Option<String>,
    pub task: Option<String>,
    pub project_required: Option<bool>,
    pub task_required: Option<bool>,
    pub consider_duration_format: Option<bool>,
    pub hydrated: Option<bool>,
    pub in_progress: Option<bool>,
    pub page: i32,
    pub page_size: i32,
}

impl Default for TimeEntryListOptions {
    fn default() -> Self {
        Self {
            description: None,
            start: None,
            end: None,
            project: None,
            task: None,
            project_required: None,
            task_required: None,
            consider_duration_format: None,
            hydrated: None,
            in_progress: None,
            page: 1,
            page_size: 50,
        }
    }
}

fn rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl ClockifyClient {
    /// Adds a new time entry to a workspace. Requires `start`.
    pub async fn create_time_entry(
        &self,
        workspace_id: &str,
        time_entry_request: &TimeEntryRequest,
    ) -> Result<ApiResponse<TimeEntry>> {
        require(&time_entry_request.start, "start")?;
        let path = format!("workspaces/{}/time-entries", workspace_id);
        let request = self
            .request(Method::POST, ApiSurface::Stable, &path)
            .json(time_entry_request);
        self.execute(request).await
    }

    /// Gets a single time entry from a workspace.
    pub async fn get_time_entry(
        &self,
        workspace_id: &str,
        time_entry_id: &str,
        options: &TimeEntryGetOptions,
    ) -> Result<ApiResponse<TimeEntry>> {
        let path = format!("workspaces/{}/time-entries/{}", workspace_id, time_entry_id);
        let mut query = Query::new();
        query.set("consider-duration-format", options.consider_duration_format);
        query.set("hydrated", options.hydrated);
        let request = query.apply(self.request(Method::GET, ApiSurface::Stable, &path));
        self.execute(request).await
    }

    /// Replaces a time entry. Requires `start` and `billable`.
    pub async fn update_time_entry(
        &self,
        workspace_id: &str,
        time_entry_id: &str,
        update_request: &UpdateTimeEntryRequest,
    ) -> Result<ApiResponse<TimeEntry>> {
        require(&update_request.start, "start")?;
        require(&update_request.billable, "billable")?;
        let path = format!("workspaces/{}/time-entries/{}", workspace_id, time_entry_id);
        let request = self
            .request(Method::PUT, ApiSurface::Stable, &path)
            .json(update_request);
        self.execute(request).await
    }

    /// Deletes a time entry.
    pub async fn delete_time_entry(
        &self,
        workspace_id: &str,
        time_entry_id: &str,
    ) -> Result<ApiResponse<()>> {
        let path = format!("workspaces/{}/time-entries/{}", workspace_id, time_entry_id);
        let request = self.request(Method::DELETE, ApiSurface::Stable, &path);
        self.execute(request).await
    }

    /// Finds time entries for a user on a workspace.
    pub async fn find_all_time_entries_for_user(
        &self,
        workspace_id: &str,
        user_id: &str,
        options: &TimeEntryListOptions,
    ) -> Result<ApiResponse<Vec<TimeEntry>>> {
        let path = format!(
            "workspaces/{}/user/{}/time-entries",
            workspace_id, user_id
        );
        let mut query = Query::new();
        query.set_opt("description", &options.description);
        query.set_opt("start", &options.start.as_ref().map(rfc3339));
        query.set_opt("end", &options.end.as_ref().map(rfc3339));
        query.set_opt("project", &options.project);
        query.set_opt("task", &options.task);
        query.set_opt("project-required", &options.project_required);
        query.set_opt("task-required", &options.task_required);
        query.set_opt(
            "consider-duration-format",
            &options.consider_duration_format,
        );
        query.set_opt("hydrated", &options.hydrated);
        query.set_opt("in-progress", &options.in_progress);
        query.set("page", options.page);
        query.set("page-size", options.page_size);
        let request = query.apply(self.request(Method::GET, ApiSurface::Stable, &path));
        self.execute(request).await
    }
}
