//! Typed async client for the Clockify REST API.
//!
//! Every operation maps typed arguments onto one HTTP exchange: a templated
//! path, kebab-case query parameters for the filters that are set, a
//! camelCase JSON body for writes, and an [`ApiResponse`] carrying the
//! status, headers and decoded payload. The client holds no state beyond
//! two pre-configured transport handles (workspace and project deletion are
//! served by an experimental API surface) and never retries or interprets
//! remote errors.
//!
//! # Examples
//!
//! ```no_run
//! # async fn run() -> clockify_rs::Result<()> {
//! use clockify_rs::{ClockifyClient, ProjectRequest};
//!
//! let client = ClockifyClient::new("abc123")?;
//! let created = client
//!     .create_project("workspace-id", &ProjectRequest::new("Acme", "#FF0000"))
//!     .await?;
//! if let Some(project) = created.data {
//!     println!("created {}", project.id);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod clients;
mod error;
mod projects;
mod tags;
mod tasks;
mod templates;
mod time_entries;
mod users;
mod workspaces;

pub use client::{
    ApiResponse, ClockifyClient, API_KEY_ENV_VAR, API_KEY_HEADER, EXPERIMENTAL_BASE_URL,
    STABLE_BASE_URL,
};
pub use clients::{Client, ClientRequest};
pub use error::{Error, Result};
pub use projects::{Project, ProjectRequest};
pub use tags::{Tag, TagRequest};
pub use tasks::{Task, TaskListOptions, TaskRequest};
pub use templates::{
    ProjectTaskTuple, ProjectTaskTupleRequest, Template, TemplateGetOptions, TemplateListOptions,
    TemplatePatchRequest, TemplateRequest,
};
pub use time_entries::{
    TimeEntry, TimeEntryGetOptions, TimeEntryListOptions, TimeEntryRequest, TimeInterval,
    UpdateTimeEntryRequest,
};
pub use users::User;
pub use workspaces::{HourlyRate, Workspace, WorkspaceRequest};
