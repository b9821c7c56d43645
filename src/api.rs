//! HTTP API Client
//!
//! Read-only bindings to the project API (`/projects`, `/projects/{id}/tasks`).

use log::{info, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Project, Task};

/// A failed fetch. The payload is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("projects fetch failed: {0}")]
    Projects(String),
    #[error("tasks fetch failed: {0}")]
    Tasks(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Projects(msg) | ApiError::Tasks(msg) => msg,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.base())
    }

    pub fn tasks_url(&self, project_id: u32) -> String {
        format!("{}/projects/{}/tasks", self.base(), project_id)
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    // ========================
    // Project Requests
    // ========================

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.projects_url();
        info!("[API] GET {}", url);
        let projects: Vec<Project> = self.get_json(&url).await.map_err(ApiError::Projects)?;
        info!("[API] Loaded {} projects", projects.len());
        Ok(projects)
    }

    // ========================
    // Task Requests
    // ========================

    pub async fn fetch_tasks(&self, project_id: u32) -> Result<Vec<Task>, ApiError> {
        let url = self.tasks_url(project_id);
        info!("[API] GET {}", url);
        let tasks: Vec<Task> = self.get_json(&url).await.map_err(ApiError::Tasks)?;
        info!("[API] Loaded {} tasks for project {}", tasks.len(), project_id);
        Ok(tasks)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("[API] GET {} failed: {}", url, e);
            e.to_string()
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("[API] GET {} returned {}", url, status);
            return Err(status_message(status));
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        decode_body(&body)
    }
}

fn status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str(body).map_err(|e| format!("Invalid response body: {}", e))
}
