//! Application Context
//!
//! Store plus API client, provided via the Leptos Context API. All user
//! actions that trigger a fetch go through here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};

use crate::api::ApiClient;
use crate::store::{DashboardStateStoreFields, DashboardStore};

#[derive(Clone, Copy)]
pub struct DashboardContext {
    store: DashboardStore,
    client: StoredValue<ApiClient, LocalStorage>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, client: ApiClient) -> Self {
        Self {
            store,
            client: StoredValue::new_local(client),
        }
    }

    /// Fetch the project list (once at startup, again on retry)
    pub fn load_projects(&self) {
        let store = self.store;
        let client = self.client.get_value();
        let token = store.projects().write().begin();

        spawn_local(async move {
            let result = client.fetch_projects().await;
            if store.projects().with_untracked(|p| p.is_current(token)) {
                store.projects().write().resolve(token, result);
            } else {
                debug!("[CTX] Discarding superseded project response");
            }
        });
    }

    /// Show the task tree of `project_id`, replacing whatever is shown
    pub fn select_project(&self, project_id: u32) {
        let store = self.store;
        let client = self.client.get_value();
        let token = store.write().select_project(project_id);
        info!("[CTX] Selected project {}", project_id);

        spawn_local(async move {
            let result = client.fetch_tasks(project_id).await;
            if store.tasks().with_untracked(|t| t.is_current(token)) {
                store.tasks().write().resolve(token, result);
            } else {
                debug!("[CTX] Discarding stale tasks for project {}", project_id);
            }
        });
    }

    /// Retry the task request for the current selection
    pub fn reload_tasks(&self) {
        if let Some(project_id) = self.store.selected_project().get_untracked() {
            self.select_project(project_id);
        }
    }

    pub fn close_tasks(&self) {
        self.store.write().close_tasks();
        info!("[CTX] Task view closed");
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
