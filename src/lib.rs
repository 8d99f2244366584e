//! Core of a manual API testing console: a static catalog of known HTTP
//! endpoints, a fixed list of target environments with a persisted
//! selection, a request executor that never raises past its boundary, a
//! capped request history, and a health-report aggregator. State the
//! console keeps between sessions is persisted as JSON blobs through
//! [`store::FileStore`].

pub mod catalog;
pub mod domain;
pub mod errors;
pub mod executor;
pub mod history;
pub mod report;
pub mod store;

use log::{info, warn};

use crate::domain::endpoint::EndpointDescriptor;
use crate::domain::environment::Environment;
use crate::domain::history::HistoryEntry;
use crate::domain::report::HealthReport;
use crate::domain::response::ApiResponse;
use crate::domain::theme::Theme;
use crate::errors::{ConsoleError, Result};
use crate::history::History;
use crate::store::{keys, FileStore};

pub struct Console {
    client: reqwest::Client,
    environments: Vec<Environment>,
    catalog: Vec<EndpointDescriptor>,
    selected: usize,
    history: History,
    report: Option<HealthReport>,
    theme: Theme,
    store: FileStore,
}

impl Console {
    /// Open a console over the default catalog and environment list,
    /// restoring whatever state the store still holds.
    pub fn open(store: FileStore) -> Result<Self> {
        Self::open_with_environments(store, catalog::default_environments())
    }

    /// Open a console against a caller-supplied environment list. The first
    /// entry is the default selection; a persisted name that no longer
    /// matches any entry silently falls back to it.
    pub fn open_with_environments(
        store: FileStore,
        environments: Vec<Environment>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let catalog = catalog::endpoints();
        let selected = match store.get::<String>(keys::SELECTED_ENVIRONMENT) {
            Some(name) => match environments.iter().position(|e| e.name == name) {
                Some(index) => index,
                None => {
                    warn!("persisted environment {name:?} not in catalog, using default");
                    0
                }
            },
            None => 0,
        };
        let history = History::load(&store);
        let report = store.get(keys::HEALTH_REPORT);
        let theme = store.get(keys::THEME).unwrap_or_default();
        info!(
            "console opened, environment {:?}, {} history entries",
            environments[selected].name,
            history.len()
        );
        Ok(Console {
            client,
            environments,
            catalog,
            selected,
            history,
            report,
            theme,
            store,
        })
    }

    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    pub fn selected_environment(&self) -> &Environment {
        &self.environments[self.selected]
    }

    /// Switch the active environment and persist the choice by name.
    pub fn select_environment(&mut self, name: &str) -> Result<()> {
        let index = self
            .environments
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| ConsoleError::UnknownEnvironment(name.to_string()))?;
        self.selected = index;
        self.store
            .set(keys::SELECTED_ENVIRONMENT, &self.environments[index].name)
    }

    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.catalog
    }

    pub fn endpoint_groups(&self) -> Vec<String> {
        catalog::endpoint_groups(&self.catalog)
    }

    pub fn endpoints_in_group(&self, group: &str) -> Vec<&EndpointDescriptor> {
        catalog::endpoints_in_group(&self.catalog, group)
    }

    /// Execute one catalog endpoint against the selected environment and
    /// record it in the history. Success and error paths both land in the
    /// history; only an unknown id or a failed history write is an `Err`.
    pub async fn send(&mut self, endpoint_id: &str) -> Result<ApiResponse> {
        let endpoint = self
            .catalog
            .iter()
            .find(|e| e.id == endpoint_id)
            .ok_or_else(|| ConsoleError::UnknownEndpoint(endpoint_id.to_string()))?
            .clone();
        let environment = self.selected_environment().clone();
        let response = executor::execute(&self.client, &endpoint, &environment).await;
        self.history.record(
            HistoryEntry::new(endpoint, environment, response.clone()),
            &self.store,
        )?;
        Ok(response)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear(&self.store)
    }

    /// Run the aggregator against the selected environment and persist the
    /// resulting report wholesale.
    pub async fn generate_report(&mut self) -> Result<HealthReport> {
        let environment = self.selected_environment().clone();
        let report = report::generate(&self.client, &self.catalog, &environment).await;
        self.store.set(keys::HEALTH_REPORT, &report)?;
        self.report = Some(report.clone());
        Ok(report)
    }

    pub fn last_report(&self) -> Option<&HealthReport> {
        self.report.as_ref()
    }

    pub fn clear_report(&mut self) -> Result<()> {
        self.report = None;
        self.store.remove(keys::HEALTH_REPORT)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.set(keys::THEME, &theme)
    }
}
