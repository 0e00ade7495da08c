use super::api;
use super::state::{ClauseField, QueryBuilderState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Owns the builder state for one mounted page and turns tickets into requests.
#[derive(Clone, Copy)]
pub struct QueryBuilderViewModel {
    pub state: RwSignal<QueryBuilderState>,
}

impl QueryBuilderViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(QueryBuilderState::default()),
        }
    }

    pub fn load_tables(&self) {
        let started = self
            .state
            .try_update(|s| s.begin_load_tables())
            .unwrap_or(false);
        if !started {
            return;
        }

        let state = self.state;
        spawn_local(async move {
            let result = api::fetch_tables().await;
            if let Err(e) = &result {
                log::error!("Fetch tables error: {}", e);
            }
            state.update(|s| s.finish_load_tables(result));
        });
    }

    pub fn select_table(&self, name: String) {
        let Some(ticket) = self.state.try_update(|s| s.select_table(&name)).flatten() else {
            return;
        };

        let state = self.state;
        spawn_local(async move {
            let result = api::fetch_columns(&ticket.table).await;
            if let Err(e) = &result {
                log::warn!("Fetch columns error for '{}': {}", ticket.table, e);
            }
            state.update(|s| {
                if !s.finish_load_columns(&ticket, result) {
                    log::debug!("Dropped stale column list for '{}'", ticket.table);
                }
            });
        });
    }

    pub fn toggle_column(&self, name: String, checked: bool) {
        self.state.update(|s| s.toggle_column(&name, checked));
    }

    pub fn add_clause(&self) {
        self.state.update(|s| {
            s.add_clause();
        });
    }

    pub fn remove_clause(&self, id: Uuid) {
        self.state.update(|s| s.remove_clause(id));
    }

    pub fn update_clause(&self, id: Uuid, field: ClauseField, value: String) {
        self.state.update(|s| s.update_clause(id, field, &value));
    }

    pub fn execute(&self) {
        let Some(ticket) = self.state.try_update(|s| s.execute()).flatten() else {
            return;
        };
        log::debug!(
            "Running query on '{}' ({} columns, {} clauses)",
            ticket.request.table,
            ticket.request.columns.len(),
            ticket.request.clauses.len()
        );

        let state = self.state;
        spawn_local(async move {
            let result = api::run_query(&ticket.request).await;
            if let Err(e) = &result {
                log::warn!("Execute query error: {}", e);
            }
            state.update(|s| {
                if !s.finish_execute(&ticket, result) {
                    log::debug!("Dropped stale query result for '{}'", ticket.request.table);
                }
            });
        });
    }

    pub fn is_executing(&self) -> bool {
        self.state.with(|s| s.is_executing)
    }
}
