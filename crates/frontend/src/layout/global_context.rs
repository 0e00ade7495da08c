use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Navigation state shared by the whole shell: open tabs, the active one, sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Bumped after every successful write; views showing server data refetch when it changes.
    pub data_revision: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            data_revision: RwSignal::new(0),
        }
    }

    /// Restores the tab named by `?active=` and keeps the URL in sync afterwards.
    ///
    /// Returns `true` when a tab was restored from the URL.
    pub fn init_router_integration(&self) -> bool {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let restored = match params.get("active") {
            Some(active_key) if !active_key.is_empty() => {
                self.open_tab(active_key, &tab_label_for_key(active_key));
                true
            }
            _ => false,
        };

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if let Err(e) =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                {
                    log::warn!("Failed to update URL: {:?}", e);
                }
            }
        });

        restored
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closes a tab; when it was active, the last remaining tab becomes active.
    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn mark_data_changed(&self) {
        self.data_revision.update(|rev| *rev += 1);
    }

    /// Leaves `done_key` for `next_key` after a successful write.
    ///
    /// Open tabs stay mounted, so the revision bump is what makes them reload.
    pub fn finish_write(&self, done_key: &str, next_key: &str, next_title: &str) {
        self.mark_data_changed();
        self.open_tab(next_key, next_title);
        self.close_tab(done_key);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tab_is_idempotent() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_employee", "Employees");
        ctx.open_tab("u101_query_builder", "Query Builder");
        ctx.open_tab("a001_employee", "Employees");

        assert_eq!(ctx.opened.get_untracked().len(), 2);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_employee"));
    }

    #[test]
    fn test_close_active_tab_activates_last() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_employee", "Employees");
        ctx.open_tab("a001_employee_columns", "Employee Columns");
        ctx.open_tab("a001_employee_new", "Add Employee");

        ctx.close_tab("a001_employee_new");
        assert_eq!(
            ctx.active.get_untracked().as_deref(),
            Some("a001_employee_columns")
        );

        ctx.activate_tab("a001_employee");
        ctx.close_tab("a001_employee_columns");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_employee"));

        ctx.close_tab("a001_employee");
        assert_eq!(ctx.active.get_untracked(), None);
    }

    #[test]
    fn test_finish_write_keeps_target_tab_and_bumps_revision() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_employee", "Employees");
        ctx.open_tab("a001_employee_detail_10001", "Employee #10001");
        let list_before = ctx.opened.get_untracked()[0].clone();
        let revision_before = ctx.data_revision.get_untracked();

        ctx.finish_write("a001_employee_detail_10001", "a001_employee", "Employees");

        // the list tab is reused, not remounted, so only the revision can trigger its reload
        assert_eq!(ctx.opened.get_untracked(), vec![list_before]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_employee"));
        assert_eq!(ctx.data_revision.get_untracked(), revision_before + 1);
    }

    #[test]
    fn test_finish_write_opens_missing_target() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_employee_new", "Add Employee");

        ctx.finish_write("a001_employee_new", "a001_employee", "Employees");

        let keys: Vec<String> = ctx.opened.get_untracked().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["a001_employee"]);
        assert_eq!(ctx.data_revision.get_untracked(), 1);
    }
}
