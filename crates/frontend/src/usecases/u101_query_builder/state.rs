//! Query builder state machine
//!
//! Plain data plus transitions, no signals and no I/O. Every transition that
//! needs the network returns a ticket; the view model performs the request and
//! hands the outcome back together with the ticket. A ticket carries the table
//! generation it was issued for, so completions that arrive after the table
//! changed are dropped instead of overwriting the new table's state.

use crate::shared::api_utils::ApiResult;
use crate::shared::status_message::StatusMessage;
use contracts::usecases::u101_query_builder::{
    ComparisonOperator, QueryClause, QueryRequest, QueryRow,
};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Shown for any failure of the table list, whatever the server said.
pub const TABLES_UNAVAILABLE: &str = "Could not fetch tables. Is the backend server running?";
pub const NO_ROWS: &str = "Query executed successfully, but returned no results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TablesLoading,
    TablesLoaded,
    TablesLoadFailed,
    ColumnsLoading,
    ColumnsLoaded,
    ColumnsLoadFailed,
    ValidationFailed,
    Executing,
    ResultsReady,
    ExecutionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryValidationError {
    #[error("Please select a table.")]
    NoTable,
    #[error("Please select at least one column to display.")]
    NoColumns,
}

/// Filter row as edited on screen. `id` only keys the row in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseDraft {
    pub id: Uuid,
    pub column: String,
    pub operator: ComparisonOperator,
    pub value: String,
}

impl ClauseDraft {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            column: String::new(),
            operator: ComparisonOperator::default(),
            value: String::new(),
        }
    }

    /// Column chosen and value not blank
    pub fn is_submittable(&self) -> bool {
        !self.column.is_empty() && !self.value.trim().is_empty()
    }

    pub fn to_clause(&self) -> QueryClause {
        QueryClause {
            column: self.column.clone(),
            operator: self.operator,
            value: self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseField {
    Column,
    Operator,
    Value,
}

/// Permission to load the columns of `table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsTicket {
    pub generation: u64,
    pub table: String,
}

/// Permission to send `request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilderState {
    pub phase: Phase,
    pub tables: Vec<String>,
    pub selected_table: String,
    pub columns: Vec<String>,
    pub selected_columns: HashMap<String, bool>,
    pub clauses: Vec<ClauseDraft>,
    pub results: Vec<QueryRow>,
    pub message: Option<StatusMessage>,
    pub is_executing: bool,
    generation: u64,
}

impl Default for QueryBuilderState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            tables: Vec::new(),
            selected_table: String::new(),
            columns: Vec::new(),
            selected_columns: HashMap::new(),
            clauses: Vec::new(),
            results: Vec::new(),
            message: None,
            is_executing: false,
            generation: 0,
        }
    }
}

impl QueryBuilderState {
    // ── Table discovery ─────────────────────────────────────────────────

    /// Returns true when the table list should be requested now.
    ///
    /// Only the first call after mount does; failures are not retried.
    pub fn begin_load_tables(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::TablesLoading;
        true
    }

    pub fn finish_load_tables(&mut self, result: ApiResult<Vec<String>>) {
        match result {
            Ok(tables) => {
                self.tables = tables;
                self.phase = Phase::TablesLoaded;
            }
            Err(_) => {
                self.tables.clear();
                self.message = Some(StatusMessage::error(TABLES_UNAVAILABLE));
                self.phase = Phase::TablesLoadFailed;
            }
        }
    }

    /// Switches to `name` (or to no table when empty) and wipes everything
    /// derived from the previous table in the same step.
    ///
    /// Names outside the loaded table list are ignored. Returns the ticket for
    /// the column request when a table was picked.
    pub fn select_table(&mut self, name: &str) -> Option<ColumnsTicket> {
        if !name.is_empty() && !self.tables.iter().any(|t| t == name) {
            log::warn!("Ignoring selection of unknown table '{}'", name);
            return None;
        }

        self.generation += 1;
        self.selected_table = name.to_string();
        self.columns.clear();
        self.selected_columns.clear();
        self.clauses.clear();
        self.results.clear();
        self.message = None;
        self.is_executing = false;

        if name.is_empty() {
            self.phase = Phase::TablesLoaded;
            return None;
        }
        self.phase = Phase::ColumnsLoading;
        Some(ColumnsTicket {
            generation: self.generation,
            table: name.to_string(),
        })
    }

    /// Applies a column response. Returns false if it was stale and dropped.
    pub fn finish_load_columns(
        &mut self,
        ticket: &ColumnsTicket,
        result: ApiResult<Vec<String>>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match result {
            Ok(columns) => {
                self.selected_columns = columns.iter().map(|c| (c.clone(), false)).collect();
                self.columns = columns;
                self.phase = Phase::ColumnsLoaded;
            }
            Err(e) => {
                self.columns.clear();
                self.selected_columns.clear();
                self.message = Some(StatusMessage::error(e.to_string()));
                self.phase = Phase::ColumnsLoadFailed;
            }
        }
        true
    }

    // ── Projection and filters ──────────────────────────────────────────

    pub fn toggle_column(&mut self, name: &str, checked: bool) {
        if self.columns.iter().any(|c| c == name) {
            self.selected_columns.insert(name.to_string(), checked);
        }
    }

    pub fn is_column_checked(&self, name: &str) -> bool {
        self.selected_columns.get(name).copied().unwrap_or(false)
    }

    /// Checked columns in the order the backend listed them.
    pub fn checked_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| self.is_column_checked(c))
            .cloned()
            .collect()
    }

    pub fn add_clause(&mut self) -> Uuid {
        let clause = ClauseDraft::new();
        let id = clause.id;
        self.clauses.push(clause);
        id
    }

    pub fn remove_clause(&mut self, id: Uuid) {
        self.clauses.retain(|c| c.id != id);
    }

    /// Unknown ids and unknown operator symbols leave the list untouched.
    pub fn update_clause(&mut self, id: Uuid, field: ClauseField, value: &str) {
        let Some(clause) = self.clauses.iter_mut().find(|c| c.id == id) else {
            return;
        };
        match field {
            ClauseField::Column => clause.column = value.to_string(),
            ClauseField::Operator => {
                if let Some(op) = ComparisonOperator::from_symbol(value) {
                    clause.operator = op;
                }
            }
            ClauseField::Value => clause.value = value.to_string(),
        }
    }

    pub fn submittable_clauses(&self) -> Vec<QueryClause> {
        self.clauses
            .iter()
            .filter(|c| c.is_submittable())
            .map(ClauseDraft::to_clause)
            .collect()
    }

    // ── Execution ───────────────────────────────────────────────────────

    pub fn build_request(&self) -> Result<QueryRequest, QueryValidationError> {
        if self.selected_table.is_empty() {
            return Err(QueryValidationError::NoTable);
        }
        let columns = self.checked_columns();
        if columns.is_empty() {
            return Err(QueryValidationError::NoColumns);
        }
        Ok(QueryRequest {
            table: self.selected_table.clone(),
            columns,
            clauses: self.submittable_clauses(),
        })
    }

    pub fn can_execute(&self) -> bool {
        !self.is_executing && !self.columns.is_empty()
    }

    /// Validates and, when valid, marks the query in flight.
    ///
    /// No ticket means nothing may be sent: either validation failed (the
    /// message says why) or a query is already running.
    pub fn execute(&mut self) -> Option<QueryTicket> {
        if self.is_executing {
            return None;
        }
        match self.build_request() {
            Err(e) => {
                self.message = Some(StatusMessage::error(e.to_string()));
                self.phase = Phase::ValidationFailed;
                None
            }
            Ok(request) => {
                self.is_executing = true;
                self.message = None;
                self.results.clear();
                self.phase = Phase::Executing;
                Some(QueryTicket {
                    generation: self.generation,
                    request,
                })
            }
        }
    }

    /// Applies a query response. Returns false if it was stale and dropped.
    pub fn finish_execute(
        &mut self,
        ticket: &QueryTicket,
        result: ApiResult<Vec<QueryRow>>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.is_executing = false;
        match result {
            Ok(rows) => {
                self.message = rows.is_empty().then(|| StatusMessage::info(NO_ROWS));
                self.results = rows;
                self.phase = Phase::ResultsReady;
            }
            Err(e) => {
                self.results.clear();
                self.message = Some(StatusMessage::error(e.to_string()));
                self.phase = Phase::ExecutionFailed;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::shared::status_message::MessageKind;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn loaded() -> QueryBuilderState {
        let mut state = QueryBuilderState::default();
        assert!(state.begin_load_tables());
        state.finish_load_tables(Ok(strings(&["departments", "employees", "salaries"])));
        state
    }

    fn with_columns(table: &str, columns: &[&str]) -> QueryBuilderState {
        let mut state = loaded();
        let ticket = state.select_table(table).unwrap();
        assert!(state.finish_load_columns(&ticket, Ok(strings(columns))));
        state
    }

    fn employees() -> QueryBuilderState {
        with_columns(
            "employees",
            &["emp_no", "birth_date", "first_name", "last_name", "gender", "hire_date"],
        )
    }

    #[test]
    fn test_tables_load_once() {
        let mut state = QueryBuilderState::default();
        assert!(state.begin_load_tables());
        assert_eq!(state.phase, Phase::TablesLoading);
        assert!(!state.begin_load_tables());
    }

    #[test]
    fn test_tables_failure_uses_fixed_message() {
        let mut state = QueryBuilderState::default();
        state.begin_load_tables();
        state.finish_load_tables(Err(ApiError::Http {
            status: 500,
            message: "Access denied for user 'root'".into(),
        }));
        assert_eq!(state.phase, Phase::TablesLoadFailed);
        assert_eq!(state.message, Some(StatusMessage::error(TABLES_UNAVAILABLE)));
        assert!(!state.begin_load_tables());
    }

    #[test]
    fn test_unknown_table_cannot_be_selected() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let before = state.clone();
        assert_eq!(state.select_table("titles"), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_table_change_resets_derived_state_before_column_load() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let id = state.add_clause();
        state.update_clause(id, ClauseField::Column, "gender");
        state.message = Some(StatusMessage::error("old"));

        let ticket = state.select_table("salaries").unwrap();
        assert_eq!(ticket.table, "salaries");
        assert_eq!(state.phase, Phase::ColumnsLoading);
        assert!(state.columns.is_empty());
        assert!(state.selected_columns.is_empty());
        assert!(state.clauses.is_empty());
        assert!(state.results.is_empty());
        assert_eq!(state.message, None);

        assert!(state.finish_load_columns(&ticket, Ok(strings(&["emp_no", "salary"]))));
        assert!(!state.is_column_checked("emp_no"));
        assert_eq!(state.selected_columns.len(), 2);
    }

    #[test]
    fn test_deselecting_table_issues_no_request() {
        let mut state = employees();
        assert_eq!(state.select_table(""), None);
        assert_eq!(state.phase, Phase::TablesLoaded);
        assert!(state.columns.is_empty());
    }

    #[test]
    fn test_stale_column_response_is_discarded() {
        let mut state = loaded();
        let first = state.select_table("employees").unwrap();
        let second = state.select_table("departments").unwrap();

        assert!(!state.finish_load_columns(&first, Ok(strings(&["emp_no", "first_name"]))));
        assert!(state.columns.is_empty());
        assert_eq!(state.phase, Phase::ColumnsLoading);

        assert!(state.finish_load_columns(&second, Ok(strings(&["dept_no", "dept_name"]))));
        assert_eq!(state.columns, strings(&["dept_no", "dept_name"]));
    }

    #[test]
    fn test_column_load_failure() {
        let mut state = loaded();
        let ticket = state.select_table("employees").unwrap();
        state.finish_load_columns(
            &ticket,
            Err(ApiError::Http {
                status: 404,
                message: "Invalid table name".into(),
            }),
        );
        assert_eq!(state.phase, Phase::ColumnsLoadFailed);
        assert!(state.columns.is_empty());
        assert_eq!(state.message, Some(StatusMessage::error("Invalid table name")));
        assert!(!state.can_execute());
    }

    #[test]
    fn test_toggle_ignores_unknown_column() {
        let mut state = employees();
        state.toggle_column("salary", true);
        assert!(!state.selected_columns.contains_key("salary"));
        state.toggle_column("gender", true);
        assert!(state.is_column_checked("gender"));
        state.toggle_column("gender", false);
        assert!(!state.is_column_checked("gender"));
    }

    #[test]
    fn test_clause_list_editing() {
        let mut state = employees();
        let a = state.add_clause();
        let b = state.add_clause();
        assert_ne!(a, b);
        assert_eq!(state.clauses[0].operator, ComparisonOperator::Eq);
        assert!(state.clauses[0].column.is_empty() && state.clauses[0].value.is_empty());

        state.update_clause(b, ClauseField::Operator, ">=");
        state.update_clause(b, ClauseField::Operator, "LIKE");
        assert_eq!(state.clauses[1].operator, ComparisonOperator::GtEq);

        state.update_clause(Uuid::new_v4(), ClauseField::Value, "ignored");
        assert!(state.clauses.iter().all(|c| c.value.is_empty()));

        state.remove_clause(a);
        state.remove_clause(Uuid::new_v4());
        assert_eq!(state.clauses.len(), 1);
        assert_eq!(state.clauses[0].id, b);
    }

    #[test]
    fn test_execute_without_table() {
        let mut state = loaded();
        assert_eq!(state.execute(), None);
        assert_eq!(state.phase, Phase::ValidationFailed);
        assert!(!state.is_executing);
        let message = state.message.clone().unwrap();
        assert!(message.is_error());
        assert_eq!(message.text, "Please select a table.");
    }

    #[test]
    fn test_execute_without_columns() {
        let mut state = employees();
        assert_eq!(state.execute(), None);
        assert_eq!(
            state.message.clone().map(|m| m.text),
            Some("Please select at least one column to display.".to_string())
        );
        assert!(!state.is_executing);
    }

    #[test]
    fn test_incomplete_clauses_are_filtered_idempotently() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let no_column = state.add_clause();
        state.update_clause(no_column, ClauseField::Value, "M");
        let blank = state.add_clause();
        state.update_clause(blank, ClauseField::Column, "gender");
        state.update_clause(blank, ClauseField::Value, "   ");
        let good = state.add_clause();
        state.update_clause(good, ClauseField::Column, "hire_date");
        state.update_clause(good, ClauseField::Operator, ">");
        state.update_clause(good, ClauseField::Value, " 1990-01-01 ");

        let first = state.build_request().unwrap();
        let second = state.build_request().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.clauses,
            vec![QueryClause {
                column: "hire_date".into(),
                operator: ComparisonOperator::Gt,
                value: " 1990-01-01 ".into(),
            }]
        );
        assert_eq!(state.clauses.len(), 3);
    }

    #[test]
    fn test_request_body_for_example_query() {
        let mut state = employees();
        state.toggle_column("first_name", true);
        state.toggle_column("emp_no", true);
        let id = state.add_clause();
        state.update_clause(id, ClauseField::Column, "gender");
        state.update_clause(id, ClauseField::Value, "M");

        let ticket = state.execute().unwrap();
        assert_eq!(
            serde_json::to_string(&ticket.request).unwrap(),
            r#"{"table":"employees","columns":["emp_no","first_name"],"clauses":[{"column":"gender","operator":"=","value":"M"}]}"#
        );
    }

    #[test]
    fn test_single_execution_in_flight() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let ticket = state.execute().unwrap();
        assert!(state.is_executing);
        assert!(!state.can_execute());
        assert_eq!(state.execute(), None);

        let row: QueryRow = serde_json::from_value(json!({ "emp_no": 10001 })).unwrap();
        assert!(state.finish_execute(&ticket, Ok(vec![row])));
        assert!(!state.is_executing);
        assert_eq!(state.phase, Phase::ResultsReady);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_empty_result_is_informational() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let ticket = state.execute().unwrap();
        state.finish_execute(&ticket, Ok(vec![]));
        assert_eq!(state.phase, Phase::ResultsReady);
        assert!(state.results.is_empty());
        let message = state.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Info);
        assert_eq!(message.text, NO_ROWS);
    }

    #[test]
    fn test_server_error_clears_results_and_flag() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let ticket = state.execute().unwrap();
        let row: QueryRow = serde_json::from_value(json!({ "emp_no": 10001 })).unwrap();
        state.finish_execute(&ticket, Ok(vec![row]));

        let ticket = state.execute().unwrap();
        assert!(state.results.is_empty());
        state.finish_execute(
            &ticket,
            Err(ApiError::Http {
                status: 500,
                message: "syntax error".into(),
            }),
        );
        assert!(!state.is_executing);
        assert_eq!(state.phase, Phase::ExecutionFailed);
        assert_eq!(state.message, Some(StatusMessage::error("syntax error")));
    }

    #[test]
    fn test_network_failure_clears_flag() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let ticket = state.execute().unwrap();
        state.finish_execute(&ticket, Err(ApiError::Transport("Failed to fetch".into())));
        assert!(!state.is_executing);
        assert!(state.can_execute());
        assert!(state.message.clone().unwrap().is_error());
    }

    #[test]
    fn test_query_response_after_table_change_is_discarded() {
        let mut state = employees();
        state.toggle_column("emp_no", true);
        let ticket = state.execute().unwrap();

        let columns = state.select_table("departments").unwrap();
        assert!(!state.is_executing);
        state.finish_load_columns(&columns, Ok(strings(&["dept_no"])));

        let row: QueryRow = serde_json::from_value(json!({ "emp_no": 10001 })).unwrap();
        assert!(!state.finish_execute(&ticket, Ok(vec![row])));
        assert!(state.results.is_empty());
        assert_eq!(state.phase, Phase::ColumnsLoaded);
    }
}
