use serde_json::{Map, Value};

/// One result row: column name to scalar, in the order the server serialised it.
pub type QueryRow = Map<String, Value>;

/// Body of a successful `POST /api/query`
pub type QueryResponse = Vec<QueryRow>;

/// Header of a result grid, taken from the first row.
pub fn result_columns(rows: &[QueryRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Renders a cell the way the grid shows it: strings bare, `null` as "null".
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_follow_first_row_order() {
        let rows: QueryResponse = serde_json::from_value(json!([
            { "last_name": "Facello", "emp_no": 10001 },
            { "last_name": "Simmel", "emp_no": 10002 }
        ]))
        .unwrap();
        assert_eq!(result_columns(&rows), vec!["last_name", "emp_no"]);
        assert!(result_columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("1986-06-26")), "1986-06-26");
        assert_eq!(cell_text(&json!(10001)), "10001");
        assert_eq!(cell_text(&Value::Null), "null");
    }
}
