use serde::{Deserialize, Serialize};

/// Comparison operator of a filter clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[default]
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<=")]
    LtEq,
}

impl ComparisonOperator {
    /// Operator as sent on the wire and shown in the picker
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::NotEq => "!=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::GtEq => ">=",
            ComparisonOperator::LtEq => "<=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::all().into_iter().find(|op| op.symbol() == symbol)
    }

    /// Picker order
    pub fn all() -> [ComparisonOperator; 6] {
        [
            ComparisonOperator::Eq,
            ComparisonOperator::NotEq,
            ComparisonOperator::Gt,
            ComparisonOperator::Lt,
            ComparisonOperator::GtEq,
            ComparisonOperator::LtEq,
        ]
    }
}

/// One `column operator value` filter; the backend ANDs all clauses together.
///
/// `value` is passed through untouched, the backend interprets it against the column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    pub column: String,
    pub operator: ComparisonOperator,
    pub value: String,
}

/// Body of `POST /api/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub table: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub clauses: Vec<QueryClause>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialises_exactly() {
        let request = QueryRequest {
            table: "employees".into(),
            columns: vec!["emp_no".into(), "first_name".into()],
            clauses: vec![QueryClause {
                column: "gender".into(),
                operator: ComparisonOperator::Eq,
                value: "M".into(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"table":"employees","columns":["emp_no","first_name"],"clauses":[{"column":"gender","operator":"=","value":"M"}]}"#
        );
    }

    #[test]
    fn test_operator_symbols_round_trip_through_picker() {
        for op in ComparisonOperator::all() {
            assert_eq!(ComparisonOperator::from_symbol(op.symbol()), Some(op));
            let wire = serde_json::to_string(&op).unwrap();
            assert_eq!(wire, format!("\"{}\"", op.symbol()));
        }
        assert_eq!(ComparisonOperator::from_symbol("<>"), None);
        assert_eq!(ComparisonOperator::default(), ComparisonOperator::Eq);
    }
}
