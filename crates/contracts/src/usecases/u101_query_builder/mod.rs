pub mod request;
pub mod response;

pub use request::{ComparisonOperator, QueryClause, QueryRequest};
pub use response::{cell_text, result_columns, QueryResponse, QueryRow};

use crate::usecases::common::UseCaseMetadata;

pub struct QueryBuilder;

impl UseCaseMetadata for QueryBuilder {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "query_builder"
    }

    fn display_name() -> &'static str {
        "Query Builder"
    }

    fn description() -> &'static str {
        "Ad-hoc SELECT over any table: projection plus AND-combined filters"
    }
}
