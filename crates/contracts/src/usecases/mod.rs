pub mod common;
pub mod u101_query_builder;
