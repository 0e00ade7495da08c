pub mod u101_query_builder;
