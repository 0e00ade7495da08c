pub mod error_body;

pub use error_body::ErrorBody;
