//! Pieces shared by every use case screen.

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
