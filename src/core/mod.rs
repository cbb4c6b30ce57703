pub mod error;

pub use error::{FieldIssue, Result, StoreError, ValidationFailure};
