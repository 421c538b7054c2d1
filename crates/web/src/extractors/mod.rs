//! Custom request extractors.

mod validated_json;

pub use validated_json::{to_field_errors, ValidatedJson};
