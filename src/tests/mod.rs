//! Library level tests.

mod document_validation;
mod schema_building;
mod schema_extension;
