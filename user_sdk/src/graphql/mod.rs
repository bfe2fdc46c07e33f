//! One module per area of the user service schema.
//!
//! Operations are derived from `schema.graphql` and the documents next to
//! each module. Each area wraps its operations in `async fn`s that send them
//! through [`crate::api::Client`] and extract the field callers care about.

pub mod login;
pub mod password;
pub mod registration;
pub mod user;

pub use graphql_client::{GraphQLQuery, QueryBody};

#[allow(clippy::upper_case_acronyms)]
pub type ID = String;
