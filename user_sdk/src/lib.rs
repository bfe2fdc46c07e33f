//! Typed bindings for the user-account service GraphQL API.

pub mod api;
pub mod errors;
pub mod graphql;
pub mod vars;

#[cfg(test)]
pub mod tests;

pub use api::{Client, GraphQLErrors};
pub use errors::ClientError;
