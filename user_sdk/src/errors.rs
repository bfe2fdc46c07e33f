use reqwest::StatusCode;

use crate::api::{self, GraphQLErrors};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] api::GraphQLErrors),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} with body: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid response data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No data in response")]
    MissingData,

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Returns the server-reported errors when the request reached the
    /// GraphQL layer and was rejected there.
    pub fn graphql_errors(&self) -> Option<&GraphQLErrors> {
        match self {
            ClientError::Api(errors) => Some(errors),
            _ => None,
        }
    }

    /// True when the failure happened before a GraphQL response could be read.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Api(_) | ClientError::InvalidUrl(_))
    }
}
