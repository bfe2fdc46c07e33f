use std::fmt::{self};

use graphql_client::GraphQLQuery;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::errors::ClientError;
use crate::vars;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Request body for a document that has no [`GraphQLQuery`] type behind it.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRequest<'a, V> {
    pub query: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<serde_json::Value>>,
}

/// Stateless handle on the user service GraphQL endpoint.
///
/// Every call issues exactly one POST and shares nothing with other calls
/// beyond the endpoint itself, so a `Client` can be cloned freely and used
/// from concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    client: reqwest::Client,
}

impl Client {
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    /// Uses a preconfigured transport, e.g. one with a custom timeout.
    pub fn with_http_client(endpoint: &str, client: reqwest::Client) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            client,
        })
    }

    /// Builds a client for the endpoint named by `USER_API_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&vars::get_user_api_url())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends an arbitrary document and decodes `data` into `R`.
    pub async fn execute<V, R>(
        &self,
        document: &str,
        variables: &V,
        access_token: Option<&str>,
    ) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let body = OperationRequest {
            query: document,
            variables,
        };
        self.send("anonymous", &body, access_token).await
    }

    pub async fn query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        access_token: Option<&str>,
    ) -> Result<Q::ResponseData, ClientError> {
        let request_body = Q::build_query(variables);
        self.send(request_body.operation_name, &request_body, access_token)
            .await
    }

    async fn send<T, R>(
        &self,
        operation: &str,
        body: &T,
        access_token: Option<&str>,
    ) -> Result<R, ClientError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(
            operation,
            authenticated = access_token.is_some(),
            "sending graphql request"
        );

        let response = self.post(access_token).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let res: RawResponse = match serde_json::from_slice(&bytes) {
            Ok(res) => res,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Status {
                    status,
                    body: truncate_body(&bytes),
                })
            }
            Err(err) => return Err(err.into()),
        };

        // `errors` decides the outcome before `data` is looked at.
        if let Some(errors) = res.errors.filter(|errors| !errors.is_empty()) {
            debug!(operation, count = errors.len(), "graphql errors returned");
            return Err(ClientError::Api(GraphQLErrors(errors)));
        }

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: truncate_body(&bytes),
            });
        }

        match res.data {
            Some(data) => {
                debug!(operation, %status, "graphql request succeeded");
                Ok(serde_json::from_value(data)?)
            }
            None => Err(ClientError::MissingData),
        }
    }

    fn post(&self, access_token: Option<&str>) -> RequestBuilder {
        let request = self.client.post(self.endpoint.clone());
        match access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    const MAX_LEN: usize = 4096;
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_LEN {
        let mut end = MAX_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

/// Error objects exactly as the server returned them.
///
/// The server defines the error vocabulary, so entries stay untyped JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
pub struct GraphQLErrors(Vec<serde_json::Value>);

impl GraphQLErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &serde_json::Value> {
        self.0.iter()
    }

    /// The `message` of each error that carries one.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter_map(|err| err.get("message").and_then(|message| message.as_str()))
    }

    pub fn into_inner(self) -> Vec<serde_json::Value> {
        self.0
    }
}

impl From<Vec<serde_json::Value>> for GraphQLErrors {
    fn from(errors: Vec<serde_json::Value>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.0 {
            match err.get("message").and_then(|message| message.as_str()) {
                Some(message) => writeln!(f, "GraphQL error: {message}")?,
                None => writeln!(f, "GraphQL error: {err}")?,
            }
        }
        Ok(())
    }
}
