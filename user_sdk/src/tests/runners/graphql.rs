use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use crate::api::Client;

pub const GRAPHQL_PATH: &str = "/v3/graphql";

/// What the mock endpoint saw for one call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub body: Value,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

/// Local stand-in for the user service, answering by `operationName`.
///
/// Requests that match no mounted response get wiremock's default 404 with
/// an empty body.
pub struct GraphQLRunner {
    server: MockServer,
}

impl GraphQLRunner {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), GRAPHQL_PATH)
    }

    pub fn client(&self) -> Client {
        Client::new(&self.url()).expect("mock server url is valid")
    }

    pub async fn respond_with_data(&self, operation: &str, data: Value) {
        self.respond_with(operation, data_response(data)).await;
    }

    pub async fn respond_with_data_for_token(&self, operation: &str, token: &str, data: Value) {
        self.respond_with_for_token(operation, token, data_response(data))
            .await;
    }

    /// Answers only calls whose `variables` contain `variables`.
    pub async fn respond_with_data_for_variables(
        &self,
        operation: &str,
        token: &str,
        variables: Value,
        data: Value,
    ) {
        let bearer = format!("Bearer {token}");
        self.operation(operation)
            .and(header("authorization", bearer.as_str()))
            .and(body_partial_json(json!({ "variables": variables })))
            .respond_with(data_response(data))
            .mount(&self.server)
            .await;
    }

    pub async fn respond_with_errors(&self, operation: &str, errors: Value) {
        self.respond_with(operation, errors_response(errors)).await;
    }

    pub async fn respond_with_errors_for_token(&self, operation: &str, token: &str, errors: Value) {
        self.respond_with_for_token(operation, token, errors_response(errors))
            .await;
    }

    pub async fn respond_with(&self, operation: &str, response: ResponseTemplate) {
        self.operation(operation)
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn respond_with_for_token(
        &self,
        operation: &str,
        token: &str,
        response: ResponseTemplate,
    ) {
        let bearer = format!("Bearer {token}");
        self.operation(operation)
            .and(header("authorization", bearer.as_str()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Answers every POST to the endpoint, whatever the body.
    pub async fn respond_to_all(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| RecordedRequest {
                body: request.body_json().unwrap_or(Value::Null),
                authorization: header_value(&request, "authorization"),
                content_type: header_value(&request, "content-type"),
            })
            .collect()
    }

    pub async fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }

    fn operation(&self, operation: &str) -> MockBuilder {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_partial_json(json!({ "operationName": operation })))
    }
}

fn data_response(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

fn errors_response(errors: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": null, "errors": errors }))
}

fn header_value(request: &wiremock::Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
