use graphql_client::GraphQLQuery;
use serde::{Deserialize, Serialize};

use crate::graphql::ID;
use crate::{api::Client, errors::ClientError};

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/login/login.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct Login;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/login/logout.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct Logout;

/// Session material returned by a successful login, flattened from
/// `login { accessToken user { _id email } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(rename = "userID")]
    pub user_id: ID,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedOut {
    pub back_to_login: Option<bool>,
}

pub async fn login(client: &Client, email: &str, password: &str) -> Result<LoginData, ClientError> {
    let data = client
        .query::<Login>(
            login::Variables {
                email: email.to_string(),
                password: password.to_string(),
            },
            None,
        )
        .await?;

    Ok(LoginData {
        token: data.login.access_token,
        user_id: data.login.user.id,
        email: data.login.user.email,
    })
}

pub async fn logout(client: &Client, access_token: &str) -> Result<LoggedOut, ClientError> {
    let data = client
        .query::<Logout>(logout::Variables {}, Some(access_token))
        .await?;

    Ok(LoggedOut {
        back_to_login: data.logout,
    })
}
