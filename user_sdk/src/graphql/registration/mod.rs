use graphql_client::GraphQLQuery;
use serde::{Deserialize, Serialize};

use crate::{api::Client, errors::ClientError};

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/registration/user-create.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct UserCreate;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/registration/user-activate.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct UserActivate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub activation_link_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedUser {
    pub message: String,
}

/// Registers a new account. The returned id is what the activation email
/// would link to.
pub async fn create_user(
    client: &Client,
    email: &str,
    password: &str,
) -> Result<CreatedUser, ClientError> {
    let data = client
        .query::<UserCreate>(
            user_create::Variables {
                email: email.to_string(),
                password: password.to_string(),
            },
            None,
        )
        .await?;

    Ok(CreatedUser {
        activation_link_id: data.user_create,
    })
}

pub async fn activate_user(
    client: &Client,
    activation_link_id: &str,
) -> Result<ActivatedUser, ClientError> {
    let data = client
        .query::<UserActivate>(
            user_activate::Variables {
                activation_link_id: activation_link_id.to_string(),
            },
            None,
        )
        .await?;

    Ok(ActivatedUser {
        message: data.user_activate,
    })
}
