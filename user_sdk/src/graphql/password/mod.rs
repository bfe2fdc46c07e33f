use graphql_client::GraphQLQuery;

use crate::graphql::user::Notification;
use crate::{api::Client, errors::ClientError};

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/password/password-reset-request.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct UserPasswordResetRequest;

pub async fn password_reset_request(
    client: &Client,
    access_token: &str,
    email: &str,
) -> Result<Notification, ClientError> {
    let data = client
        .query::<UserPasswordResetRequest>(
            user_password_reset_request::Variables {
                email: email.to_string(),
            },
            Some(access_token),
        )
        .await?;

    Ok(Notification {
        notification: data.user_password_reset_request,
    })
}
