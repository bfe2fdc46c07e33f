use graphql_client::GraphQLQuery;
use serde::{Deserialize, Serialize};

use crate::graphql::ID;
use crate::{api::Client, errors::ClientError};

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/user/get-user.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct GetUser;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/user/get-users.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq",
    skip_serializing_none
)]
pub struct GetUsers;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/user/user-update.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq",
    skip_serializing_none
)]
pub struct UserUpdate;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema.graphql",
    query_path = "src/graphql/user/user-delete.graphql",
    variables_derives = "Debug, Clone",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct UserDelete;

/// Profile record shared by the user documents. `roles` is only selected by
/// the listing query.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ID,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub about: Option<String>,
    pub image: Option<String>,
    pub job_title: Option<String>,
    pub level: Option<String>,
    pub languages: Option<Vec<String>>,
    pub roles: Option<Vec<String>>,
}

impl From<get_user::GetUserUser> for User {
    fn from(user: get_user::GetUserUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            about: user.about,
            image: user.image,
            job_title: user.job_title,
            level: user.level,
            languages: user.languages,
            roles: None,
        }
    }
}

impl From<get_users::GetUsersUsersList> for User {
    fn from(user: get_users::GetUsersUsersList) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            about: user.about,
            image: user.image,
            job_title: user.job_title,
            level: user.level,
            languages: user.languages,
            roles: user.roles,
        }
    }
}

impl From<user_update::UserUpdateUserUpdate> for User {
    fn from(user: user_update::UserUpdateUserUpdate) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            about: user.about,
            image: user.image,
            job_title: user.job_title,
            level: user.level,
            languages: user.languages,
            roles: None,
        }
    }
}

/// Values for `userUpdate`. Fields left as `None` are not sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub about: Option<String>,
    pub image: Option<String>,
    pub job_title: Option<String>,
    pub languages: Option<Vec<String>>,
}

impl From<UserInput> for user_update::UserInput {
    fn from(values: UserInput) -> Self {
        Self {
            first_name: values.first_name,
            last_name: values.last_name,
            about: values.about,
            image: values.image,
            job_title: values.job_title,
            languages: values.languages,
        }
    }
}

/// `None` when the server has no user for the requested id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_data: Option<User>,
}

/// One page of users. Entries the server could not resolve come back as
/// `None` in their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersData {
    pub users_data: Vec<Option<User>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedUser {
    pub notification: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification: String,
}

pub async fn get_user(
    client: &Client,
    access_token: &str,
    user_id: &str,
) -> Result<UserData, ClientError> {
    let data = client
        .query::<GetUser>(
            get_user::Variables {
                user_id: user_id.to_string(),
            },
            Some(access_token),
        )
        .await?;

    Ok(UserData {
        user_data: data.user.map(User::from),
    })
}

/// Fetches one page of users. Paging is left to the caller: pass the next
/// `offset` to continue, there is no cursor or total count.
pub async fn get_users(
    client: &Client,
    access_token: &str,
    offset: Option<i64>,
    limit: Option<i64>,
) -> Result<UsersData, ClientError> {
    let data = client
        .query::<GetUsers>(get_users::Variables { offset, limit }, Some(access_token))
        .await?;

    Ok(UsersData {
        users_data: data
            .users
            .list
            .into_iter()
            .map(|user| user.map(User::from))
            .collect(),
    })
}

pub async fn update_user(
    client: &Client,
    access_token: &str,
    user_id: &str,
    values: UserInput,
) -> Result<UpdatedUser, ClientError> {
    let data = client
        .query::<UserUpdate>(
            user_update::Variables {
                user_id: user_id.to_string(),
                values: Some(values.into()),
            },
            Some(access_token),
        )
        .await?;

    Ok(UpdatedUser {
        notification: data.user_update.map(User::from),
    })
}

pub async fn delete_user(
    client: &Client,
    access_token: &str,
    user_id: &str,
) -> Result<Notification, ClientError> {
    let data = client
        .query::<UserDelete>(
            user_delete::Variables {
                user_id: user_id.to_string(),
            },
            Some(access_token),
        )
        .await?;

    Ok(Notification {
        notification: data.user_delete,
    })
}
