use std::env;

pub const DEFAULT_USER_API_URL: &str = "https://enduring-server.herokuapp.com/v3/graphql";

pub fn get_user_api_url() -> String {
    get_env("USER_API_URL", DEFAULT_USER_API_URL)
}

pub fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
