use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{Config, Post, User};
use super::Api;

const POSTS_PATH: &str = "/fakeApi/posts";
const USERS_PATH: &str = "/fakeApi/users";

/// HTTP access to the mock API
#[derive(Clone)]
pub struct Model {
    pub config: Config,
    client: reqwest::Client,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("api_url", &self.config.api_url.as_str())
            .finish()
    }
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, call: &'static str) -> Result<T, String> {
        let url = self.config.endpoint(path)?;
        log::trace!("GET {url}");
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error(call)?
            .json::<T>()
            .await
            .string_error(call)
    }
}

#[async_trait]
impl Api for Model {
    async fn posts(&self) -> Result<Vec<Post>, String> {
        let posts: Vec<Post> = self.get(POSTS_PATH, "posts").await?;
        log::trace!("posts arrived {}", posts.len());
        Ok(posts)
    }

    async fn users(&self) -> Result<Vec<User>, String> {
        let users: Vec<User> = self.get(USERS_PATH, "users").await?;
        log::trace!("users arrived {}", users.len());
        Ok(users)
    }
}

pub trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e:?}");
            log::error!("{string_error}");
            string_error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_error_prefixes_the_call() {
        let result: Result<(), &str> = Err("boom");
        assert_eq!(
            result.string_error("posts"),
            Err("API Error: posts \"boom\"".to_string())
        );
    }
}
