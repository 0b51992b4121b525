pub mod model;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

pub use model::{Model, ResultExt};

use self::types::{Config, Post, User};

/// The remote collaborator the reducers talk to
#[async_trait]
pub trait Api: Send + Sync {
    async fn posts(&self) -> Result<Vec<Post>, String>;
    async fn users(&self) -> Result<Vec<User>, String>;
}

#[derive(Clone)]
pub struct Environment {
    pub api: Arc<dyn Api>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Config::from_env())
    }
}

impl Environment {
    pub fn new(config: Config) -> Self {
        Self::with_api(Model::new(config))
    }

    pub fn with_api(api: impl Api + 'static) -> Self {
        Self { api: Arc::new(api) }
    }
}
