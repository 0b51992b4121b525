mod app;
mod components;
mod effect;
mod environment;
mod helper;
pub mod selectors;
mod store;
mod view_model;

pub use app::{reduce, setup_logging, AppAction, AppState};
pub use components::auth::{AuthAction, AuthState};
pub use components::posts::{PostAction, State as PostsState};
pub use components::users::{UsersAction, UsersState};
pub use effect::Effect;
pub use environment::types::{Config, FetchStatus, Post, ReactionName, Reactions, User};
pub use environment::{Api, Environment, Model, ResultExt};
pub use helper::{excerpt, time_ago};
pub use store::{Store, StoreHandle};
pub use view_model::{PostViewModel, ReactionViewModel, SinglePostViewModel};
