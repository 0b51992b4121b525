use crate::components::auth::{self, AuthAction, AuthState};
use crate::components::posts::{self, PostAction};
use crate::components::users::{self, UsersAction, UsersState};
use crate::effect::Effect;
use crate::environment::Environment;

/// Everything the view can read
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub posts: posts::State,
    pub users: UsersState,
}

#[derive(Clone, Debug)]
pub enum AppAction {
    Auth(AuthAction),
    Posts(PostAction),
    Users(UsersAction),
}

impl AppAction {
    pub fn login(user_id: impl Into<String>) -> Self {
        AppAction::Auth(AuthAction::Login(user_id.into()))
    }

    pub fn logout() -> Self {
        AppAction::Auth(AuthAction::Logout)
    }

    pub fn add_post(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        AppAction::Posts(PostAction::Add {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        })
    }

    pub fn update_post(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        AppAction::Posts(PostAction::Update {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        })
    }

    pub fn add_reaction(post_id: impl Into<String>, reaction: impl Into<String>) -> Self {
        AppAction::Posts(PostAction::AddReaction {
            post_id: post_id.into(),
            reaction: reaction.into(),
        })
    }

    pub fn fetch_posts() -> Self {
        AppAction::Posts(PostAction::Fetch)
    }

    pub fn load_posts() -> Self {
        AppAction::Posts(PostAction::Load)
    }

    pub fn fetch_users() -> Self {
        AppAction::Users(UsersAction::Fetch)
    }
}

pub fn reduce(
    action: AppAction,
    state: &mut AppState,
    environment: &Environment,
) -> Effect<AppAction> {
    match action {
        AppAction::Auth(action) => {
            let is_logout = matches!(action, AuthAction::Logout);
            let effect = auth::reduce(action, &mut state.auth).map(AppAction::Auth);
            // A logout has to leave the app exactly as a fresh start would,
            // so the reset happens in this same step
            if is_logout {
                let reset = posts::reduce(PostAction::Reset, &mut state.posts, environment);
                debug_assert!(reset.is_none());
            }
            effect
        }
        AppAction::Posts(action) => {
            posts::reduce(action, &mut state.posts, environment).map(AppAction::Posts)
        }
        AppAction::Users(action) => {
            users::reduce(action, &mut state.users, environment).map(AppAction::Users)
        }
    }
}

/// Install the logger. Honors `RUST_LOG`, defaults to `debug`.
pub fn setup_logging() {
    use env_logger::Env;
    use std::io::Write;
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init();
}
