use crate::effect::Effect;
use crate::environment::types::User;
use crate::environment::Environment;

#[derive(Debug, Clone)]
pub enum UsersAction {
    Fetch,
    FetchResult(Result<Vec<User>, String>),
}

/// Read-only reference data. Users are only ever replaced as a whole.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct UsersState {
    pub users: im::Vector<User>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl UsersState {
    pub fn all_users(&self) -> &im::Vector<User> {
        &self.users
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

pub fn reduce(
    action: UsersAction,
    state: &mut UsersState,
    environment: &Environment,
) -> Effect<UsersAction> {
    log::trace!("{action:?}");
    match action {
        UsersAction::Fetch => {
            state.is_loading = true;
            let api = environment.api.clone();
            Effect::future(async move { api.users().await }, UsersAction::FetchResult)
        }
        UsersAction::FetchResult(result) => {
            state.is_loading = false;
            match result {
                Ok(users) => {
                    state.users = users.into_iter().collect();
                    state.error_message = None;
                }
                Err(e) => state.error_message = Some(e),
            }
            Effect::NONE
        }
    }
}
