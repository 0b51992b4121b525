use crate::effect::Effect;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AuthAction {
    /// No credentials are checked, any id is accepted
    Login(String),
    Logout,
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct AuthState {
    pub current_user: Option<String>,
}

impl AuthState {
    pub fn login(&mut self, user_id: String) {
        self.current_user = Some(user_id);
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

/// Only the session itself. Clearing the posts on logout happens
/// in the app reducer, which owns both.
pub fn reduce(action: AuthAction, state: &mut AuthState) -> Effect<AuthAction> {
    log::trace!("{action:?}");
    match action {
        AuthAction::Login(user_id) => {
            state.login(user_id);
            Effect::NONE
        }
        AuthAction::Logout => {
            state.logout();
            Effect::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_replaces_the_current_user() {
        let mut state = AuthState::default();
        assert!(!state.is_logged_in());
        reduce(AuthAction::Login("0".into()), &mut state);
        reduce(AuthAction::Login("1".into()), &mut state);
        assert_eq!(state.current_user(), Some("1"));
        reduce(AuthAction::Logout, &mut state);
        assert_eq!(state.current_user(), None);
    }
}
