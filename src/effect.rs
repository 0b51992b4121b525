use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;

/// What a reducer asks the store to do after a state transition
pub enum Effect<Action> {
    None,
    /// Reduce this action right away, before anything else
    Action(Action),
    /// Run the future and reduce the action it resolves to
    Future(BoxFuture<'static, Action>),
}

impl<Action> std::fmt::Debug for Effect<Action> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => f.write_str("Effect::None"),
            Effect::Action(_) => f.write_str("Effect::Action"),
            Effect::Future(_) => f.write_str("Effect::Future"),
        }
    }
}

impl<Action: Send + 'static> Effect<Action> {
    pub const NONE: Self = Effect::None;

    pub fn action(action: Action) -> Self {
        Effect::Action(action)
    }

    pub fn future<T, F, M>(future: F, mapper: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> Action + Send + 'static,
    {
        Effect::Future(future.map(mapper).boxed())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Lift a child effect into the parent's action type
    pub fn map<Parent, M>(self, mapper: M) -> Effect<Parent>
    where
        Parent: Send + 'static,
        M: FnOnce(Action) -> Parent + Send + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Action(action) => Effect::Action(mapper(action)),
            Effect::Future(future) => Effect::Future(future.map(mapper).boxed()),
        }
    }
}
