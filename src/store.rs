use std::collections::VecDeque;

use futures_util::future::BoxFuture;
use tokio::sync::watch;

use crate::app::{reduce, AppAction, AppState};
use crate::effect::Effect;
use crate::environment::Environment;

/// The single owner of the application state. Every mutation goes
/// through [`Store::send`].
#[derive(Debug)]
pub struct Store {
    state: AppState,
    environment: Environment,
}

impl Store {
    pub fn new(environment: Environment) -> Self {
        Self {
            state: AppState::default(),
            environment,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce `action` and everything it leads to, awaiting each
    /// future in turn.
    pub async fn send(&mut self, action: AppAction) {
        let mut pending = self.apply(action);
        while let Some(future) = pending.pop_front() {
            let action = future.await;
            pending.extend(self.apply(action));
        }
    }

    /// Reduce `action` and any immediate follow-up actions. Futures
    /// are handed back to the caller, unstarted.
    fn apply(&mut self, action: AppAction) -> VecDeque<BoxFuture<'static, AppAction>> {
        let mut actions = VecDeque::from([action]);
        let mut futures = VecDeque::new();
        while let Some(action) = actions.pop_front() {
            match reduce(action, &mut self.state, &self.environment) {
                Effect::None => (),
                Effect::Action(next) => actions.push_back(next),
                Effect::Future(future) => futures.push_back(future),
            }
        }
        futures
    }

    /// Move the store onto its own task. The returned handle is the
    /// only way left to reach it; the task ends once every handle is
    /// dropped.
    pub fn spawn(self) -> StoreHandle {
        let (sender, receiver) = flume::unbounded::<AppAction>();
        let (completed_sender, completed_receiver) = flume::unbounded::<AppAction>();
        let (publisher, subscriber) = watch::channel(self.state.clone());

        tokio::spawn(async move {
            let mut store = self;
            loop {
                let action = tokio::select! {
                    received = receiver.recv_async() => match received {
                        Ok(action) => action,
                        Err(_) => break,
                    },
                    Ok(action) = completed_receiver.recv_async() => action,
                };
                for future in store.apply(action) {
                    let completed_sender = completed_sender.clone();
                    tokio::spawn(async move {
                        let _ = completed_sender.send(future.await);
                    });
                }
                publisher.send_replace(store.state.clone());
            }
            log::debug!("Store task finished");
        });

        StoreHandle {
            sender,
            state: subscriber,
        }
    }
}

/// Cloneable access to a spawned [`Store`]
#[derive(Clone, Debug)]
pub struct StoreHandle {
    sender: flume::Sender<AppAction>,
    state: watch::Receiver<AppState>,
}

impl StoreHandle {
    pub fn send(&self, action: AppAction) {
        if self.sender.send(action).is_err() {
            log::error!("Store task is gone, dropping action");
        }
    }

    /// The latest published state
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Wait for the next published state
    pub async fn changed(&mut self) -> Option<AppState> {
        self.state.changed().await.ok()?;
        Some(self.state.borrow_and_update().clone())
    }

    /// Wait until the published state satisfies `predicate`
    pub async fn wait_for(&mut self, predicate: impl Fn(&AppState) -> bool) -> Option<AppState> {
        loop {
            {
                let state = self.state.borrow_and_update();
                if predicate(&state) {
                    return Some(state.clone());
                }
            }
            self.state.changed().await.ok()?;
        }
    }

    pub fn login(&self, user_id: impl Into<String>) {
        self.send(AppAction::login(user_id))
    }

    pub fn logout(&self) {
        self.send(AppAction::logout())
    }

    pub fn add_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) {
        self.send(AppAction::add_post(title, content, author))
    }

    pub fn update_post(
        &self,
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.send(AppAction::update_post(id, title, content))
    }

    pub fn add_reaction(&self, post_id: impl Into<String>, reaction: impl Into<String>) {
        self.send(AppAction::add_reaction(post_id, reaction))
    }

    pub fn fetch_posts(&self) {
        self.send(AppAction::fetch_posts())
    }

    pub fn load_posts(&self) {
        self.send(AppAction::load_posts())
    }

    pub fn fetch_users(&self) {
        self.send(AppAction::fetch_users())
    }
}
