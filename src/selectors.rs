//! Derived reads over [`AppState`]. None of these are stored.

use itertools::Itertools;

use crate::app::AppState;
use crate::environment::types::{FetchStatus, Post, User};

const UNKNOWN_AUTHOR: &str = "Unknown author";

pub fn select_all_posts(state: &AppState) -> &im::Vector<Post> {
    state.posts.all_posts()
}

pub fn select_post_by_id<'a>(state: &'a AppState, post_id: &str) -> Option<&'a Post> {
    state.posts.post_by_id(post_id)
}

/// Newest first. ISO-8601 dates sort correctly as plain strings.
pub fn select_ordered_posts(state: &AppState) -> Vec<&Post> {
    state
        .posts
        .posts
        .iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .collect()
}

pub fn select_posts_status(state: &AppState) -> FetchStatus {
    state.posts.status
}

pub fn select_posts_error(state: &AppState) -> Option<&str> {
    state.posts.error.as_deref()
}

pub fn select_current_user(state: &AppState) -> Option<&str> {
    state.auth.current_user()
}

pub fn select_current_user_name(state: &AppState) -> Option<&str> {
    let id = select_current_user(state)?;
    select_user_by_id(state, id).map(|user| user.name.as_str())
}

pub fn select_all_users(state: &AppState) -> &im::Vector<User> {
    state.users.all_users()
}

pub fn select_user_by_id<'a>(state: &'a AppState, user_id: &str) -> Option<&'a User> {
    state.users.user_by_id(user_id)
}

pub fn select_author_name<'a>(state: &'a AppState, user_id: &str) -> &'a str {
    select_user_by_id(state, user_id)
        .map(|user| user.name.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
}

pub fn can_edit(state: &AppState, post: &Post) -> bool {
    select_current_user(state) == Some(post.author.as_str())
}
