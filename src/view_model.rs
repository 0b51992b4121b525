use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::environment::types::{Post, ReactionName};
use crate::helper::{excerpt, format_number, time_ago};
use crate::selectors;

const EXCERPT_LENGTH: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ReactionViewModel {
    pub name: String,
    pub emoji: String,
    pub count: u32,
    pub count_str: String,
}

impl ReactionViewModel {
    fn all(post: &Post) -> Vec<Self> {
        post.reactions
            .iter()
            .map(|(name, count)| ReactionViewModel::new(name, count))
            .collect()
    }

    fn new(name: ReactionName, count: u32) -> Self {
        Self {
            name: name.to_string(),
            emoji: name.emoji().to_string(),
            count,
            count_str: format_number(count as i64),
        }
    }
}

/// One entry in the posts list
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct PostViewModel {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    pub date: String,
    pub time_ago: String,
    pub link: String,
    pub reactions: Vec<ReactionViewModel>,
}

impl PostViewModel {
    pub fn new(post: &Post, state: &AppState, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: excerpt(&post.content, EXCERPT_LENGTH).to_string(),
            author_name: selectors::select_author_name(state, &post.author).to_string(),
            date: post.date.clone(),
            time_ago: time_ago(&post.date, now),
            link: post_link(&post.id),
            reactions: ReactionViewModel::all(post),
        }
    }

    /// The posts list, newest first
    pub fn list(state: &AppState, now: DateTime<Utc>) -> Vec<Self> {
        selectors::select_ordered_posts(state)
            .into_iter()
            .map(|post| PostViewModel::new(post, state, now))
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinglePostViewModel {
    NotFound,
    Found {
        post: Post,
        author_name: String,
        reactions: Vec<ReactionViewModel>,
        can_edit: bool,
        edit_link: String,
    },
}

impl SinglePostViewModel {
    /// `post_id` is the route parameter and may be missing
    pub fn new(state: &AppState, post_id: Option<&str>) -> Self {
        let Some(post) = post_id.and_then(|id| selectors::select_post_by_id(state, id)) else {
            return SinglePostViewModel::NotFound
        };
        SinglePostViewModel::Found {
            post: post.clone(),
            author_name: selectors::select_author_name(state, &post.author).to_string(),
            reactions: ReactionViewModel::all(post),
            can_edit: selectors::can_edit(state, post),
            edit_link: format!("/editPost/{}", urlencoding::encode(&post.id)),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SinglePostViewModel::Found { .. })
    }
}

fn post_link(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}
