use crate::environment::types::{FetchStatus, Post, ReactionName};

const UNKNOWN_ERROR: &str = "Unknown Error";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Insertion order, not display order
    pub posts: im::Vector<Post>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl State {
    pub fn add_post(&mut self, title: String, content: String, author: String) -> Post {
        let post = Post::new(title, content, author);
        self.posts.push_back(post.clone());
        post
    }

    /// Returns `false` if there is no post with `id`
    pub fn update_post(&mut self, id: &str, title: String, content: String) -> bool {
        let Some(post) = self.post_mut(id) else {
            return false
        };
        post.title = title;
        post.content = content;
        true
    }

    /// Returns `false` if there is no post with `post_id`
    pub fn add_reaction(&mut self, post_id: &str, reaction: ReactionName) -> bool {
        let Some(post) = self.post_mut(post_id) else {
            return false
        };
        post.reactions.increment(reaction);
        true
    }

    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Pending;
    }

    /// Appends, even if the posts are already known
    pub fn fetch_succeeded(&mut self, posts: Vec<Post>) {
        self.posts.extend(posts);
        self.status = FetchStatus::Succeeded;
    }

    pub fn fetch_failed(&mut self, message: Option<String>) {
        self.status = FetchStatus::Rejected;
        self.error = Some(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        );
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn all_posts(&self) -> &im::Vector<Post> {
        &self.posts
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }
}
