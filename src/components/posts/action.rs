use crate::environment::types::Post;

#[derive(Clone, Debug)]
pub enum PostAction {
    Add {
        title: String,
        content: String,
        author: String,
    },
    Update {
        id: String,
        title: String,
        content: String,
    },
    /// The reaction is given by its wire name, e.g. `thumbsUp`
    AddReaction {
        post_id: String,
        reaction: String,
    },
    /// Fetch only if nothing was fetched yet
    Load,
    Fetch,
    FetchResult(Result<Vec<Post>, String>),
    Reset,
}
