use std::str::FromStr;

use crate::effect::Effect;
use crate::environment::types::ReactionName;
use crate::environment::Environment;

use super::{PostAction, State};

pub fn reduce(action: PostAction, state: &mut State, environment: &Environment) -> Effect<PostAction> {
    log::trace!("{action:?}");
    match action {
        PostAction::Add {
            title,
            content,
            author,
        } => {
            let post = state.add_post(title, content, author);
            log::debug!("Added post {}", post.id);
            Effect::NONE
        }
        PostAction::Update { id, title, content } => {
            if !state.update_post(&id, title, content) {
                log::warn!("Ignoring update for unknown post {id}");
            }
            Effect::NONE
        }
        PostAction::AddReaction { post_id, reaction } => {
            let Ok(reaction) = ReactionName::from_str(&reaction) else {
                log::warn!("Ignoring invalid reaction {reaction:?}");
                return Effect::NONE
            };
            if !state.add_reaction(&post_id, reaction) {
                log::warn!("Ignoring {reaction} for unknown post {post_id}");
            }
            Effect::NONE
        }
        PostAction::Load => {
            if state.status.is_idle() {
                Effect::action(PostAction::Fetch)
            } else {
                Effect::NONE
            }
        }
        PostAction::Fetch => {
            state.begin_fetch();
            let api = environment.api.clone();
            Effect::future(async move { api.posts().await }, PostAction::FetchResult)
        }
        PostAction::FetchResult(result) => {
            match result {
                Ok(posts) => state.fetch_succeeded(posts),
                Err(e) => state.fetch_failed(Some(e)),
            }
            Effect::NONE
        }
        PostAction::Reset => {
            state.reset();
            Effect::NONE
        }
    }
}
