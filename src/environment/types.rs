use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use url::Url;

// Post Types

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// The id of the user who wrote the post. Not resolved against the
    /// user directory.
    #[serde(rename = "user")]
    pub author: String,
    /// ISO-8601, always UTC with millisecond precision for posts
    /// created locally
    pub date: String,
    #[serde(default)]
    pub reactions: Reactions,
}

impl Post {
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            author,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            reactions: Reactions::default(),
        }
    }
}

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum ReactionName {
    ThumbsUp,
    Tada,
    Heart,
    Rocket,
    Eyes,
}

impl ReactionName {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionName::ThumbsUp => "👍",
            ReactionName::Tada => "🎉",
            ReactionName::Heart => "❤️",
            ReactionName::Rocket => "🚀",
            ReactionName::Eyes => "👀",
        }
    }
}

/// Counters only ever go up. They are reset by dropping the post.
#[derive(Default, Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Reactions {
    pub thumbs_up: u32,
    pub tada: u32,
    pub heart: u32,
    pub rocket: u32,
    pub eyes: u32,
}

impl Reactions {
    pub fn get(&self, name: ReactionName) -> u32 {
        match name {
            ReactionName::ThumbsUp => self.thumbs_up,
            ReactionName::Tada => self.tada,
            ReactionName::Heart => self.heart,
            ReactionName::Rocket => self.rocket,
            ReactionName::Eyes => self.eyes,
        }
    }

    pub fn increment(&mut self, name: ReactionName) {
        let counter = match name {
            ReactionName::ThumbsUp => &mut self.thumbs_up,
            ReactionName::Tada => &mut self.tada,
            ReactionName::Heart => &mut self.heart,
            ReactionName::Rocket => &mut self.rocket,
            ReactionName::Eyes => &mut self.eyes,
        };
        *counter = counter.saturating_add(1);
    }

    /// All counters in display order
    pub fn iter(&self) -> impl Iterator<Item = (ReactionName, u32)> + '_ {
        ReactionName::iter().map(|name| (name, self.get(name)))
    }
}

// User Types

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
}

// Fetch Types

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Rejected,
}

impl FetchStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchStatus::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchStatus::Pending)
    }
}

// Configuration

const API_URL_ENV: &str = "TWEETER_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    pub api_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
        }
    }
}

impl Config {
    pub fn new(api_url: Url) -> Self {
        Self { api_url }
    }

    /// Read the API location from `TWEETER_API_URL`. An unset or
    /// unparseable value falls back to the default.
    pub fn from_env() -> Self {
        let Ok(value) = std::env::var(API_URL_ENV) else {
            return Self::default()
        };
        match Url::parse(&value) {
            Ok(api_url) => Self { api_url },
            Err(e) => {
                log::warn!("Ignoring invalid {API_URL_ENV} {value:?}: {e}");
                Self::default()
            }
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, String> {
        self.api_url
            .join(path)
            .map_err(|e| format!("Invalid endpoint {path}: {e}"))
    }
}
