use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// List envelope returned by the collection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub item_count: Option<u64>,
}

/// One configuration branch (`master` or `preview`) of a player or embed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default)]
    pub configuration: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub preview_embed_in_page: Option<String>,
    #[serde(default)]
    pub preview_embed_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerBranches {
    #[serde(default)]
    pub master: Option<Branch>,
    #[serde(default)]
    pub preview: Option<Branch>,
}

/// Player resource from GET /players and GET /players/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub branches: PlayerBranches,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub embed_count: Option<u64>,
    #[serde(default)]
    pub embed_in_page: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Embed resource from GET /players/{id}/embeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub branches: PlayerBranches,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub embed_in_page: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for the publish endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PublishRequest {
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
        }
    }
}
