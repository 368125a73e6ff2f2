//! Domain entities and wire wrapper types.
//!
//! Field names mirror the JSON dataset files exactly (camelCase). These
//! shapes are a compatibility contract for existing clients, so renames
//! here are breaking changes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A political party record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
    /// Display color (free-form, typically a hex code or CSS name).
    pub color: String,
    pub support_rate: i64,
    pub oppose_rate: i64,
    pub total_votes: i64,
    /// Declared member count. Independent of the actual number of
    /// politicians embedding this party.
    pub members: i64,
    pub key_policies: Vec<String>,
    pub description: String,
}

/// A politician record.
///
/// `party` is a denormalized snapshot copied into the politician file,
/// not a reference into `parties.json`. If the two files drift, queries
/// joining on it reflect the snapshot, by contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: u32,
    pub party: Party,
    pub support_rate: i64,
    pub oppose_rate: i64,
    pub total_votes: i64,
    pub activity: i64,
    pub image: String,
    pub trending: String,
    pub recent_activity: String,
}

/// A comment attached to a politician.
///
/// The reply-linkage fields are populated only on replies
/// (`is_parent_comment == false`). Absent fields decode to empty
/// strings and are omitted again on output. `parent_id` is a soft
/// back-reference; nothing validates that it names a real comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Comment type tag, `support` or `oppose` by convention. Treated
    /// as an opaque string and never validated.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub user: String,
    pub likes: i64,
    /// Display date, free text rather than a real timestamp.
    pub date: String,
    pub is_parent_comment: bool,
    pub politician_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reply_to_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reply_to_user: String,
}

/// Response wrapper for `GET /politicians`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PoliticianList {
    pub politicians: Vec<Politician>,
}

/// Response wrapper for `GET /parties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartyList {
    pub parties: Vec<Party>,
}

/// Root shape of `comments.json` and response for `GET /comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentList {
    pub comments: Vec<Comment>,
}

/// Response for `GET /parties/{id}`: the party plus every politician
/// whose embedded party snapshot carries its id, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartyWithMembers {
    pub party: Party,
    pub members: Vec<Politician>,
}
