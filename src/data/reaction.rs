//! Reaction identifiers and their string encodings.
//!
//! A reaction is either a standard emoji or a custom emoji document. Besides
//! the wire form it has two textual forms: search tags typed into the chat
//! search field, and the data string stored in text entities.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::transport::ReactionPayload;

const TAG_CUSTOM_PREFIX: &str = "#tag-custom:";
const TAG_EMOJI_PREFIX: &str = "#tag-emoji:";
const ENTITY_DEFAULT_PREFIX: &str = "default:";

/// Identifier of a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReactionId {
    #[default]
    Empty,
    Emoji(String),
    /// Custom emoji document id. Zero is not a document, see [`Self::custom`].
    Custom(NonZeroU64),
}

impl ReactionId {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        let emoji = emoji.into();
        if emoji.is_empty() {
            Self::Empty
        } else {
            Self::Emoji(emoji)
        }
    }

    /// Custom emoji reaction; a zero document id is the empty reaction.
    pub fn custom(document_id: u64) -> Self {
        NonZeroU64::new(document_id).map_or(Self::Empty, Self::Custom)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn custom_id(&self) -> Option<u64> {
        match self {
            Self::Custom(id) => Some(id.get()),
            _ => None,
        }
    }

    pub fn emoji_text(&self) -> &str {
        match self {
            Self::Emoji(emoji) => emoji,
            _ => "",
        }
    }
}

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Emoji(emoji) => write!(f, "{}", emoji),
            Self::Custom(id) => write!(f, "custom:{}", id),
        }
    }
}

impl From<&ReactionPayload> for ReactionId {
    fn from(payload: &ReactionPayload) -> Self {
        match payload {
            ReactionPayload::Empty => Self::Empty,
            ReactionPayload::Emoji { emoticon } => Self::emoji(emoticon.clone()),
            ReactionPayload::CustomEmoji { document_id } => Self::custom(*document_id),
        }
    }
}

impl From<&ReactionId> for ReactionPayload {
    fn from(id: &ReactionId) -> Self {
        match id {
            ReactionId::Empty => Self::Empty,
            ReactionId::Emoji(emoticon) => Self::Emoji {
                emoticon: emoticon.clone(),
            },
            ReactionId::Custom(document_id) => Self::CustomEmoji {
                document_id: document_id.get(),
            },
        }
    }
}

/// Encode a reaction as a search-field tag.
pub fn search_tag_to_query(id: &ReactionId) -> String {
    match id {
        ReactionId::Custom(custom) => format!("{}{}", TAG_CUSTOM_PREFIX, custom),
        ReactionId::Empty => String::new(),
        ReactionId::Emoji(emoji) => format!("{}{}", TAG_EMOJI_PREFIX, emoji),
    }
}

/// Decode the search tag at the start of a query.
///
/// Only the first space-separated token is considered. Anything that is not
/// a tag, and a custom tag without a valid document id, decodes to an empty
/// id.
pub fn search_tag_from_query(query: &str) -> ReactionId {
    let tag = query.split(' ').next().unwrap_or("");
    if let Some(custom) = tag.strip_prefix(TAG_CUSTOM_PREFIX) {
        ReactionId::custom(custom.parse().unwrap_or(0))
    } else if let Some(emoji) = tag.strip_prefix(TAG_EMOJI_PREFIX) {
        ReactionId::emoji(emoji)
    } else {
        ReactionId::Empty
    }
}

/// Encode a reaction as text entity data.
pub fn reaction_entity_data(id: &ReactionId) -> String {
    match id {
        ReactionId::Empty => String::new(),
        ReactionId::Custom(custom) => custom.to_string(),
        ReactionId::Emoji(emoji) => format!("{}{}", ENTITY_DEFAULT_PREFIX, emoji),
    }
}

/// Decode text entity data produced by [`reaction_entity_data`].
pub fn reaction_from_entity_data(data: &str) -> ReactionId {
    if let Some(emoji) = data.strip_prefix(ENTITY_DEFAULT_PREFIX) {
        return ReactionId::emoji(emoji);
    }
    data.parse().map_or(ReactionId::Empty, ReactionId::custom)
}
