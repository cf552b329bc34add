//! Typed payloads delivered by the transport.
//!
//! The RPC client itself lives outside this crate. It hands over already
//! decoded updates; these types mirror the subset of the schema the user
//! model consumes. JSON is used wherever updates are recorded or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{BotCommand, ChatAdminRights, TimeId, UnavailableReason, UsernameEntry};
use crate::error::{Error, Result};

/// One update from the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransportUpdate {
    /// Base user object, as embedded in almost every response.
    User(UserPayload),
    /// Online status change.
    UserStatus {
        user_id: u64,
        status: UserStatusPayload,
    },
    /// Extended profile snapshot.
    UserFull(FullUserPayload),
    /// The user was seen doing something (typing, sending) at `when`.
    UserAction { user_id: u64, when: TimeId },
    /// Stories presence changed.
    StoriesState { user_id: u64, state: StoriesState },
    /// Phone number known from the local phone book.
    ContactPhone { user_id: u64, phone: String },
}

impl TransportUpdate {
    /// Id of the user this update is about.
    pub fn user_id(&self) -> u64 {
        match self {
            Self::User(payload) => payload.user_id,
            Self::UserFull(payload) => payload.user_id,
            Self::UserStatus { user_id, .. }
            | Self::UserAction { user_id, .. }
            | Self::StoriesState { user_id, .. }
            | Self::ContactPhone { user_id, .. } => *user_id,
        }
    }

    /// Decode one newline-delimited JSON record.
    pub fn from_json_line(line: &str, line_no: usize) -> Result<Self> {
        serde_json::from_str(line).map_err(|source| Error::Decode { line: line_no, source })
    }
}

/// Online status as sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserStatusPayload {
    Empty,
    Recently {
        #[serde(default)]
        by_me: bool,
    },
    LastWeek {
        #[serde(default)]
        by_me: bool,
    },
    LastMonth {
        #[serde(default)]
        by_me: bool,
    },
    Online { expires: TimeId },
    Offline { was_online: TimeId },
}

/// Stories presence of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoriesState {
    Unknown,
    None,
    HasRead,
    HasUnread,
}

/// Base user object.
///
/// A "min" object comes from a context where the server only shares a
/// reduced view of the user; it must not clear anything it does not carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub user_id: u64,
    pub min: bool,
    pub access_hash: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub usernames: Option<Vec<UsernameEntry>>,
    pub phone: Option<String>,
    pub status: Option<UserStatusPayload>,

    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub verified: bool,
    pub scam: bool,
    pub fake: bool,
    pub support: bool,
    pub premium: bool,
    pub stories_hidden: bool,
    pub contact_require_premium: bool,
    /// The profile photo shown to us is one we set for this contact.
    pub personal_photo: bool,

    pub bot: bool,
    pub bot_inline_geo: bool,
    pub bot_chat_history: bool,
    pub bot_nochats: bool,
    pub bot_attach_menu: bool,
    pub bot_can_edit: bool,
    pub bot_info_version: Option<i32>,
    pub bot_inline_placeholder: Option<String>,

    pub restriction_reason: Option<Vec<UnavailableReason>>,
    pub stories_max_id: Option<i32>,
    pub stories_unavailable: bool,
}

/// Extended profile snapshot ("full user").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullUserPayload {
    pub user_id: u64,
    pub blocked: bool,
    pub phone_calls_available: bool,
    pub phone_calls_private: bool,
    pub can_pin_message: bool,
    pub voice_messages_forbidden: bool,
    pub read_dates_private: bool,
    pub contact_require_premium: bool,
    pub translations_disabled: bool,
    pub premium_gifts: Option<Vec<PremiumGiftOption>>,

    pub about: Option<String>,
    pub common_chats_count: i32,
    pub private_forward_name: Option<String>,
    pub ttl_period: Option<i32>,
    pub pinned_msg_id: Option<i64>,
    pub theme_emoticon: Option<String>,
    pub unavailable_reasons: Option<Vec<UnavailableReason>>,

    pub bot_info: Option<BotInfoPayload>,
    pub bot_group_admin_rights: Option<ChatAdminRights>,
    pub bot_broadcast_admin_rights: Option<ChatAdminRights>,
}

/// Premium subscription gift option offered for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumGiftOption {
    pub months: i32,
    pub currency: String,
    pub amount: i64,
}

/// Bot description and commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotInfoPayload {
    /// Bot the info belongs to; absent means "the user it came with".
    pub user_id: Option<u64>,
    pub version: i32,
    pub description: Option<String>,
    pub description_photo_id: Option<u64>,
    pub description_document_id: Option<u64>,
    pub commands: Option<Vec<BotCommand>>,
    pub menu_button: Option<BotMenuButtonPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BotMenuButtonPayload {
    Default,
    Commands,
    WebView { text: String, url: String },
}

/// Reaction in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReactionPayload {
    Empty,
    Emoji { emoticon: String },
    CustomEmoji { document_id: u64 },
}
