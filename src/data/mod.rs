//! Per-session user model.
//!
//! - `user` - The user entity and its setters/predicates
//! - `session` - Arena owning every entity of one account
//! - `changes` - Change events emitted by entities
//! - `flags`, `lastseen`, `usernames`, `bot_info`, `reaction` - Value types

mod bot_info;
mod changes;
mod flags;
mod lastseen;
mod reaction;
mod session;
mod user;
mod usernames;

pub use bot_info::{BotCommand, BotInfo, ChatAdminRights};
pub use changes::{ChangeStream, Changes, MAX_EVENT_BUFFER, PeerUpdateFlags, UserChange};
pub use flags::UserFlags;
pub use lastseen::{LastseenStatus, Precision, TimeId};
pub use reaction::{
    ReactionId, reaction_entity_data, reaction_from_entity_data, search_tag_from_query,
    search_tag_to_query,
};
pub use session::Session;
pub use user::{
    CallsStatus, ContactStatus, INACCESSIBLE_ACCESS_HASH, REPLIES_USER_ID,
    SERVICE_NOTIFICATIONS_ID, SET_ONLINE_AFTER_ACTIVITY, UnavailableReason, UserEntity, UserId,
    UserSnapshot, format_phone,
};
pub use usernames::{UsernameEntry, UsernamesInfo};
