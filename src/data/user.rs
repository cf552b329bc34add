//! User entity: per-user state and derived predicates.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::changes::{Changes, PeerUpdateFlags, UserChange};
use super::{BotInfo, ChatAdminRights, LastseenStatus, UserFlags, UsernameEntry, UsernamesInfo};
use crate::transport::{BotInfoPayload, StoriesState};

/// Access hash value the server uses for accounts that can no longer be
/// reached.
pub const INACCESSIBLE_ACCESS_HASH: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Users with hidden last seen stay online for this long after activity.
pub const SET_ONLINE_AFTER_ACTIVITY: i64 = 30;

/// Service notifications account.
pub const SERVICE_NOTIFICATIONS_ID: u64 = 777_000;

/// Account that delivers replies to the user's channel comments.
pub const REPLIES_USER_ID: u64 = 1_271_266_957;

/// Stable numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Unknown,
    Contact,
    NotContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallsStatus {
    #[default]
    Unknown,
    Enabled,
    Disabled,
    Private,
}

/// Why the account cannot be interacted with in some context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableReason {
    pub reason: String,
    pub text: String,
}

impl UnavailableReason {
    pub fn new(reason: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            text: text.into(),
        }
    }
}

/// Point-in-time copy of everything an entity knows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSnapshot {
    pub id: UserId,
    pub access_hash: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub phone_name: String,
    pub display_name: String,
    pub usernames: Vec<String>,
    pub editable_username: String,
    pub phone: String,
    pub flags: UserFlags,
    pub lastseen: LastseenStatus,
    pub contact_status: ContactStatus,
    pub calls_status: CallsStatus,
    pub bot_info: Option<BotInfo>,
    pub common_chats_count: i32,
    pub private_forward_name: String,
    pub unavailable_reasons: Vec<UnavailableReason>,
    pub about: String,
    pub messages_ttl: i32,
    pub pinned_message_id: i64,
    pub theme_emoji: String,
    pub translation_disabled: bool,
    pub full_loaded: bool,
}

/// In-memory record of one remote user.
///
/// Owned by a [`Session`](super::Session); mutated only from the session's
/// event thread. Every setter emits a change event when, and only when, the
/// stored value actually changes.
#[derive(Debug)]
pub struct UserEntity {
    id: UserId,
    changes: Changes,

    access_hash: Option<u64>,

    first_name: String,
    last_name: String,
    phone_name: String,
    display_name: String,
    usernames: UsernamesInfo,
    phone: String,

    flags: UserFlags,
    lastseen: LastseenStatus,
    contact_status: ContactStatus,
    calls_status: CallsStatus,

    bot_info: Option<BotInfo>,

    common_chats_count: i32,
    private_forward_name: String,
    unavailable_reasons: Vec<UnavailableReason>,
    about: String,
    messages_ttl: i32,
    pinned_message_id: i64,
    theme_emoji: String,
    translation_disabled: bool,
    full_loaded: bool,
}

impl UserEntity {
    /// Create an entity; `is_self` fixes the SELF flag for its lifetime.
    pub fn new(id: UserId, is_self: bool, changes: Changes) -> Self {
        Self {
            id,
            changes,
            access_hash: None,
            first_name: String::new(),
            last_name: String::new(),
            phone_name: String::new(),
            display_name: String::new(),
            usernames: UsernamesInfo::default(),
            phone: String::new(),
            flags: if is_self { UserFlags::SELF } else { UserFlags::empty() },
            lastseen: LastseenStatus::Unknown,
            contact_status: ContactStatus::Unknown,
            calls_status: CallsStatus::Unknown,
            bot_info: None,
            common_chats_count: 0,
            private_forward_name: String::new(),
            unavailable_reasons: Vec::new(),
            about: String::new(),
            messages_ttl: 0,
            pinned_message_id: 0,
            theme_emoji: String::new(),
            translation_disabled: false,
            full_loaded: false,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    // --- Flags ---

    pub fn flags(&self) -> UserFlags {
        self.flags
    }

    /// Replace the whole flag set. SELF is kept as it was.
    pub fn set_flags(&mut self, which: UserFlags) {
        let now = (self.flags & UserFlags::SELF) | (which - UserFlags::SELF);
        if now == self.flags {
            return;
        }
        let was = self.flags;
        self.flags = now;
        self.changes.emit(UserChange::Flags {
            user_id: self.id,
            was,
            now,
        });
    }

    pub fn add_flags(&mut self, which: UserFlags) {
        self.set_flags(self.flags | which);
    }

    pub fn remove_flags(&mut self, which: UserFlags) {
        self.set_flags(self.flags - which);
    }

    // --- Access ---

    pub fn access_hash(&self) -> Option<u64> {
        self.access_hash
    }

    pub fn set_access_hash(&mut self, access_hash: u64) {
        let next = if access_hash == INACCESSIBLE_ACCESS_HASH {
            None
        } else {
            Some(access_hash)
        };
        if next != self.access_hash {
            self.access_hash = next;
            self.changes.peer_updated(self.id, PeerUpdateFlags::ACCESS);
        }
        if access_hash == INACCESSIBLE_ACCESS_HASH {
            self.add_flags(UserFlags::DELETED);
        }
    }

    // --- Names ---

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_name(&self) -> &str {
        &self.phone_name
    }

    /// Name to show in lists and headers.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Update the name fields and recompose the display name.
    ///
    /// First and last name only change when at least one of them is given.
    /// A blank first name moves the last name into its place.
    pub fn set_name(&mut self, first: &str, last: &str, phone_name: &str, username: &str) {
        let change_name = !first.is_empty() || !last.is_empty();
        if change_name {
            if first.trim().is_empty() {
                self.first_name = last.to_string();
                self.last_name.clear();
            } else {
                self.first_name = first.to_string();
                self.last_name = last.to_string();
            }
        }
        self.phone_name = phone_name.to_string();

        let mut what = PeerUpdateFlags::empty();
        if self.usernames.username() != username {
            let was = self.usernames.clone();
            self.usernames.set_username(username);
            if was != self.usernames {
                what |= PeerUpdateFlags::USERNAME | PeerUpdateFlags::USERNAMES;
            }
        }

        let display_name = self.compose_display_name();
        if display_name != self.display_name {
            self.display_name = display_name;
            what |= PeerUpdateFlags::NAME;
        }
        self.changes.peer_updated(self.id, what);
    }

    /// Full name, then phone-derived name, then `@username`, then `+phone`.
    fn compose_display_name(&self) -> String {
        let full_name = if self.last_name.is_empty() {
            self.first_name.clone()
        } else if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        };
        if !full_name.is_empty() {
            full_name
        } else if !self.phone_name.is_empty() {
            self.phone_name.clone()
        } else if !self.usernames.username().is_empty() {
            format!("@{}", self.usernames.username())
        } else if !self.phone.is_empty() {
            format_phone(&self.phone)
        } else {
            String::new()
        }
    }

    // --- Usernames ---

    pub fn username(&self) -> &str {
        self.usernames.username()
    }

    pub fn editable_username(&self) -> &str {
        self.usernames.editable_username()
    }

    pub fn usernames(&self) -> &[String] {
        self.usernames.usernames()
    }

    pub fn has_username(&self, username: &str) -> bool {
        self.usernames.contains(username)
    }

    /// Replace the username set with a server list.
    pub fn set_usernames(&mut self, entries: &[UsernameEntry]) {
        let was_username = self.usernames.username().to_string();
        let was_usernames = self.usernames.usernames().to_vec();
        self.usernames.set_usernames(entries);

        let mut what = PeerUpdateFlags::empty();
        if was_username != self.usernames.username() {
            what |= PeerUpdateFlags::USERNAME;
        }
        if was_usernames != self.usernames.usernames() {
            what |= PeerUpdateFlags::USERNAMES;
        }
        let display_name = self.compose_display_name();
        if display_name != self.display_name {
            self.display_name = display_name;
            what |= PeerUpdateFlags::NAME;
        }
        self.changes.peer_updated(self.id, what);
    }

    // --- Phone ---

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: &str) {
        if self.phone == phone {
            return;
        }
        self.phone = phone.to_string();

        let mut what = PeerUpdateFlags::PHONE;
        let display_name = self.compose_display_name();
        if display_name != self.display_name {
            self.display_name = display_name;
            what |= PeerUpdateFlags::NAME;
        }
        self.changes.peer_updated(self.id, what);
    }

    // --- Presence ---

    pub fn lastseen(&self) -> LastseenStatus {
        self.lastseen
    }

    /// Store a new presence value unless it would lose precision.
    ///
    /// Returns whether the stored value changed.
    pub fn update_lastseen(&mut self, value: LastseenStatus) -> bool {
        if !self.lastseen.accepts(&value) {
            if self.lastseen != value {
                debug!(
                    "Ignoring lastseen {} for user {}: keeping {}",
                    value, self.id, self.lastseen
                );
            }
            return false;
        }
        self.lastseen = value;
        self.changes.emit(UserChange::Lastseen {
            user_id: self.id,
            status: value,
        });
        true
    }

    /// Mark the user as online for a short while after observed activity.
    pub fn made_action(&mut self, when: i64) -> bool {
        if self.is_bot() || self.is_service_user() || when <= 0 {
            return false;
        }
        let Some(online_till) = when.checked_add(SET_ONLINE_AFTER_ACTIVITY) else {
            debug!("Ignoring action at {} for user {}: out of range", when, self.id);
            return false;
        };
        let till = self.lastseen.till();
        if till > when {
            return false;
        }
        self.update_lastseen(LastseenStatus::Exact {
            till: online_till,
            local: till == 0 || self.lastseen.is_local_online_value(),
            hidden_by_me: self.lastseen.is_hidden_by_me(),
        })
    }

    // --- Contact / calls ---

    pub fn contact_status(&self) -> ContactStatus {
        self.contact_status
    }

    pub fn is_contact(&self) -> bool {
        self.contact_status == ContactStatus::Contact
    }

    pub fn set_is_contact(&mut self, is: bool) {
        let status = if is {
            ContactStatus::Contact
        } else {
            ContactStatus::NotContact
        };
        if self.contact_status != status {
            self.contact_status = status;
            self.changes.emit(UserChange::ContactStatus {
                user_id: self.id,
                status,
            });
        }
    }

    pub fn calls_status(&self) -> CallsStatus {
        self.calls_status
    }

    pub fn set_calls_status(&mut self, status: CallsStatus) {
        if self.calls_status != status {
            self.calls_status = status;
            self.changes.peer_updated(self.id, PeerUpdateFlags::HAS_CALLS);
        }
    }

    pub fn has_calls(&self) -> bool {
        !matches!(self.calls_status, CallsStatus::Disabled | CallsStatus::Unknown)
    }

    // --- Bot metadata ---

    pub fn bot_info(&self) -> Option<&BotInfo> {
        self.bot_info.as_ref()
    }

    pub fn bot_info_mut(&mut self) -> Option<&mut BotInfo> {
        self.bot_info.as_mut()
    }

    /// Apply the bot info version from a base user object.
    ///
    /// A negative version marks an existing bot as outdated; bots never
    /// become regular users again. A newer version drops the cached
    /// description and commands until the full info arrives.
    pub fn set_bot_info_version(&mut self, version: i32) {
        if version < 0 {
            if let Some(info) = self.bot_info.as_mut() {
                info.version = -1;
            }
            return;
        }
        if self.bot_info.is_none() {
            self.bot_info = Some(BotInfo::with_version(version));
            self.changes.peer_updated(self.id, PeerUpdateFlags::IS_BOT);
            return;
        }
        if let Some(info) = self.bot_info.as_mut()
            && info.version < version
        {
            let mut what = PeerUpdateFlags::empty();
            if !info.commands.is_empty() {
                info.commands.clear();
                what |= PeerUpdateFlags::BOT_COMMANDS;
            }
            if !info.description.is_empty() {
                info.description.clear();
                info.description_version += 1;
                what |= PeerUpdateFlags::BOT_DESCRIPTION;
            }
            info.version = version;
            info.inited = false;
            self.changes.peer_updated(self.id, what);
        }
    }

    /// Merge a bot info payload.
    ///
    /// Description, commands and menu button are only taken from payloads
    /// whose version is not older than the stored one.
    pub fn set_bot_info(&mut self, payload: &BotInfoPayload) {
        if let Some(target) = payload.user_id
            && target != self.id.0
        {
            warn!("Bot info for {} delivered to user {}, ignoring", target, self.id);
            return;
        }

        let mut what = PeerUpdateFlags::empty();
        if self.bot_info.is_none() {
            what |= PeerUpdateFlags::IS_BOT;
        }
        let info = self
            .bot_info
            .get_or_insert_with(|| BotInfo::with_version(payload.version));

        if payload.version < info.version {
            debug!(
                "Stale bot info v{} for user {} (have v{})",
                payload.version, self.id, info.version
            );
            self.changes.peer_updated(self.id, what);
            return;
        }
        info.version = payload.version;

        let mut description_changed = false;
        let description = payload.description.clone().unwrap_or_default();
        if info.description != description {
            info.description = description;
            info.description_version += 1;
            description_changed = true;
        }
        if info.description_photo_id != payload.description_photo_id {
            info.description_photo_id = payload.description_photo_id;
            info.description_version += 1;
            description_changed = true;
        }
        if info.description_document_id != payload.description_document_id {
            info.description_document_id = payload.description_document_id;
            info.description_version += 1;
            description_changed = true;
        }

        let commands = payload.commands.clone().unwrap_or_default();
        let changed_commands = info.commands != commands;
        info.commands = commands;

        let changed_button = info.apply_menu_button(payload.menu_button.as_ref());
        info.inited = true;

        if changed_commands || changed_button {
            what |= PeerUpdateFlags::BOT_COMMANDS;
        }
        if description_changed {
            what |= PeerUpdateFlags::BOT_DESCRIPTION;
        }
        self.changes.peer_updated(self.id, what);
    }

    /// Update the default admin rights a bot requests. No-op for non-bots.
    pub fn set_bot_admin_rights(&mut self, group: ChatAdminRights, channel: ChatAdminRights) {
        let Some(info) = self.bot_info.as_mut() else {
            return;
        };
        if info.group_admin_rights != group || info.channel_admin_rights != channel {
            info.group_admin_rights = group;
            info.channel_admin_rights = channel;
            self.changes.peer_updated(self.id, PeerUpdateFlags::RIGHTS);
        }
    }

    // --- Ancillary ---

    pub fn common_chats_count(&self) -> i32 {
        self.common_chats_count
    }

    pub fn set_common_chats_count(&mut self, count: i32) {
        if self.common_chats_count != count {
            self.common_chats_count = count;
            self.changes.peer_updated(self.id, PeerUpdateFlags::COMMON_CHATS);
        }
    }

    pub fn has_private_forward_name(&self) -> bool {
        !self.private_forward_name.is_empty()
    }

    pub fn private_forward_name(&self) -> &str {
        &self.private_forward_name
    }

    pub fn set_private_forward_name(&mut self, name: &str) {
        if self.private_forward_name != name {
            self.private_forward_name = name.to_string();
            self.changes
                .peer_updated(self.id, PeerUpdateFlags::PRIVATE_FORWARD_NAME);
        }
    }

    pub fn unavailable_reasons(&self) -> &[UnavailableReason] {
        &self.unavailable_reasons
    }

    pub fn set_unavailable_reasons(&mut self, reasons: Vec<UnavailableReason>) {
        if self.unavailable_reasons != reasons {
            self.unavailable_reasons = reasons;
            self.changes
                .peer_updated(self.id, PeerUpdateFlags::UNAVAILABLE_REASON);
        }
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn set_about(&mut self, about: &str) {
        if self.about != about {
            self.about = about.to_string();
            self.changes.peer_updated(self.id, PeerUpdateFlags::ABOUT);
        }
    }

    pub fn messages_ttl(&self) -> i32 {
        self.messages_ttl
    }

    pub fn set_messages_ttl(&mut self, period: i32) {
        if self.messages_ttl != period {
            self.messages_ttl = period;
            self.changes.peer_updated(self.id, PeerUpdateFlags::MESSAGES_TTL);
        }
    }

    pub fn pinned_message_id(&self) -> i64 {
        self.pinned_message_id
    }

    pub fn set_pinned_message_id(&mut self, message_id: i64) {
        if self.pinned_message_id != message_id {
            self.pinned_message_id = message_id;
            self.changes
                .peer_updated(self.id, PeerUpdateFlags::PINNED_MESSAGE);
        }
    }

    pub fn theme_emoji(&self) -> &str {
        &self.theme_emoji
    }

    pub fn set_theme_emoji(&mut self, emoji: &str) {
        if self.theme_emoji != emoji {
            self.theme_emoji = emoji.to_string();
            self.changes.peer_updated(self.id, PeerUpdateFlags::CHAT_THEME);
        }
    }

    pub fn translation_disabled(&self) -> bool {
        self.translation_disabled
    }

    pub fn set_translation_disabled(&mut self, disabled: bool) {
        if self.translation_disabled != disabled {
            self.translation_disabled = disabled;
            self.changes
                .peer_updated(self.id, PeerUpdateFlags::TRANSLATION_DISABLED);
        }
    }

    pub fn full_loaded(&self) -> bool {
        self.full_loaded
    }

    /// Record that a full-user snapshot has been applied.
    pub fn full_updated(&mut self) {
        if !self.full_loaded {
            self.full_loaded = true;
            self.changes.peer_updated(self.id, PeerUpdateFlags::FULL_INFO);
        }
    }

    // --- Stories ---

    pub fn has_active_stories(&self) -> bool {
        self.flags.contains(UserFlags::HAS_ACTIVE_STORIES)
    }

    pub fn has_unread_stories(&self) -> bool {
        self.flags.contains(UserFlags::HAS_UNREAD_STORIES)
    }

    /// # Panics
    /// Panics on [`StoriesState::Unknown`]; callers only pass known states.
    pub fn set_stories_state(&mut self, state: StoriesState) {
        assert!(
            state != StoriesState::Unknown,
            "stories state for user {} must be known",
            self.id
        );
        let was = self.flags;
        match state {
            StoriesState::None => self.remove_flags(UserFlags::STORIES),
            StoriesState::HasRead => self.set_flags(
                (self.flags - UserFlags::HAS_UNREAD_STORIES) | UserFlags::HAS_ACTIVE_STORIES,
            ),
            StoriesState::HasUnread => self.add_flags(UserFlags::STORIES),
            StoriesState::Unknown => unreachable!(),
        }
        if self.flags != was {
            self.changes
                .peer_updated(self.id, PeerUpdateFlags::STORIES_STATE);
        }
    }

    // --- Predicates ---

    pub fn is_self(&self) -> bool {
        self.flags.contains(UserFlags::SELF)
    }

    pub fn is_verified(&self) -> bool {
        self.flags.contains(UserFlags::VERIFIED)
    }

    pub fn is_scam(&self) -> bool {
        self.flags.contains(UserFlags::SCAM)
    }

    pub fn is_fake(&self) -> bool {
        self.flags.contains(UserFlags::FAKE)
    }

    pub fn is_premium(&self) -> bool {
        self.flags.contains(UserFlags::PREMIUM)
    }

    pub fn is_bot_inline_geo(&self) -> bool {
        self.flags.contains(UserFlags::BOT_INLINE_GEO)
    }

    pub fn is_bot(&self) -> bool {
        self.bot_info.is_some()
    }

    pub fn is_support(&self) -> bool {
        self.flags.contains(UserFlags::SUPPORT)
    }

    pub fn is_inaccessible(&self) -> bool {
        self.flags.contains(UserFlags::DELETED)
    }

    pub fn is_blocked(&self) -> bool {
        self.flags.contains(UserFlags::BLOCKED)
    }

    pub fn is_service_user(&self) -> bool {
        self.id.0 == SERVICE_NOTIFICATIONS_ID
    }

    pub fn is_replies_chat(&self) -> bool {
        self.id.0 == REPLIES_USER_ID
    }

    pub fn apply_min_photo(&self) -> bool {
        !self.flags.contains(UserFlags::DISCARD_MIN_PHOTO)
    }

    pub fn has_personal_photo(&self) -> bool {
        self.flags.contains(UserFlags::PERSONAL_PHOTO)
    }

    pub fn has_stories_hidden(&self) -> bool {
        self.flags.contains(UserFlags::STORIES_HIDDEN)
    }

    pub fn some_require_premium_to_write(&self) -> bool {
        self.flags.contains(UserFlags::SOME_REQUIRE_PREMIUM_TO_WRITE)
    }

    pub fn me_requires_premium_to_write(&self) -> bool {
        self.flags.contains(UserFlags::ME_REQUIRES_PREMIUM_TO_WRITE)
    }

    pub fn require_premium_to_write_known(&self) -> bool {
        self.flags.contains(UserFlags::REQUIRE_PREMIUM_TO_WRITE_KNOWN)
    }

    /// Whether a message could be sent if premium requirements are ignored.
    pub fn can_send_ignore_require_premium(&self) -> bool {
        !self.is_inaccessible() && !self.is_replies_chat()
    }

    pub fn read_dates_private(&self) -> bool {
        self.flags.contains(UserFlags::READ_DATES_PRIVATE)
    }

    pub fn can_receive_gifts(&self) -> bool {
        self.flags.contains(UserFlags::CAN_RECEIVE_GIFTS)
    }

    /// Quick check used while processing user lists: the phone is known.
    pub fn can_share_this_contact_fast(&self) -> bool {
        !self.phone.is_empty()
    }

    /// Full check: the phone is known here or in the local phone book.
    pub fn can_share_this_contact(&self, phone_book_phone: Option<&str>) -> bool {
        self.can_share_this_contact_fast() || phone_book_phone.is_some_and(|p| !p.is_empty())
    }

    pub fn can_add_contact(&self, phone_book_phone: Option<&str>) -> bool {
        self.can_share_this_contact(phone_book_phone) && !self.is_contact()
    }

    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id,
            access_hash: self.access_hash,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_name: self.phone_name.clone(),
            display_name: self.display_name.clone(),
            usernames: self.usernames.usernames().to_vec(),
            editable_username: self.usernames.editable_username().to_string(),
            phone: self.phone.clone(),
            flags: self.flags,
            lastseen: self.lastseen,
            contact_status: self.contact_status,
            calls_status: self.calls_status,
            bot_info: self.bot_info.clone(),
            common_chats_count: self.common_chats_count,
            private_forward_name: self.private_forward_name.clone(),
            unavailable_reasons: self.unavailable_reasons.clone(),
            about: self.about.clone(),
            messages_ttl: self.messages_ttl,
            pinned_message_id: self.pinned_message_id,
            theme_emoji: self.theme_emoji.clone(),
            translation_disabled: self.translation_disabled,
            full_loaded: self.full_loaded,
        }
    }
}

/// Render a phone number the way it is shown in place of a name.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{}", digits)
    }
}
