//! Change notifications for user entities.
//!
//! Entities hold a [`Changes`] handle and emit typed events through it.
//! Subscribers get a broadcast receiver and never see entity internals.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::{ContactStatus, LastseenStatus, UserFlags, UserId};

bitflags! {
    /// Field groups touched by a [`UserChange::Peer`] event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PeerUpdateFlags: u32 {
        const NAME = 1 << 0;
        const USERNAME = 1 << 1;
        const USERNAMES = 1 << 2;
        const PHONE = 1 << 3;
        const HAS_CALLS = 1 << 4;
        const COMMON_CHATS = 1 << 5;
        const UNAVAILABLE_REASON = 1 << 6;
        const STORIES_STATE = 1 << 7;
        const IS_BOT = 1 << 8;
        const BOT_COMMANDS = 1 << 9;
        const BOT_DESCRIPTION = 1 << 10;
        const RIGHTS = 1 << 11;
        const ABOUT = 1 << 12;
        const MESSAGES_TTL = 1 << 13;
        const PINNED_MESSAGE = 1 << 14;
        const CHAT_THEME = 1 << 15;
        const TRANSLATION_DISABLED = 1 << 16;
        const PRIVATE_FORWARD_NAME = 1 << 17;
        const ACCESS = 1 << 18;
        const FULL_INFO = 1 << 19;
    }
}

/// One observable change of a user entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum UserChange {
    Flags {
        user_id: UserId,
        was: UserFlags,
        now: UserFlags,
    },
    Lastseen {
        user_id: UserId,
        status: LastseenStatus,
    },
    ContactStatus {
        user_id: UserId,
        status: ContactStatus,
    },
    Peer {
        user_id: UserId,
        what: PeerUpdateFlags,
    },
}

impl UserChange {
    pub fn user_id(&self) -> UserId {
        match self {
            Self::Flags { user_id, .. }
            | Self::Lastseen { user_id, .. }
            | Self::ContactStatus { user_id, .. }
            | Self::Peer { user_id, .. } => *user_id,
        }
    }
}

/// Largest change-stream capacity a session accepts.
pub const MAX_EVENT_BUFFER: usize = 1 << 16;

/// Receiving side of the change stream.
pub type ChangeStream = broadcast::Receiver<UserChange>;

/// Sending side of the change stream, shared by every entity of a session.
#[derive(Clone, Debug)]
pub struct Changes {
    tx: broadcast::Sender<UserChange>,
}

impl Changes {
    /// Capacity is clamped to `1..=MAX_EVENT_BUFFER`.
    pub fn new(buffer: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer.clamp(1, MAX_EVENT_BUFFER));
        Self { tx }
    }

    pub fn subscribe(&self) -> ChangeStream {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers.
    ///
    /// Best-effort: having no subscribers is fine, lagging ones lose the
    /// oldest events.
    pub fn emit(&self, change: UserChange) {
        let _ = self.tx.send(change);
    }

    /// Emit a `Peer` event unless `what` is empty.
    pub fn peer_updated(&self, user_id: UserId, what: PeerUpdateFlags) {
        if !what.is_empty() {
            self.emit(UserChange::Peer { user_id, what });
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Changes {
    fn default() -> Self {
        Self::new(256)
    }
}
