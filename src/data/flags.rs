//! Named boolean attributes of a user, packed into a bitset.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-user flag set.
    ///
    /// Bit positions are stable; they match the order the server-side
    /// attributes were introduced in and are safe to persist.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UserFlags: u32 {
        const CONTACT = 1 << 0;
        const MUTUAL_CONTACT = 1 << 1;
        const DELETED = 1 << 2;
        const VERIFIED = 1 << 3;
        const SCAM = 1 << 4;
        const FAKE = 1 << 5;
        const BOT_INLINE_GEO = 1 << 6;
        const BLOCKED = 1 << 7;
        const HAS_PHONE_CALLS = 1 << 8;
        const PHONE_CALLS_PRIVATE = 1 << 9;
        const SUPPORT = 1 << 10;
        const CAN_PIN_MESSAGES = 1 << 11;
        const DISCARD_MIN_PHOTO = 1 << 12;
        const SELF = 1 << 13;
        const PREMIUM = 1 << 14;
        const CAN_RECEIVE_GIFTS = 1 << 15;
        const VOICE_MESSAGES_FORBIDDEN = 1 << 16;
        const PERSONAL_PHOTO = 1 << 17;
        const STORIES_HIDDEN = 1 << 18;
        const HAS_ACTIVE_STORIES = 1 << 19;
        const HAS_UNREAD_STORIES = 1 << 20;
        const ME_REQUIRES_PREMIUM_TO_WRITE = 1 << 21;
        const SOME_REQUIRE_PREMIUM_TO_WRITE = 1 << 22;
        const REQUIRE_PREMIUM_TO_WRITE_KNOWN = 1 << 23;
        const READ_DATES_PRIVATE = 1 << 24;
    }
}

impl UserFlags {
    /// Flags a full-user snapshot owns outright.
    ///
    /// Everything outside this mask is left to base user objects and local
    /// bookkeeping when a snapshot is merged.
    pub const FULL_USER_MASK: Self = Self::BLOCKED
        .union(Self::HAS_PHONE_CALLS)
        .union(Self::PHONE_CALLS_PRIVATE)
        .union(Self::CAN_RECEIVE_GIFTS)
        .union(Self::CAN_PIN_MESSAGES)
        .union(Self::VOICE_MESSAGES_FORBIDDEN)
        .union(Self::READ_DATES_PRIVATE)
        .union(Self::REQUIRE_PREMIUM_TO_WRITE_KNOWN)
        .union(Self::ME_REQUIRES_PREMIUM_TO_WRITE);

    /// Flags a base user object owns outright when it is not a "min" object.
    pub const BASE_USER_MASK: Self = Self::CONTACT
        .union(Self::MUTUAL_CONTACT)
        .union(Self::DELETED)
        .union(Self::VERIFIED)
        .union(Self::SCAM)
        .union(Self::FAKE)
        .union(Self::BOT_INLINE_GEO)
        .union(Self::SUPPORT)
        .union(Self::PREMIUM)
        .union(Self::STORIES_HIDDEN)
        .union(Self::SOME_REQUIRE_PREMIUM_TO_WRITE);

    /// Part of [`Self::BASE_USER_MASK`] that "min" user objects may touch.
    pub const MIN_USER_MASK: Self = Self::BASE_USER_MASK
        .difference(Self::CONTACT)
        .difference(Self::MUTUAL_CONTACT)
        .difference(Self::STORIES_HIDDEN);

    /// Story presence markers, driven by the stories state setter only.
    pub const STORIES: Self = Self::HAS_ACTIVE_STORIES.union(Self::HAS_UNREAD_STORIES);
}
