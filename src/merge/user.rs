//! Base user objects.

use tracing::debug;

use super::status::apply_user_status;
use crate::data::{UserEntity, UserFlags, format_phone};
use crate::transport::{StoriesState, UserPayload};

/// Flags carried by a base user object.
fn payload_flags(payload: &UserPayload) -> UserFlags {
    let mut flags = UserFlags::empty();
    flags.set(UserFlags::CONTACT, payload.contact);
    flags.set(UserFlags::MUTUAL_CONTACT, payload.mutual_contact);
    flags.set(UserFlags::DELETED, payload.deleted);
    flags.set(UserFlags::VERIFIED, payload.verified);
    flags.set(UserFlags::SCAM, payload.scam);
    flags.set(UserFlags::FAKE, payload.fake);
    flags.set(UserFlags::BOT_INLINE_GEO, payload.bot && payload.bot_inline_geo);
    flags.set(UserFlags::SUPPORT, payload.support);
    flags.set(UserFlags::PREMIUM, payload.premium);
    flags.set(UserFlags::STORIES_HIDDEN, payload.stories_hidden);
    flags.set(
        UserFlags::SOME_REQUIRE_PREMIUM_TO_WRITE,
        payload.contact_require_premium,
    );
    flags
}

/// Apply a base user object.
///
/// Full objects are authoritative for everything they carry. "Min" objects
/// only add what they know and never clear contact data, phone or names.
pub fn apply_user(user: &mut UserEntity, payload: &UserPayload) {
    debug_assert_eq!(user.id().0, payload.user_id);
    let min = payload.min;

    if let Some(access_hash) = payload.access_hash
        && (!min || user.access_hash().is_none())
    {
        user.set_access_hash(access_hash);
    }

    let mask = if min {
        UserFlags::MIN_USER_MASK
    } else {
        UserFlags::BASE_USER_MASK
    };
    user.set_flags((user.flags() - mask) | (payload_flags(payload) & mask));

    if !min || user.apply_min_photo() {
        if payload.personal_photo {
            user.add_flags(UserFlags::PERSONAL_PHOTO);
        } else {
            user.remove_flags(UserFlags::PERSONAL_PHOTO);
        }
    }

    if !min {
        user.set_is_contact(payload.contact);
        user.set_phone(payload.phone.as_deref().unwrap_or(""));
    } else if let Some(phone) = payload.phone.as_deref() {
        user.set_phone(phone);
    }

    if let Some(usernames) = payload.usernames.as_ref()
        && !usernames.is_empty()
    {
        user.set_usernames(usernames);
    }
    let username = match (&payload.username, &payload.usernames) {
        (_, Some(list)) if !list.is_empty() => user.username().to_string(),
        (Some(username), _) => username.clone(),
        (None, _) if min => user.username().to_string(),
        (None, _) => String::new(),
    };

    let show_phone = !user.is_self() && !user.is_contact() && !user.phone().is_empty();
    let phone_name = if show_phone {
        format_phone(user.phone())
    } else {
        String::new()
    };
    user.set_name(
        payload.first_name.as_deref().unwrap_or(""),
        payload.last_name.as_deref().unwrap_or(""),
        &phone_name,
        &username,
    );

    if payload.bot {
        user.set_bot_info_version(payload.bot_info_version.unwrap_or(0));
        if let Some(info) = user.bot_info_mut() {
            info.reads_all_history = payload.bot_chat_history;
            info.cant_join_groups = payload.bot_nochats;
            info.supports_attach_menu = payload.bot_attach_menu;
            info.can_edit_information = payload.bot_can_edit;
            if let Some(placeholder) = payload.bot_inline_placeholder.as_ref() {
                info.inline_placeholder = placeholder.clone();
            }
        }
    } else if !min && user.is_bot() {
        user.set_bot_info_version(-1);
    }

    if let Some(status) = payload.status.as_ref() {
        apply_user_status(user, status);
    }

    if let Some(reasons) = payload.restriction_reason.as_ref() {
        user.set_unavailable_reasons(reasons.clone());
    } else if !min {
        user.set_unavailable_reasons(Vec::new());
    }

    if !min {
        if payload.stories_unavailable {
            user.set_stories_state(StoriesState::None);
        } else if payload.stories_max_id.is_some_and(|id| id > 0) && !user.has_active_stories() {
            user.set_stories_state(StoriesState::HasUnread);
        }
    }

    debug!("Applied {}user {} ({})", if min { "min " } else { "" }, user.id(), user.display_name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Changes, ContactStatus, UserId, UsernameEntry};
    use crate::transport::UserStatusPayload;

    fn user() -> UserEntity {
        UserEntity::new(UserId(42), false, Changes::new(64))
    }

    fn full_payload() -> UserPayload {
        UserPayload {
            user_id: 42,
            access_hash: Some(0x1234),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            username: Some("ada".into()),
            phone: Some("15550100".into()),
            status: Some(UserStatusPayload::Recently { by_me: false }),
            verified: true,
            premium: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_full_object() {
        let mut user = user();
        apply_user(&mut user, &full_payload());

        assert_eq!(user.access_hash(), Some(0x1234));
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.username(), "ada");
        assert_eq!(user.phone_name(), "+15550100");
        assert_eq!(user.contact_status(), ContactStatus::NotContact);
        assert!(user.is_verified());
        assert!(user.is_premium());
        assert_eq!(
            user.lastseen(),
            crate::data::LastseenStatus::Recently { hidden_by_me: false }
        );
    }

    #[test]
    fn test_min_object_keeps_contact_data() {
        let mut user = user();
        let mut payload = full_payload();
        payload.contact = true;
        apply_user(&mut user, &payload);
        assert!(user.is_contact());
        assert!(user.flags().contains(UserFlags::CONTACT));

        let min = UserPayload {
            user_id: 42,
            min: true,
            access_hash: Some(0x9999),
            scam: true,
            ..Default::default()
        };
        apply_user(&mut user, &min);

        assert!(user.is_contact());
        assert!(user.flags().contains(UserFlags::CONTACT));
        assert!(user.is_scam());
        assert!(!user.is_verified());
        assert_eq!(user.access_hash(), Some(0x1234));
        assert_eq!(user.phone(), "15550100");
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.username(), "ada");
    }

    #[test]
    fn test_usernames_list_wins_over_legacy() {
        let mut user = user();
        let mut payload = full_payload();
        payload.username = None;
        payload.usernames = Some(vec![
            UsernameEntry::new("collectible"),
            UsernameEntry::new("ada_l"),
        ]);
        apply_user(&mut user, &payload);

        assert_eq!(user.username(), "collectible");
        assert_eq!(user.editable_username(), "collectible");
        assert_eq!(user.usernames().len(), 2);
    }

    #[test]
    fn test_bot_object() {
        let mut user = user();
        let payload = UserPayload {
            user_id: 42,
            first_name: Some("Weather".into()),
            bot: true,
            bot_inline_geo: true,
            bot_info_version: Some(3),
            bot_inline_placeholder: Some("City name".into()),
            bot_nochats: true,
            ..Default::default()
        };
        apply_user(&mut user, &payload);

        assert!(user.is_bot());
        assert!(user.is_bot_inline_geo());
        let info = user.bot_info().unwrap();
        assert_eq!(info.version, 3);
        assert_eq!(info.inline_placeholder, "City name");
        assert!(info.cant_join_groups);
    }

    #[test]
    fn test_personal_photo() {
        let mut user = user();
        let mut payload = full_payload();
        payload.personal_photo = true;
        apply_user(&mut user, &payload);
        assert!(user.has_personal_photo());

        payload.personal_photo = false;
        apply_user(&mut user, &payload);
        assert!(!user.has_personal_photo());
    }

    #[test]
    fn test_min_photo_discarded() {
        let mut user = user();
        user.add_flags(UserFlags::PERSONAL_PHOTO | UserFlags::DISCARD_MIN_PHOTO);
        let min = UserPayload {
            user_id: 42,
            min: true,
            ..Default::default()
        };
        apply_user(&mut user, &min);
        assert!(user.has_personal_photo());

        user.remove_flags(UserFlags::DISCARD_MIN_PHOTO);
        apply_user(&mut user, &min);
        assert!(!user.has_personal_photo());
    }

    #[test]
    fn test_stories_markers() {
        let mut user = user();
        let mut payload = full_payload();
        payload.stories_max_id = Some(12);
        apply_user(&mut user, &payload);
        assert!(user.has_unread_stories());

        payload.stories_max_id = None;
        payload.stories_unavailable = true;
        apply_user(&mut user, &payload);
        assert!(!user.has_active_stories());
    }
}
