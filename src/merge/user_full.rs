//! Full user snapshots.

use tracing::debug;

use crate::data::{CallsStatus, UserEntity, UserFlags};
use crate::transport::FullUserPayload;

/// Reconcile extended profile fields with a full-user snapshot.
///
/// Applying the same snapshot again leaves the entity unchanged and emits
/// no events.
///
/// # Panics
/// Panics if the snapshot belongs to another user.
pub fn apply_user_update(user: &mut UserEntity, update: &FullUserPayload) {
    assert_eq!(
        user.id().0,
        update.user_id,
        "full user snapshot routed to the wrong entity"
    );

    match update.bot_info.as_ref() {
        Some(info) => user.set_bot_info(info),
        None => user.set_bot_info_version(-1),
    }

    let can_receive_gifts = update
        .premium_gifts
        .as_ref()
        .is_some_and(|options| !options.is_empty());

    let mut flags = UserFlags::REQUIRE_PREMIUM_TO_WRITE_KNOWN;
    flags.set(UserFlags::PHONE_CALLS_PRIVATE, update.phone_calls_private);
    flags.set(UserFlags::HAS_PHONE_CALLS, update.phone_calls_available);
    flags.set(UserFlags::CAN_RECEIVE_GIFTS, can_receive_gifts);
    flags.set(UserFlags::CAN_PIN_MESSAGES, update.can_pin_message);
    flags.set(UserFlags::BLOCKED, update.blocked);
    flags.set(
        UserFlags::VOICE_MESSAGES_FORBIDDEN,
        update.voice_messages_forbidden,
    );
    flags.set(UserFlags::READ_DATES_PRIVATE, update.read_dates_private);
    flags.set(
        UserFlags::ME_REQUIRES_PREMIUM_TO_WRITE,
        update.contact_require_premium,
    );
    user.set_flags((user.flags() - UserFlags::FULL_USER_MASK) | flags);

    user.set_calls_status(if update.phone_calls_private {
        CallsStatus::Private
    } else if update.phone_calls_available {
        CallsStatus::Enabled
    } else {
        CallsStatus::Disabled
    });

    user.set_about(update.about.as_deref().unwrap_or(""));
    user.set_common_chats_count(update.common_chats_count);
    user.set_private_forward_name(update.private_forward_name.as_deref().unwrap_or(""));
    user.set_messages_ttl(update.ttl_period.unwrap_or(0));
    if let Some(pinned) = update.pinned_msg_id {
        user.set_pinned_message_id(pinned);
    }
    user.set_theme_emoji(update.theme_emoticon.as_deref().unwrap_or(""));
    user.set_translation_disabled(update.translations_disabled);
    if let Some(reasons) = update.unavailable_reasons.as_ref() {
        user.set_unavailable_reasons(reasons.clone());
    }

    user.set_bot_admin_rights(
        update.bot_group_admin_rights.unwrap_or_default(),
        update.bot_broadcast_admin_rights.unwrap_or_default(),
    );

    user.full_updated();
    debug!("Applied full user {}", user.id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ChangeStream;
    use crate::data::{
        BotCommand, ChatAdminRights, Changes, UnavailableReason, UserChange, UserId,
    };
    use crate::transport::{BotInfoPayload, BotMenuButtonPayload, PremiumGiftOption};

    fn user() -> (UserEntity, ChangeStream) {
        let changes = Changes::new(128);
        let rx = changes.subscribe();
        (UserEntity::new(UserId(7), false, changes), rx)
    }

    fn drain(rx: &mut ChangeStream) -> Vec<UserChange> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn snapshot_payload() -> FullUserPayload {
        FullUserPayload {
            user_id: 7,
            blocked: true,
            phone_calls_available: true,
            can_pin_message: true,
            read_dates_private: true,
            contact_require_premium: true,
            premium_gifts: Some(vec![PremiumGiftOption {
                months: 3,
                currency: "USD".into(),
                amount: 1199,
            }]),
            about: Some("Forecasts on demand".into()),
            common_chats_count: 4,
            private_forward_name: Some("Weather".into()),
            ttl_period: Some(86_400),
            pinned_msg_id: Some(55),
            theme_emoticon: Some("🌧".into()),
            unavailable_reasons: Some(vec![UnavailableReason::new(
                "sensitive",
                "Not available on this platform",
            )]),
            bot_info: Some(BotInfoPayload {
                version: 1,
                description: Some("Forecasts".into()),
                commands: Some(vec![BotCommand::new("now", "Current weather")]),
                menu_button: Some(BotMenuButtonPayload::WebView {
                    text: "Radar".into(),
                    url: "https://example.org/radar".into(),
                }),
                ..Default::default()
            }),
            bot_group_admin_rights: Some(ChatAdminRights::DELETE_MESSAGES),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (mut user, mut rx) = user();
        let payload = snapshot_payload();

        apply_user_update(&mut user, &payload);
        let once = user.snapshot();
        assert!(!drain(&mut rx).is_empty());

        apply_user_update(&mut user, &payload);
        assert_eq!(user.snapshot(), once);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_apply_sets_profile_fields() {
        let (mut user, _rx) = user();
        apply_user_update(&mut user, &snapshot_payload());

        assert!(user.is_blocked());
        assert!(user.can_receive_gifts());
        assert!(user.read_dates_private());
        assert!(user.me_requires_premium_to_write());
        assert!(user.require_premium_to_write_known());
        assert_eq!(user.calls_status(), CallsStatus::Enabled);
        assert_eq!(user.common_chats_count(), 4);
        assert_eq!(user.private_forward_name(), "Weather");
        assert_eq!(user.about(), "Forecasts on demand");
        assert_eq!(user.messages_ttl(), 86_400);
        assert_eq!(user.pinned_message_id(), 55);
        assert_eq!(user.unavailable_reasons().len(), 1);
        assert!(user.full_loaded());

        let info = user.bot_info().unwrap();
        assert_eq!(info.description, "Forecasts");
        assert_eq!(info.menu_button_text, "Radar");
        assert_eq!(info.group_admin_rights, ChatAdminRights::DELETE_MESSAGES);
        assert_eq!(info.channel_admin_rights, ChatAdminRights::empty());
    }

    #[test]
    fn test_apply_clears_masked_flags_only() {
        let (mut user, _rx) = user();
        user.add_flags(UserFlags::VERIFIED | UserFlags::BLOCKED);

        let payload = FullUserPayload {
            user_id: 7,
            phone_calls_private: true,
            phone_calls_available: true,
            ..Default::default()
        };
        apply_user_update(&mut user, &payload);

        assert!(user.is_verified());
        assert!(!user.is_blocked());
        assert_eq!(user.calls_status(), CallsStatus::Private);
        assert!(user.has_calls());
        assert!(!user.is_bot());
    }

    #[test]
    fn test_stale_bot_info_keeps_description() {
        let (mut user, _rx) = user();
        let mut payload = snapshot_payload();
        if let Some(info) = payload.bot_info.as_mut() {
            info.version = 5;
        }
        apply_user_update(&mut user, &payload);

        let mut stale = snapshot_payload();
        if let Some(info) = stale.bot_info.as_mut() {
            info.version = 4;
            info.description = Some("Old text".into());
        }
        apply_user_update(&mut user, &stale);
        assert_eq!(user.bot_info().unwrap().description, "Forecasts");
    }

    #[test]
    #[should_panic(expected = "wrong entity")]
    fn test_mismatched_user_panics() {
        let (mut user, _rx) = user();
        let payload = FullUserPayload {
            user_id: 8,
            ..Default::default()
        };
        apply_user_update(&mut user, &payload);
    }
}
