//! Session-owned arena of user entities.
//!
//! The session is the only owner of entities. Everything else refers to a
//! user by [`UserId`] and looks it up here.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use super::changes::{ChangeStream, Changes};
use super::user::{UserEntity, UserId};
use crate::cache::{CacheConfig, TypedCache};
use crate::config::Config;
use crate::merge;
use crate::transport::TransportUpdate;

/// All users known to one logged-in account.
#[derive(Debug)]
pub struct Session {
    self_id: UserId,
    users: HashMap<UserId, UserEntity>,
    contact_phones: HashMap<UserId, String>,
    by_username: TypedCache<String, UserId>,
    changes: Changes,
}

impl Session {
    pub fn new(self_id: UserId, event_buffer: usize, username_cache: &CacheConfig) -> Self {
        info!("Session for user {} initialized", self_id);
        Self {
            self_id,
            users: HashMap::new(),
            contact_phones: HashMap::new(),
            by_username: TypedCache::new("users_by_username", username_cache),
            changes: Changes::new(event_buffer),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.self_user_id,
            config.event_buffer,
            &config.username_cache,
        )
    }

    pub fn self_id(&self) -> UserId {
        self.self_id
    }

    /// Subscribe to change events of every entity in this session.
    pub fn subscribe(&self) -> ChangeStream {
        self.changes.subscribe()
    }

    /// Get the entity for `id`, creating it on first sighting.
    pub fn user(&mut self, id: UserId) -> &mut UserEntity {
        match self.users.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!("Created user entity {}", id);
                entry.insert(UserEntity::new(id, id == self.self_id, self.changes.clone()))
            }
        }
    }

    /// Get an entity only if it is already known.
    pub fn user_loaded(&self, id: UserId) -> Option<&UserEntity> {
        self.users.get(&id)
    }

    pub fn user_loaded_mut(&mut self, id: UserId) -> Option<&mut UserEntity> {
        self.users.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &UserEntity> {
        self.users.values()
    }

    // --- Phone book ---

    pub fn set_contact_phone(&mut self, id: UserId, phone: &str) {
        if phone.is_empty() {
            self.contact_phones.remove(&id);
        } else {
            self.contact_phones.insert(id, phone.to_string());
        }
    }

    pub fn find_contact_phone(&self, id: UserId) -> Option<&str> {
        self.contact_phones.get(&id).map(String::as_str)
    }

    /// Full share check for a known user; unknown users can't be shared.
    pub fn can_share_this_contact(&self, id: UserId) -> bool {
        self.user_loaded(id)
            .is_some_and(|user| user.can_share_this_contact(self.find_contact_phone(id)))
    }

    pub fn can_add_contact(&self, id: UserId) -> bool {
        self.user_loaded(id)
            .is_some_and(|user| user.can_add_contact(self.find_contact_phone(id)))
    }

    // --- Username lookup ---

    /// Resolve a username (with or without `@`, any case) to a known user.
    pub fn find_by_username(&self, username: &str) -> Option<UserId> {
        let key = username.trim_start_matches('@').to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(id) = self.by_username.get(&key) {
            if self.users.get(&id).is_some_and(|user| user.has_username(&key)) {
                return Some(id);
            }
            self.by_username.invalidate(&key);
        }

        let id = self
            .users
            .values()
            .find(|user| user.has_username(&key))
            .map(UserEntity::id)?;
        self.by_username.insert(key, id);
        Some(id)
    }

    // --- Updates ---

    /// Apply one transport update, creating the entity if needed.
    ///
    /// Returns the id of the affected user.
    pub fn apply(&mut self, update: &TransportUpdate) -> UserId {
        let id = UserId(update.user_id());
        match update {
            TransportUpdate::User(payload) => {
                let user = self.user(id);
                let was_usernames = user.usernames().to_vec();
                merge::apply_user(user, payload);
                if user.usernames() != was_usernames.as_slice() {
                    for username in was_usernames {
                        self.by_username.invalidate(&username.to_lowercase());
                    }
                }
            }
            TransportUpdate::UserStatus { status, .. } => {
                merge::apply_user_status(self.user(id), status);
            }
            TransportUpdate::UserFull(payload) => {
                merge::apply_user_update(self.user(id), payload);
            }
            TransportUpdate::UserAction { when, .. } => {
                self.user(id).made_action(*when);
            }
            TransportUpdate::StoriesState { state, .. } => {
                self.user(id).set_stories_state(*state);
            }
            TransportUpdate::ContactPhone { phone, .. } => {
                self.user(id);
                self.set_contact_phone(id, phone);
            }
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LastseenStatus, UserChange, UserFlags, UsernameEntry};
    use crate::transport::{FullUserPayload, UserPayload, UserStatusPayload};

    fn session() -> Session {
        Session::new(UserId(1), 64, &CacheConfig::username_index())
    }

    fn user_update(id: u64, username: &str) -> TransportUpdate {
        TransportUpdate::User(UserPayload {
            user_id: id,
            first_name: Some(format!("User {}", id)),
            username: Some(username.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_one_entity_per_id() {
        let mut session = session();
        session.apply(&user_update(5, "five"));
        session.apply(&user_update(5, "five"));
        assert_eq!(session.len(), 1);
        assert_eq!(session.user_loaded(UserId(5)).unwrap().id(), UserId(5));
        assert!(session.user_loaded(UserId(6)).is_none());
    }

    #[test]
    fn test_self_entity() {
        let mut session = session();
        assert!(session.user(UserId(1)).is_self());
        assert!(!session.user(UserId(2)).is_self());
        assert!(session.user(UserId(1)).flags().contains(UserFlags::SELF));
    }

    #[test]
    fn test_find_by_username() {
        let mut session = session();
        session.apply(&user_update(5, "Five"));
        assert_eq!(session.find_by_username("@five"), Some(UserId(5)));
        assert_eq!(session.find_by_username("FIVE"), Some(UserId(5)));
        assert_eq!(session.find_by_username("six"), None);
        assert_eq!(session.find_by_username("@"), None);
    }

    #[test]
    fn test_username_moves_between_users() {
        let mut session = session();
        session.apply(&user_update(5, "handle"));
        assert_eq!(session.find_by_username("handle"), Some(UserId(5)));

        session.apply(&user_update(5, "other"));
        session.apply(&user_update(6, "handle"));
        assert_eq!(session.find_by_username("handle"), Some(UserId(6)));
        assert_eq!(session.find_by_username("other"), Some(UserId(5)));
    }

    #[test]
    fn test_usernames_list_lookup() {
        let mut session = session();
        session.apply(&TransportUpdate::User(UserPayload {
            user_id: 9,
            usernames: Some(vec![UsernameEntry::new("first"), UsernameEntry::new("second")]),
            ..Default::default()
        }));
        assert_eq!(session.find_by_username("second"), Some(UserId(9)));
    }

    #[test]
    fn test_contact_phone_share_check() {
        let mut session = session();
        session.apply(&user_update(5, "five"));
        assert!(!session.can_share_this_contact(UserId(5)));

        session.apply(&TransportUpdate::ContactPhone {
            user_id: 5,
            phone: "+15550100".into(),
        });
        assert!(session.can_share_this_contact(UserId(5)));
        assert!(session.can_add_contact(UserId(5)));
        assert!(!session.can_share_this_contact(UserId(404)));
    }

    #[test]
    fn test_status_and_action_routing() {
        let mut session = session();
        let mut rx = session.subscribe();

        session.apply(&TransportUpdate::UserStatus {
            user_id: 5,
            status: UserStatusPayload::Online { expires: 500 },
        });
        session.apply(&TransportUpdate::UserStatus {
            user_id: 5,
            status: UserStatusPayload::Recently { by_me: false },
        });
        assert_eq!(
            session.user_loaded(UserId(5)).unwrap().lastseen(),
            LastseenStatus::online_till(500)
        );

        session.apply(&TransportUpdate::UserAction { user_id: 5, when: 1_000 });
        assert_eq!(session.user_loaded(UserId(5)).unwrap().lastseen().till(), 1_030);

        let lastseen_events = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|event| matches!(event, UserChange::Lastseen { .. }))
            .count();
        assert_eq!(lastseen_events, 2);
    }

    #[test]
    fn test_out_of_range_action_ignored() {
        let mut session = session();
        let line = r#"{"type":"user_action","user_id":5,"when":9223372036854775807}"#;
        let update = TransportUpdate::from_json_line(line, 1).unwrap();
        session.apply(&update);
        assert_eq!(
            session.user_loaded(UserId(5)).unwrap().lastseen(),
            LastseenStatus::Unknown
        );
    }

    #[test]
    fn test_full_update_routing_is_idempotent() {
        let mut session = session();
        let update = TransportUpdate::UserFull(FullUserPayload {
            user_id: 5,
            blocked: true,
            common_chats_count: 2,
            ..Default::default()
        });
        session.apply(&update);
        let once = session.user_loaded(UserId(5)).unwrap().snapshot();
        session.apply(&update);
        assert_eq!(session.user_loaded(UserId(5)).unwrap().snapshot(), once);
        assert!(once.flags.contains(UserFlags::BLOCKED));
    }
}
