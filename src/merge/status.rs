//! Online status updates.

use crate::data::{LastseenStatus, UserEntity};
use crate::transport::UserStatusPayload;

/// Map a wire status to a presence value.
///
/// A "recently" status does not clobber a locally synthesized online value:
/// the user was just seen active, the server only hides the exact time.
pub fn lastseen_from_status(status: &UserStatusPayload, current: LastseenStatus) -> LastseenStatus {
    match *status {
        UserStatusPayload::Empty => LastseenStatus::Hidden,
        UserStatusPayload::Recently { by_me } => {
            if current.is_local_online_value() {
                LastseenStatus::Exact {
                    till: current.till(),
                    local: true,
                    hidden_by_me: by_me,
                }
            } else {
                LastseenStatus::Recently { hidden_by_me: by_me }
            }
        }
        UserStatusPayload::LastWeek { by_me } => LastseenStatus::WithinWeek { hidden_by_me: by_me },
        UserStatusPayload::LastMonth { by_me } => LastseenStatus::WithinMonth { hidden_by_me: by_me },
        UserStatusPayload::Online { expires } => LastseenStatus::online_till(expires),
        UserStatusPayload::Offline { was_online } => LastseenStatus::online_till(was_online),
    }
}

/// Apply a status update. Returns whether the stored presence changed.
pub fn apply_user_status(user: &mut UserEntity, status: &UserStatusPayload) -> bool {
    let next = lastseen_from_status(status, user.lastseen());
    user.update_lastseen(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Changes, UserId};

    #[test]
    fn test_status_mapping() {
        let unknown = LastseenStatus::Unknown;
        assert_eq!(
            lastseen_from_status(&UserStatusPayload::Empty, unknown),
            LastseenStatus::Hidden
        );
        assert_eq!(
            lastseen_from_status(&UserStatusPayload::LastWeek { by_me: true }, unknown),
            LastseenStatus::WithinWeek { hidden_by_me: true }
        );
        assert_eq!(
            lastseen_from_status(&UserStatusPayload::Offline { was_online: 50 }, unknown),
            LastseenStatus::online_till(50)
        );
    }

    #[test]
    fn test_recently_keeps_local_online() {
        let local = LastseenStatus::Exact {
            till: 1_030,
            local: true,
            hidden_by_me: false,
        };
        assert_eq!(
            lastseen_from_status(&UserStatusPayload::Recently { by_me: true }, local),
            LastseenStatus::Exact {
                till: 1_030,
                local: true,
                hidden_by_me: true,
            }
        );
    }

    #[test]
    fn test_online_then_offline_then_recently() {
        let mut user = UserEntity::new(UserId(9), false, Changes::new(8));
        assert!(apply_user_status(&mut user, &UserStatusPayload::Online { expires: 2_000 }));
        assert!(apply_user_status(&mut user, &UserStatusPayload::Offline { was_online: 1_900 }));
        assert!(!apply_user_status(&mut user, &UserStatusPayload::Recently { by_me: false }));
        assert_eq!(user.lastseen(), LastseenStatus::online_till(1_900));
    }
}
