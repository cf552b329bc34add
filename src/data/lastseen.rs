//! Presence ("last seen") model.
//!
//! The server hides exact online times behind privacy settings, so a value
//! is either an exact timestamp or one of several coarse buckets.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds.
pub type TimeId = i64;

/// Presence of a user as far as this session knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LastseenStatus {
    /// Nothing has been reported yet.
    #[default]
    Unknown,
    /// The server reports nothing useful ("long ago" or fully hidden).
    Hidden,
    WithinMonth {
        #[serde(default)]
        hidden_by_me: bool,
    },
    WithinWeek {
        #[serde(default)]
        hidden_by_me: bool,
    },
    Recently {
        #[serde(default)]
        hidden_by_me: bool,
    },
    /// Online until (or last online at) `till`.
    ///
    /// `local` marks a value synthesized from observed activity rather than
    /// reported by the server.
    Exact {
        till: TimeId,
        #[serde(default)]
        local: bool,
        #[serde(default)]
        hidden_by_me: bool,
    },
}

/// Precision class of a presence value, ordered from least to most precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    Unknown,
    Hidden,
    WithinMonth,
    WithinWeek,
    Recently,
    Exact,
}

impl LastseenStatus {
    /// Exact online-till value reported by the server.
    pub fn online_till(till: TimeId) -> Self {
        Self::Exact {
            till,
            local: false,
            hidden_by_me: false,
        }
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::Unknown => Precision::Unknown,
            Self::Hidden => Precision::Hidden,
            Self::WithinMonth { .. } => Precision::WithinMonth,
            Self::WithinWeek { .. } => Precision::WithinWeek,
            Self::Recently { .. } => Precision::Recently,
            Self::Exact { .. } => Precision::Exact,
        }
    }

    /// Timestamp for exact values, zero otherwise.
    pub fn till(&self) -> TimeId {
        match self {
            Self::Exact { till, .. } => *till,
            _ => 0,
        }
    }

    pub fn is_local_online_value(&self) -> bool {
        matches!(self, Self::Exact { local: true, .. })
    }

    pub fn is_hidden_by_me(&self) -> bool {
        match self {
            Self::WithinMonth { hidden_by_me }
            | Self::WithinWeek { hidden_by_me }
            | Self::Recently { hidden_by_me }
            | Self::Exact { hidden_by_me, .. } => *hidden_by_me,
            Self::Unknown | Self::Hidden => false,
        }
    }

    /// Whether the user counts as online at `now`.
    pub fn is_online(&self, now: TimeId) -> bool {
        matches!(self, Self::Exact { till, .. } if *till > now)
    }

    /// Whether `next` may replace `self` under the precision policy.
    ///
    /// A coarser value never replaces a finer one. Within the same class the
    /// latest delivery wins, so an offline time may follow a later
    /// online-till time.
    pub fn accepts(&self, next: &LastseenStatus) -> bool {
        if self == next {
            return false;
        }
        match next.precision().cmp(&self.precision()) {
            Ordering::Less => false,
            Ordering::Equal | Ordering::Greater => true,
        }
    }
}

impl fmt::Display for LastseenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Hidden => write!(f, "hidden"),
            Self::WithinMonth { .. } => write!(f, "within a month"),
            Self::WithinWeek { .. } => write!(f, "within a week"),
            Self::Recently { .. } => write!(f, "recently"),
            Self::Exact { till, local, .. } => {
                match DateTime::from_timestamp(*till, 0) {
                    Some(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M:%S UTC"))?,
                    None => write!(f, "at {}", till)?,
                }
                if *local {
                    write!(f, " (local)")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_order() {
        assert!(Precision::Exact > Precision::Recently);
        assert!(Precision::Recently > Precision::WithinWeek);
        assert!(Precision::WithinWeek > Precision::WithinMonth);
        assert!(Precision::WithinMonth > Precision::Hidden);
        assert!(Precision::Hidden > Precision::Unknown);
    }

    #[test]
    fn test_coarser_value_rejected() {
        let exact = LastseenStatus::online_till(1_700_000_000);
        assert!(!exact.accepts(&LastseenStatus::Recently { hidden_by_me: false }));
        assert!(!exact.accepts(&LastseenStatus::Hidden));
        assert!(!exact.accepts(&LastseenStatus::Unknown));
    }

    #[test]
    fn test_same_precision_latest_wins() {
        let online = LastseenStatus::online_till(1_700_000_300);
        let offline = LastseenStatus::online_till(1_700_000_100);
        assert!(online.accepts(&offline));
        assert!(!online.accepts(&online));

        let recently = LastseenStatus::Recently { hidden_by_me: false };
        assert!(recently.accepts(&LastseenStatus::Recently { hidden_by_me: true }));
    }

    #[test]
    fn test_unknown_accepts_anything_else() {
        let unknown = LastseenStatus::Unknown;
        assert!(unknown.accepts(&LastseenStatus::Hidden));
        assert!(unknown.accepts(&LastseenStatus::WithinMonth { hidden_by_me: false }));
    }

    #[test]
    fn test_is_online() {
        let status = LastseenStatus::online_till(100);
        assert!(status.is_online(99));
        assert!(!status.is_online(100));
        assert!(!LastseenStatus::Recently { hidden_by_me: false }.is_online(0));
    }
}
