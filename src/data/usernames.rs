//! Ordered set of a user's reserved short names.

use serde::{Deserialize, Serialize};

/// One username as delivered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameEntry {
    pub username: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl UsernameEntry {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            active: true,
        }
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Active usernames in server order.
///
/// The first entry is the editable one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernamesInfo {
    usernames: Vec<String>,
}

impl UsernamesInfo {
    /// Replace the whole set. Inactive and empty entries are dropped, order
    /// is kept.
    pub fn set_usernames(&mut self, entries: &[UsernameEntry]) {
        self.usernames = entries
            .iter()
            .filter(|entry| entry.active && !entry.username.is_empty())
            .map(|entry| entry.username.clone())
            .collect();
    }

    /// Apply the legacy single-username field.
    ///
    /// Only used while the user has at most one username; a full list from
    /// the server is authoritative.
    pub fn set_username(&mut self, username: &str) {
        if self.usernames.len() > 1 {
            return;
        }
        if username.is_empty() {
            self.usernames.clear();
        } else {
            self.usernames = vec![username.to_string()];
        }
    }

    /// Primary username (first active one), empty if none.
    pub fn username(&self) -> &str {
        self.usernames.first().map(String::as_str).unwrap_or("")
    }

    pub fn editable_username(&self) -> &str {
        self.username()
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, username: &str) -> bool {
        self.usernames
            .iter()
            .any(|u| u.eq_ignore_ascii_case(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved_and_inactive_dropped() {
        let mut info = UsernamesInfo::default();
        info.set_usernames(&[
            UsernameEntry::new("zeta"),
            UsernameEntry::new("old").inactive(),
            UsernameEntry::new("alpha"),
        ]);
        assert_eq!(info.usernames(), ["zeta".to_string(), "alpha".to_string()]);
        assert_eq!(info.username(), "zeta");
    }

    #[test]
    fn test_editable_designation() {
        let mut info = UsernamesInfo::default();
        info.set_usernames(&[
            UsernameEntry::new(""),
            UsernameEntry::new("collectible"),
            UsernameEntry::new("mine"),
        ]);
        assert_eq!(info.editable_username(), "collectible");

        info.set_usernames(&[UsernameEntry::new(""), UsernameEntry::new("first")]);
        assert_eq!(info.editable_username(), "first");
    }

    #[test]
    fn test_legacy_username() {
        let mut info = UsernamesInfo::default();
        info.set_username("Durov");
        assert_eq!(info.username(), "Durov");
        assert_eq!(info.editable_username(), "Durov");
        assert!(info.contains("durov"));

        info.set_username("");
        assert_eq!(info.username(), "");
        assert_eq!(info.editable_username(), "");
    }

    #[test]
    fn test_legacy_username_ignored_for_lists() {
        let mut info = UsernamesInfo::default();
        info.set_usernames(&[UsernameEntry::new("a"), UsernameEntry::new("b")]);
        info.set_username("c");
        assert_eq!(info.usernames().len(), 2);
        assert_eq!(info.username(), "a");
    }
}
