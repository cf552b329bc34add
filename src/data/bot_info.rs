//! Bot metadata attached to users that are bots.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::transport::BotMenuButtonPayload;

bitflags! {
    /// Administrator rights a bot asks for by default when added to a chat.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ChatAdminRights: u32 {
        const CHANGE_INFO = 1 << 0;
        const POST_MESSAGES = 1 << 1;
        const EDIT_MESSAGES = 1 << 2;
        const DELETE_MESSAGES = 1 << 3;
        const BAN_USERS = 1 << 4;
        const INVITE_USERS = 1 << 5;
        const PIN_MESSAGES = 1 << 7;
        const ADD_ADMINS = 1 << 9;
        const ANONYMOUS = 1 << 10;
        const MANAGE_CALL = 1 << 11;
        const OTHER = 1 << 12;
        const MANAGE_TOPICS = 1 << 13;
        const POST_STORIES = 1 << 14;
        const EDIT_STORIES = 1 << 15;
        const DELETE_STORIES = 1 << 16;
    }
}

/// A bot command as shown in the command menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Metadata of a bot user.
///
/// `version` follows the server's bot info version; `description_version`
/// is local and increases whenever any part of the description changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BotInfo {
    pub inited: bool,
    pub reads_all_history: bool,
    pub cant_join_groups: bool,
    pub supports_attach_menu: bool,
    pub can_edit_information: bool,
    pub version: i32,
    pub description_version: u32,
    pub description: String,
    pub description_photo_id: Option<u64>,
    pub description_document_id: Option<u64>,
    pub inline_placeholder: String,
    pub commands: Vec<BotCommand>,

    pub menu_button_text: String,
    pub menu_button_url: String,

    pub group_admin_rights: ChatAdminRights,
    pub channel_admin_rights: ChatAdminRights,
}

impl BotInfo {
    pub fn with_version(version: i32) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    /// Apply the menu button from a bot info payload.
    ///
    /// Anything but a web view button resets the text and url. Returns
    /// whether either of them changed.
    pub fn apply_menu_button(&mut self, button: Option<&BotMenuButtonPayload>) -> bool {
        let (text, url) = match button {
            Some(BotMenuButtonPayload::WebView { text, url }) => (text.clone(), url.clone()),
            Some(BotMenuButtonPayload::Default) | Some(BotMenuButtonPayload::Commands) | None => {
                (String::new(), String::new())
            }
        };
        let changed = self.menu_button_text != text || self.menu_button_url != url;
        self.menu_button_text = text;
        self.menu_button_url = url;
        changed
    }

    pub fn has_menu_web_view(&self) -> bool {
        !self.menu_button_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_button_web_view() {
        let mut info = BotInfo::default();
        let button = BotMenuButtonPayload::WebView {
            text: "Open".into(),
            url: "https://example.org/app".into(),
        };
        assert!(info.apply_menu_button(Some(&button)));
        assert!(info.has_menu_web_view());
        assert!(!info.apply_menu_button(Some(&button)));
    }

    #[test]
    fn test_menu_button_reset() {
        let mut info = BotInfo::default();
        info.menu_button_text = "Open".into();
        info.menu_button_url = "https://example.org/app".into();

        assert!(info.apply_menu_button(Some(&BotMenuButtonPayload::Commands)));
        assert!(!info.has_menu_web_view());
        assert!(!info.apply_menu_button(None));
    }

    #[test]
    fn test_admin_rights_serde_transparent() {
        let rights = ChatAdminRights::DELETE_MESSAGES | ChatAdminRights::BAN_USERS;
        let json = serde_json::to_string(&rights).unwrap();
        let back: ChatAdminRights = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rights);
    }
}
