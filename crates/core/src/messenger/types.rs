//! Platform-native response payloads.

use serde::{Deserialize, Serialize};

/// A rendered reply in the shape the originating platform expects.
///
/// Serialization is untagged: each variant writes its platform's native
/// JSON with no wrapper, which is exactly what goes back over the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BotResponse {
    HipChat(HipChatResponse),
    Slack(SlackResponse),
}

// ---------------------------------------------------------------------------
// HipChat
// ---------------------------------------------------------------------------

/// HipChat room notification colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HipChatColor {
    Green,
    Red,
    Yellow,
    Gray,
}

/// A HipChat room notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatResponse {
    pub color: HipChatColor,
    pub message: String,
    pub notify: bool,
    pub message_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<HipChatCard>,
}

/// A HipChat card, attached to single-result replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatCard {
    pub style: String,
    pub format: String,
    /// Unique card id, freshly generated per response.
    pub id: String,
    pub title: String,
    pub description: HipChatCardDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<HipChatCardIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<HipChatCardAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatCardDescription {
    pub value: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatCardIcon {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatCardAttribute {
    pub label: String,
    pub value: HipChatCardAttributeValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HipChatCardAttributeValue {
    pub label: String,
}

// ---------------------------------------------------------------------------
// Slack
// ---------------------------------------------------------------------------

/// Slack response visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlackResponseType {
    InChannel,
    Ephemeral,
}

/// A Slack slash command response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackResponse {
    pub response_type: SlackResponseType,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<SlackAttachment>,
}

/// A Slack message attachment rendering one restaurant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SlackField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}
