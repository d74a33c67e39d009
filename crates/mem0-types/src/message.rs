//! Conversation turns sent to the add-memory endpoint.

use serde::{Deserialize, Serialize};

/// Speaker of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Image reference inside a message (`{"type": "image_url", "image_url": {"url": ...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub image_url: ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ImageContent {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            kind: "image_url".to_string(),
            image_url: ImageUrl { url: url.into() },
        }
    }
}

/// Either plain text or an image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Image(ImageContent),
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Text(s.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Text(s)
    }
}

impl From<ImageContent> for MessageContent {
    fn from(img: ImageContent) -> Self {
        MessageContent::Image(img)
    }
}

/// Single chat turn (user/assistant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_message_serializes_flat() {
        let m = Message::user("I like coffee");
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({ "role": "user", "content": "I like coffee" })
        );
    }

    #[test]
    fn image_message_serializes_as_image_url() {
        let m = Message::user(ImageContent::from_url("https://example.com/cat.png"));
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["content"]["type"], "image_url");
        assert_eq!(v["content"]["image_url"]["url"], "https://example.com/cat.png");
    }
}
