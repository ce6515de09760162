use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated note together with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    text: String,
    provider_label: String,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>, provider_label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider_label: provider_label.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn provider_label(&self) -> &str {
        &self.provider_label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

/// A Notion paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub object: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub paragraph: Paragraph,
}

impl ContentBlock {
    pub fn paragraph(text: &str) -> Self {
        Self {
            object: "block".to_string(),
            block_type: "paragraph".to_string(),
            paragraph: Paragraph {
                rich_text: vec![RichText {
                    kind: "text".to_string(),
                    text: TextContent {
                        content: text.to_string(),
                    },
                }],
            },
        }
    }

    /// The literal text carried by this block.
    pub fn text(&self) -> String {
        self.paragraph
            .rich_text
            .iter()
            .map(|rt| rt.text.content.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParent {
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleText {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleProperty {
    pub title: Vec<TitleText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProperties {
    #[serde(rename = "Name")]
    pub name: TitleProperty,
}

/// Body of a Notion `POST /v1/pages` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub parent: PageParent,
    pub properties: PageProperties,
    pub children: Vec<ContentBlock>,
}

impl PageRequest {
    pub fn new(database_id: &str, title: &str, children: Vec<ContentBlock>) -> Self {
        Self {
            parent: PageParent {
                database_id: database_id.to_string(),
            },
            properties: PageProperties {
                name: TitleProperty {
                    title: vec![TitleText {
                        text: TextContent {
                            content: title.to_string(),
                        },
                    }],
                },
            },
            children,
        }
    }

    pub fn title(&self) -> String {
        self.properties
            .name
            .title
            .iter()
            .map(|t| t.text.content.as_str())
            .collect()
    }
}

/// Body of a Resend `POST /emails` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// What a completed run produced, for the closing log line.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub provider_label: String,
    pub segments: usize,
    pub page_id: String,
    pub email_id: String,
}
