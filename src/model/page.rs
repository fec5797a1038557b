use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Warning,
    Error,
    Success,
}

/// One block of rich page content, stored as `{"type": ..., "data": {...}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
        level: u8,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Divider {},
    Embed {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        provider: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        html: Option<String>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    Callout {
        text: String,
        #[serde(rename = "type")]
        kind: CalloutKind,
    },
    Raw {
        html: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub no_index: Option<bool>,
    pub canonical_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PageGroupRefDto {
    pub slug: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Vec<ContentBlock>,
    pub group: Option<PageGroupRefDto>,
    pub order: i32,
    pub seo: SeoDto,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PageGroupDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PageGroupWithPagesDto {
    pub group: PageGroupDto,
    pub pages: Vec<PageDto>,
}
