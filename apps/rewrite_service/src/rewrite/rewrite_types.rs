use serde::{Deserialize, Serialize};

/// The category of rewrite being asked for. Unknown or missing values fall
/// back to [`RewriteType::Message`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteType {
    #[default]
    Message,
    Email,
    Comment,
    Prompt,
}

impl RewriteType {
    pub const ALL: [RewriteType; 4] = [
        RewriteType::Message,
        RewriteType::Email,
        RewriteType::Comment,
        RewriteType::Prompt,
    ];

    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("email") => RewriteType::Email,
            Some("comment") => RewriteType::Comment,
            Some("prompt") => RewriteType::Prompt,
            _ => RewriteType::Message,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteType::Message => "message",
            RewriteType::Email => "email",
            RewriteType::Comment => "comment",
            RewriteType::Prompt => "prompt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RewriteType::Message => "Improve your message with AI assistance",
            RewriteType::Email => "Create professional emails with proper formatting",
            RewriteType::Comment => "Generate appropriate responses to comments",
            RewriteType::Prompt => "Refine your AI prompts for clearer, better results",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub rewrite_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl RewriteRequest {
    pub fn kind(&self) -> RewriteType {
        RewriteType::from_code(self.rewrite_type.as_deref())
    }
}

/// Response envelope: exactly one of `result` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewriteResponse {
    Success { result: String },
    Failure { error: String },
}

impl RewriteResponse {
    pub fn success(result: impl Into<String>) -> Self {
        RewriteResponse::Success {
            result: result.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        RewriteResponse::Failure {
            error: error.into(),
        }
    }
}
