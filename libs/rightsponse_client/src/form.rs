use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use thiserror::Error;

use crate::api::{RewriteApi, RewritePayload};
use crate::speech::{SpeechRecognizer, SPEECH_LOCALE};

pub const DEFAULT_LANGUAGE: &str = "id";
pub const DEFAULT_TONE: &str = "professional";
pub const SUCCESS_MESSAGE: &str = "Your text has been improved";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabType {
    #[default]
    Message,
    Email,
    Comment,
    Prompt,
}

impl TabType {
    pub const ALL: [TabType; 4] = [
        TabType::Message,
        TabType::Email,
        TabType::Comment,
        TabType::Prompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::Message => "message",
            TabType::Email => "email",
            TabType::Comment => "comment",
            TabType::Prompt => "prompt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TabType::Message => "Improve your message with AI assistance",
            TabType::Email => "Create professional emails with proper formatting",
            TabType::Comment => "Generate appropriate responses to comments",
            TabType::Prompt => "Refine your AI prompts for clearer, better results",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TabType::Message => "Write your message here...",
            TabType::Email => "Write your email content here. The AI will format it with a subject line, greeting, and closing.",
            TabType::Comment => "Write your reply here...",
            TabType::Prompt => "Write the prompt you want to improve here...",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your message")]
    EmptyText,

    #[error("Please enter the comment you're replying to")]
    MissingComment,

    #[error("A request is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub tabs: HashMap<TabType, TabState>,
    pub comment: String,
    pub language: String,
    pub tone: String,
    pub active_tab: TabType,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            tabs: TabType::ALL
                .iter()
                .map(|tab| (*tab, TabState::default()))
                .collect(),
            comment: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            active_tab: TabType::default(),
        }
    }
}

impl FormState {
    pub fn tab(&self, tab: TabType) -> TabState {
        self.tabs.get(&tab).cloned().unwrap_or_default()
    }

    pub fn validate(&self, tab: TabType) -> Result<(), FormError> {
        if self.tab(tab).input.trim().is_empty() {
            return Err(FormError::EmptyText);
        }

        if tab == TabType::Comment && self.comment.trim().is_empty() {
            return Err(FormError::MissingComment);
        }

        Ok(())
    }

    pub fn payload(&self, tab: TabType) -> RewritePayload {
        RewritePayload {
            text: self.tab(tab).input,
            comment: (tab == TabType::Comment).then(|| self.comment.clone()),
            tone: self.tone.clone(),
            language: self.language.clone(),
            rewrite_type: tab.as_str().to_string(),
        }
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Holds the form state and issues at most one rewrite request at a time.
pub struct FormController {
    api: Box<dyn RewriteApi + Send + Sync>,
    state: RwLock<FormState>,
    in_flight: AtomicBool,
}

impl FormController {
    pub fn new(api: Box<dyn RewriteApi + Send + Sync>) -> Self {
        Self {
            api,
            state: RwLock::new(FormState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn set_input(&self, tab: TabType, text: impl Into<String>) {
        self.state.write().tabs.entry(tab).or_default().input = text.into();
    }

    pub fn set_comment(&self, comment: impl Into<String>) {
        self.state.write().comment = comment.into();
    }

    pub fn set_language(&self, language: impl Into<String>) {
        self.state.write().language = language.into();
    }

    pub fn set_tone(&self, tone: impl Into<String>) {
        self.state.write().tone = tone.into();
    }

    pub fn set_active_tab(&self, tab: TabType) {
        self.state.write().active_tab = tab;
    }

    /// Sends the given tab's input for rewriting. Invalid input and submits
    /// made while another request is outstanding never reach the server.
    pub async fn submit(&self, tab: TabType) -> Notification {
        let payload = {
            let state = self.state.read();
            if let Err(e) = state.validate(tab) {
                return Notification::error(e.to_string());
            }
            state.payload(tab)
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Notification::error(FormError::Busy.to_string());
        }
        let _in_flight = InFlight(&self.in_flight);

        match self.api.rewrite(&payload).await {
            Ok(result) => {
                self.state.write().tabs.entry(tab).or_default().output = result;
                Notification::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::error!("Rewrite failed for {} tab: {}", tab.as_str(), e);
                Notification::error(e.to_string())
            }
        }
    }

    /// Replaces the active tab's input with a spoken transcript. Returns a
    /// notification only when recognition fails.
    pub async fn dictate(
        &self,
        recognizer: &(dyn SpeechRecognizer + Send + Sync),
    ) -> Option<Notification> {
        match recognizer.recognize(SPEECH_LOCALE).await {
            Ok(transcript) => {
                let tab = self.state.read().active_tab;
                self.set_input(tab, transcript);
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Some(Notification::error(e.to_string()))
            }
        }
    }
}
