use crate::model::{AdoptionApplication, Pet, User};

pub mod adopt;
pub mod auth;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command did, for the caller to present however it likes.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Pets whose state the command changed (or targeted).
    pub affected_pets: Vec<Pet>,
    /// The user signed in by the command.
    pub user: Option<User>,
    /// The application created by the command.
    pub application: Option<AdoptionApplication>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_pets(mut self, pets: Vec<Pet>) -> Self {
        self.affected_pets = pets;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_application(mut self, application: AdoptionApplication) -> Self {
        self.application = Some(application);
        self
    }
}
