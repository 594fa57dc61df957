use thiserror::Error;

#[derive(Error, Debug)]
pub enum PawsError {
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Sign in before submitting an application")]
    NotSignedIn,

    #[error("No pet selected for adoption")]
    NoPetSelected,

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl PawsError {
    /// True for the errors raised when an operation's preconditions are missing.
    /// Nothing has been mutated when one of these is returned.
    pub fn is_precondition(&self) -> bool {
        matches!(self, PawsError::NotSignedIn | PawsError::NoPetSelected)
    }
}

pub type Result<T> = std::result::Result<T, PawsError>;
