use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEmail {
    #[error("email address is empty")]
    Empty,
    #[error("email address contains whitespace")]
    ContainsWhitespace,
    #[error("email address is missing '@'")]
    MissingAt,
    #[error("email address has more than one '@'")]
    MultipleAt,
    #[error("email address is missing the part before '@'")]
    MissingLocalPart,
    #[error("email address is missing a domain")]
    MissingDomain,
}

impl InvalidEmail {
    pub fn user_message(&self) -> &'static str {
        "Please enter a valid email address."
    }
}
