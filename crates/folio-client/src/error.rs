use folio_engine::FieldError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Required configuration absent (no content source, no relay URL)
    Config(String),

    /// Requested record absent from the result set
    NotFound(String),

    /// Contact message rejected before any network call
    Validation(Vec<FieldError>),

    /// Content layer failure (transport, status, parse)
    Content(folio_content::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Validation(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
                write!(f, "Validation failed: {}", messages.join("; "))
            }
            Error::Content(err) => write!(f, "Content error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Content(err) => Some(err),
            Error::Config(_) | Error::NotFound(_) | Error::Validation(_) => None,
        }
    }
}

impl From<folio_content::Error> for Error {
    fn from(err: folio_content::Error) -> Self {
        // Keep the not-found case distinct from generic fetch failures all
        // the way up to the user.
        match err {
            folio_content::Error::NotFound(msg) => Error::NotFound(msg),
            other => Error::Content(other),
        }
    }
}
