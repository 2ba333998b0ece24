use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LikeError {
    /// A caller-supplied value is outside its contract (negative count, non-positive size).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// An action name outside the card's closed action set.
    #[error("unrecognized action `{0}`")]
    UnknownAction(String),
}

impl LikeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LikeError>;
