use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StylerError {
    /// The structural lookup found no element to mark.
    #[error("no element matches `{selector}`")]
    MissingTargetElement { selector: String },

    #[error("class list rejected `{class}`: {reason}")]
    ClassList { class: String, reason: String },

    #[error("query for `{selector}` failed: {reason}")]
    Query { selector: String, reason: String },

    #[error("invalid styler config: {0}")]
    InvalidConfig(String),
}
