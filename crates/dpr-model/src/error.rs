use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// A row is missing fields its branch requires (e.g. a numeric row
    /// without quartile values). Reported per row, never rendered as NaN.
    #[error("row data contract violation for '{attribute}': {detail}")]
    RowContract { attribute: String, detail: String },
    #[error("{0}")]
    Message(String),
}

impl ProfileError {
    pub fn row_contract(attribute: &str, detail: impl Into<String>) -> Self {
        ProfileError::RowContract {
            attribute: attribute.to_string(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
