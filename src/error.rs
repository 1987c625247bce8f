use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing field `{field}` in {section} entry")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("malformed {what}: {value:?}")]
    Format { what: &'static str, value: String },

    #[error("input did not decode to a JSON object")]
    NotAnObject,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Formatting failures on optional fields degrade to pass-through;
    /// structural errors halt the pipeline before any output is written.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::NotAnObject | Error::Format { .. }
        )
    }
}
