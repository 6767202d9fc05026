use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown item '{item_id}' for scale '{scale_id}'")]
    UnknownItem { scale_id: String, item_id: String },

    #[error("item '{item_id}' of scale '{scale_id}' was not answered")]
    MissingItem { scale_id: String, item_id: String },

    #[error(
        "response {value} for item '{item_id}' of scale '{scale_id}' is outside range [{min}, {max}]"
    )]
    ResponseOutOfRange {
        scale_id: String,
        item_id: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read threshold overrides at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse threshold overrides: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("threshold override for unknown scale: {0}")]
    UnknownScale(String),
}
