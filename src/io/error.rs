use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("expected a flat object of string values, found {found}")]
    NotFlatStringMap { found: String },
}
