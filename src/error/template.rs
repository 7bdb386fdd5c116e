use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template file could not be read from disk.
    #[error("Failed to read template file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The template file is not valid JSON or is missing required fields
    /// (`server.language_roles`, `server.functional_roles`, `server.categories`,
    /// or a channel's `name`/`type`).
    #[error("Malformed template: {0}")]
    Parse(#[from] serde_json::Error),
}
