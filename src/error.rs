use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON syntax in '{file}'")]
#[diagnostic(
    code(versync::json_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum VersyncError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(versync::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(versync::io_error),
        help("Check that you have write permissions and free disk space")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error("Invalid YAML in '{path}'")]
    #[diagnostic(
        code(versync::yaml_parse_error),
        help("Check the YAML syntax of your workspace configuration")
    )]
    YamlParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(versync::config_error),
        help("Check your configuration file and command arguments")
    )]
    ConfigurationError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(versync::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(versync::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(versync::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),
}
