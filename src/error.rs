use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse ignore pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to serialize template listing. Original error: {0}")]
    JSONSerializeError(#[from] serde_json::Error),

    /// The requested `<language>/<template>` folder does not exist.
    #[error("No project template '{template}'.")]
    UnknownTemplate { template: String },

    /// The language folder holding all templates for a language is missing.
    #[error("Unsupported language: template root '{language_root}' does not exist.")]
    MissingLanguageRoot { language_root: String },

    #[error("Cannot derive a project name from destination '{destination}'.")]
    InvalidDestination { destination: String },

    #[error("Cannot proceed: destination '{destination}' already exists and is not empty.")]
    DestinationExists { destination: String },

    /// The fetch command exited non-zero; `output` holds its stdout and stderr.
    #[error("Project cloning failed: command '{command}' exited with non-zero error code, output: \n\t{output}")]
    FetchFailed { command: String, output: String },

    #[error("Project initialization failed in '{destination}'. Original error: {source}")]
    InitFailed {
        destination: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InitFailed { .. } => exit_codes::INIT_FAILURE,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Convenience type alias for Results with the crate Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that logs the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Logs the error message and exits with the status code from [`Error::exit_code`].
pub fn default_error_handler(err: Error) -> ! {
    log::error!("{err}");
    std::process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_and_fetch_failure_share_exit_code() {
        let unknown = Error::UnknownTemplate { template: "py3/missing".into() };
        let fetch = Error::FetchFailed { command: "git clone a b".into(), output: String::new() };
        assert_eq!(unknown.exit_code(), exit_codes::FAILURE);
        assert_eq!(fetch.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn init_failure_maps_to_its_own_exit_code() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8");
        let err = Error::InitFailed { destination: "myproj".into(), source: Box::new(io.into()) };
        assert_eq!(err.exit_code(), exit_codes::INIT_FAILURE);
        assert!(err.to_string().contains("myproj"));
    }

    #[test]
    fn missing_language_root_is_a_plain_failure() {
        let err = Error::MissingLanguageRoot { language_root: "/tmp/rust".into() };
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }
}
