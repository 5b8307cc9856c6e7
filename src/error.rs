use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause of a parse failure, either a JSON or a template error.
pub type ParseSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while loading inputs and rendering the document.
#[derive(Debug, Error)]
pub enum Error {
    /// The file is missing, unreadable or not valid UTF-8.
    #[error("error reading file \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content was rejected by the parser.
    #[error("error parsing file \"{}\"", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseSource,
    },

    /// The bundled template failed to compile.
    #[error("error compiling the bundled template")]
    DefaultTemplate(#[source] tera::Error),

    /// The compiled template failed while being evaluated.
    #[error("error rendering template")]
    Render(#[source] tera::Error),
}

impl Error {
    /// Path of the input file this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Read { path, .. } | Error::Parse { path, .. } => Some(path.as_path()),
            Error::DefaultTemplate(_) | Error::Render(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
