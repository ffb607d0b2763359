//! Loading Talon source from a file, stdin or inline text.

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("source is required: use a FILE argument or -s/--source")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

impl SourceInput {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    /// A real file on disk, not stdin or inline text.
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref().filter(|p| p.as_os_str() != "-")
    }

    /// Name shown in diagnostics.
    pub fn label(&self) -> String {
        match (&self.path, &self.text) {
            (_, Some(_)) => "<inline>".to_string(),
            (Some(path), None) if path.as_os_str() == "-" => "<stdin>".to_string(),
            (Some(path), None) => path.display().to_string(),
            (None, None) => String::new(),
        }
    }

    pub fn load(&self) -> Result<String, LoadError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let Some(path) = &self.path else {
            return Err(LoadError::Missing);
        };
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            return Ok(buf);
        }
        fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.clone(),
            source,
        })
    }

    /// Loads the source or exits with an error message.
    pub fn load_or_exit(&self) -> String {
        self.load().unwrap_or_else(|err| exit_with(err))
    }
}

pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
