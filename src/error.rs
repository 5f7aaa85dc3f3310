//! Errors surfaced to callers of the plotting operations and the command line.

use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BlochError {
    /// Text given for a ket or trajectory could not be read.
    #[error("could not parse {what}")]
    #[diagnostic(
        code(bloch::parse),
        help("kets are written `|0>`, `|+i>` or `[a, b]` with complex amplitudes such as `0.5-0.5i` or `ph(0.5pi) 0.7071`")
    )]
    Parse {
        what: &'static str,
        #[source_code]
        src: String,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    /// A trajectory has no final state to anchor the arrow on.
    #[error("cannot plot an empty trajectory")]
    #[diagnostic(code(bloch::empty_trajectory))]
    EmptyTrajectory,

    #[error("could not read {}", path.display())]
    #[diagnostic(code(bloch::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The window backend could not be started.
    #[error("display backend failed: {0}")]
    #[diagnostic(code(bloch::display), help("try `--ascii` to render without a window"))]
    Display(String),
}
