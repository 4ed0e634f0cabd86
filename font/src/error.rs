use std::{io, path::PathBuf};

use thiserror::Error;

use crate::FontStyle;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font `{family}` with style `{style}` is not available")]
    NotFound { family: String, style: FontStyle },
    #[error("failed to load font file `{}`", path.display())]
    LoadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
