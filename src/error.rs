use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[cfg(feature = "render")]
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("icon size must be at least 1px")]
    InvalidSize,
    #[error("cannot allocate a {size}x{size} canvas")]
    CanvasAllocation { size: u32 },
    #[error("built without the `render` feature")]
    MissingImaging,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
