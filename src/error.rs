use std::path::PathBuf;

/// Errors from loading a page and binding a carousel to it.
///
/// Once a carousel is bound, navigation and the timer never fail.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("No carousel container with id \"{0}\"")]
    ContainerNotFound(String),

    #[error("Carousel container has no elements with class \"{0}\"")]
    NoItems(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
