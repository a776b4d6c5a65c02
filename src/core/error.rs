use thiserror::Error;

/// Everything that can go wrong between the network and the first render.
///
/// Building cards, mutating the container and counting children are total; only
/// fetching, parsing, locating mount points and reading settings can fail.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("fetch of {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("response is not a photo list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("mount point #{0} not found in document")]
    MissingMount(String),

    #[error("invalid settings: {0}")]
    Config(String),
}
