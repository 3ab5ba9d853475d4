use api::{ApiError, GalleryApi};
use tracing::{error, info};

/// What the gallery container shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GalleryState {
    #[default]
    Loading,
    Ready(Vec<String>),
    /// The endpoint answered with no images. Distinct from a failure.
    Empty,
    /// Fetch failed; carries the reason shown to the visitor.
    Failed(String),
}

impl GalleryState {
    pub fn from_result(result: Result<Vec<String>, ApiError>) -> Self {
        match result {
            Ok(images) if images.is_empty() => Self::Empty,
            Ok(images) => Self::Ready(images),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn images(&self) -> &[String] {
        match self {
            Self::Ready(images) => images,
            _ => &[],
        }
    }
}

/// How a grid image opens at full size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    #[default]
    Lightbox,
    NewTab,
}

pub struct GalleryClient<A> {
    api: A,
}

impl<A: GalleryApi> GalleryClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load_images(&self) -> Result<Vec<String>, ApiError> {
        info!("starting gallery load");
        match self.api.images().await {
            Ok(images) => {
                info!(count = images.len(), "gallery listing received");
                Ok(images)
            }
            Err(err) => {
                error!("gallery load error: {err}");
                Err(err)
            }
        }
    }

    pub async fn load(&self) -> GalleryState {
        GalleryState::from_result(self.load_images().await)
    }
}
