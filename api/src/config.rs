//! Endpoint configuration.
//!
//! A browser build has no process environment, so the base URL override is
//! captured at compile time from `FOLIO_API_BASE`.

const DEFAULT_BASE_URL: &str = "https://idfx15mrgd.execute-api.ap-south-1.amazonaws.com";
const DEFAULT_RESUME_HREF: &str = "/assets/resume.pdf";
const DEFAULT_RESUME_FILENAME: &str = "Resume.pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Where the download control points (served alongside the site).
    pub resume_href: String,
    pub resume_filename: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(base_url.into()),
            resume_href: DEFAULT_RESUME_HREF.to_string(),
            resume_filename: DEFAULT_RESUME_FILENAME.to_string(),
        }
    }

    /// Build-time configuration: `FOLIO_API_BASE` if it was set when compiling.
    pub fn from_build_env() -> Self {
        match option_env!("FOLIO_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn visitor_url(&self) -> String {
        format!("{}/visitor", self.base_url)
    }

    pub fn metrics_url(&self) -> String {
        format!("{}/metrics", self.base_url)
    }

    pub fn gallery_url(&self) -> String {
        format!("{}/gallery", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base(raw: String) -> String {
    raw.trim_end_matches('/').to_string()
}
