pub mod fetch;

use std::path::Path;

use crate::dom::parser::parse_html;
use crate::dom::DomTree;
use crate::error::CarouselError;

/// Where a carousel page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(String),
    File(String),
    /// Markup held in memory; `String` is a display label.
    Inline(String, String),
}

impl PageSource {
    /// `http(s)://` inputs are URLs; everything else is a local path.
    pub fn from_arg(arg: &str) -> Self {
        let trimmed = arg.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Url(u) | Self::File(u) => u,
            Self::Inline(label, _) => label,
        }
    }
}

/// Load and parse a page (blocking).
pub fn load_page(source: &PageSource) -> Result<DomTree, CarouselError> {
    match source {
        PageSource::Url(url) => {
            let fetched = fetch::fetch_url(url)?;
            log::debug!("fetched {} (HTTP {})", fetched.url, fetched.status);
            Ok(parse_html(&fetched.html, &fetched.url))
        }
        PageSource::File(path) => {
            let html = std::fs::read_to_string(path).map_err(|source| CarouselError::Io {
                path: Path::new(path).to_path_buf(),
                source,
            })?;
            log::debug!("read {} bytes from {}", html.len(), path);
            Ok(parse_html(&html, path))
        }
        PageSource::Inline(label, html) => Ok(parse_html(html, label)),
    }
}
