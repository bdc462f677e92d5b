use url::Url;

use crate::error::CarouselError;

/// Result of fetching a URL
#[derive(Clone)]
pub struct FetchResult {
    pub html: String,
    pub url: String,
    pub status: u16,
}

/// Fetch a URL and return the HTML content (blocking).
pub fn fetch_url(url_str: &str) -> Result<FetchResult, CarouselError> {
    let url = if !url_str.starts_with("http://") && !url_str.starts_with("https://") {
        format!("https://{}", url_str)
    } else {
        url_str.to_string()
    };

    let parsed = Url::parse(&url)?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("dom-carousel/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| CarouselError::Fetch(format!("Client error: {}", e)))?;

    let response = client
        .get(parsed.as_str())
        .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .map_err(|e| CarouselError::Fetch(format!("Request failed: {}", e)))?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(CarouselError::Fetch(format!("HTTP {} from {}", status, parsed)));
    }

    let final_url = response.url().to_string();

    let html = response
        .text()
        .map_err(|e| CarouselError::Fetch(format!("Failed to read body: {}", e)))?;

    Ok(FetchResult {
        html,
        url: final_url,
        status,
    })
}
