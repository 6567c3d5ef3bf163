use std::time::Duration;

use url::Url;

/// JSONPlaceholder origin the feed reads from by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default deadline applied to each outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// # Panics
    ///
    /// Panics if `base_url` cannot serve as a base for the collection
    /// endpoints (e.g. `mailto:` or `data:` URLs).
    pub fn new(base_url: Url) -> Self {
        assert!(
            !base_url.cannot_be_a_base(),
            "base url must support path segments: {base_url}"
        );
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn posts_url(&self) -> Url {
        self.endpoint("posts")
    }

    pub fn users_url(&self) -> Url {
        self.endpoint("users")
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("checked at construction")
            .pop_if_empty()
            .push(segment);
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base url"))
    }
}
