mod api;
mod config;
mod error;
mod feed;
mod fetcher;
mod model;
mod view;

pub use api::{UNKNOWN_AUTHOR, fetch_posts, fetch_posts_with_authors, fetch_users};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use feed::{FeedController, FeedState, MIN_LOADING};
pub use fetcher::Fetcher;
pub use model::{Address, Company, Geo, Post, PostWithAuthor, User};
pub use view::{PREVIEW_LIMIT, ScreenState, screen_state, truncate_body};
