use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::api;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::model::PostWithAuthor;

/// Floor on how long `loading` stays up per fetch, so a fast network does
/// not flash the spinner.
pub const MIN_LOADING: Duration = Duration::from_millis(300);

/// State the view layer renders from. `posts` survive a failed refresh;
/// they are only replaced when a fetch succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub posts: Vec<PostWithAuthor>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    fn initial() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

struct Shared {
    state: Mutex<FeedState>,
    // Ticket counter for in-flight fetches; completions that are no
    // longer the newest ticket are discarded instead of racing
    // last-write-wins into the state.
    seq: AtomicU64,
}

/// Owns the feed's loading/error/data state and drives every fetch.
/// Cheap to clone; all clones share one state.
#[derive(Clone)]
pub struct FeedController {
    fetcher: Fetcher,
    config: ApiConfig,
    shared: Arc<Shared>,
}

impl FeedController {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self {
            fetcher,
            config,
            shared: Arc::new(Shared {
                state: Mutex::new(FeedState::initial()),
                seq: AtomicU64::new(0),
            }),
        })
    }

    /// Snapshot of the current state for rendering.
    pub fn state(&self) -> FeedState {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Activation hook: the initial fetch the screen mounts with.
    pub async fn run(&self) {
        self.fetch_data().await;
    }

    /// Manual refresh and the error screen's retry action. Overlapping
    /// calls each fetch independently; only the newest one lands.
    pub async fn refetch(&self) {
        self.fetch_data().await;
    }

    async fn fetch_data(&self) {
        let ticket = self.shared.seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.lock_state();
            state.loading = true;
            state.error = None;
        }

        // Wait for both the fetch and the floor timer, not whichever
        // finishes first.
        let (result, ()) = tokio::join!(
            api::fetch_posts_with_authors(&self.fetcher, &self.config),
            tokio::time::sleep(MIN_LOADING),
        );

        let mut state = self.lock_state();
        if self.shared.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "dropping superseded fetch result");
            return;
        }
        apply(&mut state, result);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FeedState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn apply(state: &mut FeedState, result: Result<Vec<PostWithAuthor>, FetchError>) {
    match result {
        Ok(posts) => {
            state.posts = posts;
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load blog posts");
            state.error = Some(err.to_string());
        }
    }
    state.loading = false;
}
