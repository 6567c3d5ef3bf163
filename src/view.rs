use std::borrow::Cow;

use crate::feed::FeedState;

/// Maximum characters of a post body shown in a card preview.
pub const PREVIEW_LIMIT: usize = 150;

/// What the screen should render for a given feed state. A set `error`
/// with posts already on screen is deliberately silent: the list keeps
/// rendering and only the empty states surface failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Error(String),
    List,
}

pub fn screen_state(state: &FeedState) -> ScreenState {
    if state.loading && state.posts.is_empty() {
        return ScreenState::Loading;
    }
    if state.posts.is_empty() {
        if let Some(message) = &state.error {
            return ScreenState::Error(message.clone());
        }
    }
    ScreenState::List
}

/// Cut a post body for preview at the last word boundary inside the
/// first [`PREVIEW_LIMIT`] characters, appending an ellipsis. Bodies at
/// or under the limit pass through unchanged; a body with no space in
/// the window is hard-cut at the limit.
pub fn truncate_body(body: &str) -> Cow<'_, str> {
    let Some((limit, _)) = body.char_indices().nth(PREVIEW_LIMIT) else {
        return Cow::Borrowed(body);
    };
    let head = &body[..limit];
    let cut = head.rfind(' ').filter(|&i| i > 0).unwrap_or(limit);
    Cow::Owned(format!("{}...", &head[..cut]))
}
