use std::collections::HashMap;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::model::{Post, PostWithAuthor, User};

/// Author name attached to a post whose `user_id` matches no fetched user.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

pub async fn fetch_posts(fetcher: &Fetcher, config: &ApiConfig) -> Result<Vec<Post>, FetchError> {
    fetcher
        .get_json(config.posts_url())
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching posts failed"))
}

pub async fn fetch_users(fetcher: &Fetcher, config: &ApiConfig) -> Result<Vec<User>, FetchError> {
    fetcher
        .get_json(config.users_url())
        .await
        .inspect_err(|err| tracing::error!(error = %err, "fetching users failed"))
}

/// Fetch posts and users concurrently and join each post to its author's
/// display name. Either fetch failing fails the whole call with no
/// partial result. Output order is the posts' wire order.
pub async fn fetch_posts_with_authors(
    fetcher: &Fetcher,
    config: &ApiConfig,
) -> Result<Vec<PostWithAuthor>, FetchError> {
    let (posts, users) = tokio::try_join!(
        fetch_posts(fetcher, config),
        fetch_users(fetcher, config),
    )?;

    let lookup = author_lookup(&users);
    Ok(merge_posts_with_authors(posts, &lookup))
}

/// User id to display name. Last write wins on duplicate ids.
fn author_lookup(users: &[User]) -> HashMap<u64, &str> {
    users.iter().map(|u| (u.id, u.name.as_str())).collect()
}

fn merge_posts_with_authors(
    posts: Vec<Post>,
    lookup: &HashMap<u64, &str>,
) -> Vec<PostWithAuthor> {
    posts
        .into_iter()
        .map(|post| {
            let author = lookup.get(&post.user_id).copied().unwrap_or(UNKNOWN_AUTHOR);
            PostWithAuthor::new(post, author.to_string())
        })
        .collect()
}
