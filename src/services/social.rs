// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed and leaderboard service.
//!
//! State is process-local and seeded with demo content; there is no
//! server-side persistence or multi-user sync behind it. That keeps the
//! feed usable for development and demos while the real backend does not
//! exist yet.

use crate::error::AppError;
use crate::ids::generate_unique_id;
use crate::models::{Comment, LeaderboardEntry, Post, UserProfile};
use crate::time_utils::now_rfc3339;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory social state.
#[derive(Clone, Default)]
pub struct SocialService {
    state: Arc<RwLock<SocialState>>,
}

#[derive(Default)]
struct SocialState {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

/// Fields a caller provides when sharing a catch.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub catch_id: String,
    pub caption: String,
    pub image_url: String,
}

impl SocialService {
    /// Empty service (tests).
    pub fn new() -> Self {
        Self::default()
    }

    /// Service seeded with demo posts and comments.
    pub fn with_demo_data() -> Self {
        Self {
            state: Arc::new(RwLock::new(SocialState {
                posts: demo_posts(),
                comments: demo_comments(),
            })),
        }
    }

    /// The feed, newest post first.
    pub async fn feed(&self) -> Vec<Post> {
        let state = self.state.read().await;
        let mut posts = state.posts.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Look up a single post.
    pub async fn get_post(&self, id: &str) -> Result<Post, AppError> {
        self.state
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    /// Share a catch to the feed.
    pub async fn create_post(&self, author: &UserProfile, new_post: NewPost) -> Post {
        let post = Post {
            id: generate_unique_id(),
            user_id: author.id.clone(),
            user_display_name: author.display_name.clone(),
            user_profile_image: author.profile_image_url.clone(),
            catch_id: new_post.catch_id,
            caption: new_post.caption,
            image_url: new_post.image_url,
            likes: 0,
            comments: 0,
            is_liked: false,
            created_at: now_rfc3339(),
        };

        let mut state = self.state.write().await;
        state.posts.insert(0, post.clone());
        tracing::info!(post_id = %post.id, catch_id = %post.catch_id, "Post created");
        post
    }

    /// Delete a post and its comments.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }
        state.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    /// Like a post.
    pub async fn like_post(&self, id: &str) -> Result<Post, AppError> {
        self.edit_post(id, |post| {
            post.likes += 1;
            post.is_liked = true;
        })
        .await
    }

    /// Remove a like from a post. The count never goes below zero.
    pub async fn unlike_post(&self, id: &str) -> Result<Post, AppError> {
        self.edit_post(id, |post| {
            post.likes = post.likes.saturating_sub(1);
            post.is_liked = false;
        })
        .await
    }

    /// Comments on a post, oldest first.
    pub async fn comments_for(&self, post_id: &str) -> Vec<Comment> {
        self.state
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    /// Add a comment to a post, keeping the post's count in sync.
    pub async fn add_comment(
        &self,
        author: &UserProfile,
        post_id: &str,
        text: String,
    ) -> Result<Comment, AppError> {
        let comment = Comment {
            id: generate_unique_id(),
            post_id: post_id.to_string(),
            user_id: author.id.clone(),
            user_display_name: author.display_name.clone(),
            user_profile_image: author.profile_image_url.clone(),
            text,
            created_at: now_rfc3339(),
        };

        let mut state = self.state.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;
        post.comments += 1;
        state.comments.push(comment.clone());
        Ok(comment)
    }

    /// The monthly leaderboard, best score first.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries = demo_leaderboard();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }
        entries
    }

    async fn edit_post(
        &self,
        id: &str,
        edit: impl FnOnce(&mut Post),
    ) -> Result<Post, AppError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;
        edit(post);
        Ok(post.clone())
    }
}

// ─── Demo Data ───────────────────────────────────────────────────

fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-1".to_string(),
            user_id: "user-2".to_string(),
            user_display_name: "Ricky".to_string(),
            user_profile_image: Some("https://images.example.com/anglers/ricky.jpg".to_string()),
            catch_id: "catch-1".to_string(),
            caption: "Beautiful Silverfish my dad caught in Lake Michigan! #fishing".to_string(),
            image_url: "https://images.example.com/catches/silverfish.jpg".to_string(),
            likes: 42,
            comments: 2,
            is_liked: false,
            created_at: "2025-06-10T14:30:00Z".to_string(),
        },
        Post {
            id: "post-2".to_string(),
            user_id: "user-3".to_string(),
            user_display_name: "Joe Schmoe".to_string(),
            user_profile_image: Some("https://images.example.com/anglers/joe.jpg".to_string()),
            catch_id: "catch-2".to_string(),
            caption: "Caught this massive bass today! Personal best. #bassfishing".to_string(),
            image_url: "https://images.example.com/catches/bass.jpg".to_string(),
            likes: 78,
            comments: 1,
            is_liked: false,
            created_at: "2025-06-11T09:15:00Z".to_string(),
        },
    ]
}

fn demo_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "comment-1".to_string(),
            post_id: "post-1".to_string(),
            user_id: "user-3".to_string(),
            user_display_name: "Mike Rivers".to_string(),
            user_profile_image: Some("https://images.example.com/anglers/mike.jpg".to_string()),
            text: "Beautiful catch! What bait did you use?".to_string(),
            created_at: "2025-06-10T15:10:00Z".to_string(),
        },
        Comment {
            id: "comment-2".to_string(),
            post_id: "post-1".to_string(),
            user_id: "user-4".to_string(),
            user_display_name: "Emma Fisher".to_string(),
            user_profile_image: Some("https://images.example.com/anglers/emma.jpg".to_string()),
            text: "Lake Michigan has been great this season!".to_string(),
            created_at: "2025-06-10T16:22:00Z".to_string(),
        },
        Comment {
            id: "comment-3".to_string(),
            post_id: "post-2".to_string(),
            user_id: "user-1".to_string(),
            user_display_name: "Joe Fisher".to_string(),
            user_profile_image: Some("https://images.example.com/anglers/joe-f.jpg".to_string()),
            text: "That's a monster! Congrats on the PB!".to_string(),
            created_at: "2025-06-11T10:05:00Z".to_string(),
        },
    ]
}

fn demo_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 0,
            username: "FishMaster2024".to_string(),
            score: 2450,
            fish_count: 127,
            biggest_catch: "Northern Pike - 8.5 lbs".to_string(),
            streak: 15,
        },
        LeaderboardEntry {
            rank: 0,
            username: "AngleAce".to_string(),
            score: 2380,
            fish_count: 119,
            biggest_catch: "Largemouth Bass - 6.2 lbs".to_string(),
            streak: 12,
        },
        LeaderboardEntry {
            rank: 0,
            username: "CatchKing".to_string(),
            score: 2290,
            fish_count: 105,
            biggest_catch: "Steelhead - 7.8 lbs".to_string(),
            streak: 8,
        },
        LeaderboardEntry {
            rank: 0,
            username: "You".to_string(),
            score: 1850,
            fish_count: 78,
            biggest_catch: "Brown Trout - 4.3 lbs".to_string(),
            streak: 5,
        },
    ]
}
