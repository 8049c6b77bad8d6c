// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social feed and leaderboard models.

use serde::{Deserialize, Serialize};

/// A shared catch in the social feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub user_display_name: String,
    pub user_profile_image: Option<String>,
    /// The catch this post shows off
    pub catch_id: String,
    pub caption: String,
    pub image_url: String,
    pub likes: u32,
    /// Comment count, kept in sync with the comment list
    pub comments: u32,
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: String,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_display_name: String,
    pub user_profile_image: Option<String>,
    pub text: String,
    pub created_at: String,
}

/// One row of the monthly leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub score: u32,
    pub fish_count: u32,
    pub biggest_catch: String,
    pub streak: u32,
}
