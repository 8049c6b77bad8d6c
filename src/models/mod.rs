// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catch;
pub mod recognition;
pub mod social;
pub mod spot;
pub mod user;

pub use catch::{CatchLocation, CatchRecord, CatchUpdate};
pub use recognition::{CompletionSource, Identification, QuickIdentification};
pub use social::{Comment, LeaderboardEntry, Post};
pub use spot::{FishingSpot, RankedSpot, SpotType};
pub use user::UserProfile;
