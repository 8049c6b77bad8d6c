// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catches;
pub mod live;
pub mod recognition;
pub mod social;
pub mod spots;

pub use catches::CatchService;
pub use live::{Detection, FrameAnalysis, LiveAnalyzer};
pub use recognition::RecognitionClient;
pub use social::SocialService;
pub use spots::{SpotError, SpotService};
