// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Live frame analysis for video capture sessions.
//!
//! The app samples a frame roughly every two seconds while recording and
//! asks for a quick identification. Frames can outpace the endpoint, so
//! each submitted frame supersedes the one still in flight: the older
//! request is aborted, and a generation counter keeps a slow, stale
//! completion from ever overwriting a newer "latest" result.

use crate::models::QuickIdentification;
use crate::services::recognition::{RecognitionClient, QUICK_PENDING_NAME};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::AbortHandle;

/// Interval at which clients are expected to sample frames.
pub const FRAME_SAMPLING_INTERVAL: Duration = Duration::from_secs(2);

/// Confidence at or above which a frame counts as a detection.
pub const DETECTED_CONFIDENCE_THRESHOLD: u8 = 30;
/// Confidence above which a failed detection still reads as "possible".
/// Tuned separately from the detection cutoff; do not unify them.
pub const POSSIBLE_CONFIDENCE_THRESHOLD: u8 = 15;

/// Detection banner shown over the live viewfinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Detection {
    Detected,
    Possible,
    NotDetected,
}

impl Detection {
    pub fn classify(confidence: u8) -> Self {
        if confidence >= DETECTED_CONFIDENCE_THRESHOLD {
            Detection::Detected
        } else if confidence > POSSIBLE_CONFIDENCE_THRESHOLD {
            Detection::Possible
        } else {
            Detection::NotDetected
        }
    }
}

/// Result of analyzing one live frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameAnalysis {
    pub name: String,
    pub confidence: u8,
    pub detection: Detection,
}

impl FrameAnalysis {
    fn from_quick(quick: QuickIdentification) -> Self {
        Self {
            detection: Detection::classify(quick.confidence),
            name: quick.name,
            confidence: quick.confidence,
        }
    }

    /// Placeholder for a frame whose analysis was superseded mid-flight.
    fn superseded() -> Self {
        Self {
            name: QUICK_PENDING_NAME.to_string(),
            confidence: 0,
            detection: Detection::NotDetected,
        }
    }
}

/// Analyzer shared by all frames of the live capture feature.
#[derive(Clone)]
pub struct LiveAnalyzer {
    client: RecognitionClient,
    state: Arc<State>,
}

struct State {
    /// Bumped for every submitted frame; results from older generations
    /// are discarded instead of racing newer ones.
    generation: AtomicU64,
    latest: RwLock<Option<FrameAnalysis>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl LiveAnalyzer {
    pub fn new(client: RecognitionClient) -> Self {
        Self {
            client,
            state: Arc::new(State {
                generation: AtomicU64::new(0),
                latest: RwLock::new(None),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Analyze one frame, superseding any analysis still in flight.
    ///
    /// Best-effort like the quick identification underneath it: the
    /// returned analysis is always usable and this never fails.
    pub async fn analyze_frame(&self, image_base64: String) -> FrameAnalysis {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let client = self.client.clone();
        let task = tokio::spawn(async move { client.quick_identify(&image_base64).await });

        // Abort whatever the previous frame left in flight.
        {
            let mut in_flight = self.state.in_flight.lock().await;
            if let Some(previous) = in_flight.replace(task.abort_handle()) {
                previous.abort();
            }
        }

        let analysis = match task.await {
            Ok(quick) => FrameAnalysis::from_quick(quick),
            // Aborted by a newer frame before completing.
            Err(_) => FrameAnalysis::superseded(),
        };

        // Only the newest generation may publish its result.
        if generation == self.state.generation.load(Ordering::SeqCst) {
            let mut latest = self.state.latest.write().await;
            *latest = Some(analysis.clone());
        } else {
            tracing::trace!(generation, "Discarding stale frame analysis");
        }

        analysis
    }

    /// The most recent published analysis, if any frame has completed.
    pub async fn latest(&self) -> Option<FrameAnalysis> {
        self.state.latest.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_thresholds() {
        assert_eq!(Detection::classify(100), Detection::Detected);
        assert_eq!(Detection::classify(30), Detection::Detected);
        assert_eq!(Detection::classify(29), Detection::Possible);
        assert_eq!(Detection::classify(16), Detection::Possible);
        assert_eq!(Detection::classify(15), Detection::NotDetected);
        assert_eq!(Detection::classify(0), Detection::NotDetected);
    }

    #[tokio::test]
    async fn test_failed_analysis_publishes_placeholder() {
        // Nothing listens on this port, so quick_identify degrades to its
        // error placeholder instead of failing.
        let analyzer = LiveAnalyzer::new(RecognitionClient::new(
            "http://127.0.0.1:9/unreachable".to_string(),
        ));

        let analysis = analyzer.analyze_frame("aGVsbG8=".to_string()).await;
        assert_eq!(analysis.confidence, 0);
        assert_eq!(analysis.detection, Detection::NotDetected);

        let latest = analyzer.latest().await.expect("latest should be published");
        assert_eq!(latest.name, analysis.name);
    }
}
