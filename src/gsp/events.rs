//! Per-level progress events, reported separately from the mining result.

use super::result::Termination;
use std::time::Duration;

/// Payload for `on_level_started`.
#[derive(Debug, Clone)]
pub struct LevelStartedEvent {
    pub level: usize,
    pub candidates: usize,
}

/// Payload for `on_level_complete`.
#[derive(Debug, Clone)]
pub struct LevelCompleteEvent {
    pub level: usize,
    pub candidates: usize,
    pub retained: usize,
    pub elapsed: Duration,
}

/// Payload for `on_search_complete`.
#[derive(Debug, Clone)]
pub struct SearchCompleteEvent {
    pub termination: Termination,
    /// Levels kept in the returned result after the last-level policy.
    pub levels_reported: usize,
    pub total_patterns: usize,
    pub elapsed: Duration,
}

/// Receives mining progress. All methods default to no-ops.
pub trait LevelObserver: Send + Sync {
    fn on_level_started(&self, _event: &LevelStartedEvent) {}
    fn on_level_complete(&self, _event: &LevelCompleteEvent) {}
    fn on_search_complete(&self, _event: &SearchCompleteEvent) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LevelObserver for NoopObserver {}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LevelObserver for TracingObserver {
    fn on_level_started(&self, event: &LevelStartedEvent) {
        tracing::info!(level = event.level, candidates = event.candidates, "level started");
    }

    fn on_level_complete(&self, event: &LevelCompleteEvent) {
        tracing::info!(
            level = event.level,
            candidates = event.candidates,
            retained = event.retained,
            elapsed_ms = event.elapsed.as_millis() as u64,
            "level complete"
        );
    }

    fn on_search_complete(&self, event: &SearchCompleteEvent) {
        tracing::info!(
            termination = ?event.termination,
            levels = event.levels_reported,
            patterns = event.total_patterns,
            elapsed_ms = event.elapsed.as_millis() as u64,
            "search complete"
        );
    }
}
