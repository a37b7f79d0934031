//! Simulated avatar downloads.
//!
//! Stands in for a real image pipeline: each fetch runs as a tokio task and
//! reports progress, then either bytes or a failure, over a channel.

use std::time::Duration;

use async_resource_lens::resource::FetchError;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use crate::config::FeedConfig;

/// Something the fetch pipeline observed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// Fraction of the payload received so far.
    Progress(f32),
    /// The whole payload arrived.
    Loaded(Vec<u8>),
    /// The fetch gave up.
    Failed(FetchError),
}

/// A fetch event addressed to one feed item.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchUpdate {
    /// Position of the item in the feed.
    pub index: usize,
    /// What happened.
    pub event: FetchEvent,
}

/// Settings of a single simulated fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchPlan {
    /// Progress events before completion.
    pub steps: u16,
    /// Delay between progress events.
    pub step_delay: Duration,
    /// Whether the fetch ends in failure.
    pub fails: bool,
}

impl FetchPlan {
    /// Plans the fetch of the item at `index`.
    pub const fn for_item(config: &FeedConfig, index: usize) -> Self {
        let fails = config.fail_every != 0 && (index as u64 + 1) % config.fail_every == 0;
        Self {
            steps: config.progress_steps,
            step_delay: Duration::from_millis(config.step_delay_ms),
            fails,
        }
    }
}

/// Starts a simulated fetch of `url` for the item at `index`.
pub fn spawn_fetch(
    index: usize,
    url: Url,
    plan: FetchPlan,
    sender: UnboundedSender<FetchUpdate>,
) {
    tokio::spawn(async move {
        let send = |event| sender.send(FetchUpdate { index, event }).is_ok();

        for step in 1..=plan.steps {
            tokio::time::sleep(plan.step_delay).await;
            if !send(FetchEvent::Progress(f32::from(step) / f32::from(plan.steps))) {
                tracing::debug!(index, "feed stopped listening, abandoning fetch");
                return;
            }
        }

        let outcome = if plan.fails {
            FetchEvent::Failed(FetchError::Status(503))
        } else {
            FetchEvent::Loaded(url.as_str().as_bytes().to_vec())
        };
        if !send(outcome) {
            tracing::debug!(index, "feed stopped listening before the fetch completed");
        }
    });
}
