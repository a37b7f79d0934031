//! Avatar feed sample.
//!
//! Plays the role of the host application around async-resource-lens: it owns
//! a feed of user view models, starts a simulated fetch for every avatar that
//! should be fetched, and records each progress, success or failure event by
//! replacing the view model with the one the matching lens derives. Failed
//! avatars are reset and fetched a second time.

mod config;
mod feed;
mod fetcher;

use async_resource_lens::view_model::{User, UserViewModel};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::config::FeedConfig;
use crate::feed::Summary;
use crate::fetcher::{FetchEvent, FetchPlan};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,avatar_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            FeedConfig::default()
        }
    };
    tracing::info!(?config, "Starting avatar feed");

    let items = (0..config.feed_size)
        .map(|index| {
            let url = Url::parse(&format!(
                "http://dummyimage.com/96x96/000/fff.jpg&text={index}"
            ))?;
            Ok(UserViewModel::new(User::new(index, format!("User {index}"), url)))
        })
        .collect::<Result<Vec<_>, url::ParseError>>()?;

    let items = run_fetch_pass(items, &config).await;
    let summary = Summary::of(&items);
    tracing::info!(?summary, "First pass finished");

    let retry_config = FeedConfig {
        fail_every: 0,
        ..config
    };
    let items = run_fetch_pass(feed::reset_failed(items), &retry_config).await;
    tracing::info!(summary = ?Summary::of(&items), "Retry pass finished");

    for view_model in &items {
        tracing::info!(
            name = view_model.display_name(),
            state = %view_model.avatar().output().phase(),
            "feed item"
        );
    }

    Ok(())
}

/// Fetches every avatar that should be fetched and folds the resulting events
/// into the feed.
///
/// Events are applied one at a time from a single channel, so concurrent
/// fetches never race on a view model.
async fn run_fetch_pass(items: Vec<UserViewModel>, config: &FeedConfig) -> Vec<UserViewModel> {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    for (index, view_model) in items.iter().enumerate() {
        if view_model.should_fetch_avatar() {
            tracing::debug!(index, url = %view_model.avatar_url(), "Starting avatar fetch");
            fetcher::spawn_fetch(
                index,
                view_model.avatar_url().clone(),
                FetchPlan::for_item(config, index),
                sender.clone(),
            );
        }
    }
    drop(sender);

    let mut slots: Vec<Option<UserViewModel>> = items.into_iter().map(Some).collect();

    while let Some(update) = receiver.recv().await {
        match &update.event {
            FetchEvent::Progress(_) => {}
            FetchEvent::Loaded(bytes) => {
                tracing::info!(index = update.index, size = bytes.len(), "Avatar loaded");
            }
            FetchEvent::Failed(cause) => {
                tracing::warn!(index = update.index, %cause, "Avatar fetch failed");
            }
        }

        feed::apply_at(&mut slots, update.index, update.event);
    }

    slots.into_iter().flatten().collect()
}
