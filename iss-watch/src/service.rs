///! One end-to-end visibility check
///!
///! fetch position → fetch daylight window → evaluate. Config and the HTTP
///! client are owned here; every result is passed on by value.

use chrono::{Local, Timelike, Utc};
use reqwest::Client;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::WatchConfig;
use crate::error::{WatchError, WatchResult};
use crate::http::build_client;
use crate::module::daylight::{fetch_daylight_window, DaylightWindow};
use crate::module::iss::{fetch_iss_position, IssPosition};
use crate::module::visibility::{evaluate, Clock, Evaluation};

/// Current wall-clock hour (0-23) on the configured clock.
pub fn current_hour(clock: Clock) -> u32 {
    match clock {
        Clock::Local => Local::now().hour(),
        Clock::Utc => Utc::now().hour(),
    }
}

pub struct CheckService {
    config: WatchConfig,
    client: Client,
}

impl CheckService {
    pub fn new(config: WatchConfig) -> WatchResult<Self> {
        let client = build_client(config.request_timeout())?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Fetch both upstream inputs, one after the other.
    pub async fn fetch_inputs(&self) -> WatchResult<(IssPosition, DaylightWindow)> {
        let iss = fetch_iss_position(&self.client, &self.config.iss_url).await?;
        let observer = self.config.observer;
        let window = fetch_daylight_window(
            &self.client,
            &self.config.sun_url,
            observer.latitude,
            observer.longitude,
        )
        .await?;
        Ok((iss, window))
    }

    /// Evaluate already-fetched inputs at `current_hour`.
    pub fn evaluate_at(&self, iss: &IssPosition, window: &DaylightWindow, current_hour: u32) -> Evaluation {
        evaluate(
            iss,
            window,
            &self.config.observer,
            &self.config.evaluation_settings(),
            current_hour,
        )
    }

    /// Run one full check against the live clock.
    pub async fn check(&self) -> WatchResult<Evaluation> {
        let span = tracing::info_span!("check", run_id = %Uuid::now_v7());
        async {
            tracing::info!(
                "Checking ISS visibility for observer ({}, {})",
                self.config.observer.latitude,
                self.config.observer.longitude
            );

            let (iss, window) = self.fetch_inputs().await?;
            let hour = current_hour(self.config.clock);
            let evaluation = self.evaluate_at(&iss, &window, hour);

            tracing::info!(
                "Check complete at hour {}: {:?} (overhead={}, night={})",
                hour,
                evaluation.outcome,
                evaluation.overhead,
                evaluation.night
            );
            Ok::<_, WatchError>(evaluation)
        }
        .instrument(span)
        .await
    }
}
