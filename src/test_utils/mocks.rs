//! Mock collaborators and server helpers for testing.
//!
//! This module provides a scripted weather source and wiremock helpers standing
//! in for the REST backend.

use crate::error::WeatherError;
use crate::meteo::WeatherSource;
use crate::model::WeatherObservation;
use crate::test_utils::builders::observation_at;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Which endpoint a [`MockWeatherSource`] call went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Archive,
    Recent { past_days: u32 },
}

/// A weather source returning one observation per requested day.
///
/// Requests whose start date is registered with [`MockWeatherSource::failing_from`]
/// fail with a server error. Every call is recorded.
pub struct MockWeatherSource {
    location_name: String,
    failing_starts: HashSet<NaiveDate>,
    calls: Mutex<Vec<(FetchMode, NaiveDate, NaiveDate)>>,
}

impl MockWeatherSource {
    /// Creates a mock source that always succeeds.
    pub fn new() -> Self {
        Self {
            location_name: "Paris".to_string(),
            failing_starts: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes requests starting at `start` fail.
    pub fn failing_from(mut self, start: NaiveDate) -> Self {
        self.failing_starts.insert(start);
        self
    }

    /// Returns the recorded calls in order.
    pub fn calls(&self) -> Vec<(FetchMode, NaiveDate, NaiveDate)> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(
        &self,
        mode: FetchMode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeatherObservation>, WeatherError> {
        self.calls.lock().unwrap().push((mode, start, end));

        if self.failing_starts.contains(&start) {
            return Err(WeatherError::ServerError {
                status: 429,
                message: "Too many requests".to_string(),
            });
        }

        let mut observations = Vec::new();
        let mut day = start;
        while day <= end {
            observations.push(observation_at(day, &self.location_name));
            day += Duration::days(1);
        }
        Ok(observations)
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch_archive(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeatherObservation>, WeatherError> {
        self.respond(FetchMode::Archive, start, end)
    }

    async fn fetch_recent(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        past_days: u32,
    ) -> Result<Vec<WeatherObservation>, WeatherError> {
        self.respond(FetchMode::Recent { past_days }, start, end)
    }
}

/// Answers every insert into `table` with `status`.
pub async fn mount_upsert(server: &MockServer, table: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!("/rest/v1/{}", table)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answers the first `times` inserts into `table` with 201 and every later one with 409,
/// like a backend that already holds the rows after the first pass.
pub async fn mount_upsert_then_duplicate(server: &MockServer, table: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/rest/v1/{}", table)))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(times)
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/v1/{}", table)))
        .respond_with(ResponseTemplate::new(409))
        .with_priority(2)
        .mount(server)
        .await;
}

/// Answers the connectivity probe with `status`.
pub async fn mount_probe(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/meteo_data"))
        .respond_with(ResponseTemplate::new(status).set_body_string("[]"))
        .mount(server)
        .await;
}
