/// In-memory stand-ins for the backend and the clock
use adota_lib::modules::animal::Animal;
use adota_lib::modules::backend::BackendGateway;
use adota_lib::modules::event::Event;
use adota_lib::modules::ong::Ong;
use adota_lib::shared::domain::value_objects::Session;
use adota_lib::shared::errors::{AppError, AppResult};
use adota_lib::shared::infrastructure::FixedClock;
use adota_lib::shared::ClientConfig;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;

/// Recorded backend call: endpoint plus the bearer token it carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct FakeBackend {
    pub animals: Vec<Animal>,
    pub events: Vec<Event>,
    pub ongs: Vec<Ong>,
    /// Returned by every call instead of data when set
    pub failure: Option<AppError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animals(mut self, animals: Vec<Animal>) -> Self {
        self.animals = animals;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_ongs(mut self, ongs: Vec<Ong>) -> Self {
        self.ongs = ongs;
        self
    }

    pub fn failing(mut self, error: AppError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record<T: Clone>(
        &self,
        endpoint: String,
        session: Option<&Session>,
        data: &[T],
    ) -> AppResult<Vec<T>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                endpoint,
                token: session.map(|s| s.token.clone()),
            });
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(data.to_vec()),
        }
    }
}

#[async_trait]
impl BackendGateway for FakeBackend {
    async fn list_animals(&self, session: Option<&Session>) -> AppResult<Vec<Animal>> {
        self.record("/animais".to_string(), session, &self.animals)
    }

    async fn list_ong_animals(
        &self,
        ong_id: i64,
        session: Option<&Session>,
    ) -> AppResult<Vec<Animal>> {
        let owned: Vec<Animal> = self
            .animals
            .iter()
            .filter(|a| a.ong_id() == Some(ong_id))
            .cloned()
            .collect();
        self.record(format!("/animais/ong/{}", ong_id), session, &owned)
    }

    async fn list_ong_events(&self, ong_id: i64, session: Option<&Session>) -> AppResult<Vec<Event>> {
        let owned: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.ong.as_ref().map(|o| o.id) == Some(ong_id))
            .cloned()
            .collect();
        self.record(format!("/eventos/ong/{}", ong_id), session, &owned)
    }

    async fn list_ongs(&self, session: Option<&Session>) -> AppResult<Vec<Ong>> {
        self.record("/ongs".to_string(), session, &self.ongs)
    }
}

/// UTC config so wall-clock dates in tests read as UTC
pub fn utc_config() -> ClientConfig {
    ClientConfig {
        timezone: chrono_tz::UTC,
        ..ClientConfig::default()
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test instant {}-{}-{} {}:{}", y, m, d, h, min))
}

pub fn clock_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedClock {
    FixedClock(utc(y, m, d, h, min))
}
