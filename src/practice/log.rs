use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, warn};

use crate::storage::{entities::StoredValue, key_value::KeyValueStore};

use super::day::{Day, InvalidDayError};

/// Minutes and notes for every day of the rolling week.
///
/// Values are kept as the text the user typed. Numeric coercion only happens in
/// [PracticeLog::total_minutes]. Every change is written through to the store right away and a
/// failed write is logged, never returned, so the in-memory value stays authoritative for the
/// session.
pub struct PracticeLog {
    store: Arc<dyn KeyValueStore>,
    minutes: [String; 7],
    notes: [String; 7],
}

impl PracticeLog {
    /// Creates a log backed by `store` and loads the saved week from it.
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut log = Self {
            store,
            minutes: Default::default(),
            notes: Default::default(),
        };
        log.load().await;
        log
    }

    /// Populates all seven days from the store. Missing keys, and keys the store fails to read,
    /// become empty text.
    pub async fn load(&mut self) {
        let store = self.store.as_ref();
        let (minutes, notes) = futures::join!(
            join_all(Day::ALL.map(|day| load_text(store, day.minutes_key()))),
            join_all(Day::ALL.map(|day| load_text(store, day.notes_key()))),
        );

        for ((day, minutes), notes) in Day::ALL.into_iter().zip(minutes).zip(notes) {
            self.minutes[day.index()] = minutes;
            self.notes[day.index()] = notes;
        }
        debug!("Loaded practice week, total {} minutes", self.total_minutes());
    }

    pub fn minutes(&self, day: Day) -> &str {
        &self.minutes[day.index()]
    }

    pub fn get_minutes(&self, day: &str) -> Result<&str, InvalidDayError> {
        Ok(self.minutes(day.parse::<Day>()?))
    }

    /// Saves `value` verbatim. Nothing is validated here.
    pub async fn set_day_minutes(&mut self, day: Day, value: impl Into<String>) {
        self.minutes[day.index()] = value.into();
        self.persist(day.minutes_key(), &self.minutes[day.index()])
            .await;
    }

    /// Same as [PracticeLog::set_day_minutes] for a day given as text. An unrecognized day
    /// changes nothing.
    pub async fn set_minutes(
        &mut self,
        day: &str,
        value: impl Into<String>,
    ) -> Result<(), InvalidDayError> {
        let day = day.parse::<Day>()?;
        self.set_day_minutes(day, value).await;
        Ok(())
    }

    pub fn notes(&self, day: Day) -> &str {
        &self.notes[day.index()]
    }

    pub fn get_notes(&self, day: &str) -> Result<&str, InvalidDayError> {
        Ok(self.notes(day.parse::<Day>()?))
    }

    pub async fn set_day_notes(&mut self, day: Day, value: impl Into<String>) {
        self.notes[day.index()] = value.into();
        self.persist(day.notes_key(), &self.notes[day.index()]).await;
    }

    pub async fn set_notes(
        &mut self,
        day: &str,
        value: impl Into<String>,
    ) -> Result<(), InvalidDayError> {
        let day = day.parse::<Day>()?;
        self.set_day_notes(day, value).await;
        Ok(())
    }

    /// Sum of the week. Entries that aren't a non-negative integer count as 0.
    pub fn total_minutes(&self) -> u64 {
        self.minutes.iter().map(|v| parse_minutes(v)).sum()
    }

    /// Days in week order with their minutes and notes.
    pub fn entries(&self) -> impl Iterator<Item = (Day, &str, &str)> {
        Day::ALL
            .into_iter()
            .map(|day| (day, self.minutes(day), self.notes(day)))
    }

    async fn persist(&self, key: String, value: &str) {
        debug!("Persisting {key}");
        if let Err(e) = self.store.put(&key, value.into()).await {
            error!("Failed to persist {key}, keeping the value in memory only: {e:?}");
        }
    }
}

/// Lenient coercion used for totals. A single entry is capped by `u32`, so a sum of seven
/// never overflows.
pub fn parse_minutes(value: &str) -> u64 {
    value.parse::<u32>().map(u64::from).unwrap_or(0)
}

async fn load_text(store: &dyn KeyValueStore, key: String) -> String {
    match store.get(&key).await {
        Ok(Some(StoredValue::Text(value))) => value,
        Ok(Some(other)) => {
            warn!("Expected text under {key}, found {other:?}");
            other.to_string()
        }
        Ok(None) => String::new(),
        Err(e) => {
            warn!("Failed to load {key}, treating it as empty: {e:?}");
            String::new()
        }
    }
}
