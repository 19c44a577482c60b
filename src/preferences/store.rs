use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    storage::key_value::KeyValueStore,
    utils::{
        percentage::Percentage,
        time::{next_occurrence, parse_reminder_time},
    },
};

use super::{field::Preference, theme::ColorTheme};

pub const DEFAULT_WEEKLY_GOAL: i32 = 300;
pub const DEFAULT_INSTRUMENT: &str = "Piano";
pub const DEFAULT_REMINDER_TIME: &str = "18:00";

pub const USER_NAME_KEY: &str = "user_name";
pub const DEFAULT_INSTRUMENT_KEY: &str = "default_instrument";
pub const WEEKLY_GOAL_KEY: &str = "weekly_goal";
pub const REMINDER_ENABLED_KEY: &str = "reminder_enabled";
pub const REMINDER_TIME_KEY: &str = "reminder_time";
pub const COLOR_THEME_KEY: &str = "color_theme";
/// Written by older versions. Left untouched in the namespace and never read.
pub const LEGACY_DARK_MODE_KEY: &str = "dark_mode";

/// User profile, weekly goal, reminder and theme.
///
/// Every field is independent: it is read from the store the first time it is asked for and
/// written back on its own whenever it changes. There is no record-level save.
pub struct PreferencesStore {
    store: Arc<dyn KeyValueStore>,
    user_name: Preference<String>,
    default_instrument: Preference<String>,
    weekly_goal: Preference<i32>,
    reminder_enabled: Preference<bool>,
    reminder_time: Preference<String>,
    color_theme: Preference<String>,
}

/// All preferences at once, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencesSnapshot {
    pub user_name: String,
    pub default_instrument: String,
    pub weekly_goal_minutes: i32,
    pub reminder_enabled: bool,
    pub reminder_time: String,
    pub color_theme: String,
}

impl PreferencesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            user_name: Preference::new(USER_NAME_KEY, String::new()),
            default_instrument: Preference::new(
                DEFAULT_INSTRUMENT_KEY,
                DEFAULT_INSTRUMENT.to_owned(),
            ),
            weekly_goal: Preference::new(WEEKLY_GOAL_KEY, DEFAULT_WEEKLY_GOAL),
            reminder_enabled: Preference::new(REMINDER_ENABLED_KEY, false),
            reminder_time: Preference::new(REMINDER_TIME_KEY, DEFAULT_REMINDER_TIME.to_owned()),
            color_theme: Preference::new(COLOR_THEME_KEY, ColorTheme::default().name().to_owned()),
        }
    }

    pub async fn user_name(&mut self) -> String {
        self.user_name.get(self.store.as_ref()).await
    }

    pub async fn set_user_name(&mut self, value: impl Into<String>) {
        self.user_name.set(self.store.as_ref(), value.into()).await
    }

    pub async fn default_instrument(&mut self) -> String {
        self.default_instrument.get(self.store.as_ref()).await
    }

    pub async fn set_default_instrument(&mut self, value: impl Into<String>) {
        self.default_instrument
            .set(self.store.as_ref(), value.into())
            .await
    }

    pub async fn weekly_goal_minutes(&mut self) -> i32 {
        self.weekly_goal.get(self.store.as_ref()).await
    }

    /// Takes the goal as typed by the user. Text that isn't an integer saves the default goal.
    pub async fn set_weekly_goal_minutes(&mut self, input: &str) {
        let goal = coerce_weekly_goal(input);
        self.set_weekly_goal(goal).await
    }

    pub async fn set_weekly_goal(&mut self, goal: i32) {
        self.weekly_goal.set(self.store.as_ref(), goal).await
    }

    pub async fn reminder_enabled(&mut self) -> bool {
        self.reminder_enabled.get(self.store.as_ref()).await
    }

    pub async fn set_reminder_enabled(&mut self, value: bool) {
        self.reminder_enabled.set(self.store.as_ref(), value).await
    }

    /// Reminder time as stored, expected to be `HH:MM`.
    pub async fn reminder_time(&mut self) -> String {
        self.reminder_time.get(self.store.as_ref()).await
    }

    pub async fn set_reminder_time(&mut self, value: impl Into<String>) {
        self.reminder_time.set(self.store.as_ref(), value.into()).await
    }

    /// Stored theme text, which might not be a recognized theme.
    pub async fn color_theme_text(&mut self) -> String {
        self.color_theme.get(self.store.as_ref()).await
    }

    pub async fn color_theme(&mut self) -> ColorTheme {
        ColorTheme::from_stored(&self.color_theme_text().await)
    }

    pub async fn set_color_theme(&mut self, theme: ColorTheme) {
        self.color_theme
            .set(self.store.as_ref(), theme.name().to_owned())
            .await
    }

    /// Saves any text as the theme. Unrecognized text is kept as is and displays as orange.
    pub async fn set_color_theme_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.parse::<ColorTheme>().is_err() {
            warn!("Saving unrecognized color theme {value:?}, it will display as orange");
        }
        self.color_theme.set(self.store.as_ref(), value).await
    }

    /// Progress of `total_minutes` towards the saved weekly goal. The total comes from the
    /// caller, preferences never read the practice log.
    pub async fn goal_progress_percent(&mut self, total_minutes: u64) -> Percentage {
        let goal = self.weekly_goal_minutes().await;
        goal_progress_percent(total_minutes, goal)
    }

    /// Next time a reminder should fire after `now`. `None` when reminders are disabled or the
    /// saved time can't be parsed.
    pub async fn next_reminder<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
        if !self.reminder_enabled().await {
            return None;
        }
        let text = self.reminder_time().await;
        let Some(at) = parse_reminder_time(&text) else {
            debug!("Reminder time {text:?} can't be parsed");
            return None;
        };
        next_occurrence(now, at)
    }

    pub async fn snapshot(&mut self) -> PreferencesSnapshot {
        PreferencesSnapshot {
            user_name: self.user_name().await,
            default_instrument: self.default_instrument().await,
            weekly_goal_minutes: self.weekly_goal_minutes().await,
            reminder_enabled: self.reminder_enabled().await,
            reminder_time: self.reminder_time().await,
            color_theme: self.color_theme_text().await,
        }
    }
}

/// `floor(total / goal * 100)`, 0 for a goal that isn't positive. Deliberately not clamped.
pub fn goal_progress_percent(total_minutes: u64, goal: i32) -> Percentage {
    match u64::try_from(goal) {
        Ok(goal) if goal > 0 => Percentage::of(total_minutes, goal),
        _ => Percentage::default(),
    }
}

pub fn coerce_weekly_goal(input: &str) -> i32 {
    input.parse::<i32>().unwrap_or(DEFAULT_WEEKLY_GOAL)
}
