use std::io::Write;

use anyhow::Result;
use clap::{CommandFactory, Subcommand, ValueEnum};
use tracing::info;

use crate::{
    preferences::{store::PreferencesStore, theme::ColorTheme},
    utils::time::parse_reminder_time,
};

use super::Args;

#[derive(Subcommand, Debug)]
pub enum PreferencesCommand {
    #[command(about = "Show all preferences")]
    Show {
        #[arg(long, help = "Print preferences as json")]
        json: bool,
    },
    #[command(about = "Change a single preference")]
    Set {
        field: PreferenceField,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreferenceField {
    Name,
    Instrument,
    #[value(help = "Weekly goal in minutes. Anything that isn't a whole number sets 300")]
    Goal,
    #[value(help = "on or off")]
    Reminder,
    #[value(help = "Time of the daily reminder, HH:MM")]
    ReminderTime,
    #[value(help = "orange, blue, green or purple")]
    Theme,
}

pub async fn process_preferences_command(
    command: PreferencesCommand,
    preferences: &mut PreferencesStore,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        PreferencesCommand::Show { json } => print_preferences(preferences, json, out).await,
        PreferencesCommand::Set { field, value } => {
            set_preference(preferences, field, &value, out).await
        }
    }
}

async fn print_preferences(
    preferences: &mut PreferencesStore,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = preferences.snapshot().await;
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "name\t\t{}", snapshot.user_name)?;
    writeln!(out, "instrument\t{}", snapshot.default_instrument)?;
    writeln!(out, "goal\t\t{} minutes", snapshot.weekly_goal_minutes)?;
    writeln!(
        out,
        "reminder\t{}",
        if snapshot.reminder_enabled { "on" } else { "off" }
    )?;
    writeln!(out, "reminder-time\t{}", snapshot.reminder_time)?;
    writeln!(
        out,
        "theme\t\t{}",
        ColorTheme::from_stored(&snapshot.color_theme)
    )?;
    Ok(())
}

async fn set_preference(
    preferences: &mut PreferencesStore,
    field: PreferenceField,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    match field {
        PreferenceField::Name => {
            preferences.set_user_name(value).await;
            writeln!(out, "Name set to {value:?}")?;
        }
        PreferenceField::Instrument => {
            preferences.set_default_instrument(value).await;
            writeln!(out, "Instrument set to {value:?}")?;
        }
        PreferenceField::Goal => {
            preferences.set_weekly_goal_minutes(value).await;
            let goal = preferences.weekly_goal_minutes().await;
            if value.parse::<i32>().is_err() {
                writeln!(out, "{value:?} isn't a whole number, using the default goal")?;
            }
            writeln!(out, "Weekly goal set to {goal} minutes")?;
        }
        PreferenceField::Reminder => {
            let enabled = parse_switch(value)?;
            preferences.set_reminder_enabled(enabled).await;
            writeln!(
                out,
                "Reminders turned {}",
                if enabled { "on" } else { "off" }
            )?;
        }
        PreferenceField::ReminderTime => {
            preferences.set_reminder_time(value).await;
            if parse_reminder_time(value).is_none() {
                writeln!(
                    out,
                    "{value:?} isn't in HH:MM format, no reminder will be scheduled until it is"
                )?;
            }
            writeln!(out, "Reminder time set to {value}")?;
        }
        PreferenceField::Theme => {
            let theme = value.parse::<ColorTheme>().map_err(|e| {
                Args::command().error(
                    clap::error::ErrorKind::InvalidValue,
                    format!("{e}. Available themes are orange, blue, green and purple"),
                )
            })?;
            preferences.set_color_theme(theme).await;
            writeln!(out, "Theme set to {theme}")?;
        }
    }
    info!("Preference {field:?} updated");
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(Args::command()
            .error(
                clap::error::ErrorKind::InvalidValue,
                format!("Expected on or off, got {value:?}"),
            )
            .into()),
    }
}
