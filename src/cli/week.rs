use std::io::Write;

use anyhow::Result;
use chrono::Datelike;
use clap::{CommandFactory, Parser};
use tracing::info;

use crate::{
    practice::{
        day::{Day, InvalidDayError},
        log::PracticeLog,
    },
    utils::clock::Clock,
};

use super::{render::Painter, Args, Session};

#[derive(Debug, Parser)]
pub struct LogCommand {
    #[arg(help = "Day of the week, from \"monday\" to \"sunday\", or \"today\"")]
    day: String,
    #[arg(
        allow_hyphen_values = true,
        help = "Minutes practiced. Anything that isn't a whole number is saved as is and counts as 0 in the total"
    )]
    minutes: String,
    #[arg(long, short, help = "Notes about what was practiced")]
    notes: Option<String>,
}

#[derive(Debug, Parser)]
pub struct NotesCommand {
    #[arg(help = "Day of the week, from \"monday\" to \"sunday\", or \"today\"")]
    day: String,
    #[arg(allow_hyphen_values = true, help = "Notes about what was practiced")]
    notes: String,
}

/// Day names are accepted in any case. `today` is resolved with `clock`.
pub fn resolve_day(day: &str, clock: &dyn Clock) -> Result<Day, InvalidDayError> {
    if day.eq_ignore_ascii_case("today") {
        return Ok(clock.time().weekday().into());
    }
    day.to_lowercase().parse::<Day>()
}

fn day_argument(day: &str, clock: &dyn Clock) -> Result<Day> {
    resolve_day(day, clock).map_err(|e| {
        Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("{e}. Use a day from monday to sunday, or today"),
            )
            .into()
    })
}

/// Command to process `log` command. Saves minutes (and optionally notes) for a single day.
pub async fn process_log_command(
    LogCommand {
        day,
        minutes,
        notes,
    }: LogCommand,
    session: &mut Session,
    out: &mut impl Write,
) -> Result<()> {
    let day = day_argument(&day, session.clock.as_ref())?;

    session.practice.set_day_minutes(day, minutes).await;
    if let Some(notes) = notes {
        session.practice.set_day_notes(day, notes).await;
    }
    info!("Logged practice for {day}");

    let painter = session.painter().await;
    let minutes = session.practice.minutes(day);
    if is_ignored_in_total(minutes) {
        writeln!(
            out,
            "{day}: {minutes:?} saved, it isn't a whole number so it counts as 0 minutes"
        )?;
    } else {
        writeln!(out, "{day}: {} minutes", painter.accent(minutes))?;
    }
    writeln!(
        out,
        "This week: {} minutes",
        painter.primary(session.practice.total_minutes())
    )?;
    Ok(())
}

pub async fn process_notes_command(
    NotesCommand { day, notes }: NotesCommand,
    session: &mut Session,
    out: &mut impl Write,
) -> Result<()> {
    let day = day_argument(&day, session.clock.as_ref())?;
    session.practice.set_day_notes(day, notes).await;
    info!("Updated notes for {day}");
    writeln!(out, "{day}: notes saved")?;
    Ok(())
}

/// Prints every day with its minutes and notes, followed by the total.
pub async fn print_week(session: &mut Session, out: &mut impl Write) -> Result<()> {
    let painter = session.painter().await;
    print_entries(&session.practice, &painter, out)
}

fn print_entries(
    practice: &PracticeLog,
    painter: &Painter,
    out: &mut impl Write,
) -> Result<()> {
    for (day, minutes, notes) in practice.entries() {
        let line = format!("{:<10}\t{:>5}\t{}", day.name(), minutes, notes);
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Total\t{} minutes",
        painter.primary(practice.total_minutes())
    )?;
    Ok(())
}

fn is_ignored_in_total(minutes: &str) -> bool {
    !minutes.is_empty() && minutes.parse::<u32>().is_err()
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use clap::Parser;

    use crate::{
        cli::tests::{test_session, TEST_NOW},
        practice::day::Day,
        utils::clock::FixedClock,
    };

    use super::{
        is_ignored_in_total, print_week, process_log_command, process_notes_command, resolve_day,
        LogCommand, NotesCommand,
    };

    #[test]
    fn test_resolve_day() {
        let wednesday = FixedClock(*TEST_NOW);
        assert_eq!(resolve_day("friday", &wednesday), Ok(Day::Friday));
        assert_eq!(resolve_day("Friday", &wednesday), Ok(Day::Friday));
        assert_eq!(resolve_day("today", &wednesday), Ok(Day::Wednesday));
        assert_eq!(resolve_day("TODAY", &wednesday), Ok(Day::Wednesday));
        assert!(resolve_day("funday", &wednesday).is_err());
    }

    #[tokio::test]
    async fn test_log_command() -> Result<()> {
        let mut session = test_session().await;
        let mut out = Vec::new();

        process_log_command(
            LogCommand::try_parse_from(["log", "today", "45", "--notes", "arpeggios"])?,
            &mut session,
            &mut out,
        )
        .await?;
        process_log_command(
            LogCommand::try_parse_from(["log", "monday", "abc"])?,
            &mut session,
            &mut out,
        )
        .await?;

        assert_eq!(session.practice.minutes(Day::Wednesday), "45");
        assert_eq!(session.practice.notes(Day::Wednesday), "arpeggios");
        assert_eq!(session.practice.minutes(Day::Monday), "abc");

        let out = String::from_utf8(out)?;
        assert!(out.contains("wednesday: 45 minutes"));
        assert!(out.contains("\"abc\" saved, it isn't a whole number"));
        assert!(out.ends_with("This week: 45 minutes\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_log_command_invalid_day() -> Result<()> {
        let mut session = test_session().await;

        let result = process_log_command(
            LogCommand::try_parse_from(["log", "funday", "5"])?,
            &mut session,
            &mut Vec::new(),
        )
        .await;

        assert!(result.is_err());
        assert!(session.practice.entries().all(|(_, minutes, _)| minutes.is_empty()));
        Ok(())
    }

    #[tokio::test]
    async fn test_week_output() -> Result<()> {
        let mut session = test_session().await;
        for (day, minutes) in Day::ALL.into_iter().zip(["10", "abc", "5", "", "20", "0", "7"]) {
            session.practice.set_day_minutes(day, minutes).await;
        }
        process_notes_command(
            NotesCommand::try_parse_from(["notes", "friday", "long tones"])?,
            &mut session,
            &mut Vec::new(),
        )
        .await?;

        let mut out = Vec::new();
        print_week(&mut session, &mut out).await?;
        let out = String::from_utf8(out)?;

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert!(lines[4].starts_with("friday"));
        assert!(lines[4].ends_with("long tones"));
        assert_eq!(lines[8], "Total\t42 minutes");
        Ok(())
    }

    #[test]
    fn test_is_ignored_in_total() {
        assert!(is_ignored_in_total("abc"));
        assert!(is_ignored_in_total("-5"));
        assert!(!is_ignored_in_total("0"));
        assert!(!is_ignored_in_total(""));
        assert!(!is_ignored_in_total("30"));
    }
}
