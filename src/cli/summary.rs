use std::io::Write;

use anyhow::Result;

use crate::{practice::share_message, utils::time::parse_reminder_time};

use super::{
    render::{progress_bar, progress_message},
    Session,
};

/// Weekly total against the goal. This is what the main page of the app shows.
pub async fn print_summary(session: &mut Session, out: &mut impl Write) -> Result<()> {
    let painter = session.painter().await;
    let total = session.practice.total_minutes();
    let user_name = session.preferences.user_name().await;
    let instrument = session.preferences.default_instrument().await;
    let goal = session.preferences.weekly_goal_minutes().await;
    let progress = session.preferences.goal_progress_percent(total).await;

    let header = match (user_name.is_empty(), instrument.is_empty()) {
        (true, true) => "My Music Time".to_string(),
        (true, false) => format!("My Music Time: {instrument}"),
        (false, true) => format!("My Music Time: {user_name}"),
        (false, false) => format!("My Music Time: {user_name}, {instrument}"),
    };
    writeln!(out, "{}", painter.primary(header))?;
    writeln!(out)?;
    writeln!(out, "{} minutes practiced this week", painter.primary(total))?;
    writeln!(out, "Weekly goal: {goal} minutes")?;
    writeln!(
        out,
        "Progress: {} {}",
        painter.accent(progress),
        painter.secondary(progress_bar(progress))
    )?;

    let message = progress_message(total, progress);
    if progress.clamped() == 100 {
        writeln!(out, "{}", painter.success(message))?;
    } else {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

pub fn print_share(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", share_message(session.practice.total_minutes()))?;
    Ok(())
}

pub async fn print_reminder(session: &mut Session, out: &mut impl Write) -> Result<()> {
    if !session.preferences.reminder_enabled().await {
        writeln!(
            out,
            "Practice reminders are off. Turn them on with `prefs set reminder on`"
        )?;
        return Ok(());
    }

    let reminder_time = session.preferences.reminder_time().await;
    if parse_reminder_time(&reminder_time).is_none() {
        writeln!(
            out,
            "Reminder time {reminder_time:?} isn't in HH:MM format, no reminder is scheduled"
        )?;
        return Ok(());
    }

    let now = session.clock.time();
    match session.preferences.next_reminder(now).await {
        Some(next) => writeln!(out, "Next practice reminder: {}", next.format("%A %H:%M"))?,
        None => writeln!(out, "Reminder time {reminder_time} doesn't exist in local time")?,
    }
    Ok(())
}
