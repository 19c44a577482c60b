use std::fmt::Display;

use ansi_term::Style;

use crate::{
    preferences::theme::{ColorTheme, Palette},
    utils::percentage::Percentage,
};

const PROGRESS_BAR_WIDTH: u64 = 20;

/// Colors command output with the palette of the selected theme. Plain when output isn't a
/// terminal.
pub struct Painter {
    palette: Option<Palette>,
}

impl Painter {
    pub fn new(theme: ColorTheme, colored: bool) -> Self {
        Self {
            palette: colored.then(|| theme.palette()),
        }
    }

    pub fn plain() -> Self {
        Self { palette: None }
    }

    pub fn primary(&self, text: impl Display) -> String {
        self.paint(text, |p| p.primary.colour().bold())
    }

    pub fn secondary(&self, text: impl Display) -> String {
        self.paint(text, |p| p.secondary.colour().normal())
    }

    pub fn accent(&self, text: impl Display) -> String {
        self.paint(text, |p| p.accent.colour().normal())
    }

    pub fn success(&self, text: impl Display) -> String {
        self.paint(text, |p| p.success.colour().bold())
    }

    fn paint(&self, text: impl Display, style: impl FnOnce(&Palette) -> Style) -> String {
        match &self.palette {
            Some(palette) => style(palette).paint(text.to_string()).to_string(),
            None => text.to_string(),
        }
    }
}

/// `[#####---------------]` for the clamped percentage.
pub fn progress_bar(progress: Percentage) -> String {
    let filled = (progress.clamped() * PROGRESS_BAR_WIDTH / 100) as usize;
    let empty = PROGRESS_BAR_WIDTH as usize - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

/// Any logged minute counts as a start, even when it rounds down to 0% of the goal.
pub fn progress_message(total_minutes: u64, progress: Percentage) -> &'static str {
    if total_minutes == 0 {
        return "No practice logged yet this week.";
    }
    match *progress {
        100..=u64::MAX => "Goal reached!",
        50..=99 => "Over halfway there, keep it up!",
        _ => "Good start, keep practicing!",
    }
}

#[cfg(test)]
mod tests {
    use crate::{preferences::theme::ColorTheme, utils::percentage::Percentage};

    use super::{progress_bar, progress_message, Painter};

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(Percentage::of(0, 300)), "[--------------------]");
        assert_eq!(progress_bar(Percentage::of(150, 300)), "[##########----------]");
        assert_eq!(progress_bar(Percentage::of(900, 300)), "[####################]");
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(progress_message(0, Percentage::of(0, 300)), "No practice logged yet this week.");
        assert_eq!(progress_message(3, Percentage::of(3, 300)), "Good start, keep practicing!");
        assert_eq!(progress_message(150, Percentage::of(150, 300)), "Over halfway there, keep it up!");
        assert_eq!(progress_message(450, Percentage::of(450, 300)), "Goal reached!");
    }

    #[test]
    fn test_progress_message_below_one_percent() {
        // 1 of 300 floors to 0%, and a goal of 0 always gives 0%.
        assert_eq!(progress_message(1, Percentage::of(1, 300)), "Good start, keep practicing!");
        assert_eq!(progress_message(30, Percentage::of(30, 0)), "Good start, keep practicing!");
        assert_eq!(progress_message(0, Percentage::of(0, 0)), "No practice logged yet this week.");
    }

    #[test]
    fn test_painter() {
        assert_eq!(Painter::plain().primary("42"), "42");
        assert_eq!(Painter::new(ColorTheme::Blue, false).accent("42"), "42");

        let colored = Painter::new(ColorTheme::Blue, true).primary("42");
        assert!(colored.contains("42"));
        assert!(colored.starts_with('\u{1b}'));
    }
}
