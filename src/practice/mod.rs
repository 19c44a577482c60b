//! Practice minutes for a single rolling week. The week is overwritten in place, there is no
//! history.

pub mod day;
pub mod log;

/// Text handed to whatever shares the weekly result.
pub fn share_message(total_minutes: u64) -> String {
    format!("I practiced {total_minutes} minutes this week!")
}

#[cfg(test)]
mod tests {
    use super::share_message;

    #[test]
    fn test_share_message() {
        assert_eq!(share_message(42), "I practiced 42 minutes this week!");
        assert_eq!(share_message(0), "I practiced 0 minutes this week!");
    }
}
