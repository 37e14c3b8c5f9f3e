//! Human-readable duration formatting

/// Format a week count as months and weeks
///
/// A month is four weeks. Durations under a month always use the plural
/// "weeks", including "1 weeks"; downstream consumers match on the exact
/// strings, so that spelling is part of the contract.
pub fn format_weeks(weeks: u32) -> String {
    let months = weeks / 4;
    let remainder = weeks % 4;

    if months == 0 {
        return format!("{} weeks", weeks);
    }

    let month_word = if months == 1 { "month" } else { "months" };
    if remainder == 0 {
        return format!("{} {}", months, month_word);
    }

    let week_word = if remainder == 1 { "week" } else { "weeks" };
    format!("{} {} {} {}", months, month_word, remainder, week_word)
}
