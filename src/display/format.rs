//! Pure text helpers: durations, truncation, counts and pagination math.

use std::sync::OnceLock;

use regex::Regex;

/// Longest list the listing commands print before summarising the rest.
pub const DISPLAY_CAP: usize = 20;

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
    })
}

/// Renders an ISO-8601 time duration for humans.
///
/// Only the `PT..H..M..S` subset is understood and seconds are dropped:
/// `PT1H30M` is `1h 30m`, `PT2H` is `2h`, `PT30M` is `30 min` and a zero
/// duration is `instant`. Anything not starting with `PT` is returned as is.
pub fn format_duration(iso_duration: &str) -> String {
    if !iso_duration.starts_with("PT") {
        return iso_duration.to_string();
    }

    let Some(captures) = duration_pattern().captures(iso_duration) else {
        return iso_duration.to_string();
    };

    let component = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    // Out-of-range numbers fall back to the raw string.
    let (Some(hours), Some(minutes)) = (component(1), component(2)) else {
        return iso_duration.to_string();
    };

    match (hours, minutes) {
        (0, 0) => "instant".to_string(),
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Cuts `text` to at most `max_length` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Number of pages needed for `total` items at `per_page` items each.
///
/// A zero page size yields zero pages rather than dividing by zero.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rounds a nutrition figure for display. Halves go to the even neighbour.
pub fn whole(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Sorts by a count, largest first. Ties keep their server order.
pub fn sort_by_count_desc<T, F>(items: &mut [T], count: F)
where
    F: Fn(&T) -> u64,
{
    items.sort_by_key(|item| std::cmp::Reverse(count(item)));
}

/// Splits a list into the part shown and the number of items left over.
pub fn cap<T>(items: &[T], limit: usize) -> (&[T], usize) {
    if items.len() <= limit {
        (items, 0)
    } else {
        (&items[..limit], items.len() - limit)
    }
}

/// Horizontal bar for the cuisine chart: one block per 20 recipes, at most 20.
pub fn count_bar(count: u64) -> String {
    "█".repeat((count / 20).min(20) as usize)
}
