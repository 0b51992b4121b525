use chrono::{DateTime, Utc};

pub fn format_number(number: i64) -> String {
    use numfmt::*;
    let mut formatter = Formatter::default()
        .scales(Scales::metric())
        .precision(Precision::Decimals(0));
    formatter.fmt(number as f64).trim_end().to_string()
}

/// The first `max_chars` characters of `content`
pub fn excerpt(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((index, _)) => &content[..index],
        None => content,
    }
}

/// A short human description of how long ago `date` was, e.g.
/// `5 minutes ago`. Unparseable dates give an empty string.
pub fn time_ago(date: &str, now: DateTime<Utc>) -> String {
    let Ok(date) = DateTime::parse_from_rfc3339(date) else {
        return String::new()
    };
    let elapsed = now.signed_duration_since(date.with_timezone(&Utc));
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "less than a minute ago".to_string();
    }
    let (value, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if elapsed.num_hours() < 24 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 30 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_days() < 365 {
        (elapsed.num_days() / 30, "month")
    } else {
        (elapsed.num_days() / 365, "year")
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn excerpt_cuts_on_characters() {
        assert_eq!(excerpt("hello", 100), "hello");
        assert_eq!(excerpt("hello", 2), "he");
        assert_eq!(excerpt("héllo wörld", 5), "héllo");
        let long = "x".repeat(150);
        assert_eq!(excerpt(&long, 100).len(), 100);
    }

    #[test]
    fn time_ago_picks_the_largest_unit() {
        let now = Utc::now();
        let format = |d: DateTime<Utc>| d.to_rfc3339();
        assert_eq!(time_ago(&format(now), now), "less than a minute ago");
        assert_eq!(time_ago(&format(now - Duration::minutes(1)), now), "1 minute ago");
        assert_eq!(time_ago(&format(now - Duration::minutes(10)), now), "10 minutes ago");
        assert_eq!(time_ago(&format(now - Duration::hours(3)), now), "3 hours ago");
        assert_eq!(time_ago(&format(now - Duration::days(2)), now), "2 days ago");
        assert_eq!(time_ago(&format(now - Duration::days(400)), now), "1 year ago");
        assert_eq!(time_ago("yesterday", now), "");
    }

    #[test]
    fn small_numbers_stay_plain() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
    }
}
