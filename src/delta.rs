//! Parsing of time offsets given on the command line.

use chrono::{Local, NaiveDateTime};

use crate::errors::*;

/// Parses an offset in format `XX[h|m|s][+-]` into a timestamp relative to
/// now, e.g. `15m-` for a start you forgot to record fifteen minutes ago.
pub fn parse_offset(src: &str) -> Result<NaiveDateTime> {
    let sign_pos = src.ends_with('+');
    let stripped = src
        .strip_suffix(|p| p == '+' || p == '-')
        .ok_or_else(|| eyre!("Does not end with + or -"))?;
    let human = stripped.parse::<humantime::Duration>()?;
    let duration = chrono::Duration::from_std(*human)?;

    let now = Local::now().naive_local();
    let date_time = if sign_pos {
        now.checked_add_signed(duration)
    } else {
        now.checked_sub_signed(duration)
    }
    .ok_or_else(|| eyre!("Offset {} does not yield a valid time", duration))?;
    log::trace!(
        "Deserialized {} to an offset of {}min, timestamp {}",
        src,
        duration.num_minutes(),
        date_time
    );
    Ok(date_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn deserialize_min_add() {
        let time = parse_offset("10m+").expect("Can parse");
        let expected = time.signed_duration_since(Local::now().naive_local());
        assert!(expected < Duration::minutes(10));
        assert!(expected > Duration::seconds(60 * 9 + 59));
    }

    #[test]
    fn deserialize_min_sub() {
        let time = parse_offset("10m-").expect("Can parse");
        let expected = time.signed_duration_since(Local::now().naive_local());
        assert!(expected < Duration::seconds(-9 * 60 - 59));
        assert!(expected > Duration::seconds(-10 * 60 - 1));
    }

    #[test]
    fn deserialize_full_fmt() {
        let time = parse_offset("10h3m2s+").expect("Can parse");
        let expected = time.signed_duration_since(Local::now().naive_local());
        assert!(expected < Duration::seconds(10 * 60 * 60 + 3 * 60 + 2));
        assert!(expected > Duration::seconds(10 * 60 * 60 + 3 * 60));
    }

    #[test]
    fn deserialize_hoursseconds() {
        let time = parse_offset("2h37s+").expect("Can parse");
        let expected = time.signed_duration_since(Local::now().naive_local());
        assert!(expected < Duration::seconds(2 * 60 * 60 + 37));
        assert!(expected > Duration::seconds(2 * 60 * 60 + 35));
    }

    #[test]
    fn deserialize_bad_format() {
        assert!(parse_offset("10mS-").is_err());
        assert!(parse_offset("10k+").is_err());
        assert!(parse_offset("10m").is_err());
        assert!(parse_offset("1-").is_err());
    }
}
