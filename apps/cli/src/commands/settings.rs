//! Theme and reminder settings.

use anyhow::{bail, Result};
use hanci_core::platform::ReminderScheduler;
use hanci_core::state::KeyValueStore;
use hanci_core::{ReminderSettings, Theme};

pub fn theme(store: &dyn KeyValueStore, value: Option<&str>) -> Result<()> {
    let current = Theme::load(store);
    let Some(value) = value else {
        println!("theme: {}", current.as_str());
        return Ok(());
    };

    let next = match value {
        "toggle" => current.toggled(),
        other => match Theme::from_str(other) {
            Some(theme) => theme,
            None => bail!("unknown theme {other:?} (expected light, dark, or toggle)"),
        },
    };
    next.save(store)?;
    println!("theme: {}", next.as_str());
    Ok(())
}

pub fn remind(
    store: &dyn KeyValueStore,
    scheduler: &dyn ReminderScheduler,
    time: Option<&str>,
    off: bool,
) -> Result<()> {
    let mut settings = ReminderSettings::load(store);

    if off {
        settings.enabled = false;
        settings.save(store)?;
        scheduler.cancel()?;
        println!("reminder off");
        return Ok(());
    }

    match time {
        Some(time) => {
            let (hour, minute) = parse_time(time)?;
            settings = ReminderSettings {
                enabled: true,
                hour,
                minute,
            };
            settings.save(store)?;
            scheduler.schedule_daily(hour, minute)?;
            println!("reminder daily at {hour:02}:{minute:02}");
        }
        None => {
            if settings.enabled {
                println!("reminder daily at {:02}:{:02}", settings.hour, settings.minute);
            } else {
                println!("reminder off (default time {:02}:{:02})", settings.hour, settings.minute);
            }
        }
    }
    Ok(())
}

/// Parse "HH:MM" into hour and minute.
fn parse_time(s: &str) -> Result<(u32, u32)> {
    let parse = || -> Option<(u32, u32)> {
        let (h, m) = s.split_once(':')?;
        let hour: u32 = h.parse().ok()?;
        let minute: u32 = m.parse().ok()?;
        (hour < 24 && minute < 60).then_some((hour, minute))
    };
    match parse() {
        Some(time) => Ok(time),
        None => bail!("invalid time {s:?} (expected HH:MM)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_time("19:00").unwrap(), (19, 0));
        assert_eq!(parse_time("8:30").unwrap(), (8, 30));
        assert_eq!(parse_time("0:00").unwrap(), (0, 0));
    }

    #[test]
    fn rejects_invalid_times() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("12").is_err());
    }
}
