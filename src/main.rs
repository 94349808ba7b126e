// Event Countdown
// Main entry point

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, TimeZone, Utc};

use event_countdown::models::settings::CountdownSettings;
use event_countdown::services::countdown::{compute_countdown, CountdownTicker, SystemClock};
use event_countdown::services::plural::format_countdown;
use event_countdown::services::reminder::{days_until, reminder_message, ReminderTracker};
use event_countdown::services::settings::{default_settings_path, load_settings};
use event_countdown::CountdownBreakdown;

const USAGE: &str = "Usage: event-countdown [--watch] [--json] [CONFIG]";

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    watch: bool,
    json: bool,
    help: bool,
    config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--watch" | "-w" => options.watch = true,
                "--json" => options.json = true,
                "--help" | "-h" => options.help = true,
                flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
                path => {
                    if options.config.is_some() {
                        bail!("more than one settings path given\n{USAGE}");
                    }
                    options.config = Some(PathBuf::from(path));
                }
            }
        }
        Ok(options)
    }
}

fn render(settings: &CountdownSettings, breakdown: &CountdownBreakdown, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(breakdown)?);
    }

    if breakdown.is_complete {
        Ok(format!("Событие «{}» наступило!", settings.title))
    } else {
        Ok(format!(
            "До события «{}» осталось: {}",
            settings.title,
            format_countdown(breakdown, &settings.forms)
        ))
    }
}

fn announce_reminder<Tz: TimeZone>(
    tracker: &mut ReminderTracker<Tz>,
    settings: &CountdownSettings,
    now: &DateTime<Tz>,
    target: &DateTime<Tz>,
) {
    if let Some(milestone) = tracker.check(now) {
        let days_left = days_until(now, target);
        println!(
            "{}",
            reminder_message(milestone, &settings.title, days_left, &settings.forms.days)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let options = CliOptions::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let path = options.config.clone().unwrap_or_else(default_settings_path);
    let settings = load_settings(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    let target = settings
        .target_instant()
        .context("failed to resolve the event date")?;
    let zone = target.timezone();

    log::info!("Counting down to {} ({})", target, settings.timezone);

    let mut reminders = ReminderTracker::new(target);
    let now = Utc::now().with_timezone(&zone);
    announce_reminder(&mut reminders, &settings, &now, &target);

    if !options.watch {
        let breakdown = compute_countdown(&now, &target);
        println!("{}", render(&settings, &breakdown, options.json)?);
        return Ok(());
    }

    let mut ticker = CountdownTicker::spawn(target, settings.refresh_interval(), SystemClock);
    let mut updates = ticker.subscribe();
    println!("{}", render(&settings, &ticker.current(), options.json)?);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    // The ticker ends on its own once the event is reached.
                    break;
                }
                let breakdown = *updates.borrow_and_update();
                let now = Utc::now().with_timezone(&zone);
                announce_reminder(&mut reminders, &settings, &now, &target);
                println!("{}", render(&settings, &breakdown, options.json)?);
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, stopping countdown");
                ticker.stop();
                break;
            }
        }
    }

    ticker.wait().await;
    Ok(())
}
