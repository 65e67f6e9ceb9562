use clap::Subcommand;
use hallpass_core::schedule::{display_name, format_clock, iso_week_number};
use hallpass_core::{classify_day_type, Config, ScheduleStatus};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Print the ticker for the current (or given) instant
    Now {
        /// Local time to resolve, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        at: Option<String>,
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Refresh the ticker on the configured interval
    Watch {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Print the A/B day type of a date
    DayType {
        /// Date, "YYYY-MM-DD" (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List the bell schedule with your class names
    Show {
        /// Day type whose class names to show: a or b
        #[arg(long, default_value = "a")]
        day: String,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        ScheduleAction::Now { at, json } => {
            let now = match at {
                Some(raw) => super::parse_instant(&raw)?,
                None => super::now(),
            };
            let status = ScheduleStatus::at(&config.bell, config.custom_schedule.as_ref(), now);
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", status.headline());
            }
        }
        ScheduleAction::Watch { ticks } => {
            let interval = std::time::Duration::from_millis(config.ticker.refresh_ms);
            let mut count = 0u64;
            loop {
                let status =
                    ScheduleStatus::at(&config.bell, config.custom_schedule.as_ref(), super::now());
                println!("{}", status.headline());
                count += 1;
                if ticks.is_some_and(|limit| count >= limit) {
                    break;
                }
                std::thread::sleep(interval);
            }
        }
        ScheduleAction::DayType { date } => {
            let date = match date {
                Some(raw) => super::parse_date(&raw)?,
                None => super::now().date(),
            };
            let day_type = classify_day_type(date);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "date": date,
                    "iso_week": iso_week_number(date),
                    "day_type": day_type,
                }))?
            );
        }
        ScheduleAction::Show { day } => {
            let day_type = super::parse_day_type(&day)?;
            for block in config.bell.for_day(day_type) {
                println!(
                    "{}-{}  {}",
                    format_clock(block.start),
                    format_clock(block.end),
                    display_name(&block.name, day_type, config.custom_schedule.as_ref())
                );
            }
        }
    }
    Ok(())
}
