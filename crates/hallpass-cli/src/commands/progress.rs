use clap::Subcommand;
use hallpass_core::{complete_focus_session, ProgressStore};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Print level, XP and streak
    Show {
        /// Print the raw stored state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a completed focus session
    Complete {
        /// Elapsed focus time in seconds
        #[arg(long, conflicts_with = "minutes", required_unless_present = "minutes")]
        seconds: Option<f64>,
        /// Elapsed focus time in minutes
        #[arg(long)]
        minutes: Option<f64>,
        /// Completion time, "YYYY-MM-DD HH:MM[:SS]" (default: now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Delete all stored progress
    Reset,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProgressStore::open_default()?;

    match action {
        ProgressAction::Show { json } => {
            let state = store.load(super::now().date())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                let summary = state.progress_summary();
                println!(
                    "Level {} | {} XP | {:.0}% to level {} ({} XP to go)",
                    summary.level,
                    summary.xp,
                    summary.progress_pct,
                    summary.level + 1,
                    summary.xp_to_next_level
                );
                println!(
                    "Streak: {} day(s) | Today: {:.0} min | Total: {:.0} min",
                    state.current_streak, state.daily_focus_minutes, state.total_focus_minutes
                );
            }
        }
        ProgressAction::Complete {
            seconds,
            minutes,
            at,
        } => {
            // Seconds are the canonical unit; minutes are converted once here.
            let elapsed_seconds = seconds.or(minutes.map(|m| m * 60.0)).unwrap_or(0.0);
            let now = match at {
                Some(raw) => super::parse_instant(&raw)?,
                None => super::now(),
            };
            let prior = store.load(now.date())?;
            let outcome = complete_focus_session(&prior, elapsed_seconds, now);
            store.save(&outcome.state)?;
            tracing::info!(
                earned_xp = outcome.earned_xp,
                level = outcome.state.level,
                streak = outcome.state.current_streak,
                "focus session recorded"
            );
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        ProgressAction::Reset => {
            store.clear()?;
            println!("progress reset");
        }
    }
    Ok(())
}
