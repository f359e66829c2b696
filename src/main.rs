mod simulation;
mod ui;

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use simulation::{Action, PerformanceScores, Session, SessionReport};
use ui::{ChartRenderer, ConsoleChart, ConsoleNarrator, Narrator};

#[derive(Parser)]
#[command(name = "adas_sim")]
#[command(about = "Turn-based driving game with hazard avoidance scoring")]
struct Cli {
    /// Seed for reproducible obstacle and distraction rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed action script (e.g. "AABC"), one letter per round, instead of
    /// reading stdin; once it runs out the car cruises
    #[arg(long)]
    script: Option<String>,

    /// Delay between rounds in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Keep previous rounds on screen instead of clearing
    #[arg(long)]
    no_clear: bool,
}

/// Where the per-round action comes from: a fixed script or the player
enum ActionSource {
    Script(std::vec::IntoIter<Action>),
    Stdin,
}

impl ActionSource {
    fn new(script: Option<String>) -> Self {
        match script {
            Some(s) => Self::Script(
                s.chars()
                    .map(Action::from_char)
                    .collect::<Vec<_>>()
                    .into_iter(),
            ),
            None => Self::Stdin,
        }
    }

    fn is_interactive(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Next action for the round. `None` means stdin was closed and the
    /// session should wrap up early.
    fn next_action(&mut self) -> Result<Option<Action>> {
        match self {
            Self::Script(actions) => Ok(Some(actions.next().unwrap_or(Action::Cruise))),
            Self::Stdin => {
                print!("Action (A/B/C): ");
                io::stdout().flush()?;

                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(Action::from_input(&line)))
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = match cli.seed {
        Some(seed) => {
            info!("starting session with seed {seed}");
            Session::new_with_seed(seed)
        }
        None => Session::new(),
    };

    let mut actions = ActionSource::new(cli.script);
    let clear = !cli.no_clear && actions.is_interactive();
    let delay = Duration::from_millis(cli.delay_ms);

    ui::banner();
    session.replenish_obstacles();
    let started = Instant::now();

    while !session.is_over() {
        if clear {
            ui::clear_screen();
        }
        ui::display_status(&session, started.elapsed().as_secs_f32());

        session.resolve_obstacles();

        let Some(action) = actions.next_action()? else {
            break;
        };
        session.apply_action(action);
        session.replenish_obstacles();
        session.end_round();

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    let report = SessionReport::from_session(&session, started.elapsed().as_secs_f32());
    ui::display_report(&report);

    // Presentation collaborators are best-effort: a broken speaker or chart
    // must not take the already-computed summary down with it.
    let mut narrator = ConsoleNarrator;
    if let Err(err) = narrator.narrate(report.message) {
        warn!("narration failed: {err}");
    }

    let scores = PerformanceScores::from_report(&report);
    let mut chart = ConsoleChart::default();
    if let Err(err) = chart.render(&scores) {
        warn!("chart rendering failed: {err}");
    }

    Ok(())
}
