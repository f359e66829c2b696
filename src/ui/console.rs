//! Console implementations of the presentation layer

use std::io::{self, Write};

use anyhow::Result;

use super::{ChartRenderer, Narrator};
use crate::simulation::{PerformanceScores, Session, SessionReport, FINISH_DISTANCE};

/// How many alerts the status display shows per round
const SHOWN_ALERTS: usize = 3;

/// Print the start-of-game banner and controls
pub fn banner() {
    println!("==============================================");
    println!("            A D A S   D R I V E");
    println!("==============================================");
    println!();
    println!(
        "Drive {:.0}m without running out of safety score.",
        FINISH_DISTANCE
    );
    println!("Controls: [A]ccelerate, [B]rake, [C]ruise");
    println!();
}

/// Clear the terminal between rounds (interactive mode only)
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

/// Show the per-round status block: score line, nearest-obstacle preview,
/// and the most recent alerts
pub fn display_status(session: &Session, elapsed_secs: f32) {
    println!(
        "Score: {} | Speed: {}km/h | Distance: {:.0}m | Time: {:.1}s",
        session.score, session.speed, session.distance, elapsed_secs
    );

    if let Some(next) = session.nearest_obstacle() {
        println!(
            "Next: {} in {:.0}m (limit {}km/h)",
            next.kind,
            next.trigger_distance - session.distance,
            next.speed_limit
        );
    }

    let recent = session.recent_alerts(SHOWN_ALERTS);
    if !recent.is_empty() {
        println!("Alerts:");
        for alert in recent {
            println!("- {alert}");
        }
    }
    println!();
}

/// Show the end-of-session results block
pub fn display_report(report: &SessionReport) {
    println!("Game Over! Final Results:");
    println!("Score: {}/100", report.score);
    println!("Speed: {}km/h", report.speed);
    println!("Distance: {:.0}m", report.distance);
    println!("Time: {:.1}s", report.duration_secs);
    println!("Rounds: {}", report.rounds);

    if !report.alerts.is_empty() {
        println!();
        println!("Incidents:");
        for alert in &report.alerts {
            println!("- {alert}");
        }
    }

    println!();
    println!("{}", report.message);
}

/// Narrator that "speaks" by printing the line to the console
#[derive(Debug, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "[voice] {text}")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Horizontal bar chart drawn with `#` cells, one row per category
#[derive(Debug)]
pub struct ConsoleChart {
    /// Bar width in characters for a value of 100
    pub width: usize,
}

impl Default for ConsoleChart {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl ChartRenderer for ConsoleChart {
    fn render(&mut self, scores: &PerformanceScores) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout)?;
        writeln!(stdout, "=== Driving Performance Breakdown ===")?;
        for (label, value) in scores.labeled() {
            let filled =
                ((value.clamp(0.0, 100.0) / 100.0) * self.width as f32).round() as usize;
            writeln!(
                stdout,
                "{label:<10} {:<bar_width$} {value:>4.0}",
                "#".repeat(filled),
                bar_width = self.width
            )?;
        }
        stdout.flush()?;
        Ok(())
    }
}
