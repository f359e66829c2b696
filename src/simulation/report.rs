//! End-of-session summary and performance scoring
//!
//! Builds the immutable hand-off value the presentation collaborators
//! consume, and computes the four performance category scores.

use super::session::Session;

/// Score at or above which the closing message is the top tier
pub const EXCELLENT_SCORE: i32 = 80;

/// Score at or above which the closing message is the middle tier
pub const GOOD_SCORE: i32 = 60;

pub const MSG_EXCELLENT: &str = "Excellent driving! You're a pro.";
pub const MSG_GOOD: &str = "Good job, but needs practice.";
pub const MSG_NEEDS_WORK: &str = "Needs improvement. Focus on safety.";

/// Tiered closing message for a final score; boundaries are inclusive
pub fn closing_message(score: i32) -> &'static str {
    if score >= EXCELLENT_SCORE {
        MSG_EXCELLENT
    } else if score >= GOOD_SCORE {
        MSG_GOOD
    } else {
        MSG_NEEDS_WORK
    }
}

/// Everything the presentation layer needs once the session has ended
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub message: &'static str,
    pub score: i32,
    pub speed: i32,
    pub distance: f32,
    pub duration_secs: f32,
    pub rounds: u32,
    pub alerts: Vec<String>,
}

impl SessionReport {
    /// Snapshot a finished (or abandoned) session.
    ///
    /// Duration is wall-clock elapsed time measured by the driver; the
    /// session itself carries no clock.
    pub fn from_session(session: &Session, duration_secs: f32) -> Self {
        Self {
            message: closing_message(session.score),
            score: session.score,
            speed: session.speed,
            distance: session.distance,
            duration_secs,
            rounds: session.rounds,
            alerts: session.alerts.clone(),
        }
    }
}

/// The four chart categories, each on a 0..=100 scale (safety may go
/// negative when the final score did)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceScores {
    pub safety: f32,
    pub speed: f32,
    pub reaction: f32,
    pub efficiency: f32,
}

impl PerformanceScores {
    pub fn from_report(report: &SessionReport) -> Self {
        let safety = report.score as f32;
        let speed = (100 - (report.speed - 70).max(0) * 2).clamp(0, 100) as f32;
        let reaction = (100 - report.alerts.len() as i32 * 10).clamp(0, 100) as f32;
        // Guard the zero-duration case rather than dividing through
        let efficiency = if report.duration_secs > 0.0 {
            ((report.distance / report.duration_secs) * 2.0).min(100.0)
        } else {
            0.0
        };

        Self {
            safety,
            speed,
            reaction,
            efficiency,
        }
    }

    /// Category labels paired with values, in chart display order
    pub fn labeled(&self) -> [(&'static str, f32); 4] {
        [
            ("Safety", self.safety),
            ("Speed", self.speed),
            ("Reaction", self.reaction),
            ("Efficiency", self.efficiency),
        ]
    }
}
