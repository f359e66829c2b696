//! Standalone driving simulation module
//!
//! This module contains all the core game logic that can run independently
//! of any presentation backend. It can be tested via console without
//! narration or chart output attached.

mod report;
mod session;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use report::{
    closing_message, PerformanceScores, SessionReport, EXCELLENT_SCORE, GOOD_SCORE, MSG_EXCELLENT,
    MSG_GOOD, MSG_NEEDS_WORK,
};
#[allow(unused_imports)]
pub use session::{
    Session, SessionState, ACCELERATE_STEP, BRAKE_STEP, CRAWLING_PENALTY, CRAWLING_THRESHOLD,
    CRUISE_DECAY, CRUISE_FLOOR, DISTRACTION_CHANCE, DISTRACTION_PENALTY, FINISH_DISTANCE,
    MAX_SPEED, OBSTACLE_PENALTY, PEDESTRIAN_PENALTY, SAFE_PASS_BONUS, SPEEDING_PENALTY,
    SPEEDING_THRESHOLD, STARTING_SCORE, STARTING_SPEED,
};
#[allow(unused_imports)]
pub use types::{
    Action, Obstacle, ObstacleKind, HIT_WINDOW, MAX_OBSTACLE_GAP, MIN_OBSTACLE_GAP, SPAWN_LEAD,
    SPEED_LIMITS,
};
