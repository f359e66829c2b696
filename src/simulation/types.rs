//! Core types for the driving simulation
//!
//! These are standalone types that don't depend on any presentation backend.

use std::fmt;

/// Distance window around an obstacle's trigger point in which it resolves
pub const HIT_WINDOW: f32 = 10.0;

/// How far before the newest obstacle's trigger point the next one spawns
pub const SPAWN_LEAD: f32 = 20.0;

/// Smallest gap between the current distance and a new obstacle's trigger
pub const MIN_OBSTACLE_GAP: i32 = 50;

/// Largest gap between the current distance and a new obstacle's trigger
pub const MAX_OBSTACLE_GAP: i32 = 150;

/// Speed limits an obstacle can carry, in km/h
pub const SPEED_LIMITS: [i32; 3] = [30, 40, 60];

/// A player action for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accelerate,
    Brake,
    Cruise,
}

impl Action {
    /// Parse a textual token from the prompt.
    ///
    /// A/B/C are matched case-insensitively; anything else falls back to
    /// Cruise, matching the permissive input policy of the game.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Self::Accelerate,
            "B" => Self::Brake,
            _ => Self::Cruise,
        }
    }

    /// Parse a single script character (same fallback as `from_input`)
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'A' => Self::Accelerate,
            'B' => Self::Brake,
            _ => Self::Cruise,
        }
    }
}

/// Kind of road hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Pedestrian,
    SlowCar,
    RedLight,
    Curve,
}

impl ObstacleKind {
    /// All kinds, for uniform random selection
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Pedestrian,
        ObstacleKind::SlowCar,
        ObstacleKind::RedLight,
        ObstacleKind::Curve,
    ];
}

impl fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObstacleKind::Pedestrian => "pedestrian",
            ObstacleKind::SlowCar => "slow_car",
            ObstacleKind::RedLight => "red_light",
            ObstacleKind::Curve => "curve",
        };
        f.write_str(label)
    }
}

/// A randomly generated hazard ahead of the car
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Distance value at which this obstacle is resolved
    pub trigger_distance: f32,
    /// Threshold speed for a safe pass, in km/h
    pub speed_limit: i32,
}
