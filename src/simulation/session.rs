//! Session state and the per-round update step
//!
//! This is the whole-game aggregate: safety score, speed, distance, and the
//! queue of pending obstacles, plus the operations that advance one round.
//! It runs headless so it can be exercised without any console attached.

use log::debug;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::types::{
    Action, Obstacle, ObstacleKind, HIT_WINDOW, MAX_OBSTACLE_GAP, MIN_OBSTACLE_GAP, SPAWN_LEAD,
    SPEED_LIMITS,
};

/// Safety budget at session start
pub const STARTING_SCORE: i32 = 100;

/// Speed at session start, in km/h
pub const STARTING_SPEED: i32 = 50;

/// Distance at which the drive is complete, in meters
pub const FINISH_DISTANCE: f32 = 1000.0;

/// Hard speed cap, in km/h
pub const MAX_SPEED: i32 = 120;

/// Cruising never decays below this speed
pub const CRUISE_FLOOR: i32 = 30;

/// Speed gained per Accelerate action
pub const ACCELERATE_STEP: i32 = 10;

/// Speed lost per Brake action
pub const BRAKE_STEP: i32 = 15;

/// Speed bled off per Cruise action
pub const CRUISE_DECAY: i32 = 2;

/// Accelerating past this speed costs score
pub const SPEEDING_THRESHOLD: i32 = 80;
pub const SPEEDING_PENALTY: i32 = 2;

/// Braking below this speed costs score
pub const CRAWLING_THRESHOLD: i32 = 30;
pub const CRAWLING_PENALTY: i32 = 1;

/// Per-round chance of a distraction event
pub const DISTRACTION_CHANCE: f64 = 0.1;
pub const DISTRACTION_PENALTY: i32 = 5;

/// Score awarded for passing an obstacle at or under its limit
pub const SAFE_PASS_BONUS: i32 = 5;

/// Penalty for hitting a pedestrian; all other obstacle kinds use the default
pub const PEDESTRIAN_PENALTY: i32 = 20;
pub const OBSTACLE_PENALTY: i32 = 10;

/// Whether the session is still accepting rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Absorbing: once entered, further round calls are no-ops
    GameOver,
}

/// The full mutable state of one playthrough
#[derive(Debug)]
pub struct Session {
    pub state: SessionState,
    pub score: i32,
    /// Current speed in km/h, always within [0, MAX_SPEED]
    pub speed: i32,
    /// Meters traveled; only ever increases
    pub distance: f32,
    /// Pending obstacles, earliest-created first
    pub obstacles: Vec<Obstacle>,
    /// Every penalizing event so far, most recent last
    pub alerts: Vec<String>,
    /// Completed rounds
    pub rounds: u32,

    /// Random distraction events fire during `apply_action`
    pub distractions: bool,
    /// New obstacles spawn during `replenish_obstacles`
    pub hazards: bool,

    /// Optional seeded RNG for reproducible sessions
    rng: Option<StdRng>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self {
            state: SessionState::Running,
            score: STARTING_SCORE,
            speed: STARTING_SPEED,
            distance: 0.0,
            obstacles: Vec::new(),
            alerts: Vec::new(),
            rounds: 0,
            distractions: true,
            hazards: true,
            rng,
        }
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a session with a seeded RNG for reproducible runs
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Roll a probability, using seeded RNG if available
    fn random_bool(&mut self, p: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(p),
            None => rand::rng().random_bool(p),
        }
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Create a random obstacle ahead of the current position.
    ///
    /// Only the RNG is touched; the caller decides whether to append it.
    pub fn generate_obstacle(&mut self) -> Obstacle {
        let kind = self
            .choose_random(&ObstacleKind::ALL)
            .copied()
            .unwrap_or(ObstacleKind::SlowCar);
        let gap = self.random_range(MIN_OBSTACLE_GAP..=MAX_OBSTACLE_GAP);
        let speed_limit = self
            .choose_random(&SPEED_LIMITS)
            .copied()
            .unwrap_or(SPEED_LIMITS[1]);

        Obstacle {
            kind,
            trigger_distance: self.distance + gap as f32,
            speed_limit,
        }
    }

    /// Append a new obstacle once the newest one is close to being reached.
    ///
    /// At most one obstacle is added per call, keeping the queue sorted by
    /// trigger distance (gaps are larger than the spawn lead).
    pub fn replenish_obstacles(&mut self) {
        if !self.hazards {
            return;
        }
        let due = match self.obstacles.last() {
            Some(last) => self.distance >= last.trigger_distance - SPAWN_LEAD,
            None => true,
        };
        if due {
            let obstacle = self.generate_obstacle();
            debug!(
                "spawned {} at {:.0}m (limit {}km/h)",
                obstacle.kind, obstacle.trigger_distance, obstacle.speed_limit
            );
            self.obstacles.push(obstacle);
        }
    }

    /// Resolve every obstacle within the hit window of the current distance.
    ///
    /// The queue is taken and filtered rather than mutated during traversal,
    /// so each obstacle resolves exactly once and re-running at the same
    /// distance is a no-op.
    pub fn resolve_obstacles(&mut self) {
        let pending = std::mem::take(&mut self.obstacles);
        for obstacle in pending {
            if (self.distance - obstacle.trigger_distance).abs() >= HIT_WINDOW {
                self.obstacles.push(obstacle);
                continue;
            }

            if self.speed > obstacle.speed_limit {
                let penalty = if obstacle.kind == ObstacleKind::Pedestrian {
                    PEDESTRIAN_PENALTY
                } else {
                    OBSTACLE_PENALTY
                };
                self.score -= penalty;
                self.alerts
                    .push(format!("Hit {} at {}km/h!", obstacle.kind, self.speed));
                debug!("hit {} at {}km/h, -{}", obstacle.kind, self.speed, penalty);
            } else {
                self.score += SAFE_PASS_BONUS;
            }
        }
    }

    /// Apply one player action: update speed, advance distance, and roll the
    /// distraction event.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Accelerate => {
                self.speed = (self.speed + ACCELERATE_STEP).min(MAX_SPEED);
                if self.speed > SPEEDING_THRESHOLD {
                    self.score -= SPEEDING_PENALTY;
                }
            }
            Action::Brake => {
                self.speed = (self.speed - BRAKE_STEP).max(0);
                if self.speed < CRAWLING_THRESHOLD {
                    self.score -= CRAWLING_PENALTY;
                }
            }
            Action::Cruise => {
                self.speed = (self.speed - CRUISE_DECAY).max(CRUISE_FLOOR);
            }
        }

        self.distance += self.speed as f32 * 0.1;

        if self.distractions && self.random_bool(DISTRACTION_CHANCE) {
            self.score -= DISTRACTION_PENALTY;
            self.alerts.push("Distracted driving!".to_string());
        }
    }

    /// Close out the round: bump the counter and run the terminal check.
    ///
    /// The check is strictly post-round, so a round that drives the score
    /// negative still completes and reports that score.
    pub fn end_round(&mut self) {
        self.rounds += 1;
        if self.score <= 0 || self.distance >= FINISH_DISTANCE {
            self.state = SessionState::GameOver;
        }
    }

    /// Run one full headless round in the canonical order:
    /// resolve, act, replenish, terminal check. No-op once the game is over.
    pub fn play_round(&mut self, action: Action) {
        if self.is_over() {
            return;
        }
        self.resolve_obstacles();
        self.apply_action(action);
        self.replenish_obstacles();
        self.end_round();
    }

    /// The obstacle closest to the current position, for the status preview
    pub fn nearest_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .min_by_key(|o| OrderedFloat((o.trigger_distance - self.distance).abs()))
    }

    /// The most recent `count` alerts, oldest first
    pub fn recent_alerts(&self, count: usize) -> &[String] {
        let start = self.alerts.len().saturating_sub(count);
        &self.alerts[start..]
    }
}
