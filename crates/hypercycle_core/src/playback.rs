//! Playback state machine
//!
//! Drives the dimension cycle 2 -> 3 -> ... -> 9 -> 2 on a fixed base
//! interval scaled by a speed multiplier. The machine itself owns no
//! timer; the event loop feeds it wall-clock deltas through [`Playback::tick`].

/// First dimension of the cycle
pub const CYCLE_START: i32 = 2;
/// Last dimension of the cycle (inclusive); the next advance wraps
pub const CYCLE_END: i32 = 9;

/// Speed multiplier bounds
pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;

/// Multiplicative step applied by speed_up / speed_down
const SPEED_STEP: f32 = 1.25;

/// Shortest allowed base interval, guards the tick loop against a
/// zero or negative configured interval
const MIN_INTERVAL: f32 = 0.05;

/// Whether the cycle is advancing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// The dimension-cycle state machine
///
/// All mutation happens through explicit operations; the geometric core
/// stays pure and is re-invoked from scratch whenever [`Playback::dimension`]
/// changes.
#[derive(Clone, Debug)]
pub struct Playback {
    state: PlaybackState,
    dimension: i32,
    /// Base seconds per dimension at speed 1.0
    interval: f32,
    speed: f32,
    /// Scaled seconds accumulated toward the next advance
    elapsed: f32,
}

impl Playback {
    /// Create a playing machine at the cycle start
    pub fn new(interval: f32) -> Self {
        Self {
            state: PlaybackState::Playing,
            dimension: CYCLE_START,
            interval: interval.max(MIN_INTERVAL),
            speed: 1.0,
            elapsed: 0.0,
        }
    }

    /// Start at a specific dimension (clamped into the cycle range)
    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = dimension.clamp(CYCLE_START, CYCLE_END);
        self
    }

    /// Start with a specific speed multiplier (clamped)
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Start paused instead of playing
    pub fn paused(mut self) -> Self {
        self.state = PlaybackState::Paused;
        self
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Feed a wall-clock delta; returns true if the dimension changed
    ///
    /// Accumulates `dt * speed` and advances (wrapping at the cycle end)
    /// for every full interval contained in the accumulator. Does
    /// nothing while paused.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state == PlaybackState::Paused {
            return false;
        }

        self.elapsed += dt * self.speed;
        let mut changed = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.advance();
            changed = true;
        }
        changed
    }

    /// Toggle between playing and paused, returning the new state
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
        self.state
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Restart the cycle: back to the first dimension, accumulator
    /// cleared, playing again
    pub fn reset(&mut self) {
        self.dimension = CYCLE_START;
        self.elapsed = 0.0;
        self.state = PlaybackState::Playing;
        log::debug!("Playback reset to dimension {}", self.dimension);
    }

    /// Increase the speed multiplier one step, returning the new value
    pub fn speed_up(&mut self) -> f32 {
        self.speed = (self.speed * SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
        self.speed
    }

    /// Decrease the speed multiplier one step, returning the new value
    pub fn speed_down(&mut self) -> f32 {
        self.speed = (self.speed / SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
        self.speed
    }

    /// Manually advance one dimension (wraps), clearing the accumulator
    pub fn step_forward(&mut self) {
        self.advance();
        self.elapsed = 0.0;
    }

    /// Manually go back one dimension (wraps), clearing the accumulator
    pub fn step_back(&mut self) {
        self.dimension = if self.dimension <= CYCLE_START {
            CYCLE_END
        } else {
            self.dimension - 1
        };
        self.elapsed = 0.0;
    }

    fn advance(&mut self) {
        self.dimension = if self.dimension >= CYCLE_END {
            CYCLE_START
        } else {
            self.dimension + 1
        };
    }
}
