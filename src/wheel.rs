//! Selector Wheel
//!
//! A fair random picker over a fixed list of labels, with a rotation target
//! for the presentation layer that always lands on the picked label.
//!
//! # Design Principles
//!
//! - **One Draw**: the rotation and the outcome are derived from the same
//!   stored index, so they can never disagree
//! - **Owned Timer**: the settling delay is a deadline owned by the wheel and
//!   checked by [`SelectorWheel::tick`]; dropping or cancelling the wheel drops
//!   the pending settle together with the observer
//! - **Owned Randomness**: each wheel owns its generator, no global RNG state
//!
//! # State Flow
//!
//! ```text
//! Idle ──trigger──▶ Spinning ──tick (deadline passed)──▶ Settled
//!                      ▲                                    │
//!                      └──────────────trigger───────────────┘
//!
//! (trigger while Spinning is ignored, cancel returns to Idle)
//! ```

use crate::error::{Result, SantaError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Settling delay between a trigger and its outcome
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(3000);

/// Full turns every spin makes before landing
pub const MIN_FULL_TURNS: u32 = 3;

/// Number of choices for the extra turns, drawn from `0..EXTRA_TURN_CHOICES`
pub const EXTRA_TURN_CHOICES: u32 = 3;

/// Candidate list used after a successful submission
pub const DEFAULT_CANDIDATES: [&str; 8] = [
    "MysticPhoenix",
    "CosmicDragon",
    "QuantumNexus",
    "StellarMatrix",
    "CryptoVector",
    "DigitalPulse",
    "NeuralNova",
    "CyberSpark",
];

/// Callback invoked with the selected label once a spin settles
pub type SpinObserver = Box<dyn FnMut(&str) + Send>;

/// Result of one completed spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    /// Index into the candidate list
    pub index: usize,
    /// Label at `index`
    pub label: String,
    /// Rotation in degrees emitted when the spin was triggered
    pub rotation: f64,
}

/// Lifecycle of a wheel
#[derive(Debug, Clone, PartialEq)]
pub enum WheelState {
    /// Never spun, or the last spin was cancelled
    Idle,
    /// Animating toward `rotation`; settles at `settle_at`
    Spinning {
        index: usize,
        rotation: f64,
        started_at: Instant,
        settle_at: Instant,
    },
    /// Last spin finished
    Settled(SpinOutcome),
}

/// Rotation in degrees that lands segment `index` of `segments` under the pointer
/// after `MIN_FULL_TURNS + extra_turns` full turns.
pub fn rotation_for(index: usize, extra_turns: u32, segments: usize) -> f64 {
    let segment_angle = 360.0 / segments as f64;
    f64::from(MIN_FULL_TURNS + extra_turns) * 360.0 + index as f64 * segment_angle
}

/// Segment sitting under the pointer when the wheel is turned by `angle` degrees.
///
/// Inverse of [`rotation_for`]: `segment_at(rotation_for(k, r, n), n) == k`.
pub fn segment_at(angle: f64, segments: usize) -> usize {
    if segments == 0 {
        return 0;
    }
    let segment_angle = 360.0 / segments as f64;
    let nearest = (angle.rem_euclid(360.0) / segment_angle).round() as usize;
    nearest % segments
}

/// Ease-out cubic, used for the cosmetic spin animation
fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Randomized selector with a settling delay
pub struct SelectorWheel {
    candidates: Vec<String>,
    settle_delay: Duration,
    rng: StdRng,
    observer: Option<SpinObserver>,
    state: WheelState,
    /// Angle the wheel rests at before the current spin starts
    resting_angle: f64,
}

impl SelectorWheel {
    /// Create a wheel seeded from OS entropy.
    ///
    /// Fails with [`SantaError::InvalidConfiguration`] if `candidates` is empty.
    pub fn new<I, S>(candidates: I, settle_delay: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(candidates, settle_delay, StdRng::from_os_rng())
    }

    /// Create a wheel with a fixed seed, for reproducible spins
    pub fn with_seed<I, S>(candidates: I, settle_delay: Duration, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(candidates, settle_delay, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(candidates: I, settle_delay: Duration, rng: StdRng) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return Err(SantaError::invalid_configuration(
                "selector wheel needs at least one candidate",
            ));
        }

        Ok(Self {
            candidates,
            settle_delay,
            rng,
            observer: None,
            state: WheelState::Idle,
            resting_angle: 0.0,
        })
    }

    /// Register the observer notified when a spin settles
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Register an already boxed observer
    pub fn with_boxed_observer(mut self, observer: SpinObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, WheelState::Spinning { .. })
    }

    /// Outcome of the last settled spin
    pub fn outcome(&self) -> Option<&SpinOutcome> {
        match &self.state {
            WheelState::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Target rotation of the current or last spin
    pub fn rotation(&self) -> Option<f64> {
        match &self.state {
            WheelState::Idle => None,
            WheelState::Spinning { rotation, .. } => Some(*rotation),
            WheelState::Settled(outcome) => Some(outcome.rotation),
        }
    }

    /// Start a spin.
    ///
    /// Returns the rotation the presentation layer should animate toward, or
    /// `None` if a spin is already in flight (the call is ignored).
    pub fn trigger(&mut self, now: Instant) -> Option<f64> {
        if self.is_spinning() {
            debug!("Spin already in progress, ignoring trigger");
            return None;
        }

        let index = self.rng.random_range(0..self.candidates.len());
        let extra_turns = self.rng.random_range(0..EXTRA_TURN_CHOICES);
        let rotation = rotation_for(index, extra_turns, self.candidates.len());

        if let WheelState::Settled(previous) = &self.state {
            self.resting_angle = previous.rotation.rem_euclid(360.0);
        }

        debug!(index, rotation, "Wheel spin started");
        self.state = WheelState::Spinning {
            index,
            rotation,
            started_at: now,
            settle_at: now + self.settle_delay,
        };
        Some(rotation)
    }

    /// Advance the settling timer.
    ///
    /// Settles the wheel and notifies the observer when `now` has reached the
    /// deadline. Returns the outcome only on the call that settles.
    pub fn tick(&mut self, now: Instant) -> Option<&SpinOutcome> {
        let WheelState::Spinning {
            index,
            rotation,
            settle_at,
            ..
        } = self.state
        else {
            return None;
        };
        if now < settle_at {
            return None;
        }

        let outcome = SpinOutcome {
            index,
            label: self.candidates[index].clone(),
            rotation,
        };
        debug!(label = %outcome.label, "Wheel settled");
        if let Some(observer) = self.observer.as_mut() {
            observer(&outcome.label);
        }
        self.state = WheelState::Settled(outcome);
        self.outcome()
    }

    /// Drop a pending spin without notifying the observer.
    ///
    /// Returns true if a spin was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_spinning() {
            debug!("Pending wheel spin cancelled");
            self.state = WheelState::Idle;
            true
        } else {
            false
        }
    }

    /// Fraction of the settling delay elapsed, 0.0..=1.0
    pub fn progress(&self, now: Instant) -> f64 {
        match &self.state {
            WheelState::Idle => 0.0,
            WheelState::Settled(_) => 1.0,
            WheelState::Spinning {
                started_at,
                settle_at,
                ..
            } => {
                let total = settle_at.saturating_duration_since(*started_at).as_secs_f64();
                if total <= f64::EPSILON {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(*started_at).as_secs_f64();
                (elapsed / total).clamp(0.0, 1.0)
            }
        }
    }

    /// Angle to draw the wheel at, easing toward the target while spinning
    pub fn display_angle(&self, now: Instant) -> f64 {
        match &self.state {
            WheelState::Idle => self.resting_angle,
            WheelState::Settled(outcome) => outcome.rotation,
            WheelState::Spinning { rotation, .. } => {
                let start = self.resting_angle;
                start + (rotation - start) * ease_out(self.progress(now))
            }
        }
    }

    /// Segment currently under the pointer
    pub fn segment_under_pointer(&self, now: Instant) -> usize {
        segment_at(self.display_angle(now), self.candidates.len())
    }
}

impl fmt::Debug for SelectorWheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorWheel")
            .field("candidates", &self.candidates)
            .field("settle_delay", &self.settle_delay)
            .field("state", &self.state)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn two_names() -> SelectorWheel {
        SelectorWheel::with_seed(["A", "B"], Duration::from_millis(100), 7).unwrap()
    }

    #[test]
    fn test_new_wheel_is_idle() {
        let wheel = two_names();
        assert_eq!(wheel.state(), &WheelState::Idle);
        assert!(wheel.rotation().is_none());
        assert!(wheel.outcome().is_none());
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let err = SelectorWheel::new(Vec::<String>::new(), DEFAULT_SETTLE_DELAY).unwrap_err();
        assert!(matches!(err, SantaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rotation_formula() {
        assert_eq!(rotation_for(0, 0, 8), 1080.0);
        assert_eq!(rotation_for(1, 2, 2), 5.0 * 360.0 + 180.0);
        assert_eq!(rotation_for(3, 1, 4), 4.0 * 360.0 + 270.0);
    }

    #[test]
    fn test_segment_at_inverts_rotation() {
        for n in 1..=12 {
            for k in 0..n {
                for r in 0..EXTRA_TURN_CHOICES {
                    assert_eq!(segment_at(rotation_for(k, r, n), n), k);
                }
            }
        }
    }

    #[test]
    fn test_trigger_emits_rotation_and_spins() {
        let mut wheel = two_names();
        let now = Instant::now();
        let rotation = wheel.trigger(now).unwrap();
        assert!(wheel.is_spinning());
        assert!(rotation >= 1080.0 && rotation < 6.0 * 360.0);
        assert_eq!(wheel.rotation(), Some(rotation));
    }

    #[test]
    fn test_tick_before_deadline_does_not_settle() {
        let mut wheel = two_names();
        let now = Instant::now();
        wheel.trigger(now);
        assert!(wheel.tick(now + Duration::from_millis(99)).is_none());
        assert!(wheel.is_spinning());
    }

    #[test]
    fn test_observer_called_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut wheel = two_names().with_observer(move |label| {
            sink.lock().unwrap().push(label.to_string());
        });

        let now = Instant::now();
        wheel.trigger(now);
        let later = now + Duration::from_millis(100);
        let label = wheel.tick(later).unwrap().label.clone();
        assert!(wheel.tick(later + Duration::from_secs(1)).is_none());

        assert_eq!(*seen.lock().unwrap(), vec![label]);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut wheel = two_names();
        assert!(!wheel.cancel());
        let now = Instant::now();
        wheel.trigger(now);
        assert!(wheel.cancel());
        assert_eq!(wheel.state(), &WheelState::Idle);
        assert!(wheel.tick(now + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_progress_and_display_angle() {
        let mut wheel = two_names();
        let now = Instant::now();
        assert_eq!(wheel.progress(now), 0.0);
        let rotation = wheel.trigger(now).unwrap();
        assert_eq!(wheel.display_angle(now), 0.0);
        let half = wheel.progress(now + Duration::from_millis(50));
        assert!((half - 0.5).abs() < 1e-9);
        let mid = wheel.display_angle(now + Duration::from_millis(50));
        assert!(mid > 0.0 && mid < rotation);
        assert_eq!(wheel.display_angle(now + Duration::from_millis(100)), rotation);
    }

    #[test]
    fn test_zero_delay_progress_is_complete() {
        let mut wheel = SelectorWheel::with_seed(["A"], Duration::ZERO, 1).unwrap();
        let now = Instant::now();
        wheel.trigger(now);
        assert_eq!(wheel.progress(now), 1.0);
    }

    #[test]
    fn test_debug_omits_observer_body() {
        let wheel = two_names().with_observer(|_| {});
        let debug = format!("{:?}", wheel);
        assert!(debug.contains("has_observer: true"));
    }
}
