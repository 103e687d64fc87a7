//! Fixed constants of the sovereignty dynamics and the heartbeat protocol
//!
//! These are part of the model, not tuning knobs: the health thresholds are
//! only meaningful against exactly these bands and divisors.

// === STATE BOUNDS ===

/// Lower clamp applied to every node after each step
pub const STATE_MIN: f64 = 0.1;

/// Upper clamp applied to every node after each step
pub const STATE_MAX: f64 = 5.0;

/// Carrying capacity of the logistic reaction term
pub const CARRYING_CAPACITY: f64 = 5.0;

// === INITIAL STATE ===

/// Mean of the normal distribution initial states are drawn from
pub const INITIAL_MEAN: f64 = 1.0;

/// Standard deviation of the initial state distribution
pub const INITIAL_STD_DEV: f64 = 0.2;

// === STEP STATISTICS ===

/// Nodes strictly above this state count toward the fork index
pub const FORK_THRESHOLD: f64 = 3.0;

/// Fixed divisor turning the fork count into a severity index
///
/// Deliberately not N: the fork index grows with population size.
pub const FORK_DIVISOR: f64 = 10.0;

/// States strictly above this fall in the "+1" band
pub const POSITIVE_BAND_MIN: f64 = 1.5;

/// States strictly below this fall in the "-1" band
pub const NEGATIVE_BAND_MAX: f64 = 0.8;

// === HEARTBEAT ===

/// Number of trailing steps averaged by the heartbeat
pub const HEARTBEAT_WINDOW: usize = 200;

/// Inclusive lower bound on `mean_forks` for a healthy heartbeat
pub const HEALTHY_FORKS_MIN: f64 = 2.0;

/// Inclusive upper bound on `mean_forks` for a healthy heartbeat
pub const HEALTHY_FORKS_MAX: f64 = 5.0;

/// Minimum "+1" share for a healthy heartbeat
pub const HEALTHY_POSITIVE_MIN: f64 = 0.15;

/// `mean_forks` must exceed this for the system sanity check
pub const SANITY_FORKS_MIN: f64 = 0.5;

/// "+1" share must exceed this for the system sanity check
pub const SANITY_POSITIVE_MIN: f64 = 0.05;
