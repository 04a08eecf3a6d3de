//! Application-level configuration constants.

// UI Behavior
pub const WORKER_SCRIPT: &str = "worker.js";
/// Minimum time the calculating spinner stays visible, for the animation.
pub const MIN_SPINNER_MS: f64 = 3000.0;
/// Delay before the country list replaces its "checking laws" spinner.
pub const COUNTRY_REVEAL_MS: u32 = 2000;
pub const CONFETTI_PARTICLE_COUNT: usize = 50;
pub const CONFETTI_CLEAR_MS: u32 = 2000;

// Default values for input fields
pub const DEFAULT_HOURS: f64 = 1.0;

// Min/Max limits for input fields
pub const MAX_HOURS: f64 = 24.0;
pub const HOURS_STEP: f64 = 0.5;
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

// Results display
/// Top of the severity gauge; estimates at or above this fill the bar.
pub const GAUGE_MAX_BAC: f64 = 0.15;
