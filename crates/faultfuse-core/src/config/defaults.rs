// Single source of truth for all default values.

// --- Fusion ---
pub const DEFAULT_CONFLICT_PENALTY_FACTOR: f64 = 0.0;
pub const DEFAULT_TOTAL_CONFLICT_EPSILON: f64 = 1e-6;
pub const DEFAULT_CONFLICT_WARNING_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PARALLEL_EVALUATION: bool = false;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

// --- Experts ---
pub const DEFAULT_EXPERT_WEIGHT: f64 = 1.0;
pub const DEFAULT_MAX_SUPPORT: f64 = 0.9;

// Vibration velocity in mm/s (ISO 10816 class II zone boundaries).
pub const DEFAULT_VIBRATION_RMS_NORMAL_MAX: f64 = 2.8;
pub const DEFAULT_VIBRATION_RMS_ALARM: f64 = 7.1;
pub const DEFAULT_VIBRATION_RMS_MAX_VALID: f64 = 100.0;
pub const DEFAULT_VIBRATION_KURTOSIS_NORMAL_MAX: f64 = 3.5;
pub const DEFAULT_VIBRATION_KURTOSIS_BEARING: f64 = 6.0;
pub const DEFAULT_VIBRATION_CREST_BEARING: f64 = 5.0;
pub const DEFAULT_VIBRATION_1X_DOMINANT: f64 = 0.6;
pub const DEFAULT_VIBRATION_2X_DOMINANT: f64 = 0.4;

// Temperature in °C, rate in °C/min.
pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_TEMPERATURE_RISE_NORMAL_MAX: f64 = 40.0;
pub const DEFAULT_TEMPERATURE_RISE_OVERHEAT: f64 = 65.0;
pub const DEFAULT_TEMPERATURE_RATE_LUBRICATION: f64 = 2.0;
pub const DEFAULT_TEMPERATURE_MIN_VALID: f64 = -40.0;
pub const DEFAULT_TEMPERATURE_MAX_VALID: f64 = 250.0;

// Motor current: imbalance in %, load as a ratio of rated current, sidebands in dB.
pub const DEFAULT_CURRENT_IMBALANCE_NORMAL_MAX: f64 = 2.0;
pub const DEFAULT_CURRENT_IMBALANCE_FAULT: f64 = 5.0;
pub const DEFAULT_CURRENT_OVERLOAD_RATIO: f64 = 1.15;
pub const DEFAULT_CURRENT_MAX_LOAD_RATIO_VALID: f64 = 10.0;
pub const DEFAULT_CURRENT_SIDEBAND_FAULT_DB: f64 = -45.0;

// --- History ---
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
