//! Application-level configuration constants.

// Dot fills
pub const ACTIVE_FILL: &str = "#f4efe6";
pub const INACTIVE_FILL: &str = "#2a2a33";

// Toggle button labels, by phase
pub const LABEL_START: &str = "Start";
pub const LABEL_PAUSE: &str = "Pause";
pub const LABEL_RESUME: &str = "Resume";
pub const LABEL_RESTART: &str = "Restart";
pub const LABEL_RESET: &str = "Reset";

// Accessibility
pub const PROGRESS_LABEL: &str = "Time remaining";

// Keyboard shortcuts on the focused widget
pub const TOGGLE_KEYS: &[&str] = &[" ", "Enter"];
pub const RESET_KEYS: &[&str] = &["r", "R"];
