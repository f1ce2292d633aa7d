/// Raw sensor readings shared by all workout types.
///
/// The readings are taken as-is from the tracker. In particular, a session
/// with a duration of zero produces a non-finite mean speed; callers must
/// supply a positive duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Number of discrete motion units (steps or strokes).
    pub action_count: u32,
    /// Duration of the session in hours.
    pub duration_h: f64,
    /// Weight of the athlete in kg.
    pub weight_kg: f64,
}

impl Session {
    /// Builds the base record from positional sensor values.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_readings(action_count: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action_count: action_count as u32,
            duration_h,
            weight_kg,
        }
    }
}
