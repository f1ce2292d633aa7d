use crate::{Session, Summary};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters shared by the step-based workout types.
const STEP_LENGTH: f64 = 0.65;

/// Common capability set of all workout types.
///
/// Distance and mean speed have shared default formulas based on the motion
/// unit count. Calorie expenditure has no default and must be supplied by
/// every variant.
pub trait Workout: std::fmt::Debug {
    /// Name of the workout type as shown in the summary.
    fn label(&self) -> &'static str;

    /// Raw sensor readings of the session.
    fn session(&self) -> &Session;

    /// Distance covered by one motion unit in meters.
    fn step_length(&self) -> f64 {
        STEP_LENGTH
    }

    /// Distance covered during the session in km.
    #[must_use]
    fn distance(&self) -> f64 {
        f64::from(self.session().action_count) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the session in km/h.
    ///
    /// Non-finite for a session with a duration of zero.
    #[must_use]
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration_h
    }

    /// Estimated calorie expenditure in kcal.
    #[must_use]
    fn calories(&self) -> f64;

    /// Snapshot of the derived metrics for rendering.
    #[must_use]
    fn summary(&self) -> Summary {
        Summary {
            workout: self.label(),
            duration_h: self.session().duration_h,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories_kcal: self.calories(),
        }
    }
}
