use crate::{M_IN_KM, PackageError, Session, Workout};

/// Workout: swimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    /// Length of the pool in meters.
    pub pool_length_m: f64,
    /// Number of completed pool laps.
    pub pool_laps: f64,
}

impl Swimming {
    pub(crate) const LABEL: &'static str = "Swimming";

    /// Distance covered by one stroke in meters.
    const STEP_LENGTH: f64 = 1.38;

    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length(&self) -> f64 {
        Self::STEP_LENGTH
    }

    /// Mean speed based on the pool length and lap count instead of the
    /// stroke count.
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.session.duration_h
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.session.weight_kg
    }
}

impl TryFrom<&[f64]> for Swimming {
    type Error = PackageError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match *data {
            [action_count, duration_h, weight_kg, pool_length_m, pool_laps] => Ok(Self {
                session: Session::from_readings(action_count, duration_h, weight_kg),
                pool_length_m,
                pool_laps,
            }),
            _ => Err(PackageError::WrongArity {
                workout: Self::LABEL,
                expected: 5,
                got: data.len(),
            }),
        }
    }
}
