use crate::{M_IN_KM, MIN_IN_H, PackageError, Session, Workout};

/// Workout: running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    pub(crate) const LABEL: &'static str = "Running";

    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories(&self) -> f64 {
        (Self::SPEED_FACTOR * self.mean_speed() - Self::SPEED_SHIFT) * self.session.weight_kg
            / M_IN_KM
            * (self.session.duration_h * MIN_IN_H)
    }
}

impl TryFrom<&[f64]> for Running {
    type Error = PackageError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match *data {
            [action_count, duration_h, weight_kg] => Ok(Self {
                session: Session::from_readings(action_count, duration_h, weight_kg),
            }),
            _ => Err(PackageError::WrongArity {
                workout: Self::LABEL,
                expected: 3,
                got: data.len(),
            }),
        }
    }
}
