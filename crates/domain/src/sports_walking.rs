use crate::{MIN_IN_H, PackageError, Session, Workout};

/// Workout: race walking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    /// Height of the athlete in cm.
    pub height_cm: f64,
}

impl SportsWalking {
    pub(crate) const LABEL: &'static str = "SportsWalking";

    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_EXPONENT: f64 = 2.0;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories(&self) -> f64 {
        // The squared speed is floor-divided by the height, not divided
        // exactly.
        let speed_height_ratio = self
            .mean_speed()
            .powf(Self::SPEED_EXPONENT)
            .div_euclid(self.height_cm);
        (Self::WEIGHT_FACTOR * self.session.weight_kg
            + speed_height_ratio * Self::SPEED_HEIGHT_FACTOR * self.session.weight_kg)
            * self.session.duration_h
            * MIN_IN_H
    }
}

impl TryFrom<&[f64]> for SportsWalking {
    type Error = PackageError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        match *data {
            [action_count, duration_h, weight_kg, height_cm] => Ok(Self {
                session: Session::from_readings(action_count, duration_h, weight_kg),
                height_cm,
            }),
            _ => Err(PackageError::WrongArity {
                workout: Self::LABEL,
                expected: 4,
                got: data.len(),
            }),
        }
    }
}
