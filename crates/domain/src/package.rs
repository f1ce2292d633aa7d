use log::debug;

use crate::{Running, SportsWalking, Swimming, Workout};

type Constructor = fn(&[f64]) -> Result<Box<dyn Workout>, PackageError>;

/// Registered workout types, keyed by sensor package code.
///
/// New workout types are added by registering a code and constructor pair
/// here.
static DISPATCH: [(&str, Constructor); 3] = [
    ("SWM", construct::<Swimming>),
    ("RUN", construct::<Running>),
    ("WLK", construct::<SportsWalking>),
];

fn construct<W>(data: &[f64]) -> Result<Box<dyn Workout>, PackageError>
where
    W: Workout + for<'a> TryFrom<&'a [f64], Error = PackageError> + 'static,
{
    Ok(Box::new(W::try_from(data)?))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PackageError {
    #[error("unknown workout code `{0}`")]
    UnknownCode(String),
    #[error("{workout} takes {expected} sensor values ({got} given)")]
    WrongArity {
        workout: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Builds the workout matching a sensor package.
///
/// The sensor values are positional: action count, duration in hours and
/// weight in kg, followed by the variant-specific parameters. The number of
/// values is checked by the variant constructor, not here.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, PackageError> {
    let (_, constructor) = DISPATCH
        .iter()
        .find(|(code, _)| *code == workout_type)
        .ok_or_else(|| PackageError::UnknownCode(workout_type.to_string()))?;
    let workout = constructor(data)?;
    debug!("dispatched package {workout_type} to {}", workout.label());
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], "Swimming")]
    #[case("RUN", &[15_000.0, 1.0, 75.0], "Running")]
    #[case("WLK", &[9_000.0, 1.0, 75.0, 180.0], "SportsWalking")]
    fn test_read_package(#[case] workout_type: &str, #[case] data: &[f64], #[case] label: &str) {
        let workout = read_package(workout_type, data).unwrap();
        assert_eq!(workout.label(), label);
        assert_eq!(workout.session().duration_h, 1.0);
    }

    #[rstest]
    #[case("XYZ")]
    #[case("")]
    #[case("swm")]
    fn test_read_package_unknown_code(#[case] workout_type: &str) {
        assert_eq!(
            read_package(workout_type, &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap_err(),
            PackageError::UnknownCode(workout_type.to_string())
        );
    }

    #[test]
    fn test_read_package_wrong_arity() {
        assert_eq!(
            read_package("SWM", &[720.0]).unwrap_err(),
            PackageError::WrongArity {
                workout: "Swimming",
                expected: 5,
                got: 1,
            }
        );
    }
}
