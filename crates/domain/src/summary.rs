use std::fmt;

/// Rendered result of one workout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub workout: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        Summary {
            workout: "Swimming",
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        },
        "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Avg speed: 1.000 km/h; Calories burned: 336.000."
    )]
    #[case(
        Summary {
            workout: "Running",
            duration_h: 0.5,
            distance_km: 9.75,
            mean_speed_kmh: 19.5,
            calories_kcal: 1429.5,
        },
        "Workout type: Running; Duration: 0.500 h; Distance: 9.750 km; \
         Avg speed: 19.500 km/h; Calories burned: 1429.500."
    )]
    fn test_summary_message(#[case] summary: Summary, #[case] expected: &str) {
        assert_eq!(summary.to_string(), expected);
    }
}
