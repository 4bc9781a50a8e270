const MILES_PER_KM: f64 = 0.621_371;

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Renders a kilometre distance as a one-decimal mile string, e.g. `"5.2 mi"`.
pub fn format_distance(km: f64) -> String {
    format!("{:.1} mi", km_to_miles(km))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_km_to_miles() {
        assert!((km_to_miles(1.0) - 0.621_371).abs() < 1e-9);
        assert_eq!(km_to_miles(0.0), 0.0);
    }

    #[test]
    fn formats_with_one_decimal() {
        assert_eq!(format_distance(8.368_589), "5.2 mi");
        assert_eq!(format_distance(0.0), "0.0 mi");
    }
}
