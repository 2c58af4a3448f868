/// Shown when a position fix is denied, times out, or otherwise fails.
pub const LOCATION_UNAVAILABLE: &str = "Location unavailable";

/// Shown when the runtime exposes no geolocation API at all.
pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation not supported";

/// 4-decimal-place display form of a coordinate pair.
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{lat:.4}, {lng:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_four_decimals() {
        assert_eq!(format_coordinates(12.971598, 77.594566), "12.9716, 77.5946");
        assert_eq!(format_coordinates(-33.9, 151.2), "-33.9000, 151.2000");
    }
}
