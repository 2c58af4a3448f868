use std::f64::consts::PI;

/// Flood risk band. Band edges resolve upward: 30 is Medium, 70 is High.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#10B981",
            RiskLevel::Medium => "#F59E0B",
            RiskLevel::High => "#EF4444",
        }
    }

    pub fn bg_color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#ECFDF5",
            RiskLevel::Medium => "#FFFBEB",
            RiskLevel::High => "#FEF2F2",
        }
    }
}

pub fn classify(percent: u8) -> RiskLevel {
    if percent < 30 {
        RiskLevel::Low
    } else if percent < 70 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Stroke offset that leaves `percent` of the ring drawn.
pub fn dash_offset(percent: u8, radius: f64) -> f64 {
    let full = circumference(radius);
    full - (percent as f64 / 100.0) * full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_band_edges_upward() {
        assert_eq!(classify(0), RiskLevel::Low);
        assert_eq!(classify(29), RiskLevel::Low);
        assert_eq!(classify(30), RiskLevel::Medium);
        assert_eq!(classify(69), RiskLevel::Medium);
        assert_eq!(classify(70), RiskLevel::High);
        assert_eq!(classify(100), RiskLevel::High);
    }

    #[test]
    fn levels_carry_fixed_pairings() {
        assert_eq!(RiskLevel::Low.color(), "#10B981");
        assert_eq!(RiskLevel::Low.bg_color(), "#ECFDF5");
        assert_eq!(RiskLevel::High.label(), "High");
    }

    #[test]
    fn zero_percent_leaves_full_offset() {
        let full = circumference(42.0);
        assert!((dash_offset(0, 42.0) - full).abs() < 1e-9);
    }

    #[test]
    fn full_percent_leaves_no_offset() {
        assert!(dash_offset(100, 42.0).abs() < 1e-9);
    }

    #[test]
    fn offset_scales_linearly() {
        let full = circumference(42.0);
        assert!((dash_offset(25, 42.0) - full * 0.75).abs() < 1e-9);
    }
}
