//! Static reference data for the dashboard: shelters, area alerts, emergency
//! contacts, FAQ entries, fallback news, and the sample fund ledgers.

use relief_core::ledger::MonetaryRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub icon: String,
    pub distance_km: f64,
}

pub fn validate_shelter(shelter: &Shelter) -> Result<(), String> {
    if shelter.name.trim().is_empty() {
        return Err("name is required".into());
    }
    if !shelter.distance_km.is_finite() || shelter.distance_km < 0.0 {
        return Err(format!("invalid distance '{}'", shelter.distance_km));
    }
    Ok(())
}

/// Known shelters, nearest first.
pub fn nearest_shelters() -> Vec<Shelter> {
    let mut shelters = vec![Shelter {
        id: 1,
        name: "Chiheru Railway Station".into(),
        kind: "government".into(),
        icon: "🚉".into(),
        distance_km: 3.8,
    }];
    shelters.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    shelters
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaAlert {
    pub id: u32,
    pub message: String,
    pub time: String,
    pub is_new: bool,
}

pub fn recent_alerts() -> Vec<AreaAlert> {
    vec![AreaAlert {
        id: 3,
        message: "No risk around your area".into(),
        time: "1 hour ago".into(),
        is_new: false,
    }]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
}

pub const EMERGENCY_CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        service: "Police",
        number: "100",
    },
    EmergencyContact {
        service: "Ambulance",
        number: "102",
    },
    EmergencyContact {
        service: "Fire",
        number: "101",
    },
    EmergencyContact {
        service: "Disaster Helpline",
        number: "1078",
    },
    EmergencyContact {
        service: "NDRF",
        number: "011-24363260",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "How do I report a shelter location update?",
        answer: "You can email us at shelters@suraksha.in with the details of the shelter \
                 location update including name, address, capacity, and contact information.",
    },
    FaqEntry {
        question: "How quickly are website bugs fixed?",
        answer: "We aim to fix urgent issues within 24-48 hours. Critical bugs that affect \
                 emergency services are given highest priority and are addressed immediately.",
    },
    FaqEntry {
        question: "Can I suggest new features?",
        answer: "Yes! Use the Subject dropdown in the contact form and select 'Suggest a New \
                 Feature.' We value community feedback and regularly implement useful suggestions.",
    },
    FaqEntry {
        question: "How accurate is the flood risk indicator?",
        answer: "Our flood risk indicator uses real-time weather data, historical patterns, and \
                 geographic information to provide risk assessments. While highly accurate, \
                 always follow official emergency advisories.",
    },
    FaqEntry {
        question: "How often is shelter information updated?",
        answer: "Shelter information is updated in real-time when changes are reported. We verify \
                 all updates within 20-40 minutes to ensure accuracy during emergency situations.",
    },
];

/// Subjects offered by the contact form.
pub const CONTACT_SUBJECTS: [&str; 6] = [
    "General Inquiry",
    "Technical Support",
    "Shelter Information Update",
    "Report a Bug",
    "Suggest a New Feature",
    "Emergency Services",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub time: String,
    pub url: String,
}

/// Substituted, in this order, whenever the news lookup fails.
pub fn fallback_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "Local authorities prepare for monsoon season".into(),
            time: "2 hours ago".into(),
            url: "#".into(),
        },
        NewsItem {
            id: 2,
            title: "New flood early warning system installed".into(),
            time: "4 hours ago".into(),
            url: "#".into(),
        },
        NewsItem {
            id: 3,
            title: "Emergency services conduct rescue drills".into(),
            time: "6 hours ago".into(),
            url: "#".into(),
        },
        NewsItem {
            id: 4,
            title: "Community volunteers trained in disaster response".into(),
            time: "8 hours ago".into(),
            url: "#".into(),
        },
    ]
}

pub fn sample_donations() -> Vec<MonetaryRecord> {
    vec![
        entry(1, "Akshaya Patra Foundation", 500_000, "Bank Transfer", "2024-09-20"),
        entry(2, "Ministry of Home Affairs", 2_500_000, "Government Grant", "2024-09-18"),
        entry(3, "Smile Foundation", 750_000, "Online", "2024-09-15"),
        entry(4, "National Disaster Response Fund", 1_000_000, "Government Grant", "2024-09-12"),
        entry(5, "CRY - Child Rights and You", 300_000, "Bank Transfer", "2024-09-10"),
        entry(6, "Helpage India", 450_000, "Online", "2024-09-08"),
    ]
}

pub fn sample_allocations() -> Vec<MonetaryRecord> {
    vec![
        entry(1, "Kerala", 800_000, "Flood Relief", "2024-09-19"),
        entry(2, "Uttarakhand", 600_000, "Medical Aid", "2024-09-17"),
        entry(3, "Assam", 450_000, "Emergency Shelter", "2024-09-14"),
        entry(4, "Bihar", 350_000, "Food Distribution", "2024-09-12"),
        entry(5, "Odisha", 500_000, "Medical Aid", "2024-09-10"),
        entry(6, "West Bengal", 700_000, "Rehabilitation", "2024-09-08"),
    ]
}

fn entry(id: u32, label: &str, amount: u64, category: &str, date: &str) -> MonetaryRecord {
    MonetaryRecord {
        id,
        label: label.into(),
        amount,
        category: category.into(),
        date: date.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_core::ledger::{self, ALLOCATION_CATEGORIES};

    #[test]
    fn validates_shelters() {
        for shelter in nearest_shelters() {
            assert!(validate_shelter(&shelter).is_ok());
        }
        let bad = Shelter {
            id: 9,
            name: "  ".into(),
            kind: "government".into(),
            icon: "🏠".into(),
            distance_km: 1.0,
        };
        assert!(validate_shelter(&bad).is_err());
    }

    #[test]
    fn shelters_are_nearest_first() {
        let shelters = nearest_shelters();
        for pair in shelters.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn fallback_news_has_four_items_in_fixed_order() {
        let news = fallback_news();
        assert_eq!(news.len(), 4);
        assert_eq!(news[0].title, "Local authorities prepare for monsoon season");
        assert_eq!(news[3].title, "Community volunteers trained in disaster response");
    }

    #[test]
    fn sample_ledgers_match_published_totals() {
        assert_eq!(ledger::sum_amounts(&sample_donations()), 5_500_000);
        assert_eq!(ledger::sum_amounts(&sample_allocations()), 3_400_000);
        assert_eq!(ledger::remaining(5_500_000, 3_400_000), 2_100_000);
    }

    #[test]
    fn every_sample_allocation_purpose_is_charted() {
        let slices = ledger::to_chart_breakdown(&sample_allocations(), &ALLOCATION_CATEGORIES);
        let charted: u64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(charted, ledger::sum_amounts(&sample_allocations()));
    }
}
