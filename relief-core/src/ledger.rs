use serde::{Deserialize, Serialize};

/// One fund ledger entry. The same shape covers contributions (label is the
/// donor, category is the payment channel) and disbursements (label is the
/// region, category is the purpose). Amounts are minor currency units, so
/// non-negative by type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryRecord {
    pub id: u32,
    pub label: String,
    pub amount: u64,
    pub category: String,
    pub date: String,
}

/// A category admitted to the breakdown chart, with its slice color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    pub color_token: &'static str,
}

/// Disbursement purposes shown in the allocation chart, in display order.
pub const ALLOCATION_CATEGORIES: [CategorySpec; 5] = [
    CategorySpec {
        name: "Flood Relief",
        color_token: "#8884d8",
    },
    CategorySpec {
        name: "Medical Aid",
        color_token: "#82ca9d",
    },
    CategorySpec {
        name: "Emergency Shelter",
        color_token: "#ffc658",
    },
    CategorySpec {
        name: "Food Distribution",
        color_token: "#ff7c7c",
    },
    CategorySpec {
        name: "Rehabilitation",
        color_token: "#8dd1e1",
    },
];

/// Payment channels offered for new contributions.
pub const DONATION_CHANNELS: [&str; 5] = [
    "Bank Transfer",
    "Government Grant",
    "Online",
    "Check",
    "Cash",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub category: String,
    pub value: u64,
    pub color_token: String,
}

pub fn sum_amounts(records: &[MonetaryRecord]) -> u64 {
    records.iter().map(|r| r.amount).sum()
}

/// Exact, case-sensitive category match. An absent category sums to 0.
pub fn sum_by_category(records: &[MonetaryRecord], category: &str) -> u64 {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.amount)
        .sum()
}

/// Per-category subtotals in enumeration order, one slice per enumerated
/// category regardless of input size. Records whose category is outside the
/// enumeration are dropped, so the slices may sum to less than the grand
/// total.
pub fn to_chart_breakdown(
    records: &[MonetaryRecord],
    categories: &[CategorySpec],
) -> Vec<ChartSlice> {
    categories
        .iter()
        .map(|spec| ChartSlice {
            category: spec.name.to_string(),
            value: sum_by_category(records, spec.name),
            color_token: spec.color_token.to_string(),
        })
        .collect()
}

/// Unspent balance. May be negative when disbursements exceed contributions;
/// no clamping.
pub fn remaining(total_in: u64, total_out: u64) -> i64 {
    total_in as i64 - total_out as i64
}

/// Thousands-grouped display form, e.g. 2500000 -> "2,500,000".
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: &str, amount: u64) -> MonetaryRecord {
        MonetaryRecord {
            id,
            label: format!("entry-{id}"),
            amount,
            category: category.into(),
            date: "2024-09-20".into(),
        }
    }

    #[test]
    fn sums_amounts_over_all_records() {
        let records = vec![
            record(1, "Bank Transfer", 500_000),
            record(2, "Government Grant", 2_500_000),
            record(3, "Online", 750_000),
        ];
        assert_eq!(sum_amounts(&records), 3_750_000);
    }

    #[test]
    fn empty_ledger_sums_to_zero() {
        assert_eq!(sum_amounts(&[]), 0);
    }

    #[test]
    fn absent_category_sums_to_zero() {
        let records = vec![record(1, "Medical Aid", 600_000)];
        assert_eq!(sum_by_category(&records, "Flood Relief"), 0);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let records = vec![record(1, "Medical Aid", 600_000)];
        assert_eq!(sum_by_category(&records, "medical aid"), 0);
        assert_eq!(sum_by_category(&records, "Medical Aid"), 600_000);
    }

    #[test]
    fn breakdown_follows_enumeration_order_and_length() {
        let allocations = vec![
            record(1, "Flood Relief", 800_000),
            record(2, "Medical Aid", 600_000),
        ];
        let categories = [
            CategorySpec {
                name: "Flood Relief",
                color_token: "#8884d8",
            },
            CategorySpec {
                name: "Medical Aid",
                color_token: "#82ca9d",
            },
            CategorySpec {
                name: "Emergency Shelter",
                color_token: "#ffc658",
            },
        ];
        let slices = to_chart_breakdown(&allocations, &categories);
        assert_eq!(slices.len(), 3);
        let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![800_000, 600_000, 0]);
        assert_eq!(slices[0].category, "Flood Relief");
        assert_eq!(slices[0].color_token, "#8884d8");
    }

    #[test]
    fn breakdown_silently_drops_unlisted_categories() {
        let allocations = vec![
            record(1, "Flood Relief", 800_000),
            record(2, "Cattle Fodder", 300_000),
        ];
        let slices = to_chart_breakdown(&allocations, &ALLOCATION_CATEGORIES);
        let charted: u64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(charted, 800_000);
        assert!(charted < sum_amounts(&allocations));
    }

    #[test]
    fn remaining_may_go_negative() {
        assert_eq!(remaining(5_500_000, 3_400_000), 2_100_000);
        assert_eq!(remaining(100, 250), -150);
    }

    #[test]
    fn parses_record_store_payload() {
        let payload = r#"[
            {"id": 1, "label": "Akshaya Patra Foundation", "amount": 500000,
             "category": "Bank Transfer", "date": "2024-09-20"},
            {"id": 2, "label": "Ministry of Home Affairs", "amount": 2500000,
             "category": "Government Grant", "date": "2024-09-18"}
        ]"#;
        let records: Vec<MonetaryRecord> = serde_json::from_str(payload).expect("parse");
        assert_eq!(sum_amounts(&records), 3_000_000);
        assert_eq!(records[0].label, "Akshaya Patra Foundation");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2_500_000), "2,500,000");
        assert_eq!(group_thousands(1_000), "1,000");
    }
}
