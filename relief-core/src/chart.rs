use crate::ledger::ChartSlice;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Cumulative (start, end) fraction spans per slice, in input order.
/// A zero-total input yields all-empty spans.
pub fn slice_spans(slices: &[ChartSlice]) -> Vec<(f64, f64)> {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return vec![(0.0, 0.0); slices.len()];
    }
    let mut acc = 0u64;
    slices
        .iter()
        .map(|s| {
            let start = acc as f64 / total as f64;
            acc += s.value;
            (start, acc as f64 / total as f64)
        })
        .collect()
}

/// SVG path for a pie slice over a unit-fraction span, twelve o'clock start.
/// A span covering the whole circle is drawn as two half arcs, since an arc
/// whose endpoints coincide renders as nothing.
pub fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    if end - start >= 1.0 {
        let (x0, y0) = point_on(cx, cy, radius, 0.0);
        let (x1, y1) = point_on(cx, cy, radius, 0.5);
        return format!(
            "M {x0:.3} {y0:.3} \
             A {radius:.3} {radius:.3} 0 1 1 {x1:.3} {y1:.3} \
             A {radius:.3} {radius:.3} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }
    let (x0, y0) = point_on(cx, cy, radius, start);
    let (x1, y1) = point_on(cx, cy, radius, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} \
         A {radius:.3} {radius:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

/// "{category} {percent}%" share label, rounded to whole percent.
pub fn share_label(category: &str, value: u64, total: u64) -> String {
    let percent = if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    };
    format!("{category} {percent:.0}%")
}

fn point_on(cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU - FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(category: &str, value: u64) -> ChartSlice {
        ChartSlice {
            category: category.into(),
            value,
            color_token: "#8884d8".into(),
        }
    }

    #[test]
    fn spans_are_cumulative_and_cover_the_circle() {
        let slices = vec![slice("a", 1), slice("b", 1), slice("c", 2)];
        let spans = slice_spans(&slices);
        assert_eq!(spans, vec![(0.0, 0.25), (0.25, 0.5), (0.5, 1.0)]);
    }

    #[test]
    fn zero_valued_slice_has_empty_span() {
        let slices = vec![slice("a", 3), slice("b", 0), slice("c", 1)];
        let spans = slice_spans(&slices);
        assert_eq!(spans[1].0, spans[1].1);
    }

    #[test]
    fn zero_total_yields_all_empty_spans() {
        let slices = vec![slice("a", 0), slice("b", 0)];
        assert_eq!(slice_spans(&slices), vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn majority_slice_uses_large_arc_flag() {
        let path = slice_path(100.0, 100.0, 80.0, 0.0, 0.75);
        assert!(path.contains(" 0 1 1 "));
        let minority = slice_path(100.0, 100.0, 80.0, 0.0, 0.25);
        assert!(minority.contains(" 0 0 1 "));
    }

    #[test]
    fn full_circle_span_still_draws() {
        let path = slice_path(100.0, 100.0, 80.0, 0.0, 1.0);
        // Two arcs, no degenerate zero-length sweep.
        assert_eq!(path.matches('A').count(), 2);
    }

    #[test]
    fn share_labels_round_to_whole_percent() {
        assert_eq!(share_label("Flood Relief", 800_000, 2_400_000), "Flood Relief 33%");
        assert_eq!(share_label("Medical Aid", 0, 2_400_000), "Medical Aid 0%");
        assert_eq!(share_label("Anything", 5, 0), "Anything 0%");
    }
}
