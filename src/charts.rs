use crate::models::MonthlyXpBucket;

// Ring geometry: radius-40 circle on a 100x100 viewBox, stroked ring length
// held constant so arc lengths come straight from the ratios.
const RING_LENGTH: f64 = 251.2;
const PASS_COLOR: &str = "#1B1A55";
const FAIL_COLOR: &str = "#535C91";
const NEUTRAL_COLOR: &str = "#d7d9e4";

const CHART_WIDTH: f64 = 500.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_LEFT: f64 = 60.0;
const BAR_COLOR: &str = "#535C91";

/// Draws the audit ratio as a two-segment ring: the pass arc sized by
/// totalUp, the fail arc sized by totalDown and offset so the two compose
/// into one ring. The centered percentage comes from the server-side
/// `audit_ratio`, which is not forced to agree with the arc geometry.
///
/// With no audit traffic at all the ring renders as a neutral full circle
/// with no percentage label.
pub fn render_audit_ring(audit_ratio: f64, total_up: u64, total_down: u64) -> String {
    let total = total_up + total_down;

    let mut svg = String::from(
        r#"<svg id="ratio-ring" viewBox="0 0 100 100" width="220" height="220" role="img">"#,
    );

    if total == 0 {
        svg.push_str("<title>No audit activity yet</title>");
        svg.push_str(&format!(
            r#"<circle cx="50" cy="50" r="40" fill="transparent" stroke="{NEUTRAL_COLOR}" stroke-width="20" stroke-dasharray="{RING_LENGTH} {RING_LENGTH}"/>"#
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let pass_length = total_up as f64 / total as f64 * RING_LENGTH;
    let fail_length = total_down as f64 / total as f64 * RING_LENGTH;
    let done_mb = total_up as f64 / 1_000_000.0;
    let received_mb = total_down as f64 / 1_000_000.0;

    svg.push_str(&format!(
        "<title>Done: {done_mb:.2} MB / Received: {received_mb:.2} MB</title>"
    ));
    svg.push_str(&format!(
        r#"<circle cx="50" cy="50" r="40" fill="transparent" stroke="{PASS_COLOR}" stroke-width="20" stroke-dasharray="{pass_length:.1} {RING_LENGTH}"/>"#
    ));
    svg.push_str(&format!(
        r#"<circle cx="50" cy="50" r="40" fill="transparent" stroke="{FAIL_COLOR}" stroke-width="20" stroke-dasharray="{fail_length:.1} {RING_LENGTH}" stroke-dashoffset="-{pass_length:.1}"/>"#
    ));
    svg.push_str(&format!(
        r##"<text x="50" y="50" text-anchor="middle" dy=".3em" font-size="15" fill="#333">{:.1}%</text>"##,
        audit_ratio * 100.0
    ));

    svg.push_str("</svg>");
    svg
}

/// Draws one bar per bucket over a categorical bottom axis and a linear left
/// axis from zero to the largest bucket. Every call builds the full SVG from
/// scratch, so re-rendering never accumulates old bars.
pub fn render_xp_bar_chart(buckets: &[MonthlyXpBucket]) -> String {
    let mut svg = format!(
        r#"<svg id="xp-chart" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" width="{CHART_WIDTH}" height="{CHART_HEIGHT}" role="img">"#
    );

    if buckets.is_empty() {
        svg.push_str(
            r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">No XP recorded</text>"#,
        );
        svg.push_str("</svg>");
        return svg;
    }

    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;

    // Band scale over the labels, 10% padding inside each slot.
    let step = plot_width / buckets.len() as f64;
    let bar_width = step * 0.9;

    // Linear scale from 0 to the tallest bucket. An all-zero window keeps
    // every bar at height zero instead of dividing by zero.
    let max_xp = buckets.iter().map(|bucket| bucket.xp).max().unwrap_or(0);
    let height_for = |xp: i64| -> f64 {
        if max_xp <= 0 {
            0.0
        } else {
            xp.max(0) as f64 / max_xp as f64 * plot_height
        }
    };

    // Left axis: gridlines and tick labels at quarter intervals.
    let tick_values: Vec<f64> = if max_xp > 0 {
        (0..=4).map(|tick| max_xp as f64 * tick as f64 / 4.0).collect()
    } else {
        vec![0.0]
    };
    for value in tick_values {
        let y = if max_xp > 0 {
            baseline - value / max_xp as f64 * plot_height
        } else {
            baseline
        };
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#,
            MARGIN_LEFT + plot_width
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="end">{value:.0}</text>"#,
            MARGIN_LEFT - 10.0,
            y + 4.0
        ));
    }

    for (index, bucket) in buckets.iter().enumerate() {
        let x = MARGIN_LEFT + index as f64 * step + step * 0.05;
        let height = height_for(bucket.xp);
        let y = baseline - height;

        svg.push_str(&format!(
            r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{BAR_COLOR}"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" dy=".35em" text-anchor="middle" fill="white" font-weight="bold" font-size="10">{}</text>"#,
            x + bar_width / 2.0,
            y + height / 2.0,
            bucket.xp
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT + index as f64 * step + step / 2.0,
            baseline + 18.0,
            bucket.month
        ));
    }

    svg.push_str(&format!(
        r#"<line class="chart-axis" x1="{MARGIN_LEFT}" y1="{baseline}" x2="{:.1}" y2="{baseline}"/>"#,
        MARGIN_LEFT + plot_width
    ));

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(month: &str, xp: i64) -> MonthlyXpBucket {
        MonthlyXpBucket {
            month: month.to_string(),
            xp,
        }
    }

    #[test]
    fn pass_arc_is_three_quarters_of_the_ring() {
        let svg = render_audit_ring(0.75, 3, 1);
        // 0.75 * 251.2
        assert!(svg.contains(r#"stroke-dasharray="188.4 251.2""#));
        assert!(svg.contains(r#"stroke-dashoffset="-188.4""#));
        assert!(svg.contains("75.0%"));
    }

    #[test]
    fn zero_totals_render_a_neutral_ring() {
        let svg = render_audit_ring(0.0, 0, 0);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains('%'));
        assert!(svg.contains(NEUTRAL_COLOR));
        assert!(svg.contains("No audit activity"));
    }

    #[test]
    fn tooltip_converts_byte_totals_to_megabytes() {
        let svg = render_audit_ring(0.5, 1_234_567, 7_650_000);
        assert!(svg.contains("Done: 1.23 MB"));
        assert!(svg.contains("Received: 7.65 MB"));
    }

    #[test]
    fn percentage_label_uses_the_server_ratio() {
        // Label source is auditRatio, not the up/down geometry.
        let svg = render_audit_ring(1.2, 1, 1);
        assert!(svg.contains("120.0%"));
        assert!(svg.contains(r#"stroke-dasharray="125.6 251.2""#));
    }

    #[test]
    fn bar_heights_are_proportional_to_xp() {
        let buckets = vec![
            bucket("Apr", 0),
            bucket("May", 100),
            bucket("Jun", 50),
            bucket("Jul", 0),
            bucket("Aug", 0),
            bucket("Sep", 0),
        ];

        let svg = render_xp_bar_chart(&buckets);
        // Plot area is 250 tall: May fills it, Jun reaches half.
        assert!(svg.contains(r#"height="250.0""#));
        assert!(svg.contains(r#"height="125.0""#));
        assert!(svg.contains(r#"height="0.0""#));
        assert!(svg.contains(">May<"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn all_zero_buckets_render_flat_bars() {
        let buckets: Vec<MonthlyXpBucket> = ["Apr", "May", "Jun", "Jul", "Aug", "Sep"]
            .iter()
            .map(|month| bucket(month, 0))
            .collect();

        let svg = render_xp_bar_chart(&buckets);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains(r#"height="250.0""#));
        assert_eq!(svg.matches(r#"height="0.0""#).count(), 6);
    }

    #[test]
    fn empty_bucket_list_renders_placeholder() {
        let svg = render_xp_bar_chart(&[]);
        assert!(svg.contains("No XP recorded"));
    }

    #[test]
    fn rerender_produces_identical_output() {
        let buckets = vec![bucket("May", 42)];
        assert_eq!(render_xp_bar_chart(&buckets), render_xp_bar_chart(&buckets));
    }
}
