//! SVG rendering of the nonagon wheel.
//!
//! Nine wedges in display order, counterclockwise from 12 o'clock. Empty
//! sectors keep an epsilon-sized wedge so all nine are present in the
//! markup; the unfilled center ring marks the symbolic zero point.

use std::f64::consts::PI;

use crate::core::projection::segments_by_order;
use crate::domain::model::{
    SectorCounts, ANGLE_NOTE, EXTERNAL_STRUGGLE_NOTE, INTERNAL_STRUGGLE_NOTE,
};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 480;
const CENTER_X: f64 = 240.0;
const CENTER_Y: f64 = 230.0;
const RADIUS: f64 = 150.0;
const CENTER_RING_RATIO: f64 = 0.18;
const EPSILON_WEDGE: f64 = 1e-4;

const WEDGE_FILLS: [&str; 9] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f",
];

fn polar(angle: f64, radius: f64) -> (f64, f64) {
    // Screen y grows downward, so a growing math angle walks counterclockwise.
    (
        CENTER_X + radius * angle.cos(),
        CENTER_Y - radius * angle.sin(),
    )
}

fn svg_header() -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>\n",
        w = WIDTH,
        h = HEIGHT
    )
}

/// Placeholder document shown when no sector has a count.
pub fn render_placeholder() -> String {
    let mut svg = svg_header();
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"{y1}\" text-anchor=\"middle\" font-size=\"16\" font-family=\"sans-serif\">No core list yet.</text>\n\
         <text x=\"{x}\" y=\"{y2}\" text-anchor=\"middle\" font-size=\"14\" font-family=\"sans-serif\">Enter digits like: 1,7,1,7,7,5,5,2</text>\n",
        x = CENTER_X,
        y1 = CENTER_Y - 10.0,
        y2 = CENTER_Y + 14.0,
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Render the nonagon wheel for the given counts.
///
/// All-zero counts yield the placeholder document instead of a chart; the
/// caller does not need to branch itself.
pub fn render_chart(counts: &SectorCounts, show_angle_note: bool) -> String {
    if counts.is_empty() {
        return render_placeholder();
    }

    let segments = segments_by_order(counts);
    let sizes: Vec<f64> = segments
        .iter()
        .map(|(_, count)| {
            if *count > 0 {
                f64::from(*count)
            } else {
                EPSILON_WEDGE
            }
        })
        .collect();
    let total: f64 = sizes.iter().sum();

    let mut svg = svg_header();

    // Wedges, counterclockwise starting at 12 o'clock.
    let mut angle = PI / 2.0;
    for (i, ((sector, count), size)) in segments.iter().zip(&sizes).enumerate() {
        let fraction = size / total;
        let sweep = fraction * 2.0 * PI;
        let end = angle + sweep;

        let (x1, y1) = polar(angle, RADIUS);
        let (x2, y2) = polar(end, RADIUS);
        let large_arc = if fraction > 0.5 { 1 } else { 0 };

        svg.push_str(&format!(
            "<path d=\"M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 0 {x2:.2} {y2:.2} Z\" \
             fill=\"{fill}\" stroke=\"white\" stroke-width=\"1\"/>\n",
            cx = CENTER_X,
            cy = CENTER_Y,
            r = RADIUS,
            large = large_arc,
            fill = WEDGE_FILLS[i],
        ));

        let mid = angle + sweep / 2.0;
        let (lx, ly) = polar(mid, RADIUS * 1.15);
        svg.push_str(&format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" text-anchor=\"middle\" font-size=\"14\" font-family=\"sans-serif\">{sector}</text>\n",
            sector = sector.number(),
        ));

        if *count > 0 {
            let (tx, ty) = polar(mid, RADIUS * 0.6);
            svg.push_str(&format!(
                "<text x=\"{tx:.2}\" y=\"{ty:.2}\" text-anchor=\"middle\" font-size=\"12\" font-family=\"sans-serif\" fill=\"white\">{count}</text>\n",
            ));
        }

        angle = end;
    }

    // Center ring: 0 / The Fool.
    svg.push_str(&format!(
        "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/>\n",
        cx = CENTER_X,
        cy = CENTER_Y,
        r = RADIUS * CENTER_RING_RATIO,
    ));

    // Struggle annotations, bottom right.
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"{y1}\" text-anchor=\"end\" font-size=\"11\" font-family=\"sans-serif\">{external}</text>\n\
         <text x=\"{x}\" y=\"{y2}\" text-anchor=\"end\" font-size=\"11\" font-family=\"sans-serif\">{internal}</text>\n",
        x = WIDTH - 12,
        y1 = HEIGHT - 34,
        y2 = HEIGHT - 18,
        external = EXTERNAL_STRUGGLE_NOTE,
        internal = INTERNAL_STRUGGLE_NOTE,
    ));

    if show_angle_note {
        svg.push_str(&format!(
            "<text x=\"12\" y=\"24\" font-size=\"11\" font-family=\"sans-serif\">{ANGLE_NOTE}</text>\n",
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frequency::parse_core_list;

    #[test]
    fn test_empty_counts_render_placeholder() {
        let svg = render_chart(&SectorCounts::new(), true);
        assert!(svg.contains("No core list yet."));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_chart_has_nine_wedges_and_center_ring() {
        let svg = render_chart(&parse_core_list("1,7,1,7,7,5,5,2"), false);
        assert_eq!(svg.matches("<path").count(), 9);
        assert!(svg.contains("fill=\"none\""));
        // every sector number is labeled
        for n in 1..=9 {
            assert!(svg.contains(&format!(">{n}</text>")), "missing label {n}");
        }
    }

    #[test]
    fn test_angle_note_toggle() {
        let counts = parse_core_list("5");
        assert!(render_chart(&counts, true).contains("angle(9,5)"));
        assert!(!render_chart(&counts, false).contains("angle(9,5)"));
    }

    #[test]
    fn test_struggle_annotations_present() {
        let svg = render_chart(&parse_core_list("8,9"), false);
        assert!(svg.contains("External: 8+9"));
        assert!(svg.contains("Internal: 8+7"));
    }
}
