/// Layout engine: places display segments inside the host's bounds.
///
/// Bars fill one horizontal strip at the top of the bounds, separated by
/// `bar_margin`. Each bar's width is its share of the total count times the
/// width left after margins. Labels sit in a band of `label_height` at the
/// bottom, aligned with their bar.
///
/// When aggregation happened, the "Other" bar is capped to the width of the
/// narrowest direct bar so a long tail of tiny items never looks like the
/// biggest contributor.
use crate::config::ChartConfig;
use crate::model::{BarPrimitive, DisplaySegment, LabelPrimitive, Primitive, Rect, Size};

/// Bars narrower than this are not drawn.
pub const MIN_BAR_WIDTH: f32 = 0.5;

/// Smallest scale hosts may apply to label fonts when fitting text.
pub const LABEL_MIN_FONT_SCALE: f32 = 0.5;

/// Each segment's fraction of the total, or `None` when nothing is positive.
///
/// Counts are divided by the largest one before summing, so any finite
/// counts (up to `f64::MAX`) give finite shares.
fn shares(segments: &[DisplaySegment]) -> Option<Vec<f64>> {
    let usable = |c: f64| c.is_finite() && c > 0.0;
    let largest = segments
        .iter()
        .map(|s| s.count)
        .filter(|&c| usable(c))
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return None;
    }

    let scaled: Vec<f64> = segments
        .iter()
        .map(|s| if usable(s.count) { s.count / largest } else { 0.0 })
        .collect();
    let total: f64 = scaled.iter().sum();
    Some(scaled.into_iter().map(|v| v / total).collect())
}

/// Proportional widths for `segments` across `available` pixels, with the
/// "Other" cap applied.
///
/// Returns an empty vector when there is nothing to size.
pub fn bar_widths(
    segments: &[DisplaySegment],
    available: f32,
    max_visible_items: usize,
) -> Vec<f32> {
    if available <= 0.0 {
        return Vec::new();
    }
    let Some(shares) = shares(segments) else {
        return Vec::new();
    };

    let mut widths: Vec<f32> = shares
        .iter()
        .map(|&share| share as f32 * available)
        .collect();

    let aggregated = segments.len() > max_visible_items
        && segments.last().is_some_and(DisplaySegment::is_other);
    if aggregated && max_visible_items > 0 && widths.len() > max_visible_items {
        let last_direct = widths[max_visible_items - 1];
        let other = &mut widths[max_visible_items];
        *other = other.min(last_direct);
    }

    widths
}

/// Lay out `segments` inside `bounds`. Returns an empty list when there is
/// no data or not enough room.
///
/// For each drawn segment the bar comes first, followed by its label when
/// `label_height > 0`.
pub fn layout(segments: &[DisplaySegment], bounds: Size, config: &ChartConfig) -> Vec<Primitive> {
    if segments.is_empty() {
        tracing::trace!("layout skipped: no segments");
        return Vec::new();
    }

    if shares(segments).is_none() {
        tracing::trace!("layout skipped: no segment has a positive count");
        return Vec::new();
    }

    let gaps = segments.len().saturating_sub(1) as f32;
    let available = bounds.width - config.bar_margin * gaps;
    if available <= 0.0 {
        tracing::trace!(
            "layout skipped: {} px of bounds cannot fit {} margins",
            bounds.width,
            gaps
        );
        return Vec::new();
    }

    let widths = bar_widths(segments, available, config.max_visible_items);
    let bar_height = (bounds.height - config.label_height - config.label_top_padding).max(0.0);
    let label_y = bounds.height - config.label_height;
    let last = segments.len() - 1;

    let mut out = Vec::with_capacity(segments.len() * 2);
    let mut x = 0.0_f32;

    for (i, (segment, &width)) in segments.iter().zip(&widths).enumerate() {
        // Skipped bars give up their slot entirely, margin included, so
        // everything after them shifts left. NaN fails this check too.
        if width.is_nan() || width < MIN_BAR_WIDTH {
            continue;
        }

        out.push(Primitive::Bar(BarPrimitive {
            segment_index: i,
            rect: Rect::new(x, 0.0, width, bar_height),
            corner_radius: config.bar_corner_radius,
            color: segment.color,
        }));

        if config.label_height > 0.0 {
            out.push(Primitive::Label(LabelPrimitive {
                rect: Rect::new(x, label_y, width, config.label_height),
                text: segment.name.clone(),
                font: config.label_font,
                color: config.label_color,
                min_font_scale: LABEL_MIN_FONT_SCALE,
            }));
        }

        x += width;
        if i < last {
            x += config.bar_margin;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, SegmentKind};

    fn seg(name: &str, count: f64) -> DisplaySegment {
        DisplaySegment {
            name: name.to_string(),
            count,
            color: Color::BLUE,
            kind: SegmentKind::Direct,
        }
    }

    fn other(count: f64) -> DisplaySegment {
        DisplaySegment {
            name: "Other".to_string(),
            count,
            color: Color::GRAY,
            kind: SegmentKind::Other,
        }
    }

    fn config(margin: f32, max_visible: usize) -> ChartConfig {
        ChartConfig {
            bar_margin: margin,
            max_visible_items: max_visible,
            ..ChartConfig::default()
        }
    }

    fn bars(out: &[Primitive]) -> Vec<&BarPrimitive> {
        out.iter().filter_map(Primitive::as_bar).collect()
    }

    fn labels(out: &[Primitive]) -> Vec<&LabelPrimitive> {
        out.iter().filter_map(Primitive::as_label).collect()
    }

    #[test]
    fn empty_segments_draw_nothing() {
        assert!(layout(&[], Size::new(100.0, 40.0), &config(0.0, 3)).is_empty());
    }

    #[test]
    fn margins_eating_all_width_draw_nothing() {
        let segs = [seg("a", 1.0), seg("b", 1.0), seg("c", 1.0)];
        // Two margins of 10 px leave exactly 0 px.
        assert!(layout(&segs, Size::new(20.0, 40.0), &config(10.0, 3)).is_empty());
        assert!(layout(&segs, Size::new(0.0, 40.0), &config(0.0, 3)).is_empty());
    }

    #[test]
    fn widths_are_proportional_and_fill_available() {
        let segs = [seg("a", 3.0), seg("b", 1.0)];
        let out = layout(&segs, Size::new(104.0, 40.0), &config(4.0, 3));
        let b = bars(&out);
        assert_eq!(b.len(), 2);
        assert!((b[0].rect.width - 75.0).abs() < 1e-4);
        assert!((b[1].rect.width - 25.0).abs() < 1e-4);
        assert_eq!(b[0].rect.x, 0.0);
        assert!((b[1].rect.x - 79.0).abs() < 1e-4, "second bar starts after margin");
    }

    #[test]
    fn bar_and_label_geometry() {
        let segs = [seg("solo", 1.0)];
        let cfg = ChartConfig {
            label_height: 20.0,
            label_top_padding: 2.0,
            bar_corner_radius: 3.0,
            ..config(6.0, 3)
        };
        let out = layout(&segs, Size::new(50.0, 60.0), &cfg);
        assert_eq!(out.len(), 2);

        let bar = out[0].as_bar().unwrap();
        assert_eq!(bar.rect, Rect::new(0.0, 0.0, 50.0, 38.0));
        assert_eq!(bar.corner_radius, 3.0);
        assert_eq!(bar.color, Color::BLUE);

        let label = out[1].as_label().unwrap();
        assert_eq!(label.rect, Rect::new(0.0, 40.0, 50.0, 20.0));
        assert_eq!(label.text, "solo");
        assert_eq!(label.min_font_scale, 0.5);
        assert_eq!(label.color, cfg.label_color);
    }

    #[test]
    fn zero_label_height_emits_bars_only() {
        let segs = [seg("a", 1.0), seg("b", 1.0)];
        let cfg = ChartConfig {
            label_height: 0.0,
            label_top_padding: 0.0,
            ..config(0.0, 3)
        };
        let out = layout(&segs, Size::new(10.0, 10.0), &cfg);
        assert_eq!(bars(&out).len(), 2);
        assert!(labels(&out).is_empty());
        assert_eq!(bars(&out)[0].rect.height, 10.0);
    }

    #[test]
    fn bar_height_never_negative() {
        let out = layout(&[seg("a", 1.0)], Size::new(10.0, 5.0), &config(0.0, 3));
        assert_eq!(bars(&out)[0].rect.height, 0.0);
    }

    #[test]
    fn other_is_capped_to_last_direct() {
        // Other (16) is wider than ADA (12) before capping.
        let segs = [
            seg("BTC", 45.0),
            seg("ETH", 35.0),
            seg("ADA", 12.0),
            other(16.0),
        ];
        let widths = bar_widths(&segs, 108.0, 3);
        assert!((widths[2] - 12.0).abs() < 1e-4);
        assert!((widths[3] - 12.0).abs() < 1e-4);

        let out = layout(&segs, Size::new(108.0 + 3.0 * 6.0, 40.0), &config(6.0, 3));
        let b = bars(&out);
        assert!(b[3].rect.width <= b[2].rect.width);
    }

    #[test]
    fn narrower_other_is_left_alone() {
        let segs = [seg("a", 10.0), other(2.0)];
        let widths = bar_widths(&segs, 120.0, 1);
        assert!((widths[1] - 20.0).abs() < 1e-4);
    }

    #[test]
    fn no_cap_without_aggregation_or_direct_items() {
        // max_visible 0: only Other exists, nothing to cap against.
        let widths = bar_widths(&[other(5.0)], 100.0, 0);
        assert_eq!(widths, vec![100.0]);

        // Everything fits: the last segment is not Other.
        let widths = bar_widths(&[seg("a", 1.0), seg("b", 9.0)], 100.0, 3);
        assert!((widths[1] - 90.0).abs() < 1e-4);
    }

    #[test]
    fn sub_pixel_bars_are_skipped_without_reserving_space() {
        let segs = [seg("big", 1000.0), seg("tiny", 0.1), seg("mid", 500.0)];
        let out = layout(&segs, Size::new(160.0, 40.0), &config(5.0, 3));
        let b = bars(&out);
        assert_eq!(b.len(), 2);
        assert_eq!(labels(&out).len(), 2);

        // available = 150: big = 99.99, mid = 49.99.
        let big = b[0].rect;
        let mid = b[1].rect;
        assert!(
            (mid.x - (big.width + 5.0)).abs() < 1e-3,
            "mid follows big with a single margin"
        );
        assert!(labels(&out).iter().all(|l| l.text != "tiny"));
        assert_eq!(b[1].segment_index, 2, "bars keep their segment position");
    }

    #[test]
    fn primitives_alternate_bar_then_label() {
        let segs = [seg("a", 2.0), seg("b", 1.0)];
        let out = layout(&segs, Size::new(90.0, 40.0), &config(0.0, 3));
        assert!(matches!(out[0], Primitive::Bar(_)));
        assert!(matches!(out[1], Primitive::Label(_)));
        assert!(matches!(out[2], Primitive::Bar(_)));
        assert!(matches!(out[3], Primitive::Label(_)));
    }

    #[test]
    fn huge_finite_counts_share_width_evenly() {
        let segs = [seg("a", f64::MAX), seg("b", f64::MAX)];
        let out = layout(&segs, Size::new(200.0, 40.0), &config(0.0, 3));
        let b = bars(&out);
        assert_eq!(b.len(), 2, "equal huge counts must both draw");
        for bar in &b {
            assert!((bar.rect.width - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn saturated_other_fills_bounds_with_finite_width() {
        let out = layout(&[other(f64::MAX)], Size::new(200.0, 40.0), &config(0.0, 0));
        let b = bars(&out);
        assert_eq!(b.len(), 1);
        assert!(b[0].rect.width.is_finite());
        assert!((b[0].rect.width - 200.0).abs() < 1e-3);
    }

    #[test]
    fn non_finite_segment_counts_never_reach_geometry() {
        let segs = [seg("a", f64::INFINITY), seg("b", f64::NAN), seg("c", 1.0)];
        let out = layout(&segs, Size::new(100.0, 40.0), &config(0.0, 3));
        let b = bars(&out);
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].segment_index, 2);
        assert!((b[0].rect.width - 100.0).abs() < 1e-4);
    }
}
