/// Reducer: turns the host's raw items into the ordered, coloured list of
/// segments the layout engine sizes.
///
/// Steps, in order:
/// 1. drop items whose count is not a positive finite number;
/// 2. stable sort by count, largest first;
/// 3. keep the first `max_visible_items` as direct segments;
/// 4. fold the rest into one trailing "Other" segment when their sum is positive;
/// 5. resolve colours with a palette cursor that only advances when the
///    palette is actually used.
use crate::fallback::FallbackColors;
use crate::model::{BarItem, Color, DisplaySegment, SegmentKind, OTHER_LABEL};

/// Reduce `items` to display segments. Never fails; bad input only shrinks
/// the output.
pub fn reduce<F: FallbackColors + ?Sized>(
    items: &[BarItem],
    max_visible_items: usize,
    palette: &[Color],
    other_color: Color,
    fallback: &mut F,
) -> Vec<DisplaySegment> {
    let mut valid: Vec<&BarItem> = items.iter().filter(|item| item.is_valid()).collect();
    // `sort_by` is stable, so equal counts keep their input order.
    valid.sort_by(|a, b| b.count.total_cmp(&a.count));

    let split = max_visible_items.min(valid.len());
    let (direct, overflow) = valid.split_at(split);
    // Saturates so two huge finite counts never make "Other" infinite.
    let overflow_sum = overflow
        .iter()
        .map(|item| item.count)
        .sum::<f64>()
        .min(f64::MAX);

    let mut segments = Vec::with_capacity(direct.len() + 1);
    let mut cursor = 0usize;

    for item in direct {
        let color = match item.color {
            Some(explicit) => explicit,
            None if !palette.is_empty() => {
                let c = palette[cursor % palette.len()];
                cursor += 1;
                c
            }
            None => fallback.next_color(),
        };
        segments.push(DisplaySegment {
            name: item.name.clone(),
            count: item.count,
            color,
            kind: SegmentKind::Direct,
        });
    }

    if overflow_sum > 0.0 {
        segments.push(DisplaySegment {
            name: OTHER_LABEL.to_string(),
            count: overflow_sum,
            color: other_color,
            kind: SegmentKind::Other,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out a fixed sequence of greys so fallback use is observable.
    struct Counter(u8);

    impl FallbackColors for Counter {
        fn next_color(&mut self) -> Color {
            self.0 += 1;
            Color::rgb8(self.0, self.0, self.0)
        }
    }

    fn names(segments: &[DisplaySegment]) -> Vec<&str> {
        segments.iter().map(|s| s.name.as_str()).collect()
    }

    fn crypto() -> Vec<BarItem> {
        vec![
            BarItem::new("BTC", 45.0),
            BarItem::new("ETH", 35.0),
            BarItem::new("ADA", 12.0),
            BarItem::new("SOL", 8.0),
            BarItem::new("XRP", 6.0),
            BarItem::new("LTC", 2.0),
        ]
    }

    #[test]
    fn groups_tail_into_other() {
        let palette = [Color::BLUE, Color::GREEN];
        let out = reduce(&crypto(), 3, &palette, Color::GRAY, &mut Counter(0));

        assert_eq!(names(&out), ["BTC", "ETH", "ADA", "Other"]);
        assert_eq!(out[3].count, 16.0);
        assert_eq!(out[3].kind, SegmentKind::Other);
        assert_eq!(out[3].color, Color::GRAY);
    }

    #[test]
    fn palette_wraps_around() {
        let palette = [Color::BLUE, Color::GREEN];
        let out = reduce(&crypto(), 3, &palette, Color::GRAY, &mut Counter(0));
        assert_eq!(out[0].color, Color::BLUE);
        assert_eq!(out[1].color, Color::GREEN);
        assert_eq!(out[2].color, Color::BLUE);
    }

    #[test]
    fn input_order_does_not_matter_for_distinct_counts() {
        let mut shuffled = crypto();
        shuffled.reverse();
        let out = reduce(&shuffled, 6, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert_eq!(names(&out), ["BTC", "ETH", "ADA", "SOL", "XRP", "LTC"]);
    }

    #[test]
    fn no_other_when_everything_fits() {
        let out = reduce(&crypto(), 10, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|s| !s.is_other()));
    }

    #[test]
    fn zero_visible_puts_everything_in_other() {
        let out = reduce(&crypto(), 0, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert_eq!(out.len(), 1);
        assert!(out[0].is_other());
        assert_eq!(out[0].count, 108.0);
    }

    #[test]
    fn invalid_counts_are_dropped_everywhere() {
        let items = vec![
            BarItem::new("a", 5.0),
            BarItem::new("zero", 0.0),
            BarItem::new("neg", -10.0),
            BarItem::new("nan", f64::NAN),
            BarItem::new("b", 1.0),
            BarItem::new("c", 1.0),
        ];
        let out = reduce(&items, 1, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert_eq!(names(&out), ["a", "Other"]);
        assert_eq!(out[1].count, 2.0, "negative counts must not reduce Other");
    }

    #[test]
    fn all_invalid_yields_nothing() {
        let items = vec![BarItem::new("a", 0.0), BarItem::new("b", -1.0)];
        let out = reduce(&items, 3, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert!(out.is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            BarItem::new("first", 3.0),
            BarItem::new("big", 9.0),
            BarItem::new("second", 3.0),
            BarItem::new("third", 3.0),
        ];
        let out = reduce(&items, 4, &[Color::RED], Color::GRAY, &mut Counter(0));
        assert_eq!(names(&out), ["big", "first", "second", "third"]);
    }

    #[test]
    fn explicit_color_does_not_advance_cursor() {
        let items = vec![
            BarItem::new("x", 5.0).with_color(Color::ORANGE),
            BarItem::new("y", 5.0),
        ];
        let palette = [Color::BLUE, Color::GREEN];
        let out = reduce(&items, 3, &palette, Color::GRAY, &mut Counter(0));
        assert_eq!(out[0].color, Color::ORANGE);
        assert_eq!(out[1].color, Color::BLUE, "y takes palette index 0");
    }

    #[test]
    fn empty_palette_uses_fallback_per_segment() {
        let items = vec![
            BarItem::new("a", 3.0),
            BarItem::new("b", 2.0).with_color(Color::RED),
            BarItem::new("c", 1.0),
        ];
        let mut source = Counter(0);
        let out = reduce(&items, 3, &[], Color::GRAY, &mut source);
        assert_eq!(out[0].color, Color::rgb8(1, 1, 1));
        assert_eq!(out[1].color, Color::RED);
        assert_eq!(out[2].color, Color::rgb8(2, 2, 2));
        assert_eq!(source.0, 2, "explicit colour must not consume a fallback");
    }

    #[test]
    fn other_never_uses_palette_or_fallback() {
        let mut source = Counter(0);
        let out = reduce(&crypto(), 2, &[], Color::PURPLE, &mut source);
        assert_eq!(out.last().map(|s| s.color), Some(Color::PURPLE));
        assert_eq!(source.0, 2);
    }

    #[test]
    fn user_item_named_other_is_still_direct() {
        let items = vec![BarItem::new("Other", 4.0), BarItem::new("b", 2.0)];
        let out = reduce(&items, 3, &[Color::BLUE], Color::GRAY, &mut Counter(0));
        assert_eq!(out[0].kind, SegmentKind::Direct);
        assert_eq!(out[0].color, Color::BLUE);
    }

    #[test]
    fn other_sum_saturates_instead_of_overflowing() {
        let items = [BarItem::new("a", f64::MAX), BarItem::new("b", f64::MAX)];
        let segs = reduce(&items, 0, &[Color::BLUE], Color::GRAY, &mut Counter(0));
        assert_eq!(segs.len(), 1);
        assert!(segs[0].is_other());
        assert_eq!(segs[0].count, f64::MAX);
    }
}
