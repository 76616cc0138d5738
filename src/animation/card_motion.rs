// src/animation/card_motion.rs
//
// Maps the shared scroll progress into per-card position and opacity.
// Each card owns a contiguous segment of [0,1]; inside it the card
// rises by one card height while "active", then keeps rising to exit
// the viewport, fading out just before the next card covers it.

use crate::utilities::Curve;

// fraction of the segment at which the card reaches the stack top
pub const TOP_ANCHOR: f32 = 0.8;
// fraction of the segment at which the card is fully faded
pub const FADE_ANCHOR: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSegment {
    pub start: f32,
    pub end: f32,
}

impl CardSegment {
    pub fn new(index: usize, total: usize) -> Self {
        let size = 1.0 / total.max(1) as f32;
        let start = index as f32 * size;
        Self {
            start,
            end: start + size,
        }
    }

    pub fn size(&self) -> f32 {
        self.end - self.start
    }
}

/// Render-time values derived from the scroll progress. Offset is the
/// spring-smoothed vertical displacement in pixels (negative is up),
/// opacity is the raw curve value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedCardState {
    pub offset_y: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct CardMotion {
    segment: CardSegment,
    offset_curve: Curve,
    opacity_curve: Curve,
    z_index: usize,
}

impl CardMotion {
    pub fn new(index: usize, total: usize, card_height: f32) -> Self {
        let segment = CardSegment::new(index, total);
        let size = segment.size();

        let offset_curve = Curve::new(vec![
            (segment.start, 0.0),
            (segment.start + size * TOP_ANCHOR, -card_height),
            (segment.end, -card_height * 2.0),
        ]);

        let opacity_curve = Curve::new(vec![
            (segment.start, 1.0),
            (segment.start + size * TOP_ANCHOR, 1.0),
            (segment.start + size * FADE_ANCHOR, 0.0),
        ]);

        Self {
            segment,
            offset_curve,
            opacity_curve,
            z_index: total - index,
        }
    }

    /// Unsmoothed vertical offset for a given progress value.
    pub fn raw_offset(&self, progress: f32) -> f32 {
        self.offset_curve.sample(progress.clamp(0.0, 1.0))
    }

    pub fn opacity(&self, progress: f32) -> f32 {
        self.opacity_curve.sample(progress.clamp(0.0, 1.0))
    }

    pub fn segment(&self) -> CardSegment {
        self.segment
    }

    /// Static stacking order: earlier cards render above later ones.
    pub fn z_index(&self) -> usize {
        self.z_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_HEIGHT: f32 = 400.0;

    mod segment_tests {
        use super::*;

        #[test]
        fn test_five_card_partition() {
            let expected = [
                (0.0, 0.2),
                (0.2, 0.4),
                (0.4, 0.6),
                (0.6, 0.8),
                (0.8, 1.0),
            ];
            for (index, (start, end)) in expected.iter().enumerate() {
                let segment = CardSegment::new(index, 5);
                assert!((segment.start - start).abs() < 1e-6);
                assert!((segment.end - end).abs() < 1e-6);
            }
        }

        #[test]
        fn test_segments_are_contiguous() {
            for total in [1, 3, 5, 8] {
                assert!((CardSegment::new(0, total).start - 0.0).abs() < 1e-6);
                assert!((CardSegment::new(total - 1, total).end - 1.0).abs() < 1e-5);
                for index in 1..total {
                    let previous = CardSegment::new(index - 1, total);
                    let current = CardSegment::new(index, total);
                    assert!((previous.end - current.start).abs() < 1e-5);
                }
            }
        }
    }

    mod offset_tests {
        use super::*;

        #[test]
        fn test_offset_stays_in_range() {
            for index in 0..5 {
                let motion = CardMotion::new(index, 5, CARD_HEIGHT);
                for step in 0..=100 {
                    let progress = step as f32 / 100.0;
                    let offset = motion.raw_offset(progress);
                    assert!(offset <= 1e-4, "offset {} at progress {}", offset, progress);
                    assert!(offset >= -2.0 * CARD_HEIGHT - 1e-4);
                }
            }
        }

        #[test]
        fn test_offset_boundary_values() {
            let motion = CardMotion::new(2, 5, CARD_HEIGHT);
            let segment = motion.segment();
            assert!((motion.raw_offset(segment.start) - 0.0).abs() < 1e-3);
            assert!((motion.raw_offset(segment.end) - -2.0 * CARD_HEIGHT).abs() < 1e-2);
        }

        #[test]
        fn test_offset_is_monotone_non_increasing() {
            let motion = CardMotion::new(1, 5, CARD_HEIGHT);
            let mut previous = motion.raw_offset(0.0);
            for step in 1..=200 {
                let progress = step as f32 / 200.0;
                let offset = motion.raw_offset(progress);
                assert!(offset <= previous + 1e-4);
                previous = offset;
            }
        }

        #[test]
        fn test_offset_continuous_at_anchors() {
            let motion = CardMotion::new(0, 5, CARD_HEIGHT);
            let eps = 1e-4;
            for anchor in [0.16, 0.2] {
                let left = motion.raw_offset(anchor - eps);
                let right = motion.raw_offset(anchor + eps);
                assert!((left - right).abs() < 1.0);
            }
        }
    }

    mod opacity_tests {
        use super::*;

        #[test]
        fn test_opacity_holds_then_fades() {
            let motion = CardMotion::new(0, 5, CARD_HEIGHT);
            // held at 1 through 80% of the segment
            assert!((motion.opacity(0.0) - 1.0).abs() < 1e-4);
            assert!((motion.opacity(0.1) - 1.0).abs() < 1e-4);
            assert!((motion.opacity(0.16) - 1.0).abs() < 1e-3);
            // fully faded by 90% and beyond
            assert!(motion.opacity(0.18) < 1e-3);
            assert!(motion.opacity(0.2) < 1e-3);
            assert!(motion.opacity(1.0) < 1e-3);
        }

        #[test]
        fn test_opacity_fade_is_partial_midway() {
            let motion = CardMotion::new(0, 5, CARD_HEIGHT);
            let opacity = motion.opacity(0.17);
            assert!(opacity > 0.0 && opacity < 1.0);
        }
    }

    #[test]
    fn test_stacking_order_is_anti_monotone() {
        let total = 5;
        for i in 0..total {
            for j in (i + 1)..total {
                let upper = CardMotion::new(i, total, CARD_HEIGHT);
                let lower = CardMotion::new(j, total, CARD_HEIGHT);
                assert!(upper.z_index() > lower.z_index());
            }
        }
    }

    #[test]
    fn test_reference_example_first_card() {
        // totalCards=5, index=0, cardHeight=400
        let motion = CardMotion::new(0, 5, CARD_HEIGHT);

        assert!((motion.raw_offset(0.0) - 0.0).abs() < 1e-3);
        assert!((motion.opacity(0.0) - 1.0).abs() < 1e-4);

        // card reaches the stack top at 80% of its segment
        assert!((motion.raw_offset(0.16) - -400.0).abs() < 0.1);
        assert!((motion.opacity(0.16) - 1.0).abs() < 1e-3);

        // at 90%: offset between -400 and -800, opacity gone
        let offset = motion.raw_offset(0.18);
        assert!(offset < -400.0 && offset > -800.0);
        assert!(motion.opacity(0.18) < 1e-3);

        assert!((motion.raw_offset(0.2) - -800.0).abs() < 0.1);
        assert!(motion.opacity(0.2) < 1e-3);
    }

    #[test]
    fn test_progress_outside_unit_range_is_clamped() {
        let motion = CardMotion::new(0, 5, CARD_HEIGHT);
        assert_eq!(motion.raw_offset(-0.5), motion.raw_offset(0.0));
        assert_eq!(motion.raw_offset(1.5), motion.raw_offset(1.0));
        assert_eq!(motion.opacity(1.5), motion.opacity(1.0));
    }
}
