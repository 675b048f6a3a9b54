//! Gesture recognition from a single hand-landmark frame.
//!
//! Maps fingertip vertical positions to one of the four answer symbols via
//! an ordered rule table. Stateless per frame; any temporal smoothing or
//! hold tracking lives in [`crate::debounce`].

use tracing::debug;

use quiz_core::model::{AnswerSymbol, LandmarkSet};

/// Configuration for gesture classification thresholds.
///
/// Thresholds are in frame pixels, so they track the landmark provider's
/// frame dimensions rather than being derived from the skeleton.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Maximum vertical spread (pixels) between adjacent fingertips for a
    /// closed fist.
    pub fist_band_px: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { fist_band_px: 25 }
    }
}

type Predicate = fn(&LandmarkSet, &ClassifierConfig) -> bool;

struct Rule {
    name: &'static str,
    symbol: AnswerSymbol,
    matches: Predicate,
}

/// Evaluated top-to-bottom with early return; the fist check runs first
/// because a closed hand can spuriously satisfy the later rules.
const RULES: [Rule; 4] = [
    Rule {
        name: "fist",
        symbol: AnswerSymbol::D,
        matches: is_fist,
    },
    Rule {
        name: "thumbs-up",
        symbol: AnswerSymbol::A,
        matches: is_thumbs_up,
    },
    Rule {
        name: "two-up",
        symbol: AnswerSymbol::B,
        matches: is_two_up,
    },
    Rule {
        name: "index-only",
        symbol: AnswerSymbol::C,
        matches: is_index_only,
    },
];

/// Index, middle, ring and little fingertips within one vertical band;
/// thumb position is irrelevant.
fn is_fist(hand: &LandmarkSet, config: &ClassifierConfig) -> bool {
    let band = config.fist_band_px;
    (hand.index_tip().y - hand.middle_tip().y).abs() < band
        && (hand.middle_tip().y - hand.ring_tip().y).abs() < band
        && (hand.ring_tip().y - hand.little_tip().y).abs() < band
}

/// Thumb tip strictly above both index and middle tips.
fn is_thumbs_up(hand: &LandmarkSet, _config: &ClassifierConfig) -> bool {
    hand.thumb_tip().y < hand.index_tip().y && hand.thumb_tip().y < hand.middle_tip().y
}

/// Index and middle tips both strictly above the thumb tip.
fn is_two_up(hand: &LandmarkSet, _config: &ClassifierConfig) -> bool {
    hand.index_tip().y < hand.thumb_tip().y && hand.middle_tip().y < hand.thumb_tip().y
}

/// Index tip strictly above both middle and ring tips.
fn is_index_only(hand: &LandmarkSet, _config: &ClassifierConfig) -> bool {
    hand.index_tip().y < hand.middle_tip().y && hand.index_tip().y < hand.ring_tip().y
}

/// Pure landmark-to-symbol classifier.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one frame. `None` in means no hand was detected; `None` out
    /// means no rule matched — both are ordinary outcomes, not errors.
    #[must_use]
    pub fn classify(&self, landmarks: Option<&LandmarkSet>) -> Option<AnswerSymbol> {
        let hand = landmarks?;

        for rule in &RULES {
            if (rule.matches)(hand, &self.config) {
                debug!(rule = rule.name, symbol = %rule.symbol, "gesture matched");
                return Some(rule.symbol);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::landmark_index::{
        INDEX_TIP, LITTLE_TIP, MIDDLE_TIP, RING_TIP, THUMB_TIP,
    };

    /// Build a hand whose five fingertips sit at the given heights; every
    /// other landmark rests low in the frame.
    fn hand(thumb: i32, index: i32, middle: i32, ring: i32, little: i32) -> LandmarkSet {
        let mut points = vec![(0, 400); 21];
        points[THUMB_TIP] = (10, thumb);
        points[INDEX_TIP] = (20, index);
        points[MIDDLE_TIP] = (30, middle);
        points[RING_TIP] = (40, ring);
        points[LITTLE_TIP] = (50, little);
        LandmarkSet::from_points(&points).unwrap()
    }

    fn classify(hand: &LandmarkSet) -> Option<AnswerSymbol> {
        GestureClassifier::default().classify(Some(hand))
    }

    #[test]
    fn no_hand_classifies_as_none() {
        assert_eq!(GestureClassifier::default().classify(None), None);
    }

    #[test]
    fn thumbs_up_is_a() {
        // Thumb well above everything else.
        let hand = hand(40, 200, 210, 220, 230);
        assert_eq!(classify(&hand), Some(AnswerSymbol::A));
    }

    #[test]
    fn two_fingers_up_is_b() {
        let hand = hand(200, 80, 90, 250, 260);
        assert_eq!(classify(&hand), Some(AnswerSymbol::B));
    }

    #[test]
    fn index_only_is_c() {
        // Thumb between index and middle so neither A nor B applies.
        let hand = hand(120, 80, 200, 260, 300);
        assert_eq!(classify(&hand), Some(AnswerSymbol::C));
    }

    #[test]
    fn fist_is_d_even_with_thumb_highest() {
        // Fist precedence: tight fingertip band wins regardless of thumb.
        let hand = hand(10, 100, 102, 98, 101);
        assert_eq!(classify(&hand), Some(AnswerSymbol::D));
    }

    #[test]
    fn band_boundary_is_exclusive() {
        // Adjacent gap of exactly 25 px is not a fist; thumb lowest makes it B.
        let hand = hand(300, 100, 125, 150, 175);
        assert_eq!(classify(&hand), Some(AnswerSymbol::B));
    }

    #[test]
    fn ambiguous_pose_is_none() {
        // Middle finger highest on its own matches no rule.
        let hand = hand(50, 60, 40, 45, 90);
        assert_eq!(classify(&hand), None);
    }

    #[test]
    fn wider_band_config_accepts_looser_fist() {
        let hand = hand(300, 100, 125, 150, 175);
        let loose = GestureClassifier::new(ClassifierConfig { fist_band_px: 30 });
        assert_eq!(loose.classify(Some(&hand)), Some(AnswerSymbol::D));
    }
}
