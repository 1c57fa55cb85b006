//! Hand-crafted features for the linear action-value function.
//!
//! A candidate action is scored under five assumptions about hidden cards:
//! the unseen mean, and the mean shifted by +1σ, +2σ, -1σ and -2σ. For each
//! assumption the feature is the lead over the best opponent after the
//! action, `best opponent estimate - hypothetical own score`.

use crate::cards::Card;
use crate::core::GameView;
use crate::players::estimate::{
    best_opponent_estimate, hypothetical_score, unseen_stats, Placement, UnseenStats,
};

pub const FEATURE_COUNT: usize = 5;

/// Standard deviations added to the unseen mean, one per feature.
pub const SIGMA_OFFSETS: [f64; FEATURE_COUNT] = [0.0, 1.0, 2.0, -1.0, -2.0];

pub type Features = [f64; FEATURE_COUNT];

/// Per-decision quantities shared by every candidate action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureContext {
    pub stats: UnseenStats,
    pub best_opponent: f64,
    /// Hidden-card values, one per feature, clamped to the rank range.
    pub substitutes: Features,
}

impl FeatureContext {
    /// Build the context for a decision. `in_hand` is the drawn card during
    /// phase 2.
    #[must_use]
    pub fn new(view: &GameView, in_hand: Option<Card>) -> Self {
        let stats = unseen_stats(view, in_hand);
        let best_opponent = best_opponent_estimate(view, stats.mean);
        let max_rank = view.deck.ranks.saturating_sub(1) as f64;
        let substitutes =
            SIGMA_OFFSETS.map(|k| (stats.mean + k * stats.std_dev).clamp(0.0, max_rank));

        Self {
            stats,
            best_opponent,
            substitutes,
        }
    }

    /// Features of `placement` applied to the hand `raw`.
    #[must_use]
    pub fn features(&self, raw: &[Option<Card>], placement: Placement) -> Features {
        self.substitutes
            .map(|sub| self.best_opponent - hypothetical_score(raw, placement, sub))
    }
}

#[must_use]
pub fn dot(weights: &Features, features: &Features) -> f64 {
    weights.iter().zip(features).map(|(w, f)| w * f).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Hand, Viewpoint};
    use crate::core::DeckSpec;

    fn view(own: &[u8], opp: &[u8], deck_up: &[u8]) -> GameView {
        let own = Hand::new(own.iter().copied().map(Card::new).collect()).unwrap();
        let opp = Hand::new(opp.iter().copied().map(Card::new).collect()).unwrap();
        GameView {
            own: own.view(Viewpoint::Owner),
            opponents: vec![opp.view(Viewpoint::Opponent)],
            deck_up: deck_up.iter().copied().map(Card::new).collect(),
            has_knocked: false,
            deck: DeckSpec::default(),
        }
    }

    #[test]
    fn test_substitutes_are_ordered_and_clamped() {
        let ctx = FeatureContext::new(&view(&[1, 5, 2, 9], &[3, 3, 4, 4], &[7]), None);
        let [mean, plus1, plus2, minus1, minus2] = ctx.substitutes;

        assert!((mean - ctx.stats.mean).abs() < 1e-12);
        assert!(minus2 <= minus1 && minus1 <= mean && mean <= plus1 && plus1 <= plus2);
        assert!(ctx.substitutes.iter().all(|&s| (0.0..=12.0).contains(&s)));
    }

    #[test]
    fn test_fully_known_hand_has_flat_features() {
        let mut v = view(&[1, 5, 2, 9], &[3, 3, 4, 4], &[7]);
        let mut own = Hand::new([1, 5, 2, 9].map(Card::new).to_vec()).unwrap();
        own.swap(1, 0, Card::new(5), false).unwrap();
        own.swap(1, 1, Card::new(9), false).unwrap();
        v.own = own.view(Viewpoint::Owner);
        assert_eq!(v.own.score, 17);

        let ctx = FeatureContext::new(&v, None);
        let features = ctx.features(&v.own.raw_cards, Placement::Keep);

        // Nothing hidden on our side: every scenario gives the same lead
        for f in features {
            assert!((f - (ctx.best_opponent - 17.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_higher_substitute_lowers_lead() {
        let v = view(&[1, 5, 2, 9], &[3, 3, 4, 4], &[7]);
        let ctx = FeatureContext::new(&v, None);
        let f = ctx.features(&v.own.raw_cards, Placement::Keep);

        // f[1] assumes hidden cards one sigma above the mean
        assert!(f[1] <= f[0]);
        assert!(f[3] >= f[0]);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 0.0, 0.0, -1.0], &[3.0, 1.0, 9.0, 9.0, 2.0]), 3.0);
        assert_eq!(dot(&[0.0; FEATURE_COUNT], &[5.0; FEATURE_COUNT]), 0.0);
    }
}
