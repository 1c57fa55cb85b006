//! Fixed-size evaluation between the two contestants of a match.

use tracing::info;

use crate::core::Result;

use super::match_play::Match;

/// Matches in a standard benchmark.
pub const BENCHMARK_MATCHES: usize = 100;

/// Play `matches` matches and return wins per contestant.
pub fn benchmark(arena: &mut Match, matches: usize) -> Result<[u32; 2]> {
    let wins = arena.play_k_matches(matches)?;
    let [first, second] = arena.contestants();
    info!(
        matches,
        first = first.name(),
        first_wins = wins[0],
        second = second.name(),
        second_wins = wins[1],
        "benchmark"
    );
    Ok(wins)
}
