//! Approximate matching over asset symbol and name.
//!
//! A key scores `errors / pattern_len + start / distance`, where `errors` is
//! the edit distance of the best alignment of the query inside the key and
//! `start` is where that alignment begins. Lower is better; an exact match of
//! the whole key scores 0. An asset takes the best score of its keys.

use std::cmp::Ordering;

use crate::config::TABLE;
use crate::domain::Asset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the asset in the snapshot
    pub index: usize,
    pub score: f64,
}

/// Lowercased search keys for every asset of one snapshot.
#[derive(Debug, Clone, Default)]
pub struct FuzzyIndex {
    keys: Vec<[Vec<char>; 2]>,
}

impl FuzzyIndex {
    pub fn new(assets: &[Asset]) -> Self {
        let keys = assets
            .iter()
            .map(|a| [lower_chars(&a.symbol), lower_chars(&a.name)])
            .collect();
        Self { keys }
    }

    /// Hits ordered best first (ties keep snapshot order).
    /// A blank query returns nothing; callers treat it as "no filter".
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let cfg = &TABLE.search;
        let pattern: Vec<char> = lower_chars(query.trim())
            .into_iter()
            .take(cfg.max_pattern_len)
            .collect();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(index, keys)| {
                let score = keys
                    .iter()
                    .map(|k| key_score(&pattern, k, cfg.distance))
                    .fold(f64::INFINITY, f64::min);
                (score <= cfg.threshold).then_some(SearchHit { index, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        hits
    }
}

fn lower_chars(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

/// Best score of `pattern` aligned anywhere inside `text`.
fn key_score(pattern: &[char], text: &[char], distance: f64) -> f64 {
    if pattern == text {
        return 0.0;
    }
    let m = pattern.len();

    // Column j of the alignment table: cost[i] = fewest edits turning
    // pattern[..i] into a substring of text ending at j; start[i] = where
    // that substring begins.
    let mut cost: Vec<usize> = (0..=m).collect();
    let mut start = vec![0usize; m + 1];
    let mut next_cost = vec![0usize; m + 1];
    let mut next_start = vec![0usize; m + 1];

    let mut best = score(cost[m], m, start[m], distance);

    for (j, &tc) in text.iter().enumerate() {
        next_cost[0] = 0;
        next_start[0] = j + 1;
        for i in 1..=m {
            let diag = cost[i - 1] + usize::from(pattern[i - 1] != tc);
            let skip_text = cost[i] + 1;
            let skip_pattern = next_cost[i - 1] + 1;

            let (c, s) = if diag <= skip_text && diag <= skip_pattern {
                (diag, start[i - 1])
            } else if skip_text <= skip_pattern {
                (skip_text, start[i])
            } else {
                (skip_pattern, next_start[i - 1])
            };
            next_cost[i] = c;
            next_start[i] = s;
        }
        std::mem::swap(&mut cost, &mut next_cost);
        std::mem::swap(&mut start, &mut next_start);

        best = best.min(score(cost[m], m, start[m], distance));
    }
    best
}

#[inline]
fn score(errors: usize, pattern_len: usize, start: usize, distance: f64) -> f64 {
    errors as f64 / pattern_len as f64 + start as f64 / distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(symbol: &str, name: &str) -> Asset {
        Asset {
            rank: 0,
            symbol: symbol.into(),
            name: name.into(),
            price_usd: 0.0,
            price_vnd: 0.0,
            percent_change_1h: 0.0,
            percent_change_24h: 0.0,
            percent_change_7d: 0.0,
            market_cap_usd: 0.0,
            volume_24h_usd: 0.0,
            circulating_supply: 0.0,
            total_supply: None,
            sparkline: vec![],
            ohlc: vec![],
            signals: vec![],
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn index() -> FuzzyIndex {
        FuzzyIndex::new(&[
            asset("BTC", "Bitcoin"),
            asset("ETH", "Ethereum"),
            asset("USDT", "Tether"),
            asset("SOL", "Solana"),
            asset("XRP", "XRP"),
        ])
    }

    #[test]
    fn exact_key_scores_zero() {
        assert_eq!(key_score(&chars("btc"), &chars("btc"), 100.0), 0.0);
        assert_eq!(key_score(&chars("bit"), &chars("bitcoin"), 100.0), 0.0);
    }

    #[test]
    fn later_matches_pay_for_distance() {
        let s = key_score(&chars("eth"), &chars("tether"), 100.0);
        assert!((s - 0.01).abs() < 1e-9, "score was {}", s);
    }

    #[test]
    fn typo_costs_one_error() {
        let s = key_score(&chars("bitcon"), &chars("bitcoin"), 100.0);
        assert!((s - 1.0 / 6.0).abs() < 1e-9, "score was {}", s);
    }

    #[test]
    fn search_is_case_insensitive_and_ranked() {
        let hits = index().search("ETH");
        let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
        // ETH symbol (exact) before Tether (drifted match)
        assert_eq!(order, vec![1, 2]);
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn nonsense_matches_nothing() {
        assert!(index().search("qqqq").is_empty());
    }

    #[test]
    fn blank_query_returns_no_hits() {
        assert!(index().search("   ").is_empty());
    }

    #[test]
    fn transposed_letters_still_match() {
        let hits = index().search("tehter");
        assert_eq!(hits[0].index, 2);
        assert!(hits[0].score <= TABLE.search.threshold);
    }
}
