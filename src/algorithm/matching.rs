//! Mutual nearest-neighbor matching of border descriptors
//!
//! Borders are bucketed by vector length (tiles of different sizes cannot be
//! adjacent) and matched within each bucket by Euclidean distance. A link is
//! only kept when it is mutual, survives collision resolution, and falls
//! strictly below the distance threshold.

use std::collections::BTreeMap;

use crate::math::distance::squared_euclidean;
use crate::spatial::BorderDescriptor;

/// Nearest candidate for one bucket member: local index and squared distance
type Nearest = Option<(usize, f64)>;

/// Match border descriptors into adjacency pairs
///
/// Returns a vector parallel to `descriptors` where entry `i` holds the
/// global index of the border matched to descriptor `i`, or `None`. Matches
/// are symmetric at the pair level: when `i` maps to `j`, `j` maps to `i`.
///
/// `distance_threshold` is the maximum Euclidean distance (exclusive) for a
/// valid adjacency; it is scale dependent and must be tuned to the pixel
/// encoding (see [`crate::io::configuration::DEFAULT_MATCH_DISTANCE_THRESHOLD`]).
pub fn match_borders(
    descriptors: &[BorderDescriptor],
    distance_threshold: f64,
) -> Vec<Option<usize>> {
    let mut matches = vec![None; descriptors.len()];
    let threshold_squared = distance_threshold * distance_threshold;

    // Bucket by border length; BTreeMap keeps bucket order deterministic.
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (index, descriptor) in descriptors.iter().enumerate() {
        buckets.entry(descriptor.len()).or_default().push(index);
    }

    for bucket in buckets.values() {
        if bucket.len() < 2 {
            continue;
        }

        let nearest = nearest_candidates(descriptors, bucket);
        let local_matches = resolve_collisions(&nearest, threshold_squared);

        for (local, matched) in local_matches.iter().enumerate() {
            if let (Some(&global), Some(matched_local)) = (bucket.get(local), matched) {
                if let Some(&matched_global) = bucket.get(*matched_local) {
                    if let Some(slot) = matches.get_mut(global) {
                        *slot = Some(matched_global);
                    }
                }
            }
        }
    }

    matches
}

/// Find each bucket member's nearest candidate among the others
///
/// Borders of the same tile are never adjacency candidates, so a tile cannot
/// be matched to itself even when two of its borders are identical. Ties
/// resolve to the lowest local index.
fn nearest_candidates(descriptors: &[BorderDescriptor], bucket: &[usize]) -> Vec<Nearest> {
    bucket
        .iter()
        .map(|&global_a| {
            let Some(border_a) = descriptors.get(global_a) else {
                return None;
            };

            let mut best: Nearest = None;
            for (local_b, &global_b) in bucket.iter().enumerate() {
                let Some(border_b) = descriptors.get(global_b) else {
                    continue;
                };
                if border_b.tile == border_a.tile {
                    continue;
                }

                let distance = squared_euclidean(&border_a.pixels, &border_b.pixels);
                if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                    best = Some((local_b, distance));
                }
            }
            best
        })
        .collect()
}

/// Resolve many-to-one nominations and enforce mutuality
///
/// When several borders nominate the same target, only the closest claimant
/// survives. The link is kept when the target's own nearest candidate is
/// that winning claimant and the distance is below the threshold; both ends
/// of the pair are then recorded.
fn resolve_collisions(nearest: &[Nearest], threshold_squared: f64) -> Vec<Option<usize>> {
    let mut local_matches: Vec<Option<usize>> = vec![None; nearest.len()];

    let mut targets: Vec<usize> = nearest.iter().filter_map(|n| n.map(|(j, _)| j)).collect();
    targets.sort_unstable();
    targets.dedup();

    for target in targets {
        // Closest claimant nominating this target; lowest index wins ties.
        let mut winner: Nearest = None;
        for (claimant, candidate) in nearest.iter().enumerate() {
            if let Some((nominated, distance)) = candidate {
                if *nominated == target
                    && winner.is_none_or(|(_, best_distance)| *distance < best_distance)
                {
                    winner = Some((claimant, *distance));
                }
            }
        }

        let Some((winner_index, winner_distance)) = winner else {
            continue;
        };

        let mutual = nearest
            .get(target)
            .copied()
            .flatten()
            .is_some_and(|(target_nearest, _)| target_nearest == winner_index);

        if mutual && winner_distance < threshold_squared {
            if let Some(slot) = local_matches.get_mut(winner_index) {
                *slot = Some(target);
            }
            if let Some(slot) = local_matches.get_mut(target) {
                *slot = Some(winner_index);
            }
        }
    }

    local_matches
}
