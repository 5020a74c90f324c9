// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate selection: the three directional strategies and the priority
//! fallback.
//!
//! All three directional strategies share the same skeleton: compute a
//! [`CandidateVector`] for every cached node relative to the current focus,
//! filter by a per-direction eligibility predicate, weight the axis
//! distances, and keep the candidate with the smallest weighted Euclidean
//! length, requiring strict improvement over the best found so far. They
//! differ only in how permissive the predicate is and how the weight is
//! derived:
//!
//! - **Strict**: axis dominance with strict comparisons, fixed ×3 weight on
//!   the secondary axis.
//! - **Balanced**: axis dominance with ties admitted, weight grows with the
//!   candidate's angular deviation from the ideal direction.
//! - **Permissive**: only "on the correct side", unweighted. Intended as a
//!   fallback when the stricter strategies find nothing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use padnav_scene::{NodeState, SceneHost};

use crate::types::{CandidateVector, Direction};
use crate::{geometry, Navigator};

/// Degrees per radian, spelled out because `to_degrees` needs no `std`
/// anyway but the constant keeps the conversion obvious.
const DEG_PER_RAD: f64 = 180.0 / core::f64::consts::PI;

fn candidate_vector(cur: Point, candidate: Point) -> CandidateVector {
    let dx = candidate.x - cur.x;
    let dy = candidate.y - cur.y;
    CandidateVector {
        x: candidate.x,
        y: candidate.y,
        h: dx.abs(),
        v: dy.abs(),
        // Clockwise from the positive y axis: up 0°, right 90°, left -90°.
        angle: dx.atan2(dy) * DEG_PER_RAD,
    }
}

/// Minimal absolute difference between two angles, in degrees.
fn angular_deviation(a: f64, b: f64) -> f64 {
    let mut d = (a - b) % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    if d > 180.0 {
        d = 360.0 - d;
    }
    d
}

#[derive(Copy, Clone)]
enum Strategy {
    Strict,
    Balanced,
    Permissive,
}

impl Strategy {
    fn eligible(self, direction: Direction, vec: &CandidateVector, cur: Point) -> bool {
        match self {
            Self::Strict => match direction {
                Direction::Up => vec.v > vec.h && vec.y > cur.y,
                Direction::Down => vec.v > vec.h && vec.y < cur.y,
                Direction::Left => vec.h > vec.v && vec.x < cur.x,
                Direction::Right => vec.h > vec.v && vec.x > cur.x,
            },
            Self::Balanced => match direction {
                Direction::Up => vec.v >= vec.h && vec.y > cur.y,
                Direction::Down => vec.v >= vec.h && vec.y < cur.y,
                Direction::Left => vec.h >= vec.v && vec.x < cur.x,
                Direction::Right => vec.h >= vec.v && vec.x > cur.x,
            },
            Self::Permissive => match direction {
                Direction::Up => vec.y > cur.y,
                Direction::Down => vec.y < cur.y,
                Direction::Left => vec.x < cur.x,
                Direction::Right => vec.x > cur.x,
            },
        }
    }

    fn score(self, direction: Direction, vec: &CandidateVector) -> f64 {
        let (h, v) = match self {
            Self::Strict => match direction {
                // Fixed penalty on the secondary axis.
                Direction::Up | Direction::Down => (vec.h * 3.0, vec.v),
                Direction::Left | Direction::Right => (vec.h, vec.v * 3.0),
            },
            Self::Balanced => {
                let w = 1.0 + angular_deviation(direction.ideal_angle(), vec.angle) / 15.0;
                (vec.h * w, vec.v * w)
            }
            Self::Permissive => (vec.h, vec.v),
        };
        (h * h + v * v).sqrt()
    }
}

impl<K: Copy + Eq> Navigator<K> {
    /// Strict directional selection: the candidate must dominate on the
    /// requested axis (strict comparisons), and off-axis distance is
    /// penalized threefold.
    ///
    /// Returns the selected node and whether it differs from `current`; with
    /// no eligible candidate, `current` comes back unchanged.
    pub fn find_best_strict<H>(&self, host: &H, current: K, direction: Direction) -> (K, bool)
    where
        H: SceneHost<K>,
    {
        self.find_best(host, current, direction, Strategy::Strict)
    }

    /// Balanced directional selection: axis dominance admits ties, and the
    /// penalty grows with angular deviation from the ideal direction
    /// (`1 + degrees / 15`).
    pub fn find_best_balanced<H>(&self, host: &H, current: K, direction: Direction) -> (K, bool)
    where
        H: SceneHost<K>,
    {
        self.find_best(host, current, direction, Strategy::Balanced)
    }

    /// Permissive directional selection: any candidate on the correct side
    /// qualifies, nearest unweighted distance wins.
    pub fn find_best_permissive<H>(&self, host: &H, current: K, direction: Direction) -> (K, bool)
    where
        H: SceneHost<K>,
    {
        self.find_best(host, current, direction, Strategy::Permissive)
    }

    fn find_best<H>(
        &self,
        host: &H,
        current: K,
        direction: Direction,
        strategy: Strategy,
    ) -> (K, bool)
    where
        H: SceneHost<K>,
    {
        let m = self.metrics();
        let Some(cur) = geometry::center_in_reference_space(host, current, m) else {
            return (current, false);
        };

        let mut best = current;
        let mut best_score = f64::INFINITY;
        for entry in self.cache.nodes() {
            if entry.node == current {
                continue;
            }
            let Some(center) = geometry::center_in_reference_space(host, entry.node, m) else {
                continue;
            };
            let vec = candidate_vector(cur, center);
            if !strategy.eligible(direction, &vec, cur) {
                continue;
            }
            let score = strategy.score(direction, &vec);
            if score < best_score {
                best_score = score;
                best = entry.node;
            }
        }
        (best, best != current)
    }

    /// Deterministic fallback when no directional query applies.
    ///
    /// In order: keep `current` if it is still relevant and drawn; else fall
    /// back to `previous` under the same test; else, without an origin,
    /// return the first cached node that is visible and drawn; else prefer
    /// the first cached node carrying an explicit priority attribute, and
    /// failing that the cached node nearest to `origin` by Manhattan
    /// distance. `None` only when the cache has nothing to offer.
    pub fn pick_arbitrary<H>(
        &self,
        host: &H,
        current: Option<K>,
        previous: Option<K>,
        origin: Option<Point>,
    ) -> Option<K>
    where
        H: SceneHost<K>,
    {
        for node in [current, previous].into_iter().flatten() {
            if self.is_relevant(host, node) && self.is_drawn(host, node, self.cached_clip(node)) {
                return Some(node);
            }
        }

        let Some(origin) = origin else {
            return self
                .cache
                .nodes()
                .iter()
                .find(|e| {
                    host.state(e.node).contains(NodeState::VISIBLE)
                        && self.is_drawn(host, e.node, e.clip_ancestor)
                })
                .map(|e| e.node);
        };

        if let Some(e) = self
            .cache
            .nodes()
            .iter()
            .find(|e| host.attrs(e.node).priority.is_some())
        {
            // An explicit priority wins outright, no distance comparison.
            return Some(e.node);
        }

        let m = self.metrics();
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for entry in self.cache.nodes() {
            let Some(center) = geometry::center_in_reference_space(host, entry.node, m) else {
                continue;
            };
            let dist = (center.x - origin.x).abs() + (center.y - origin.y).abs();
            if dist < best_dist {
                best_dist = dist;
                best = Some(entry.node);
            }
        }
        best
    }

    /// The clip ancestor captured for `node` at scan time, if it is still
    /// cached.
    fn cached_clip(&self, node: K) -> Option<K> {
        self.cache
            .nodes()
            .iter()
            .find(|e| e.node == node)
            .and_then(|e| e.clip_ancestor)
    }
}
