// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale-normalized spatial predicates.
//!
//! Elements may render at different effective scales; every comparison here
//! first converts coordinates into one shared reference space by scaling with
//! `render_scale(node) / metrics.scale`. Undefined geometry (a node with no
//! frame) propagates as `None` and makes containment and intersection
//! predicates evaluate false rather than erroring.

use kurbo::{Point, Rect};
use padnav_scene::SceneHost;

use crate::types::ScreenMetrics;

/// The node's frame center adjusted by its hit-test insets, in the node's own
/// scale. `None` if the node is not currently laid out.
pub(crate) fn hit_center<K, H>(host: &H, node: K) -> Option<Point>
where
    K: Copy + Eq,
    H: SceneHost<K>,
{
    let frame = host.frame(node)?;
    Some((frame - host.hit_insets(node)).center())
}

/// The hit center converted into reference space.
pub(crate) fn center_in_reference_space<K, H>(
    host: &H,
    node: K,
    metrics: ScreenMetrics,
) -> Option<Point>
where
    K: Copy + Eq,
    H: SceneHost<K>,
{
    let center = hit_center(host, node)?;
    let k = host.render_scale(node) / metrics.scale;
    Some(Point::new(center.x * k, center.y * k))
}

/// The node's raw frame converted into reference space.
pub(crate) fn reference_frame<K, H>(host: &H, node: K, metrics: ScreenMetrics) -> Option<Rect>
where
    K: Copy + Eq,
    H: SceneHost<K>,
{
    let frame = host.frame(node)?;
    let k = host.render_scale(node) / metrics.scale;
    Some(Rect::new(
        frame.x0 * k,
        frame.y0 * k,
        frame.x1 * k,
        frame.y1 * k,
    ))
}

/// Whether the reference-space frames of two nodes overlap with positive
/// area. Shared edges do not count; missing geometry on either side yields
/// false.
pub(crate) fn rects_intersect<K, H>(host: &H, a: K, b: K, metrics: ScreenMetrics) -> bool
where
    K: Copy + Eq,
    H: SceneHost<K>,
{
    let (Some(ra), Some(rb)) = (
        reference_frame(host, a, metrics),
        reference_frame(host, b, metrics),
    ) else {
        return false;
    };
    ra.x0 < rb.x1 && rb.x0 < ra.x1 && ra.y0 < rb.y1 && rb.y0 < ra.y1
}

/// Inclusive scalar range containment.
pub(crate) fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    lo <= v && v <= hi
}

/// Strict point-in-rect containment, consistent with [`rects_intersect`]:
/// contact with the rect's boundary does not count. False when the point is
/// undefined.
pub(crate) fn point_in_rect(p: Option<Point>, r: Rect) -> bool {
    let Some(p) = p else {
        return false;
    };
    r.x0 < p.x && p.x < r.x1 && r.y0 < p.y && p.y < r.y1
}

/// The node's absolute layer: stratum base plus local depth.
pub(crate) fn absolute_layer<K, H>(host: &H, node: K) -> i64
where
    K: Copy + Eq,
    H: SceneHost<K>,
{
    host.stratum(node).base() + host.local_depth(node)
}

/// Whether a rect at `rect_layer` sits strictly above a node at `node_layer`
/// and may therefore occlude it.
///
/// Deliberately asymmetric to the rect cache's descending insertion order
/// (which keeps ties after equal layers): same-layer elements never occlude
/// each other.
pub(crate) fn layer_occluded_by(node_layer: i64, rect_layer: i64) -> bool {
    node_layer < rect_layer
}
