// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-scan occlusion pass: drop cached nodes hidden behind higher layers.

use padnav_scene::SceneHost;

use crate::{geometry, Navigator};

impl<K: Copy + Eq> Navigator<K> {
    /// Remove cached nodes whose centers are covered by a strictly
    /// higher-layer occluding rect.
    ///
    /// For each cached node, rects are scanned from the highest layer down.
    /// Because the rect cache is sorted by descending layer, the walk stops
    /// at the first rect that is not strictly above the node — every later
    /// rect is lower still. Same-layer rects never occlude; a node's own
    /// rect therefore never removes it.
    ///
    /// Runs automatically at the end of [`Navigator::scan`] and
    /// [`Navigator::scan_subtree`].
    pub(crate) fn scrub<H>(&mut self, host: &H)
    where
        H: SceneHost<K>,
    {
        let m = self.metrics();
        let mut i = 0;
        while i < self.cache.nodes().len() {
            let entry = self.cache.nodes()[i];
            let center = geometry::center_in_reference_space(host, entry.node, m);

            let mut occluded = false;
            for rect in self.cache.rects() {
                if !geometry::layer_occluded_by(entry.layer, rect.layer) {
                    break;
                }
                if let Some(bounds) = geometry::reference_frame(host, rect.node, m)
                    && geometry::point_in_rect(center, bounds)
                {
                    occluded = true;
                    break;
                }
            }

            if occluded {
                self.cache.remove_node(i);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;
    use padnav_scene::simple::{NodeRef, SceneNode, SimpleScene};
    use padnav_scene::{Stratum, WidgetKind};

    use crate::ScreenMetrics;

    fn occluder(frame: Rect, stratum: Stratum) -> SceneNode {
        SceneNode {
            frame: Some(frame),
            stratum,
            ..SceneNode::default()
        }
    }

    fn button(frame: Rect, stratum: Stratum) -> SceneNode {
        SceneNode {
            frame: Some(frame),
            kind: WidgetKind::Button,
            stratum,
            ..SceneNode::default()
        }
    }

    fn cached_ids(nav: &Navigator<NodeRef>) -> Vec<NodeRef> {
        nav.cache().nodes().iter().map(|n| n.node).collect()
    }

    #[test]
    fn covered_lower_layer_node_is_scrubbed() {
        let mut scene = SimpleScene::new();
        // All roots, so layers are pure stratum bases:
        // fullscreen 50_000, dialog 40_000, low 10_000, buttons at 20_000.
        let roots = [
            scene.insert(
                None,
                occluder(Rect::new(500.0, 500.0, 700.0, 700.0), Stratum::Fullscreen),
            ),
            scene.insert(
                None,
                occluder(Rect::new(0.0, 0.0, 200.0, 200.0), Stratum::Dialog),
            ),
            scene.insert(
                None,
                occluder(Rect::new(300.0, 300.0, 400.0, 400.0), Stratum::Low),
            ),
        ];
        // Center (100, 100): inside the dialog-layer rect, which is above.
        let covered = scene.insert(
            None,
            button(Rect::new(50.0, 50.0, 150.0, 150.0), Stratum::Medium),
        );
        // Center (350, 350): inside only the low-layer rect, which is below;
        // the rect walk stops before ever comparing against it.
        let kept = scene.insert(
            None,
            button(Rect::new(300.0, 300.0, 400.0, 400.0), Stratum::Medium),
        );

        let mut nav = Navigator::new(ScreenMetrics::new(1000.0, 1000.0, 1.0));
        let mut all = roots.to_vec();
        all.push(covered);
        all.push(kept);
        nav.scan(&scene, &all);

        let ids = cached_ids(&nav);
        assert!(!ids.contains(&covered));
        assert_eq!(ids, [kept]);
    }

    #[test]
    fn same_layer_rects_do_not_occlude() {
        let mut scene = SimpleScene::new();
        // Two overlapping buttons on the same layer; each has a rect entry,
        // but neither removes the other.
        let a = scene.insert(
            None,
            button(Rect::new(0.0, 0.0, 100.0, 100.0), Stratum::Medium),
        );
        let b = scene.insert(
            None,
            button(Rect::new(0.0, 0.0, 100.0, 100.0), Stratum::Medium),
        );

        let mut nav = Navigator::new(ScreenMetrics::new(1000.0, 1000.0, 1.0));
        nav.scan(&scene, &[a, b]);
        assert_eq!(cached_ids(&nav), [a, b]);
    }

    #[test]
    fn node_above_all_containing_rects_is_kept() {
        let mut scene = SimpleScene::new();
        let backdrop = scene.insert(
            None,
            occluder(Rect::new(0.0, 0.0, 1000.0, 1000.0), Stratum::Background),
        );
        let dialog_button = scene.insert(
            None,
            button(Rect::new(100.0, 100.0, 200.0, 200.0), Stratum::Dialog),
        );

        let mut nav = Navigator::new(ScreenMetrics::new(1000.0, 1000.0, 1.0));
        nav.scan(&scene, &[backdrop, dialog_button]);
        assert_eq!(cached_ids(&nav), [dialog_button]);
    }

    #[test]
    fn center_on_a_rect_edge_is_not_occluded() {
        let mut scene = SimpleScene::new();
        // A slider-style container whose own center (50, 50) lands exactly
        // on the corner of its deeper child's frame. Boundary contact must
        // not count as coverage, so both stay cached.
        let slider = scene.insert(
            None,
            SceneNode {
                frame: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
                kind: WidgetKind::Slider,
                clips_children: true,
                ..SceneNode::default()
            },
        );
        let child = scene.insert(
            Some(slider),
            button(Rect::new(50.0, 50.0, 150.0, 150.0), Stratum::Medium),
        );

        let mut nav = Navigator::new(ScreenMetrics::new(1000.0, 1000.0, 1.0));
        nav.scan(&scene, &[slider]);
        assert_eq!(cached_ids(&nav), [slider, child]);
    }

    #[test]
    fn removal_keeps_scanning_the_remaining_nodes() {
        let mut scene = SimpleScene::new();
        let shade = scene.insert(
            None,
            occluder(Rect::new(0.0, 0.0, 500.0, 500.0), Stratum::Tooltip),
        );
        // Three consecutive covered buttons followed by one outside the shade.
        let covered: Vec<NodeRef> = (0..3)
            .map(|i| {
                let y = f64::from(i) * 100.0;
                scene.insert(
                    None,
                    button(Rect::new(0.0, y, 50.0, y + 50.0), Stratum::Medium),
                )
            })
            .collect();
        let outside = scene.insert(
            None,
            button(Rect::new(600.0, 600.0, 700.0, 700.0), Stratum::Medium),
        );

        let mut nav = Navigator::new(ScreenMetrics::new(1000.0, 1000.0, 1.0));
        let mut all = vec![shade];
        all.extend(&covered);
        all.push(outside);
        nav.scan(&scene, &all);

        assert_eq!(cached_ids(&nav), [outside]);
    }
}
