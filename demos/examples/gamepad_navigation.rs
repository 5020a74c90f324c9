// Copyright 2026 the Padnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional focus movement over a small dialog scene.
//!
//! This example shows the full pipeline end to end:
//! - `padnav_scene::simple::SimpleScene` as the scene host,
//! - `Navigator::scan` collecting candidates and occlusion rects,
//! - the automatic occlusion scrub removing buttons covered by a dialog,
//! - `pick_arbitrary` seeding the initial focus from the screen center,
//! - the strict strategy answering a short D-pad input sequence.
//!
//! Coordinates are y-up: `Direction::Up` moves toward larger y.
//!
//! Run:
//! - `cargo run -p padnav_demos --example gamepad_navigation`

use std::collections::HashMap;

use kurbo::{Point, Rect};
use padnav::{Direction, KeyCode, Navigator, ScreenMetrics};
use padnav_scene::simple::{NodeRef, SceneNode, SimpleScene};
use padnav_scene::{Stratum, WidgetKind};

fn button(frame: Rect, stratum: Stratum) -> SceneNode {
    SceneNode {
        frame: Some(frame),
        kind: WidgetKind::Button,
        stratum,
        ..SceneNode::default()
    }
}

fn pane(frame: Rect, stratum: Stratum) -> SceneNode {
    SceneNode {
        frame: Some(frame),
        kind: WidgetKind::Surface,
        stratum,
        ..SceneNode::default()
    }
}

fn main() {
    // A 640x480 screen: four buttons in the corners, and a dialog pane over
    // the right half whose own buttons replace the two it covers.
    let mut scene = SimpleScene::new();
    let mut labels: HashMap<NodeRef, &str> = HashMap::new();

    let surface = scene.insert(None, pane(Rect::new(0.0, 0.0, 640.0, 480.0), Stratum::Medium));
    for (frame, name) in [
        (Rect::new(40.0, 400.0, 160.0, 440.0), "top-left"),
        (Rect::new(440.0, 400.0, 560.0, 440.0), "top-right"),
        (Rect::new(40.0, 40.0, 160.0, 80.0), "bottom-left"),
        (Rect::new(440.0, 40.0, 560.0, 80.0), "bottom-right"),
    ] {
        let id = scene.insert(Some(surface), button(frame, Stratum::Medium));
        labels.insert(id, name);
    }

    let dialog = scene.insert(None, pane(Rect::new(400.0, 0.0, 640.0, 480.0), Stratum::Dialog));
    for (frame, name) in [
        (Rect::new(440.0, 280.0, 560.0, 320.0), "confirm"),
        (Rect::new(440.0, 160.0, 560.0, 200.0), "cancel"),
    ] {
        let id = scene.insert(Some(dialog), button(frame, Stratum::Dialog));
        labels.insert(id, name);
    }

    let mut nav = Navigator::new(ScreenMetrics::new(640.0, 480.0, 1.0));
    nav.scan(&scene, &[surface, dialog]);

    // The right-hand grid buttons sit under the dialog pane and are gone.
    println!("Cached candidates after scan + scrub:");
    for entry in nav.cache().nodes() {
        println!(
            "  {:<12} layer={}",
            labels.get(&entry.node).copied().unwrap_or("?"),
            entry.layer
        );
    }

    let mut focus = nav
        .pick_arbitrary(&scene, None, None, Some(Point::new(320.0, 240.0)))
        .expect("scene has candidates");
    println!("\nInitial focus: {}", labels[&focus]);

    // Map D-pad key codes to directions and replay a short input sequence.
    let (up, down, left, right) = (KeyCode(103), KeyCode(108), KeyCode(105), KeyCode(106));
    nav.set_direction_key(up, Direction::Up);
    nav.set_direction_key(down, Direction::Down);
    nav.set_direction_key(left, Direction::Left);
    nav.set_direction_key(right, Direction::Right);

    for key in [down, left, up, right, right] {
        let Some(direction) = nav.direction_key(key) else {
            continue;
        };
        let (next, changed) = nav.find_best_strict(&scene, focus, direction);
        println!(
            "{:?}: {} -> {}{}",
            direction,
            labels[&focus],
            labels[&next],
            if changed { "" } else { " (no move)" }
        );
        focus = next;
    }
}
