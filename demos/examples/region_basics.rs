// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press, release, and click against a fake host.
//!
//! This example wires a region to a host that merely counts grabs and
//! shows the click acceptance rules: only accepted buttons fire `clicked`,
//! and the context-suppression result follows the configuration.
//!
//! Run:
//! - `cargo run -p bracken_demos --example region_basics`

use std::cell::Cell;
use std::rc::Rc;

use bracken_pointer::{ButtonSet, PointerInput};
use bracken_region::{PointerRegion, RegionHost};
use kurbo::{Point, Rect};

struct CountingHost {
    grabs: usize,
    ungrabs: usize,
}

impl RegionHost for CountingHost {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 100.0, 50.0)
    }
    fn grab_pointer(&mut self) {
        self.grabs += 1;
    }
    fn ungrab_pointer(&mut self) {
        self.ungrabs += 1;
    }
    fn set_cursor(&mut self, token: &'static str) {
        println!("cursor -> {token}");
    }
}

fn main() {
    let mut region = PointerRegion::new(CountingHost {
        grabs: 0,
        ungrabs: 0,
    });
    region.set_size(100.0, 50.0);

    let clicks = Rc::new(Cell::new(0u32));
    let seen = clicks.clone();
    region.on_clicked(move |sample| {
        println!("clicked: {:?} at {:?}", sample.button, sample.pos);
        seen.set(seen.get() + 1);
    });

    let left = PointerInput {
        screen: Point::new(40.0, 30.0),
        local: Point::new(40.0, 30.0),
        button: 0,
        ..PointerInput::default()
    };
    let right = PointerInput {
        button: 2,
        ..left
    };

    // A full primary-button cycle.
    region.press(&left);
    println!("pressed: {}, buttons: {:?}", region.is_pressed(), region.pressed_buttons());
    region.release();
    region.click(&left);

    // The secondary button is not accepted by default: no click, and the
    // host keeps its context menu.
    let suppress = region.click(&right);
    println!("right-click suppresses context default: {suppress}");

    // Accept it and try again.
    region.set_accepted_buttons(ButtonSet::LEFT | ButtonSet::RIGHT);
    let suppress = region.click(&right);
    println!("right-click suppresses context default now: {suppress}");

    assert_eq!(clicks.get(), 2);
    assert_eq!(region.host().grabs, 1);
    assert_eq!(region.host().ungrabs, 1);
}
