// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag coordinate correction under a scaled surface.
//!
//! The region's 100×50 logical box is rendered at twice its size and offset
//! on screen. A press captures the screen→logical mapping once; every drag
//! move is corrected through it, including moves past the region's bounds,
//! and the mapping stays fixed even if the on-screen box moves mid-drag.
//!
//! Run:
//! - `cargo run -p bracken_demos --example region_drag`

use std::cell::RefCell;
use std::rc::Rc;

use bracken_pointer::PointerInput;
use bracken_region::{PointerRegion, RegionHost};
use kurbo::{Point, Rect};

struct ScaledHost {
    bounds: Rect,
}

impl RegionHost for ScaledHost {
    fn bounding_rect(&self) -> Rect {
        self.bounds
    }
    fn grab_pointer(&mut self) {
        println!("host: attach source-wide move/up listeners");
    }
    fn ungrab_pointer(&mut self) {
        println!("host: detach source-wide move/up listeners");
    }
    fn set_cursor(&mut self, _token: &'static str) {}
}

fn at(screen: Point) -> PointerInput {
    PointerInput {
        screen,
        local: Point::ZERO,
        button: 0,
        ..PointerInput::default()
    }
}

fn main() {
    // Logical 100×50, rendered 2× at offset (10, 20).
    let mut region = PointerRegion::new(ScaledHost {
        bounds: Rect::new(10.0, 20.0, 210.0, 120.0),
    });
    region.set_size(100.0, 50.0);

    let track: Rc<RefCell<Vec<Point>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = track.clone();
    region.on_position_changed(move |sample| sink.borrow_mut().push(sample.pos));

    region.press(&at(Point::new(110.0, 70.0)));
    println!("press lands at logical {:?}", region.position());

    // The on-screen box shifts under the pointer mid-drag; the captured
    // mapping still governs.
    region.host_mut().bounds = Rect::new(500.0, 500.0, 700.0, 600.0);

    region.drag_move(&at(Point::new(210.0, 120.0)));
    region.drag_move(&at(Point::new(410.0, 220.0))); // far outside the box
    region.release();

    println!("tracked: {:?}", track.borrow());

    assert_eq!(region.position(), Point::new(200.0, 100.0));
    assert_eq!(
        *track.borrow(),
        vec![Point::new(100.0, 50.0), Point::new(200.0, 100.0)]
    );
}
