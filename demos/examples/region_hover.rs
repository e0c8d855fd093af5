// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking and the hover/drag listener split.
//!
//! Hover moves are surface-scoped and gated on `hover_enabled`; drag moves
//! come from the process-wide source and run regardless of it. While a
//! press is held, the hover path goes quiet and the drag path owns
//! position updates.
//!
//! Run:
//! - `cargo run -p bracken_demos --example region_hover`

use std::cell::RefCell;
use std::rc::Rc;

use bracken_pointer::PointerInput;
use bracken_region::{PointerRegion, RegionHost};
use kurbo::{Point, Rect};

// A 100×50 surface rendered 1:1 at the screen origin.
struct FixedHost;

impl RegionHost for FixedHost {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 100.0, 50.0)
    }
    fn grab_pointer(&mut self) {}
    fn ungrab_pointer(&mut self) {}
    fn set_cursor(&mut self, _token: &'static str) {}
}

fn local(x: f64, y: f64) -> PointerInput {
    PointerInput {
        screen: Point::new(x, y),
        local: Point::new(x, y),
        button: 0,
        ..PointerInput::default()
    }
}

fn main() {
    let mut region = PointerRegion::new(FixedHost);
    region.set_size(100.0, 50.0);

    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    region.on_entered(move || sink.borrow_mut().push("entered".into()));
    let sink = events.clone();
    region.on_exited(move || sink.borrow_mut().push("exited".into()));
    let sink = events.clone();
    region.on_position_changed(move |s| sink.borrow_mut().push(format!("moved to {:?}", s.pos)));

    // Hover tracking is off by default: enter/leave still fire, moves don't.
    region.hover_enter();
    region.hover_move(&local(10.0, 10.0));
    region.hover_leave();

    region.set_hover_enabled(true);
    region.hover_enter();
    region.hover_move(&local(20.0, 10.0));

    // A press hands position tracking to the process-wide source.
    region.press(&local(20.0, 10.0));
    region.hover_move(&local(30.0, 10.0)); // suppressed: drag owns updates
    region.drag_move(&local(30.0, 10.0));
    region.release();

    // Back to hover tracking after the drag.
    region.hover_move(&local(40.0, 10.0));

    for line in events.borrow().iter() {
        println!("{line}");
    }

    assert_eq!(
        *events.borrow(),
        vec![
            "entered".to_string(),
            "exited".to_string(),
            "entered".to_string(),
            "moved to (20.0, 10.0)".to_string(),
            "moved to (30.0, 10.0)".to_string(),
            "moved to (40.0, 10.0)".to_string(),
        ]
    );
    assert!(region.contains_mouse());
}
