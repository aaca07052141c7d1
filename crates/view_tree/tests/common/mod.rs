//! Shared helpers for view tree integration tests.

use std::cell::Cell;
use std::rc::Rc;

use view_tree::{Handler, Rect};

/// Handler that remembers the last frame it was given by update or draw.
pub struct Recorder {
    frame: Rc<Cell<Rect>>,
    draws: Rc<Cell<usize>>,
}

/// Shared view of what a [`Recorder`] saw.
#[derive(Clone)]
pub struct Recorded {
    frame: Rc<Cell<Rect>>,
    draws: Rc<Cell<usize>>,
}

impl Recorded {
    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    #[allow(dead_code, reason = "not every test binary counts draws")]
    pub fn draws(&self) -> usize {
        self.draws.get()
    }
}

impl Handler for Recorder {
    fn update(&mut self, frame: Rect) {
        self.frame.set(frame);
    }

    fn draw(&mut self, frame: Rect) {
        self.frame.set(frame);
        self.draws.set(self.draws.get() + 1);
    }
}

pub fn recorder() -> (Recorder, Recorded) {
    let frame = Rc::new(Cell::new(Rect::ZERO));
    let draws = Rc::new(Cell::new(0));
    (
        Recorder {
            frame: Rc::clone(&frame),
            draws: Rc::clone(&draws),
        },
        Recorded { frame, draws },
    )
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
