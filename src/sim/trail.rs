use std::collections::VecDeque;

use crate::sim::units::{Float, Vector, AU, DEFAULT_PIXELS_PER_AU, DEFAULT_WINDOW_SIZE};

pub(crate) const TRAIL_CAPACITY: usize = 75;

/// Maps simulation space (m) to display space (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) center: Vector,
    pub(crate) distance_scale: Float,
}

impl Viewport {
    pub(crate) fn new(window_size: Float, pixels_per_au: Float) -> Viewport {
        Viewport {
            center: Vector::new(window_size / 2., window_size / 2.),
            distance_scale: pixels_per_au / AU,
        }
    }

    pub(crate) fn to_display(&self, position: &Vector) -> Vector {
        position * self.distance_scale + self.center
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(DEFAULT_WINDOW_SIZE, DEFAULT_PIXELS_PER_AU)
    }
}

/// Recent display positions of one body, oldest first.
#[derive(Clone, Debug)]
pub(crate) struct Trail {
    viewport: Viewport,
    points: VecDeque<Vector>,
}

impl Trail {
    pub(crate) fn new(viewport: Viewport) -> Trail {
        Trail {
            viewport,
            points: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
        }
    }

    /// Appends `position` (simulation space), evicting the oldest point once full.
    pub(crate) fn record(&mut self, position: &Vector) {
        self.points.push_back(self.viewport.to_display(position));
        if self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.points.iter()
    }
}
