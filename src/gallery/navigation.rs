// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic for stepping through one image sequence.

/// Which way the last accepted navigation moved, used to orient the slide
/// animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards higher indices (the entering image slides in from the right).
    Forward,
    /// Towards lower indices (the entering image slides in from the left).
    Backward,
    /// No navigation yet in this session.
    #[default]
    None,
}

impl Direction {
    /// Horizontal sign of the entering image's starting offset.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
            Direction::None => 0.0,
        }
    }
}

/// Position within a non-empty, wrapping image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
    len: usize,
    direction: Direction,
}

impl Slideshow {
    /// Starts at the first image. Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            index: 0,
            len,
            direction: Direction::None,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a slideshow cannot be built over an empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves to the next image, wrapping from the last to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.direction = Direction::Forward;
        self.index
    }

    /// Moves to the previous image, wrapping from the first to the last.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.direction = Direction::Backward;
        self.index
    }

    /// Moves directly to `target`.
    ///
    /// Returns `None` without changing anything when `target` is out of
    /// range or already current.
    pub fn jump_to(&mut self, target: usize) -> Option<usize> {
        if target >= self.len || target == self.index {
            return None;
        }
        self.direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        Some(target)
    }
}
