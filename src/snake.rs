use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, or `None` when
    /// the step leaves the `i32` coordinate range.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// One body unit: a cell plus the number of ticks it has left to live.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub ttl: u32,
}

/// Snake body ordered head to tail.
///
/// Every live segment has `ttl > 0`; a segment whose ttl reaches zero is
/// shed during [`Body::age`].
#[derive(Debug, Clone)]
pub struct Body {
    segments: VecDeque<Segment>,
}

impl Body {
    /// Builds a body from head-first positions, giving the head
    /// `ttl = len` and each following segment one less.
    ///
    /// Returns `None` when `positions` is empty.
    #[must_use]
    pub fn from_positions(positions: Vec<Position>) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        let length = positions.len() as u32;
        let segments = positions
            .into_iter()
            .zip((1..=length).rev())
            .map(|(position, ttl)| Segment { position, ttl })
            .collect();

        Some(Self { segments })
    }

    /// Returns the head segment.
    #[must_use]
    pub fn head(&self) -> Segment {
        // Construction rejects empty bodies and aging never removes the head
        // before a new one is pushed.
        self.segments[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.position == position)
    }

    /// Decrements every ttl and removes expired segments, returning their positions.
    pub fn age(&mut self) -> Vec<Position> {
        let mut expired = Vec::new();
        for segment in &mut self.segments {
            segment.ttl = segment.ttl.saturating_sub(1);
            if segment.ttl == 0 {
                expired.push(segment.position);
            }
        }

        self.segments.retain(|segment| segment.ttl > 0);
        expired
    }

    /// Inserts a new head at the front.
    pub fn push_head(&mut self, head: Segment) {
        self.segments.push_front(head);
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
