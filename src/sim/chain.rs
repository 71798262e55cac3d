//! Segment chain: follow-the-leader body movement
//!
//! Index 0 is the head, the last index is the tail tip. Each shift moves
//! every segment onto the cell its predecessor held before the shift.

use glam::IVec2;

use super::orient::Sprite;
use crate::error::{Error, Result};

/// Minimum chain length for orientation inference (head, body, tail tip)
pub const MIN_CHAIN_LEN: usize = 3;

/// One body segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: IVec2,
    /// Render slot; `None` until orientation first resolves it
    pub sprite: Option<Sprite>,
}

impl Segment {
    pub fn new(position: IVec2) -> Self {
        Self { position, sprite: None }
    }
}

/// Ordered head-to-tail sequence of segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    /// Build a chain from head-to-tail positions.
    ///
    /// Fails if there are fewer than three positions or if any two
    /// consecutive positions are not one cardinal step apart.
    pub fn from_positions(positions: &[IVec2]) -> Result<Self> {
        if positions.len() < MIN_CHAIN_LEN {
            return Err(Error::ChainTooShort { len: positions.len() });
        }
        let chain = Self {
            segments: positions.iter().copied().map(Segment::new).collect(),
        };
        if let Some(index) = chain.first_gap() {
            return Err(Error::ChainNotContiguous { index });
        }
        Ok(chain)
    }

    /// Straight chain with the head at `head`, trailing away from `facing`.
    ///
    /// Fails with `ChainTooLong` when a cell would leave the `i32` grid.
    pub fn straight(head: IVec2, facing: IVec2, len: usize) -> Result<Self> {
        let steps = i32::try_from(len).map_err(|_| Error::ChainTooLong { len })?;
        let positions = (0..steps)
            .map(|i| {
                Some(IVec2::new(
                    head.x.checked_sub(facing.x.checked_mul(i)?)?,
                    head.y.checked_sub(facing.y.checked_mul(i)?)?,
                ))
            })
            .collect::<Option<Vec<IVec2>>>()
            .ok_or(Error::ChainTooLong { len })?;
        Self::from_positions(&positions)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access to the segments. Order and length stay fixed.
    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn head(&self) -> IVec2 {
        self.segments[0].position
    }

    pub fn tail_tip(&self) -> IVec2 {
        self.segments[self.segments.len() - 1].position
    }

    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.segments.iter().map(|s| s.position)
    }

    pub fn occupies(&self, cell: IVec2) -> bool {
        self.positions().any(|p| p == cell)
    }

    /// Move the chain so the head lands on `target`.
    ///
    /// Returns `false` without touching anything when the head is already
    /// on `target`.
    pub fn shift(&mut self, target: IVec2) -> bool {
        if self.segments[0].position == target {
            return false;
        }
        // Highest index first so each read sees the pre-shift position
        for i in (1..self.segments.len()).rev() {
            self.segments[i].position = self.segments[i - 1].position;
        }
        self.segments[0].position = target;
        true
    }

    /// Append a segment on top of the tail tip.
    ///
    /// The new tip shares its cell with the old one until the next shift
    /// pulls them apart, and inherits its sprite until then.
    pub fn grow(&mut self) {
        let tip = self.segments[self.segments.len() - 1];
        self.segments.push(tip);
    }

    /// Index of the first segment not one cardinal step from its successor
    pub fn first_gap(&self) -> Option<usize> {
        self.segments
            .windows(2)
            .position(|pair| manhattan(pair[0].position, pair[1].position) != 1)
    }

    /// Every pair of neighbors is exactly one cardinal step apart
    pub fn is_contiguous(&self) -> bool {
        self.first_gap().is_none()
    }
}

fn manhattan(a: IVec2, b: IVec2) -> i32 {
    let d = (a - b).abs();
    d.x + d.y
}
