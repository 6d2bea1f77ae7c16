#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Grovebot engine.
//!
//! This crate defines the pure value types that the authoritative world and
//! its embedding adapters exchange: grid geometry, cardinal orientations,
//! actor capability descriptors, actor identifiers, and the error taxonomy
//! reported when an operation violates a placement or capability rule. None
//! of the types here hold a reference back into the world, so adapters can
//! copy them freely across their own boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cardinal orientation on the grid, arranged in a fixed clockwise cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Toward decreasing y coordinates.
    North,
    /// Toward increasing x coordinates.
    East,
    /// Toward increasing y coordinates.
    South,
    /// Toward decreasing x coordinates.
    West,
}

impl Orientation {
    /// Returns the neighbouring entry in the North→East→South→West cycle.
    ///
    /// Clockwise rotation advances the cycle and wraps from `West` back to
    /// `North`; counter-clockwise rotation walks the cycle in reverse. Four
    /// rotations in either direction restore the original orientation.
    #[must_use]
    pub const fn rotated(self, clockwise: bool) -> Self {
        match (self, clockwise) {
            (Self::North, true) | (Self::South, false) => Self::East,
            (Self::East, true) | (Self::West, false) => Self::South,
            (Self::South, true) | (Self::North, false) => Self::West,
            (Self::West, true) | (Self::East, false) => Self::North,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Position on the grid expressed as signed x and y coordinates.
///
/// A location carries no bounds of its own; validity is always judged
/// against a [`GridSize`], which also normalizes out-of-bound coordinates
/// back onto the torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    /// Creates a new location from raw coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the location.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate of the location.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the location shifted one unit along the given orientation.
    ///
    /// The result may leave the grid; callers pass it through
    /// [`GridSize::wrap`] before storing it.
    #[must_use]
    pub const fn step(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::North => Self::new(self.x, self.y - 1),
            Orientation::East => Self::new(self.x + 1, self.y),
            Orientation::South => Self::new(self.x, self.y + 1),
            Orientation::West => Self::new(self.x - 1, self.y),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of a toroidal grid, fixed for the lifetime of a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    width: i32,
    height: i32,
}

impl GridSize {
    /// Creates a new grid size from positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidSize`] if either dimension is zero or
    /// negative.
    pub fn new(width: i32, height: i32) -> Result<Self, ActionError> {
        if width <= 0 || height <= 0 {
            return Err(ActionError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Reports whether the location lies within `[0, width) × [0, height)`.
    #[must_use]
    pub const fn contains(&self, location: Location) -> bool {
        0 <= location.x()
            && location.x() < self.width
            && 0 <= location.y()
            && location.y() < self.height
    }

    /// Normalizes a location onto the torus.
    ///
    /// Each axis wraps independently with Euclidean modulo, so a location
    /// that exits one edge re-enters at the opposite edge and negative
    /// coordinates land in bounds. For every location `l`,
    /// `self.contains(self.wrap(l))` holds.
    #[must_use]
    pub fn wrap(&self, location: Location) -> Location {
        Location::new(
            location.x().rem_euclid(self.width),
            location.y().rem_euclid(self.height),
        )
    }
}

/// Unique identifier assigned to an actor by the world that owns it.
///
/// Identifiers are allocated from an insertion counter, so iteration sorted
/// by id equals insertion order. An id stays bound to its actor for the
/// actor's whole lifetime; once the actor is removed the id is never reused
/// and operations addressing it fail.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ActorId(u32);

impl ActorId {
    /// Creates a new actor identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Immutable capability descriptor shared by every actor of one kind.
///
/// A definition is a closed set of behavioural flags, not a hierarchy:
/// each operation checks the relevant flag and fails when it is absent.
/// The layer is a total order key; collisions only exist within a layer
/// and "beneath" means the layer directly below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorDefinition {
    moveable: bool,
    turnable: bool,
    grabable: bool,
    layer: i32,
}

impl ActorDefinition {
    /// Creates a definition on the given layer with every capability denied.
    #[must_use]
    pub const fn on_layer(layer: i32) -> Self {
        Self {
            moveable: false,
            turnable: false,
            grabable: false,
            layer,
        }
    }

    /// Grants the definition the ability to move (and be pushed).
    #[must_use]
    pub const fn moveable(mut self) -> Self {
        self.moveable = true;
        self
    }

    /// Grants the definition the ability to rotate.
    #[must_use]
    pub const fn turnable(mut self) -> Self {
        self.turnable = true;
        self
    }

    /// Grants the definition the ability to be picked up and put down.
    #[must_use]
    pub const fn grabable(mut self) -> Self {
        self.grabable = true;
        self
    }

    /// Reports whether actors of this kind may move or be pushed.
    #[must_use]
    pub const fn is_moveable(&self) -> bool {
        self.moveable
    }

    /// Reports whether actors of this kind may rotate.
    #[must_use]
    pub const fn is_turnable(&self) -> bool {
        self.turnable
    }

    /// Reports whether actors of this kind may be picked up and put down.
    #[must_use]
    pub const fn is_grabable(&self) -> bool {
        self.grabable
    }

    /// Layer the kind occupies; collisions are checked per layer.
    #[must_use]
    pub const fn layer(&self) -> i32 {
        self.layer
    }
}

/// Failure reported when an operation violates a placement or capability
/// rule.
///
/// Every failure is local and synchronous: the offending call returns the
/// error and leaves the world untouched. Nothing is retried internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ActionError {
    /// Grid construction was attempted with a non-positive dimension.
    #[error("grid dimensions {width}x{height} must both be positive")]
    InvalidSize {
        /// Requested number of columns.
        width: i32,
        /// Requested number of rows.
        height: i32,
    },
    /// The destination cell already holds an actor on the same layer.
    #[error("cell {location} already holds an actor on the same layer")]
    InvalidPlacement {
        /// Normalized cell that rejected the placement.
        location: Location,
    },
    /// The addressed actor is not part of the world.
    #[error("actor {} does not exist in this world", .id.get())]
    UnknownActor {
        /// Identifier that failed to resolve.
        id: ActorId,
    },
    /// The actor's definition does not permit movement.
    #[error("actor {} is not moveable", .id.get())]
    NotMoveable {
        /// Actor whose step was rejected.
        id: ActorId,
    },
    /// The actor's definition does not permit rotation.
    #[error("actor {} is not turnable", .id.get())]
    NotTurnable {
        /// Actor whose rotation was rejected.
        id: ActorId,
    },
    /// The definition involved in a pick-up or put-down is not grabable.
    #[error("the actor kind at {location} is not grabable")]
    NotGrabable {
        /// Cell holding the non-grabable actor.
        location: Location,
    },
    /// A pick-up found no actor on the layer beneath.
    #[error("nothing to pick up at {location}")]
    NothingToPickup {
        /// Cell that was searched one layer beneath the actor.
        location: Location,
    },
    /// A step was stopped by an occupant that could not be pushed aside.
    #[error("the way to {location} is blocked")]
    Blocked {
        /// Target cell that stayed occupied.
        location: Location,
    },
    /// A snapshot no longer matches the world's current actor set.
    #[error("snapshot does not match the world's current actor set")]
    StaleSnapshot,
}
