#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Grovebot.
//!
//! The world owns a toroidal grid and the actors placed on it. Adapters and
//! teaching vocabularies mutate the world exclusively through the operation
//! functions in this crate root, address actors by [`ActorId`], and read
//! state back through the [`query`] module. Every operation either performs
//! its documented mutation or returns an [`ActionError`] and leaves the
//! world untouched.

use grovebot_core::{ActionError, ActorDefinition, ActorId, GridSize, Location, Orientation};

pub mod snapshot;

/// Represents the authoritative Grovebot world state.
///
/// Actors are stored in insertion order, which doubles as ascending id
/// order because identifiers come from an insertion counter. Every stored
/// location is wrap-normalized into the grid bounds.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) size: GridSize,
    pub(crate) actors: Vec<ActorRecord>,
    next_id: u32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ActorRecord {
    pub(crate) id: ActorId,
    pub(crate) definition: ActorDefinition,
    pub(crate) location: Location,
    pub(crate) orientation: Orientation,
}

impl World {
    /// Creates a new empty world with the given grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidSize`] if either dimension is zero or
    /// negative.
    pub fn new(width: i32, height: i32) -> Result<Self, ActionError> {
        Ok(Self {
            size: GridSize::new(width, height)?,
            actors: Vec::new(),
            next_id: 0,
        })
    }

    pub(crate) fn index_of(&self, id: ActorId) -> Option<usize> {
        self.actors.iter().position(|actor| actor.id == id)
    }

    pub(crate) fn record(&self, id: ActorId) -> Result<&ActorRecord, ActionError> {
        self.actors
            .iter()
            .find(|actor| actor.id == id)
            .ok_or(ActionError::UnknownActor { id })
    }
}

/// Creates a new actor of the given kind and inserts it into the world.
///
/// The location is wrap-normalized before validation, so callers may pass
/// out-of-bound coordinates. Returns the identifier the world assigned.
///
/// # Errors
///
/// Returns [`ActionError::InvalidPlacement`] if the normalized cell already
/// holds an actor on the definition's layer.
pub fn spawn(
    world: &mut World,
    definition: ActorDefinition,
    location: Location,
    orientation: Orientation,
) -> Result<ActorId, ActionError> {
    let target = world.size.wrap(location);
    if !query::placement_valid(world, definition, target) {
        return Err(ActionError::InvalidPlacement { location: target });
    }
    let id = ActorId::new(world.next_id);
    world.next_id += 1;
    world.actors.push(ActorRecord {
        id,
        definition,
        location: target,
        orientation,
    });
    Ok(id)
}

/// Deletes the actor from the world; its identifier becomes invalid.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve.
pub fn remove(world: &mut World, id: ActorId) -> Result<(), ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    let _ = world.actors.remove(index);
    Ok(())
}

/// Moves the actor to an arbitrary cell after validating occupancy there.
///
/// The actor itself never blocks its own destination, so teleporting onto
/// the cell it already occupies succeeds.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve, or
/// [`ActionError::InvalidPlacement`] if another actor occupies the
/// normalized cell on the same layer.
pub fn teleport(world: &mut World, id: ActorId, location: Location) -> Result<(), ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    let layer = world.actors[index].definition.layer();
    let target = world.size.wrap(location);
    let occupied = world.actors.iter().any(|other| {
        other.id != id && other.location == target && other.definition.layer() == layer
    });
    if occupied {
        return Err(ActionError::InvalidPlacement { location: target });
    }
    world.actors[index].location = target;
    Ok(())
}

/// Advances the actor one cell in the given direction, pushing at most one
/// moveable occupant ahead of it.
///
/// The move is atomic: the whole chain is validated before either actor
/// relocates, so a failed push leaves every location unchanged. An occupant
/// can only be pushed into a cell that is free on its layer; it never
/// pushes a third actor in turn.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve,
/// [`ActionError::NotMoveable`] if the actor's definition forbids movement,
/// or [`ActionError::Blocked`] if the target cell is held by an occupant
/// that cannot move aside.
pub fn step(world: &mut World, id: ActorId, direction: Orientation) -> Result<(), ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    let mover = world.actors[index];
    if !mover.definition.is_moveable() {
        return Err(ActionError::NotMoveable { id });
    }

    let target = world.size.wrap(mover.location.step(direction));
    let occupant_index = world.actors.iter().position(|other| {
        other.id != id
            && other.location == target
            && other.definition.layer() == mover.definition.layer()
    });

    let Some(occupant_index) = occupant_index else {
        world.actors[index].location = target;
        return Ok(());
    };

    let occupant = world.actors[occupant_index];
    if !occupant.definition.is_moveable() {
        return Err(ActionError::Blocked { location: target });
    }

    // Depth cap of one: the pushed occupant must find its forward cell free
    // on its layer, counting the mover still standing behind it.
    let push_target = world.size.wrap(target.step(direction));
    let push_blocked = world.actors.iter().any(|other| {
        other.id != occupant.id
            && other.location == push_target
            && other.definition.layer() == occupant.definition.layer()
    });
    if push_blocked {
        return Err(ActionError::Blocked { location: target });
    }

    world.actors[occupant_index].location = push_target;
    world.actors[index].location = target;
    Ok(())
}

/// Rotates the actor one step in the North→East→South→West cycle.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve, or
/// [`ActionError::NotTurnable`] if the actor's definition forbids rotation.
pub fn rotate(world: &mut World, id: ActorId, clockwise: bool) -> Result<(), ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    if !world.actors[index].definition.is_turnable() {
        return Err(ActionError::NotTurnable { id });
    }
    let record = &mut world.actors[index];
    record.orientation = record.orientation.rotated(clockwise);
    Ok(())
}

/// Removes the actor one layer beneath the addressed actor's cell and hands
/// its definition back to the caller.
///
/// There is no inventory entity: holding something is modelled as the
/// picked-up actor no longer existing in the world, while the caller keeps
/// the returned definition for a later [`put_down`]. When several actors
/// share the layer beneath, the oldest one is taken.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve,
/// [`ActionError::NothingToPickup`] if the layer beneath is empty at the
/// actor's cell, or [`ActionError::NotGrabable`] if the candidate's kind
/// cannot be carried.
pub fn pick_up(world: &mut World, id: ActorId) -> Result<ActorDefinition, ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    let location = world.actors[index].location;
    let beneath = world.actors[index].definition.layer() - 1;
    let candidate = world
        .actors
        .iter()
        .position(|other| other.location == location && other.definition.layer() == beneath);
    let Some(candidate) = candidate else {
        return Err(ActionError::NothingToPickup { location });
    };
    let definition = world.actors[candidate].definition;
    if !definition.is_grabable() {
        return Err(ActionError::NotGrabable { location });
    }
    let _ = world.actors.remove(candidate);
    Ok(definition)
}

/// Creates an actor of the given kind at the addressed actor's cell and
/// orientation.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] if the id does not resolve,
/// [`ActionError::NotGrabable`] if the kind cannot be carried, or
/// [`ActionError::InvalidPlacement`] if the cell is already held on the
/// kind's layer.
pub fn put_down(
    world: &mut World,
    id: ActorId,
    definition: ActorDefinition,
) -> Result<ActorId, ActionError> {
    let index = world
        .index_of(id)
        .ok_or(ActionError::UnknownActor { id })?;
    let location = world.actors[index].location;
    let orientation = world.actors[index].orientation;
    if !definition.is_grabable() {
        return Err(ActionError::NotGrabable { location });
    }
    spawn(world, definition, location, orientation)
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use grovebot_core::{ActionError, ActorDefinition, ActorId, GridSize, Location, Orientation};

    /// Immutable representation of a single actor's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ActorSnapshot {
        /// Identifier assigned to the actor by the world.
        pub id: ActorId,
        /// Capability descriptor of the actor's kind.
        pub definition: ActorDefinition,
        /// Normalized cell the actor currently occupies.
        pub location: Location,
        /// Direction the actor currently faces.
        pub orientation: Orientation,
    }

    /// Grid dimensions the world was constructed with.
    #[must_use]
    pub fn size(world: &World) -> GridSize {
        world.size
    }

    /// Number of actors currently placed in the world.
    #[must_use]
    pub fn actor_count(world: &World) -> usize {
        world.actors.len()
    }

    /// Captures the actor's current state, if it exists.
    #[must_use]
    pub fn actor(world: &World, id: ActorId) -> Option<ActorSnapshot> {
        world.record(id).ok().map(|record| ActorSnapshot {
            id: record.id,
            definition: record.definition,
            location: record.location,
            orientation: record.orientation,
        })
    }

    /// Captures every actor in insertion order.
    #[must_use]
    pub fn actor_view(world: &World) -> Vec<ActorSnapshot> {
        world
            .actors
            .iter()
            .map(|record| ActorSnapshot {
                id: record.id,
                definition: record.definition,
                location: record.location,
                orientation: record.orientation,
            })
            .collect()
    }

    /// All actors occupying the wrap-normalized location, insertion order.
    pub fn actors_at(world: &World, location: Location) -> impl Iterator<Item = ActorSnapshot> + '_ {
        let cell = world.size.wrap(location);
        world
            .actors
            .iter()
            .filter(move |record| record.location == cell)
            .map(|record| ActorSnapshot {
                id: record.id,
                definition: record.definition,
                location: record.location,
                orientation: record.orientation,
            })
    }

    /// Actors occupying the wrap-normalized location on the given layer.
    pub fn actors_at_on_layer(
        world: &World,
        location: Location,
        layer: i32,
    ) -> impl Iterator<Item = ActorSnapshot> + '_ {
        actors_at(world, location).filter(move |actor| actor.definition.layer() == layer)
    }

    /// Reports whether an actor of the given kind may occupy the location.
    ///
    /// This is the sole collision rule: a placement is valid exactly when no
    /// existing actor holds the normalized cell on the kind's layer.
    #[must_use]
    pub fn placement_valid(world: &World, definition: ActorDefinition, location: Location) -> bool {
        actors_at_on_layer(world, location, definition.layer())
            .next()
            .is_none()
    }

    /// Reports whether any actor of the given kind is at the location.
    #[must_use]
    pub fn definition_at(world: &World, location: Location, definition: ActorDefinition) -> bool {
        actors_at(world, location).any(|actor| actor.definition == definition)
    }

    /// Reports whether an actor of kind `definition` is one step ahead of
    /// the addressed actor.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownActor`] if the id does not resolve.
    pub fn definition_front(
        world: &World,
        id: ActorId,
        definition: ActorDefinition,
    ) -> Result<bool, ActionError> {
        probe(world, id, definition, None)
    }

    /// Reports whether an actor of kind `definition` is one step to the
    /// left of the addressed actor.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownActor`] if the id does not resolve.
    pub fn definition_left(
        world: &World,
        id: ActorId,
        definition: ActorDefinition,
    ) -> Result<bool, ActionError> {
        probe(world, id, definition, Some(false))
    }

    /// Reports whether an actor of kind `definition` is one step to the
    /// right of the addressed actor.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownActor`] if the id does not resolve.
    pub fn definition_right(
        world: &World,
        id: ActorId,
        definition: ActorDefinition,
    ) -> Result<bool, ActionError> {
        probe(world, id, definition, Some(true))
    }

    /// Reports whether an actor of kind `definition` shares the addressed
    /// actor's own cell.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownActor`] if the id does not resolve.
    pub fn definition_here(
        world: &World,
        id: ActorId,
        definition: ActorDefinition,
    ) -> Result<bool, ActionError> {
        let record = world.record(id)?;
        Ok(definition_at(world, record.location, definition))
    }

    fn probe(
        world: &World,
        id: ActorId,
        definition: ActorDefinition,
        turn: Option<bool>,
    ) -> Result<bool, ActionError> {
        let record = world.record(id)?;
        let heading = match turn {
            None => record.orientation,
            Some(clockwise) => record.orientation.rotated(clockwise),
        };
        let cell = world.size.wrap(record.location.step(heading));
        Ok(definition_at(world, cell, definition))
    }
}
