#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Teaching vocabulary built on top of the generic actor operations.
//!
//! Exercises drive a rover through a small forest world populated with the
//! built-in kind catalogue: trees block the way, mushrooms can be pushed
//! one cell ahead, and leaves lie a layer beneath and can be carried. Every
//! command takes the world and the rover's id explicitly; embeddings that
//! want an implicitly selected world provide that sugar themselves.

use grovebot_core::{ActionError, ActorDefinition, ActorId, Location, Orientation};
use grovebot_world::{pick_up, put_down, query, rotate, spawn, step, World};

/// The rover the student programs: walks forward and turns in place.
pub const ROVER: ActorDefinition = ActorDefinition::on_layer(1).moveable().turnable();

/// An immobile obstacle the rover can neither enter nor push.
pub const TREE: ActorDefinition = ActorDefinition::on_layer(1);

/// A pushable obstacle; the rover shoves it one cell ahead when stepping
/// into it.
pub const MUSHROOM: ActorDefinition = ActorDefinition::on_layer(1).moveable();

/// A carryable marker living one layer beneath the rover.
pub const LEAF: ActorDefinition = ActorDefinition::on_layer(0).grabable();

/// Places a new rover into the world and returns its identifier.
///
/// # Errors
///
/// Returns [`ActionError::InvalidPlacement`] if the cell is already held on
/// the rover's layer.
pub fn place_rover(
    world: &mut World,
    location: Location,
    orientation: Orientation,
) -> Result<ActorId, ActionError> {
    spawn(world, ROVER, location, orientation)
}

/// Moves the rover one cell forward along its current orientation.
///
/// # Errors
///
/// Propagates [`ActionError::Blocked`] when a tree or an unpushable
/// mushroom stands in the way, and [`ActionError::UnknownActor`] for a
/// stale id.
pub fn advance(world: &mut World, id: ActorId) -> Result<(), ActionError> {
    let heading = query::actor(world, id)
        .ok_or(ActionError::UnknownActor { id })?
        .orientation;
    step(world, id, heading)
}

/// Turns the rover ninety degrees counter-clockwise.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn turn_left(world: &mut World, id: ActorId) -> Result<(), ActionError> {
    rotate(world, id, false)
}

/// Turns the rover ninety degrees clockwise.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn turn_right(world: &mut World, id: ActorId) -> Result<(), ActionError> {
    rotate(world, id, true)
}

/// Drops a leaf on the cell the rover currently occupies.
///
/// # Errors
///
/// Returns [`ActionError::InvalidPlacement`] if a leaf already lies here,
/// or [`ActionError::UnknownActor`] for a stale id.
pub fn put_leaf(world: &mut World, id: ActorId) -> Result<ActorId, ActionError> {
    put_down(world, id, LEAF)
}

/// Removes the leaf beneath the rover.
///
/// # Errors
///
/// Returns [`ActionError::NothingToPickup`] if no leaf lies here, or
/// [`ActionError::UnknownActor`] for a stale id.
pub fn remove_leaf(world: &mut World, id: ActorId) -> Result<(), ActionError> {
    let _leaf = pick_up(world, id)?;
    Ok(())
}

/// Reports whether a tree stands directly ahead of the rover.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn tree_front(world: &World, id: ActorId) -> Result<bool, ActionError> {
    query::definition_front(world, id, TREE)
}

/// Reports whether a tree stands directly left of the rover.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn tree_left(world: &World, id: ActorId) -> Result<bool, ActionError> {
    query::definition_left(world, id, TREE)
}

/// Reports whether a tree stands directly right of the rover.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn tree_right(world: &World, id: ActorId) -> Result<bool, ActionError> {
    query::definition_right(world, id, TREE)
}

/// Reports whether a mushroom stands directly ahead of the rover.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn mushroom_front(world: &World, id: ActorId) -> Result<bool, ActionError> {
    query::definition_front(world, id, MUSHROOM)
}

/// Reports whether the rover currently stands on a leaf.
///
/// # Errors
///
/// Returns [`ActionError::UnknownActor`] for a stale id.
pub fn on_leaf(world: &World, id: ActorId) -> Result<bool, ActionError> {
    query::definition_here(world, id, LEAF)
}
