//! Save and restore of a world's actor placement.
//!
//! A [`WorldState`] captures where every actor stands and which way it
//! faces, without owning the actors themselves. Restoring rewinds those
//! positions onto the same world later, which is how teaching embeddings
//! implement "reset the exercise".

use serde::{Deserialize, Serialize};

use grovebot_core::{ActionError, ActorId, Location, Orientation};

use crate::World;

/// Immutable snapshot of every actor's location and orientation.
///
/// Entries are ordered by insertion, matching the world's own iteration
/// order. The snapshot stays valid only as long as the world's actor set is
/// unchanged; restoring against a world that gained or lost actors fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    entries: Vec<StateEntry>,
}

/// Saved placement of a single actor, keyed by its identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Identity of the actor the entry belongs to.
    pub id: ActorId,
    /// Cell the actor occupied when the snapshot was taken.
    pub location: Location,
    /// Direction the actor faced when the snapshot was taken.
    pub orientation: Orientation,
}

impl WorldState {
    /// Saved entries in the order the actors were inserted into the world.
    #[must_use]
    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }
}

/// Captures the location and orientation of every actor currently in the
/// world. Runs in O(actor count).
#[must_use]
pub fn save_state(world: &World) -> WorldState {
    WorldState {
        entries: world
            .actors
            .iter()
            .map(|record| StateEntry {
                id: record.id,
                location: record.location,
                orientation: record.orientation,
            })
            .collect(),
    }
}

/// Rewinds every actor to the placement captured in the snapshot.
///
/// The snapshot's actor set must equal the world's current actor set.
/// Validation happens before any mutation, so a failed restore leaves the
/// world exactly as it was. Locations are re-normalized on the way in, so a
/// snapshot deserialized from an external source cannot smuggle an
/// out-of-bound coordinate past the world invariant.
///
/// # Errors
///
/// Returns [`ActionError::StaleSnapshot`] if any snapshotted actor no
/// longer exists, if the world holds actors absent from the snapshot, or if
/// the snapshot addresses the same actor twice.
pub fn restore(world: &mut World, state: &WorldState) -> Result<(), ActionError> {
    if state.entries.len() != world.actors.len() {
        return Err(ActionError::StaleSnapshot);
    }

    let mut indices = Vec::with_capacity(state.entries.len());
    for entry in &state.entries {
        let Some(index) = world.index_of(entry.id) else {
            return Err(ActionError::StaleSnapshot);
        };
        indices.push(index);
    }

    // Equal counts plus resolvable ids only prove set equality when no id
    // appears twice in the snapshot.
    let mut seen = indices.clone();
    seen.sort_unstable();
    if seen.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(ActionError::StaleSnapshot);
    }

    let size = world.size;
    for (entry, index) in state.entries.iter().zip(indices) {
        let record = &mut world.actors[index];
        record.location = size.wrap(entry.location);
        record.orientation = entry.orientation;
    }
    Ok(())
}
