use grovebot_core::{ActionError, ActorDefinition, Location, Orientation};
use grovebot_world::{self as world, pick_up, put_down, query, spawn, step, World};

const WALKER: ActorDefinition = ActorDefinition::on_layer(1).moveable().turnable();
const CART: ActorDefinition = ActorDefinition::on_layer(1).moveable();
const BOULDER: ActorDefinition = ActorDefinition::on_layer(1);
const MARKER: ActorDefinition = ActorDefinition::on_layer(0).grabable();

fn location_of(world: &World, id: grovebot_core::ActorId) -> Location {
    query::actor(world, id).expect("actor exists").location
}

#[test]
fn five_east_steps_lap_a_five_wide_world() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(0, 2), Orientation::East)
        .expect("walker");

    for _ in 0..5 {
        step(&mut world, walker, Orientation::East).expect("step east");
    }

    assert_eq!(location_of(&world, walker), Location::new(0, 2));
}

#[test]
fn non_moveable_actors_refuse_to_step() {
    let mut world = World::new(5, 5).expect("world");
    let boulder = spawn(&mut world, BOULDER, Location::new(2, 2), Orientation::North)
        .expect("boulder");

    assert_eq!(
        step(&mut world, boulder, Orientation::East),
        Err(ActionError::NotMoveable { id: boulder })
    );
    assert_eq!(location_of(&world, boulder), Location::new(2, 2));
}

#[test]
fn stepping_into_a_moveable_occupant_pushes_it_one_cell() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");
    let pushed = spawn(&mut world, CART, Location::new(2, 1), Orientation::North)
        .expect("crate");

    step(&mut world, walker, Orientation::East).expect("push succeeds");

    assert_eq!(location_of(&world, walker), Location::new(2, 1));
    assert_eq!(location_of(&world, pushed), Location::new(3, 1));
}

#[test]
fn a_push_never_chains_to_a_second_occupant() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");
    let first = spawn(&mut world, CART, Location::new(2, 1), Orientation::North)
        .expect("first crate");
    let second = spawn(&mut world, CART, Location::new(3, 1), Orientation::North)
        .expect("second crate");

    assert_eq!(
        step(&mut world, walker, Orientation::East),
        Err(ActionError::Blocked {
            location: Location::new(2, 1)
        })
    );

    // Atomicity: the failed chain moved nobody.
    assert_eq!(location_of(&world, walker), Location::new(1, 1));
    assert_eq!(location_of(&world, first), Location::new(2, 1));
    assert_eq!(location_of(&world, second), Location::new(3, 1));
}

#[test]
fn a_non_moveable_occupant_blocks_the_step() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");
    let _ = spawn(&mut world, BOULDER, Location::new(2, 1), Orientation::North)
        .expect("boulder");

    assert_eq!(
        step(&mut world, walker, Orientation::East),
        Err(ActionError::Blocked {
            location: Location::new(2, 1)
        })
    );
    assert_eq!(location_of(&world, walker), Location::new(1, 1));
}

#[test]
fn a_push_blocked_behind_the_occupant_fails_atomically() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");
    let pushed = spawn(&mut world, CART, Location::new(2, 1), Orientation::North)
        .expect("crate");
    let _ = spawn(&mut world, BOULDER, Location::new(3, 1), Orientation::North)
        .expect("boulder");

    assert_eq!(
        step(&mut world, walker, Orientation::East),
        Err(ActionError::Blocked {
            location: Location::new(2, 1)
        })
    );
    assert_eq!(location_of(&world, walker), Location::new(1, 1));
    assert_eq!(location_of(&world, pushed), Location::new(2, 1));
}

#[test]
fn a_push_wraps_across_the_east_edge() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(3, 0), Orientation::East)
        .expect("walker");
    let pushed = spawn(&mut world, CART, Location::new(4, 0), Orientation::North)
        .expect("crate");

    step(&mut world, walker, Orientation::East).expect("push across the edge");

    assert_eq!(location_of(&world, walker), Location::new(4, 0));
    assert_eq!(location_of(&world, pushed), Location::new(0, 0));
}

#[test]
fn stepping_over_a_lower_layer_does_not_collide() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");
    let marker = spawn(&mut world, MARKER, Location::new(2, 1), Orientation::North)
        .expect("marker");

    step(&mut world, walker, Orientation::East).expect("walk onto the marker");

    assert_eq!(location_of(&world, walker), Location::new(2, 1));
    assert_eq!(location_of(&world, marker), Location::new(2, 1));
}

#[test]
fn pick_up_consumes_the_layer_beneath_and_put_down_recreates_it() {
    let mut world = World::new(5, 5).expect("world");
    let marker = spawn(&mut world, MARKER, Location::new(2, 2), Orientation::North)
        .expect("marker");
    let walker = spawn(&mut world, WALKER, Location::new(2, 2), Orientation::East)
        .expect("walker");

    let carried = pick_up(&mut world, walker).expect("pick up the marker");
    assert_eq!(carried, MARKER);
    assert!(query::actor(&world, marker).is_none());
    assert_eq!(query::actor_count(&world), 1);

    step(&mut world, walker, Orientation::East).expect("carry it one cell east");
    let dropped = put_down(&mut world, walker, carried).expect("put it back down");

    let actor = query::actor(&world, dropped).expect("dropped marker exists");
    assert_eq!(actor.location, Location::new(3, 2));
    assert_eq!(actor.definition, MARKER);
}

#[test]
fn pick_up_reports_an_empty_layer_beneath() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(2, 2), Orientation::North)
        .expect("walker");

    assert_eq!(
        pick_up(&mut world, walker),
        Err(ActionError::NothingToPickup {
            location: Location::new(2, 2)
        })
    );
}

#[test]
fn pick_up_refuses_a_non_grabable_candidate() {
    let mut world = World::new(5, 5).expect("world");
    let _ = spawn(
        &mut world,
        ActorDefinition::on_layer(0),
        Location::new(2, 2),
        Orientation::North,
    )
    .expect("anchored kind beneath");
    let walker = spawn(&mut world, WALKER, Location::new(2, 2), Orientation::North)
        .expect("walker");

    assert_eq!(
        pick_up(&mut world, walker),
        Err(ActionError::NotGrabable {
            location: Location::new(2, 2)
        })
    );
    assert_eq!(query::actor_count(&world), 2);
}

#[test]
fn put_down_refuses_a_non_grabable_kind() {
    let mut world = World::new(5, 5).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(2, 2), Orientation::North)
        .expect("walker");

    assert_eq!(
        put_down(&mut world, walker, BOULDER),
        Err(ActionError::NotGrabable {
            location: Location::new(2, 2)
        })
    );
    assert_eq!(query::actor_count(&world), 1);
}

#[test]
fn put_down_respects_the_collision_rule() {
    let mut world = World::new(5, 5).expect("world");
    let _ = spawn(&mut world, MARKER, Location::new(2, 2), Orientation::North)
        .expect("existing marker");
    let walker = spawn(&mut world, WALKER, Location::new(2, 2), Orientation::North)
        .expect("walker");

    assert_eq!(
        put_down(&mut world, walker, MARKER),
        Err(ActionError::InvalidPlacement {
            location: Location::new(2, 2)
        })
    );
}

#[test]
fn a_step_in_a_single_column_world_wraps_onto_itself() {
    let mut world = World::new(1, 3).expect("world");
    let walker = spawn(&mut world, WALKER, Location::new(0, 1), Orientation::East)
        .expect("walker");

    // Width one: east wraps straight back onto the walker's own cell, which
    // must not count as a collision with itself.
    step(&mut world, walker, Orientation::East).expect("wrap onto own cell");
    assert_eq!(location_of(&world, walker), Location::new(0, 1));
}

#[test]
fn deleting_an_actor_reopens_its_cell() {
    let mut world = World::new(5, 5).expect("world");
    let boulder = spawn(&mut world, BOULDER, Location::new(2, 1), Orientation::North)
        .expect("boulder");
    let walker = spawn(&mut world, WALKER, Location::new(1, 1), Orientation::East)
        .expect("walker");

    assert_eq!(
        step(&mut world, walker, Orientation::East),
        Err(ActionError::Blocked {
            location: Location::new(2, 1)
        })
    );

    world::remove(&mut world, boulder).expect("remove the boulder");
    step(&mut world, walker, Orientation::East).expect("way is open now");
    assert_eq!(location_of(&world, walker), Location::new(2, 1));
}
