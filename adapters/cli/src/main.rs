#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that walks a rover through a scripted demonstration.
//!
//! The script places a rover, a mushroom, and a leaf into a toroidal world,
//! saves the starting placement, drives the rover one full lap (pushing the
//! mushroom ahead of it), and then restores the snapshot to show that the
//! world rewinds exactly.

use anyhow::Context;
use clap::Parser;

use grovebot_core::Location;
use grovebot_core::Orientation;
use grovebot_system_rover as rover;
use grovebot_world::{query, snapshot, spawn, World};

/// Runs a scripted rover lap on a toroidal grid.
#[derive(Debug, Parser)]
#[command(name = "grovebot")]
struct Args {
    /// Number of grid columns.
    #[arg(long, default_value_t = 5)]
    width: i32,
    /// Number of grid rows.
    #[arg(long, default_value_t = 5)]
    height: i32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut world =
        World::new(args.width, args.height).context("constructing the demo world")?;
    let row = args.height / 2;

    let id = rover::place_rover(&mut world, Location::new(0, row), Orientation::East)
        .context("placing the rover")?;
    let _mushroom = spawn(
        &mut world,
        rover::MUSHROOM,
        Location::new(2, row),
        Orientation::North,
    )
    .context("placing the mushroom")?;
    let _leaf = spawn(
        &mut world,
        rover::LEAF,
        Location::new(1, row),
        Orientation::North,
    )
    .context("placing the leaf")?;

    let start = snapshot::save_state(&world);

    println!("start:");
    report(&world);

    for _ in 0..args.width {
        rover::advance(&mut world, id).context("advancing the rover")?;
        if rover::on_leaf(&world, id)? {
            println!("the rover crossed the leaf");
        }
    }

    println!("after one lap:");
    report(&world);

    snapshot::restore(&mut world, &start).context("rewinding to the saved placement")?;
    println!("after rewinding:");
    report(&world);

    Ok(())
}

fn report(world: &World) {
    for actor in query::actor_view(world) {
        println!(
            "  actor {} on layer {} at {} facing {}",
            actor.id.get(),
            actor.definition.layer(),
            actor.location,
            actor.orientation
        );
    }
}
