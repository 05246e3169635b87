//! Traffic Light State Machine
//!
//! This demo drives a cyclic state machine and steps back through its
//! history.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event-driven transitions from a literal configuration
//! - Undo/redo over visited states
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use rewind::{machine_config, Fsm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "red",
        states: {
            "red" => { "go" => "green" },
            "green" => { "slow" => "yellow" },
            "yellow" => { "stop" => "red" },
        }
    }?;
    let mut light = Fsm::new(config);

    println!("Initial state: {}\n", light.state());

    println!("Transition sequence:");
    for event in ["go", "slow", "stop", "go"] {
        light.trigger(event)?;
        println!("  {event:<5} -> {}", light.state());
    }

    println!("\nStepping back:");
    while light.undo() {
        println!("  undo  -> {}", light.state());
    }

    println!("\nReplaying:");
    while light.redo() {
        println!("  redo  -> {}", light.state());
    }

    match light.trigger("go") {
        Ok(()) => println!("\nUnexpected transition to {}", light.state()),
        Err(err) => println!("\nRejected: {err}"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
