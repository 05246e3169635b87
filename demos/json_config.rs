//! JSON-Configured Workflow
//!
//! This demo loads a document workflow from JSON, validates it and walks
//! through the available events.
//!
//! Key concepts:
//! - Loading configuration with serde_json
//! - Opt-in validation that reports every issue at once
//! - Discovering which states handle an event
//!
//! Run with: RUST_LOG=debug cargo run --example json_config

use rewind::{Fsm, MachineConfig};
use tracing_subscriber::EnvFilter;

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" }, "editable": true },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived": { "transitions": {} }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow ===\n");

    let config = MachineConfig::from_json_str(WORKFLOW)?.validated()?;
    let mut workflow = Fsm::new(config);

    let states: Vec<&str> = workflow.states().into_iter().map(|s| s.as_str()).collect();
    println!("States: {}", states.join(", "));

    let rejectable: Vec<&str> = workflow
        .states_with_event("reject")
        .into_iter()
        .map(|s| s.as_str())
        .collect();
    println!("States that can be rejected: {}\n", rejectable.join(", "));

    for event in ["submit", "reject", "submit", "approve", "archive"] {
        workflow.trigger(event)?;
        println!("{event:<8} -> {}", workflow.state());
    }

    let path: Vec<&str> = workflow.history().iter().map(|s| s.as_str()).collect();
    println!("\nHistory: {}", path.join(" -> "));

    workflow.clear_history();
    println!("After clear_history, can undo: {}", workflow.can_undo());

    println!("\n=== Demo Complete ===");
    Ok(())
}
