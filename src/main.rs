//! Multi-handler logging demonstration
//!
//! Run with: cargo run --bin multi_handlers

use multi_handler_logging::prelude::*;

fn main() -> Result<()> {
    let demo = Demo::setup(&DemoConfig::default())?;
    demo.run();
    demo.shutdown()
}
