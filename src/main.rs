//! # Tileworld Application Entry Point
//!
//! The native entry point for the editor core. It simply calls into the
//! library's `run()` function, which drives a short headless session.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- [world-file.json]
//! ```

fn main() {
    tileworld::run();
}
