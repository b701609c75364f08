//! shapecraft
//!
//! Builds shapes through factories, wraps them in decorators and calculates their areas through
//! selectable strategies.

// Modules
pub(crate) mod cli;
pub(crate) mod showcase;

fn main() -> anyhow::Result<()> {
    cli::run()
}
