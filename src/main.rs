pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod scene;
pub mod tui;
pub mod utils;

use color_eyre::eyre::Result;

use crate::{
    app::App,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    // The tree still draws without a log file.
    if let Err(e) = initialize_logging() {
        eprintln!("{}: logging disabled: {e}", env!("CARGO_PKG_NAME"));
    }

    initialize_panic_handler()?;

    let mut app = App::new()?;
    app.run().await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
