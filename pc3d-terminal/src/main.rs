/// PC3D Terminal - Product configurator demo
///
/// Renders the product proxy in the terminal and lets the user pick its
/// material, color, size and texture.
/// Controls:
///   - Tab / Shift+Tab: Switch attribute tab
///   - 1-4: Select an option in the visible tab
///   - WASD / Arrow Keys: Rotate the product
///   - E/R: Roll rotation
///   - Space: Toggle auto-rotation
///   - Q/ESC: Quit

use anyhow::Context;
use pc3d_terminal::{TerminalApp, ViewerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // stdout belongs to the viewer; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("PC3D Product Configurator - Loading...");

    let mut app = TerminalApp::new(ViewerConfig::default()).context("failed to query terminal size")?;
    app.run().context("terminal viewer failed")?;

    let state = app.session().state();
    println!(
        "Final configuration: material={} color={} size={} texture={}",
        state.material.id(),
        state.color,
        state.size.id(),
        state.texture.id()
    );
    Ok(())
}
