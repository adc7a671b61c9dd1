//! Pillarbox viewer binary: runs the instanced pillar-field animation.

use std::path::Path;

use pillarbox::{Options, PaletteKey, Viewer};

/// Interpret the CLI argument as either a TOML preset path or a palette key.
fn resolve_options(input: &str) -> Result<Options, String> {
    if Path::new(input)
        .extension()
        .is_some_and(|ext| ext == "toml")
    {
        return Options::load(Path::new(input)).map_err(|e| e.to_string());
    }

    let palette: PaletteKey = input.parse().map_err(|e| format!("{e}"))?;
    let mut options = Options::default();
    options.scene.palette = palette;
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(arg) => match resolve_options(&arg) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                log::error!("Usage: pillarbox [PALETTE or preset.toml]");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
