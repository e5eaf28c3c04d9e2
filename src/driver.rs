use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::error::{Error, Result};

/// Generates every manifest icon under the current directory.
pub fn run() -> ExitCode {
    run_in(Path::new("."))
}

pub fn run_in(root: &Path) -> ExitCode {
    println!("Generating VacaTrack PWA icons...\n");

    match generate_all(root) {
        Ok(_) => {
            println!("\nAll icons generated successfully!");
            println!("\nNote: These are placeholder icons. Consider replacing them with");
            println!("professionally designed icons for production use.");
            ExitCode::SUCCESS
        }
        Err(Error::MissingImaging) => {
            eprintln!("Error: image rendering support is not available in this build.");
            eprintln!("Rebuild with it enabled: cargo install --path . --features render");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(error = %e, "icon generation failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Creates `root/public` and writes the five icons in order, stopping at the first failure.
/// Returns the written paths.
#[cfg(feature = "render")]
pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>> {
    use crate::config::{ICON_SPECS, OUTPUT_DIR};
    use crate::icon;

    let out_dir = root.join(OUTPUT_DIR);
    std::fs::create_dir_all(&out_dir).map_err(|e| Error::io(&out_dir, e))?;

    let mut written = Vec::with_capacity(ICON_SPECS.len());
    for spec in ICON_SPECS {
        let path = root.join(spec.path);
        icon::generate(spec.size, &path)?;
        println!("Generated {}", spec.path);
        written.push(path);
    }
    Ok(written)
}

/// Without the raster stack nothing is touched on disk.
#[cfg(not(feature = "render"))]
pub fn generate_all(_root: &Path) -> Result<Vec<PathBuf>> {
    Err(Error::MissingImaging)
}
