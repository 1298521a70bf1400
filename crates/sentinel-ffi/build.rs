//! Regenerates `include/sentinel.h` from the exported functions.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let config_path = crate_dir.join("cbindgen.toml");
    let header_path = crate_dir.join("include").join("sentinel.h");

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed={}", config_path.display());

    let config = cbindgen::Config::from_file(&config_path)?;
    if let Some(include_dir) = header_path.parent() {
        fs::create_dir_all(include_dir)?;
    }

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()?
        .write_to_file(&header_path);
    Ok(())
}
