//! Build script for PlayURMood.
//!
//! Copies `.env.example` into the local data directory
//! (`~/.local/share/playurmood` on Linux) so a configuration template is
//! waiting next to where `.env` is read from. A missing template only warns.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playurmood");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
