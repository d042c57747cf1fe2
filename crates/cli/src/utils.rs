use anyhow::{Context, Result};
use std::path::PathBuf;

/// Write `content` to `output`, or to stdout if no path was given.
pub fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Data exported to: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
