use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use model::demo::dashboard_dataset;
use tracing::{info, trace};

use crate::dataset::{render_dataset, DatasetFormat};

pub fn export(format: DatasetFormat, output: Option<&Path>) -> Result<()> {
    trace!("Entering export function");

    let text = render_dataset(&dashboard_dataset(), format)?;
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Demo dataset written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_dataset;

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.yaml");

        export(DatasetFormat::Yaml, Some(&path)).unwrap();
        assert_eq!(load_dataset(Some(&path)).unwrap(), dashboard_dataset());
    }
}
