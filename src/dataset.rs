use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use model::demo::dashboard_dataset;
use model::{DashboardDataset, DatasetError};
use tracing::{debug, info};

/// On-disk encodings of a [`DashboardDataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(DatasetFormat::Json),
            Some("yaml") | Some("yml") => Ok(DatasetFormat::Yaml),
            _ => bail!(
                "Cannot tell the format of '{}': use a .json, .yaml or .yml file",
                path.display()
            ),
        }
    }
}

pub fn parse_dataset(text: &str, format: DatasetFormat) -> model::error::Result<DashboardDataset> {
    match format {
        DatasetFormat::Json => serde_json::from_str(text).map_err(|e| DatasetError::Decode(e.to_string())),
        DatasetFormat::Yaml => serde_yaml::from_str(text).map_err(|e| DatasetError::Decode(e.to_string())),
    }
}

pub fn render_dataset(dataset: &DashboardDataset, format: DatasetFormat) -> Result<String> {
    let text = match format {
        DatasetFormat::Json => serde_json::to_string_pretty(dataset)?,
        DatasetFormat::Yaml => serde_yaml::to_string(dataset)?,
    };
    Ok(text)
}

/// Reads the dataset at `path`, or the built-in demo snapshot when there is none.
pub fn load_dataset(path: Option<&Path>) -> Result<DashboardDataset> {
    let Some(path) = path else {
        info!("No dataset given, using the built-in demo snapshot");
        return Ok(dashboard_dataset());
    };

    let format = DatasetFormat::from_path(path)?;
    debug!("Reading {:?} dataset from {}", format, path.display());
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    let dataset = parse_dataset(&text, format).with_context(|| format!("Failed to decode '{}'", path.display()))?;

    info!(
        "Loaded dataset from {}: {} KPIs, {} activity rows",
        path.display(),
        dataset.kpis.len(),
        dataset.table_data.len()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")).unwrap(), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("a.YML")).unwrap(), DatasetFormat::Yaml);
        assert!(DatasetFormat::from_path(Path::new("a.csv")).is_err());
        assert!(DatasetFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_demo_when_no_path() {
        assert_eq!(load_dataset(None).unwrap(), dashboard_dataset());
    }

    #[test]
    fn test_json_and_yaml_files_load() {
        let dir = tempfile::tempdir().unwrap();
        for (name, format) in [("data.json", DatasetFormat::Json), ("data.yaml", DatasetFormat::Yaml)] {
            let path: PathBuf = dir.path().join(name);
            fs::write(&path, render_dataset(&dashboard_dataset(), format).unwrap()).unwrap();

            let loaded = load_dataset(Some(&path)).unwrap();
            assert_eq!(loaded, dashboard_dataset(), "{}", name);
        }
    }

    #[test]
    fn test_provider_json_shape() {
        let text = r#"{
            "kpis": [{"label": "Signups", "value": 10, "change": 1.5, "trend": "sideways"}],
            "revenueChart": [{"name": "Jan", "value": 1}],
            "userChart": [],
            "categoryChart": [],
            "tableData": [{"id": 1, "date": "2024-08-04", "activity": "a", "user": "u", "value": -5, "status": "archived"}]
        }"#;
        let dataset = parse_dataset(text, DatasetFormat::Json).unwrap();

        assert_eq!(dataset.kpis[0].trend, model::Trend::Neutral);
        assert_eq!(dataset.kpis[0].format, model::MetricFormat::Number);
        assert_eq!(dataset.table_data[0].status.as_str(), "archived");
    }

    #[test]
    fn test_decode_error() {
        let err = parse_dataset("{ not json", DatasetFormat::Json).unwrap_err();
        assert!(matches!(err, DatasetError::Decode(_)));
    }
}
