use std::path::Path;

use anyhow::Result;
use model::validate as validate_dataset;
use tracing::{info, trace};

use crate::dataset::load_dataset;

pub fn validate(dataset_path: Option<&Path>) -> Result<()> {
    trace!("Entering validate function");

    let dataset = load_dataset(dataset_path)?;
    let report = validate_dataset(&dataset);

    for issue in &report.issues {
        println!("{}", issue);
    }
    println!(
        "{} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );

    report.into_result()?;
    info!("Dataset is valid");
    Ok(())
}
