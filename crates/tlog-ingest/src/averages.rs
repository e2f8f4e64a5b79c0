//! Cycle averages file loading.

use std::path::Path;

use serde::Deserialize;
use tlog_model::CycleAverages;

use crate::error::{IngestError, Result, io_error};

/// One `Recorrido,Promedio` record.
#[derive(Debug, Deserialize)]
struct AverageRecord {
    #[serde(rename = "Recorrido")]
    route: String,
    #[serde(rename = "Promedio")]
    average: f64,
}

/// Load per-route cycle averages from a CSV file.
///
/// Blank routes are skipped. When a route repeats, the last value wins.
pub fn load_cycle_averages(path: &Path) -> Result<CycleAverages> {
    let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut averages = CycleAverages::new();
    for record in reader.deserialize::<AverageRecord>() {
        let record = record.map_err(|e| IngestError::AveragesRecord {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.route.is_empty() {
            continue;
        }
        if let Some(previous) = averages.insert(record.route.clone(), record.average) {
            tracing::debug!(
                route = %record.route,
                previous,
                average = record.average,
                "duplicate route in averages file; keeping last value"
            );
        }
    }

    tracing::debug!(path = %path.display(), routes = averages.len(), "cycle averages loaded");
    Ok(averages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_averages() {
        let file = create_temp_csv("Recorrido,Promedio\nT1 - Playita,28\n , 40\nT2 - Centro,44.5\nT1 - Playita,30\n");
        let averages = load_cycle_averages(file.path()).unwrap();
        assert_eq!(averages.len(), 2);
        assert_eq!(averages.get("T1 - Playita"), Some(30.0));
        assert_eq!(averages.get("T2 - Centro"), Some(44.5));
    }

    #[test]
    fn test_bad_average_is_reported() {
        let file = create_temp_csv("Recorrido,Promedio\nT1 - Playita,mucho\n");
        let result = load_cycle_averages(file.path());
        assert!(matches!(result, Err(IngestError::AveragesRecord { .. })));
    }
}
