//! Load batches of scenarios from CSV
//!
//! Empty cells fall back to the dashboard defaults, so a file only needs the
//! columns it wants to vary.

use super::{NamedScenario, ScenarioInputs};
use crate::error::LoadError;
use csv::Reader;
use log::info;
use std::path::Path;

/// Raw CSV row; every column except `name` is optional
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    name: Option<String>,
    crew_count: Option<u32>,
    contestant_count: Option<u32>,
    include_spectators: Option<bool>,
    spectator_count: Option<u32>,
    ticket_price_millions: Option<f64>,
    scale_capex: Option<bool>,
    use_amortization: Option<bool>,
    amortization_years: Option<u32>,
    manual_amortization_override: Option<bool>,
    manual_amortization_millions: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, line: u64) -> Result<NamedScenario, LoadError> {
        let inputs = ScenarioInputs {
            crew_count: self.crew_count,
            contestant_count: self.contestant_count,
            include_spectators: self.include_spectators,
            spectator_count: self.spectator_count,
            ticket_price_millions: self.ticket_price_millions,
            scale_capex_for_extra_capacity: self.scale_capex,
            use_amortization: self.use_amortization,
            amortization_years: self.amortization_years,
            manual_amortization_override: self.manual_amortization_override,
            manual_amortization_millions: self.manual_amortization_millions,
        };
        let params = inputs.resolve();
        params
            .validate()
            .map_err(|source| LoadError::InvalidRow { line, source })?;

        Ok(NamedScenario {
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("scenario-{}", line - 1)),
            params,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedScenario>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // header occupies line 1
        let line = idx as u64 + 2;
        scenarios.push(row.into_scenario(line)?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,crew_count,contestant_count,include_spectators,spectator_count,ticket_price_millions,scale_capex,use_amortization,amortization_years,manual_amortization_override,manual_amortization_millions
baseline,,,,,,,,,,
spectators,,,true,50,60,,,,,
bigger crew,20,,,,,true,false,,,
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).expect("sample should load");
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].params.crew_count, 15);
        assert!(scenarios[0].params.use_amortization);

        assert!(scenarios[1].params.include_spectators);
        assert_eq!(scenarios[1].params.spectator_count, 50);

        assert_eq!(scenarios[2].name, "bigger crew");
        assert_eq!(scenarios[2].params.crew_count, 20);
        assert!(scenarios[2].params.scale_capex_for_extra_capacity);
        assert!(!scenarios[2].params.use_amortization);
    }

    #[test]
    fn test_missing_columns_and_names_default() {
        let csv = "crew_count\n16\n";
        let scenarios = load_scenarios_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios[0].name, "scenario-1");
        assert_eq!(scenarios[0].params.crew_count, 16);
        assert_eq!(scenarios[0].params.contestant_count, 12);
    }

    #[test]
    fn test_invalid_row_reports_line() {
        let csv = "name,amortization_years\nok,10\nbad,0\n";
        match load_scenarios_from_reader(csv.as_bytes()) {
            Err(LoadError::InvalidRow { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source.field(), "amortization_years");
            }
            other => panic!("expected InvalidRow, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_cell_is_csv_error() {
        let csv = "name,crew_count\nx,many\n";
        assert!(matches!(
            load_scenarios_from_reader(csv.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }
}
