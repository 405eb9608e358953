use std::collections::HashMap;

use super::energy::EnergyType;
use super::error::AppError;
use super::series::Series;
use serde::Deserialize;

/// Year values arrive as JSON numbers or strings depending on the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(year) => f.write_str(year),
        }
    }
}

/// One yearly production/consumption observation for one energy type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProdConsRow {
    #[serde(rename = "Year")]
    pub year: Year,

    #[serde(rename = "Production")]
    pub production: f64,

    // At least one deployed backend spells this field "Consumtion" on the wire.
    #[serde(rename = "Consumption", alias = "Consumtion")]
    pub consumption: f64,
}

/// The `/api/prod-cons` response: yearly rows partitioned by energy-type key.
/// Lookups are validated; a key missing from the response surfaces as a typed
/// error instead of an unchecked index.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProdConsData {
    partitions: HashMap<String, Vec<ProdConsRow>>,
}

impl ProdConsData {
    pub fn new(partitions: HashMap<String, Vec<ProdConsRow>>) -> Self {
        Self { partitions }
    }

    /// Rows for the given energy type, if its partition is present.
    pub fn rows(&self, energy: EnergyType) -> Result<&[ProdConsRow], AppError> {
        self.partitions
            .get(energy.key())
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::SelectionError(energy.label().to_string()))
    }

    /// Production and Consumption series for the given energy type, in that
    /// fixed order. Both series span the same years and have the same length
    /// as the partition's row sequence.
    pub fn series(&self, energy: EnergyType) -> Result<(Series, Series), AppError> {
        let rows = self.rows(energy)?;

        let mut production = Series::new("Production");
        let mut consumption = Series::new("Consumption");
        for row in rows {
            production.push(row.year.to_string(), row.production);
            consumption.push(row.year.to_string(), row.consumption);
        }

        Ok((production, consumption))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i64, production: f64, consumption: f64) -> ProdConsRow {
        ProdConsRow {
            year: Year::Number(year),
            production,
            consumption,
        }
    }

    fn sample() -> ProdConsData {
        let mut partitions = HashMap::new();
        partitions.insert("oil".to_string(), vec![row(2020, 10.0, 8.0)]);
        partitions.insert("gas".to_string(), vec![row(2020, 5.0, 6.0)]);
        ProdConsData::new(partitions)
    }

    #[test]
    fn test_series_for_selected_partition() {
        let data = sample();
        let (production, consumption) = data.series(EnergyType::Oil).unwrap();

        assert_eq!(production.name, "Production");
        assert_eq!(consumption.name, "Consumption");
        assert_eq!(production.x, vec!["2020"]);
        assert_eq!(production.y, vec![10.0]);
        assert_eq!(consumption.y, vec![8.0]);
    }

    #[test]
    fn test_series_lengths_match_row_count() {
        let mut partitions = HashMap::new();
        partitions.insert(
            "gas".to_string(),
            vec![row(2019, 4.0, 5.0), row(2020, 5.0, 6.0), row(2021, 6.0, 6.5)],
        );
        let data = ProdConsData::new(partitions);

        let (production, consumption) = data.series(EnergyType::Gas).unwrap();
        assert_eq!(production.len(), 3);
        assert_eq!(consumption.len(), 3);
        assert_eq!(production.x, consumption.x);
    }

    #[test]
    fn test_missing_partition_is_a_selection_error() {
        let mut partitions = HashMap::new();
        partitions.insert("oil".to_string(), vec![row(2020, 10.0, 8.0)]);
        let data = ProdConsData::new(partitions);

        assert_eq!(
            data.series(EnergyType::Gas),
            Err(AppError::SelectionError("Gas".to_string()))
        );
    }

    #[test]
    fn test_row_accepts_misspelled_consumption_field() {
        let json = r#"{"Year": 2020, "Production": 10.0, "Consumtion": 8.0}"#;
        let row: ProdConsRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.consumption, 8.0);

        let corrected = r#"{"Year": 2020, "Production": 10.0, "Consumption": 8.0}"#;
        let corrected_row: ProdConsRow = serde_json::from_str(corrected).unwrap();
        assert_eq!(row, corrected_row);
    }

    #[test]
    fn test_year_accepts_number_or_string() {
        let numeric: ProdConsRow =
            serde_json::from_str(r#"{"Year": 2020, "Production": 1.0, "Consumption": 2.0}"#)
                .unwrap();
        assert_eq!(numeric.year, Year::Number(2020));
        assert_eq!(numeric.year.to_string(), "2020");

        let text: ProdConsRow =
            serde_json::from_str(r#"{"Year": "2020", "Production": 1.0, "Consumption": 2.0}"#)
                .unwrap();
        assert_eq!(text.year, Year::Text("2020".to_string()));
        assert_eq!(text.year.to_string(), "2020");
    }
}
