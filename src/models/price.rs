use super::series::Series;
use serde::Deserialize;

/// One observation of one price benchmark at one period.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricePoint {
    pub period: String,
    pub benchmark: String,
    pub value: f64,
}

/// The full `/api/price` response, in the order the API returned it.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceHistory {
    data: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(data: Vec<PricePoint>) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Distinct benchmark names, in first-seen order.
    pub fn benchmarks(&self) -> Vec<String> {
        let mut benchmarks: Vec<String> = Vec::new();
        for point in &self.data {
            if !benchmarks.iter().any(|b| *b == point.benchmark) {
                benchmarks.push(point.benchmark.clone());
            }
        }
        benchmarks
    }

    /// Distinct periods across all benchmarks, in first-seen order.
    pub fn periods(&self) -> Vec<String> {
        let mut periods: Vec<String> = Vec::new();
        for point in &self.data {
            if !periods.iter().any(|p| *p == point.period) {
                periods.push(point.period.clone());
            }
        }
        periods
    }

    /// One line series per distinct benchmark, in first-seen benchmark order.
    /// Each series keeps its points in the order the API returned them; no
    /// re-sorting by period happens here.
    pub fn series(&self) -> Vec<Series> {
        self.benchmarks()
            .into_iter()
            .map(|name| {
                let mut series = Series::new(name.clone());
                for point in self.data.iter().filter(|p| p.benchmark == name) {
                    series.push(point.period.clone(), point.value);
                }
                series
            })
            .collect()
    }
}
