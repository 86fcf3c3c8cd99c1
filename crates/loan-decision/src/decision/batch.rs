use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::DecisionRequest;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid batch CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    personal_code: String,
    loan_amount: i64,
    loan_period: i32,
}

/// Reads decision requests from a CSV export with `personal_code,loan_amount,loan_period`
/// headers.
pub struct BatchRequestImporter;

impl BatchRequestImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DecisionRequest>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<DecisionRequest>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut requests = Vec::new();
        for row in csv_reader.deserialize::<BatchRow>() {
            let row = row?;
            requests.push(DecisionRequest::new(
                row.personal_code,
                row.loan_amount,
                row.loan_period,
            ));
        }

        Ok(requests)
    }
}
