use crate::domain::benefits::EligibilityJob;
use crate::domain::fax::FaxLine;
use crate::error::Result;
use std::io::Read;

/// Reads a batch of eligibility jobs from a JSON array.
///
/// Jobs nest benefit records and visit limits, so batches travel as JSON
/// rather than flat CSV rows.
pub fn read_jobs<R: Read>(source: R) -> Result<Vec<EligibilityJob>> {
    Ok(serde_json::from_reader(source)?)
}

/// Reads fax-line configuration from a JSON array.
pub fn read_lines<R: Read>(source: R) -> Result<Vec<FaxLine>> {
    Ok(serde_json::from_reader(source)?)
}
