use crate::application::benefits::{patient_responsibility, scheduling_blocks};
use crate::application::routing::Assignment;
use crate::domain::benefits::{EligibilityJob, JobStatus, TargetType};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the coordinator-facing triage report.
#[derive(Debug, Serialize, PartialEq)]
pub struct TriageRow {
    pub job_id: String,
    pub target_type: TargetType,
    pub status: JobStatus,
    /// Empty until verification completes.
    pub patient_owes: String,
    pub schedulable: bool,
    /// Semicolon-separated blocking reasons.
    pub blocks: String,
}

impl TriageRow {
    /// Builds a report row for one job.
    ///
    /// Jobs still pending or running report no amount and stay
    /// non-schedulable; completed jobs without a primary record fail loud so
    /// the broken job surfaces instead of printing a zero quote.
    pub fn from_job(job: &EligibilityJob) -> Result<Self> {
        let (patient_owes, schedulable, blocks) = match job.status {
            JobStatus::Completed => {
                let owes = patient_responsibility(job)?;
                let blocks = scheduling_blocks(job);
                let joined = blocks
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                (owes.to_string(), blocks.is_empty(), joined)
            }
            _ => (
                String::new(),
                false,
                "verification incomplete".to_string(),
            ),
        };

        Ok(Self {
            job_id: job.id.clone(),
            target_type: job.target_type,
            status: job.status,
            patient_owes,
            schedulable,
            blocks,
        })
    }
}

/// Writes the triage report as CSV to any `Write` sink.
pub struct TriageReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TriageReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_rows(&mut self, rows: impl IntoIterator<Item = TriageRow>) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// One routed document in a routing-simulation log.
#[derive(Debug, Serialize, PartialEq)]
pub struct AssignmentRow {
    pub line_id: String,
    /// 1-based document sequence number within the simulation.
    pub document: usize,
    /// Empty when the line leaves documents to manual triage.
    pub assignee: String,
    pub next_index: Option<usize>,
}

impl AssignmentRow {
    pub fn new(line_id: &str, document: usize, assignment: &Assignment) -> Self {
        Self {
            line_id: line_id.to_string(),
            document,
            assignee: assignment.assignee.clone().unwrap_or_default(),
            next_index: assignment.next_index,
        }
    }
}

/// Writes the assignment log as CSV to any `Write` sink.
pub struct AssignmentLogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AssignmentLogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: AssignmentRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
