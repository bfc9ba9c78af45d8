use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Eligibility status reported by the payer for one benefit record.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
    /// The payer is a secondary, coordinating with a primary plan.
    Secondary,
    Unknown,
}

/// Provider network relationship for the plan.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkStatus {
    InNetwork,
    OutOfNetwork,
    Participating,
    Unknown,
}

/// Visit allowance tracked by the payer for a benefit period.
///
/// `used` may exceed `allowed`; over-limit is a valid state the payer
/// reports, flagged rather than rejected.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct VisitLimit {
    pub allowed: u32,
    pub used: u32,
    /// Benefit period the allowance applies to, e.g. "calendar year".
    pub period: String,
}

impl VisitLimit {
    pub fn exhausted(&self) -> bool {
        self.used >= self.allowed
    }
}

/// One payer's verified benefit data for a patient.
///
/// Produced by an external eligibility-verification workflow; every optional
/// field is genuinely absent-vs-zero, never conflated. Within a job, records
/// are ordered primary first, secondary (if any) second.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct BenefitRecord {
    pub payer_name: String,
    pub eligibility_status: EligibilityStatus,
    /// Flat per-visit charge.
    #[serde(default)]
    pub copay: Money,
    /// Percentage (0-100) of post-deductible cost owed by the patient.
    #[serde(default)]
    pub coinsurance_percent: Decimal,
    #[serde(default)]
    pub deductible_total: Option<Money>,
    #[serde(default)]
    pub deductible_remaining: Option<Money>,
    /// Carried for display; not part of the responsibility formula.
    #[serde(default)]
    pub out_of_pocket_max: Option<Money>,
    #[serde(default)]
    pub out_of_pocket_used: Option<Money>,
    #[serde(default)]
    pub visit_limit: Option<VisitLimit>,
    #[serde(default)]
    pub pa_required: bool,
    /// Visit count at and above which prior authorization becomes mandatory.
    #[serde(default)]
    pub pa_threshold: Option<u32>,
    pub network_status: NetworkStatus,
    /// Secondary-only: whether this payer picks up the primary's copay.
    #[serde(default)]
    pub covers_copay: bool,
    /// Secondary-only: whether this payer picks up the primary's coinsurance.
    #[serde(default)]
    pub covers_coinsurance: bool,
    /// Free-text coordination-of-benefits notes. Not authoritative.
    #[serde(default)]
    pub cob_rules: Option<String>,
}

/// What kind of record an eligibility job was run against.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Patient,
    Lead,
    Referral,
}

/// Lifecycle of a verification job. Terminal once `Completed`; retry and
/// resume belong to the workflow that created the job.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
}

/// An eligibility-verification job and its verified benefit records.
///
/// `results[0]` is the primary payer, `results[1]` the secondary when
/// present. The external verification workflow owns the lifecycle; the
/// engines only read the completed data.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EligibilityJob {
    pub id: String,
    pub target_type: TargetType,
    pub status: JobStatus,
    #[serde(default)]
    pub results: Vec<BenefitRecord>,
    /// Expected charge for the visit being quoted. Falls back to the
    /// standard visit cost when the coordinator has not entered one.
    #[serde(default)]
    pub estimated_service_cost: Option<Money>,
    /// Manually attested by staff once an authorization number is on file.
    #[serde(default)]
    pub pa_obtained: bool,
}

impl EligibilityJob {
    pub fn primary(&self) -> Option<&BenefitRecord> {
        self.results.first()
    }

    pub fn secondary(&self) -> Option<&BenefitRecord> {
        self.results.get(1)
    }
}
