//! Patient financial responsibility and the same-day scheduling gate.
//!
//! Both operations are pure reads over a completed [`EligibilityJob`]: same
//! input, same output, no I/O. Coordination of benefits follows the plan
//! documents: the secondary payer offsets the primary's copay and
//! coinsurance when its COB flags say so, and never drives the total below
//! zero.

use crate::domain::benefits::{BenefitRecord, EligibilityJob, EligibilityStatus, NetworkStatus};
use crate::domain::money::Money;
use crate::error::{IntakeError, Result};
use rust_decimal_macros::dec;
use std::fmt;
use tracing::debug;

/// Charge assumed for a standard visit when the coordinator has not entered
/// an estimate.
pub const STANDARD_VISIT_COST: Money = Money(dec!(150.00));

/// Line items behind a quoted patient responsibility, kept separate so the
/// quote can be explained to the patient.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsibilityBreakdown {
    pub service_cost: Money,
    pub copay: Money,
    /// Portion of the visit cost that burns remaining deductible.
    pub deductible_portion: Money,
    /// Primary coinsurance on the post-deductible balance.
    pub coinsurance: Money,
    /// Amount the secondary payer picks up under its COB flags.
    pub secondary_offset: Money,
    /// Final amount owed, clamped at zero and rounded to cents.
    pub total: Money,
}

/// Computes the full responsibility breakdown for a completed job.
///
/// Requires a primary benefit record; a job without one is a caller contract
/// violation and fails with [`IntakeError::MissingPrimaryBenefit`]. A missing
/// deductible contributes nothing, and a missing service cost falls back to
/// [`STANDARD_VISIT_COST`].
pub fn responsibility_breakdown(job: &EligibilityJob) -> Result<ResponsibilityBreakdown> {
    let primary = job
        .primary()
        .ok_or_else(|| IntakeError::MissingPrimaryBenefit(job.id.clone()))?;
    let service_cost = job.estimated_service_cost.unwrap_or(STANDARD_VISIT_COST);

    let copay = primary.copay;
    let deductible_remaining = primary.deductible_remaining.unwrap_or(Money::ZERO);

    // Whatever the copay doesn't cover burns deductible first, capped by what
    // remains on the deductible.
    let deductible_portion = service_cost
        .saturating_sub(copay)
        .min(deductible_remaining);
    let after_deductible = service_cost
        .saturating_sub(copay)
        .saturating_sub(deductible_portion);
    let coinsurance = after_deductible.percent(primary.coinsurance_percent);

    let before_cob = copay + deductible_portion + coinsurance;
    let secondary_offset = job
        .secondary()
        .map(|s| cob_offset(s, copay, coinsurance))
        .unwrap_or(Money::ZERO);

    let total = before_cob.saturating_sub(secondary_offset).round_to_cents();

    debug!(
        job_id = %job.id,
        %service_cost,
        %deductible_portion,
        %coinsurance,
        %secondary_offset,
        %total,
        "computed patient responsibility"
    );

    Ok(ResponsibilityBreakdown {
        service_cost,
        copay,
        deductible_portion,
        coinsurance,
        secondary_offset,
        total,
    })
}

/// The patient's out-of-pocket responsibility for the visit, in dollars.
pub fn patient_responsibility(job: &EligibilityJob) -> Result<Money> {
    responsibility_breakdown(job).map(|b| b.total)
}

fn cob_offset(secondary: &BenefitRecord, copay: Money, coinsurance: Money) -> Money {
    let mut offset = Money::ZERO;
    if secondary.covers_copay {
        offset += copay;
    }
    if secondary.covers_coinsurance {
        offset += coinsurance;
    }
    offset
}

/// A reason the front desk cannot book the patient today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingBlock {
    /// No completed primary benefit record to schedule against.
    NoPrimaryCoverage,
    /// Primary eligibility came back anything other than eligible.
    NotEligible(EligibilityStatus),
    OutOfNetwork,
    /// Prior authorization is mandatory at this visit count and none is on
    /// file.
    PriorAuthorizationNeeded,
    /// The benefit period's visit allowance is used up.
    VisitLimitReached,
}

impl fmt::Display for SchedulingBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPrimaryCoverage => write!(f, "no primary coverage"),
            Self::NotEligible(status) => write!(f, "not eligible ({status:?})"),
            Self::OutOfNetwork => write!(f, "out of network"),
            Self::PriorAuthorizationNeeded => write!(f, "prior authorization needed"),
            Self::VisitLimitReached => write!(f, "visit limit reached"),
        }
    }
}

/// Every reason the job blocks same-day scheduling, in evaluation order.
///
/// Fails closed: a job with no verified primary record blocks outright.
/// Missing data is always blocking, never permissive. In particular,
/// a PA threshold with no visit count to compare against blocks until the
/// count is verified or an authorization is attested.
pub fn scheduling_blocks(job: &EligibilityJob) -> Vec<SchedulingBlock> {
    let Some(primary) = job.primary() else {
        return vec![SchedulingBlock::NoPrimaryCoverage];
    };

    let mut blocks = Vec::new();

    if primary.eligibility_status != EligibilityStatus::Eligible {
        blocks.push(SchedulingBlock::NotEligible(primary.eligibility_status));
    }

    if primary.network_status == NetworkStatus::OutOfNetwork {
        blocks.push(SchedulingBlock::OutOfNetwork);
    }

    if primary.pa_required
        && !job.pa_obtained
        && let Some(threshold) = primary.pa_threshold
        && primary
            .visit_limit
            .as_ref()
            .map_or(true, |limit| limit.used >= threshold)
    {
        blocks.push(SchedulingBlock::PriorAuthorizationNeeded);
    }

    if primary
        .visit_limit
        .as_ref()
        .is_some_and(|limit| limit.exhausted())
    {
        blocks.push(SchedulingBlock::VisitLimitReached);
    }

    blocks
}

/// Whether the patient can be put on today's schedule.
pub fn can_schedule_today(job: &EligibilityJob) -> bool {
    scheduling_blocks(job).is_empty()
}
