#![allow(dead_code)]

use intake_engine::domain::benefits::{
    BenefitRecord, EligibilityJob, EligibilityStatus, JobStatus, NetworkStatus, TargetType,
};
use intake_engine::domain::fax::{AssignmentRule, FaxLine};
use intake_engine::domain::money::Money;
use rust_decimal_macros::dec;

pub fn eligible_primary() -> BenefitRecord {
    BenefitRecord {
        payer_name: "Aetna".to_string(),
        eligibility_status: EligibilityStatus::Eligible,
        copay: Money(dec!(25)),
        coinsurance_percent: dec!(20),
        deductible_total: Some(Money(dec!(1500))),
        deductible_remaining: Some(Money(dec!(450))),
        out_of_pocket_max: Some(Money(dec!(6000))),
        out_of_pocket_used: Some(Money(dec!(900))),
        visit_limit: None,
        pa_required: false,
        pa_threshold: None,
        network_status: NetworkStatus::InNetwork,
        covers_copay: false,
        covers_coinsurance: false,
        cob_rules: None,
    }
}

pub fn completed_job(results: Vec<BenefitRecord>) -> EligibilityJob {
    EligibilityJob {
        id: "job-1".to_string(),
        target_type: TargetType::Patient,
        status: JobStatus::Completed,
        results,
        estimated_service_cost: Some(Money(dec!(150))),
        pa_obtained: false,
    }
}

pub fn round_robin_line(id: &str, agents: &[&str]) -> FaxLine {
    FaxLine {
        id: id.to_string(),
        phone_number: "+15551230001".to_string(),
        location: None,
        assigned_agents: agents.iter().map(|a| a.to_string()).collect(),
        assignment_rule: AssignmentRule::RoundRobin,
        fixed_owner: None,
        last_assigned_index: None,
        is_active: true,
    }
}
