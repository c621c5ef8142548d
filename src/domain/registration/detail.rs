//! Per-category detail record collected at step 3.

use serde::{Deserialize, Serialize};

use super::StakeholderCategory;

/// Step-3 detail fields, one variant per stakeholder category.
///
/// Serialises untagged: the variant's fields merge flat into the
/// registration payload, alongside the separately supplied `user_type`
/// discriminant. Exactly one variant is ever populated, and it must match
/// the step-2 selection (checked by [`StakeholderDetail::category`] at
/// request assembly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StakeholderDetail {
    Student {
        college_name: String,
        degree: String,
        specialization: String,
        key_skills: String,
        preferred_mode: String,
        #[serde(default)]
        experience_projects: String,
    },
    Freelancer {
        freelancer_type: String,
        #[serde(default)]
        custom_freelancer_type: String,
        primary_skills: String,
        experience_level: String,
        availability: String,
        preferred_mode: String,
    },
    EducationalInstitution {
        institution_name: String,
        institution_type: String,
        #[serde(default)]
        custom_institution_type: String,
        affiliated_university_board: String,
        year_of_establishment: u32,
        courses_offered: String,
        departments_streams: String,
        total_students_approx: u32,
        institution_location: String,
    },
    StartupMsme {
        startup_type: String,
        startup_stage: String,
        business_location: String,
        year_of_establishment: u32,
        industry_domain: String,
    },
    IncubationCentre {
        incubation_centre_name: String,
        incubation_type: String,
        #[serde(default)]
        custom_incubation_type: String,
        year_of_establishment: u32,
        focus_areas: String,
        startup_stages_supported: String,
        facilities_provided: String,
        centre_location: String,
    },
    ServiceProvider {
        company_brand_name: String,
        provider_type: String,
        #[serde(default)]
        custom_provider_type: String,
        services_products_offered: String,
        years_of_experience: u32,
        client_type: String,
        #[serde(default)]
        custom_client_type: String,
        operating_location: String,
    },
    Industry {
        organization_company_name: String,
        organization_type: String,
        #[serde(default)]
        custom_organization_type: String,
        industry_sector_domain: String,
        year_of_establishment: u32,
        company_size: String,
        operational_location: String,
    },
    Investor {
        investor_type: String,
        #[serde(default)]
        custom_investor_type: String,
        preferred_investment_stage: String,
        typical_investment_size: String,
        preferred_sectors: String,
        preferred_geography: String,
    },
}

impl StakeholderDetail {
    /// The category this detail record belongs to.
    pub fn category(&self) -> StakeholderCategory {
        match self {
            StakeholderDetail::Student { .. } => StakeholderCategory::Students,
            StakeholderDetail::Freelancer { .. } => StakeholderCategory::Freelancers,
            StakeholderDetail::EducationalInstitution { .. } => StakeholderCategory::Educational,
            StakeholderDetail::StartupMsme { .. } => StakeholderCategory::Startups,
            StakeholderDetail::IncubationCentre { .. } => StakeholderCategory::Incubation,
            StakeholderDetail::ServiceProvider { .. } => StakeholderCategory::ServiceProviders,
            StakeholderDetail::Industry { .. } => StakeholderCategory::Industry,
            StakeholderDetail::Investor { .. } => StakeholderCategory::ProjectPartner,
        }
    }
}
