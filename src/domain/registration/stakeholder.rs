//! Stakeholder category enumeration and the step-2 selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The applicant's self-declared stakeholder type.
///
/// A closed enumeration: every category carries a wizard id (used in step
/// routing and session blobs), an API `user_type` slug, a display title,
/// and an annual membership fee. Because the fee table is total over the
/// enum, an unpriced category is unrepresentable; there is no fallback
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StakeholderCategory {
    Students,
    Freelancers,
    Educational,
    Startups,
    Incubation,
    ServiceProviders,
    Industry,
    ProjectPartner,
}

impl StakeholderCategory {
    /// All categories, in the order the step-2 cards present them.
    pub const ALL: [StakeholderCategory; 8] = [
        StakeholderCategory::Students,
        StakeholderCategory::Freelancers,
        StakeholderCategory::Educational,
        StakeholderCategory::Startups,
        StakeholderCategory::Incubation,
        StakeholderCategory::ServiceProviders,
        StakeholderCategory::Industry,
        StakeholderCategory::ProjectPartner,
    ];

    /// Wizard-facing identifier, as used in session blobs and routing.
    pub fn id(&self) -> &'static str {
        match self {
            StakeholderCategory::Students => "students",
            StakeholderCategory::Freelancers => "freelancers",
            StakeholderCategory::Educational => "educational",
            StakeholderCategory::Startups => "startups",
            StakeholderCategory::Incubation => "incubation",
            StakeholderCategory::ServiceProviders => "service-providers",
            StakeholderCategory::Industry => "industry",
            StakeholderCategory::ProjectPartner => "project-partner",
        }
    }

    /// The `user_type` slug expected by the registration and payment APIs.
    pub fn user_type(&self) -> &'static str {
        match self {
            StakeholderCategory::Students => "student",
            StakeholderCategory::Freelancers => "freelancer",
            StakeholderCategory::Educational => "educational_institute",
            StakeholderCategory::Startups => "startup_msme",
            StakeholderCategory::Incubation => "incubation_centre",
            StakeholderCategory::ServiceProviders => "service_product_provider",
            StakeholderCategory::Industry => "industry",
            StakeholderCategory::ProjectPartner => "investor",
        }
    }

    /// Display title shown on the selection card and the success page.
    pub fn title(&self) -> &'static str {
        match self {
            StakeholderCategory::Students => "Students",
            StakeholderCategory::Freelancers => "Freelancers",
            StakeholderCategory::Educational => "Educational Institutions",
            StakeholderCategory::Startups => "Startups & MSMEs",
            StakeholderCategory::Incubation => "Incubation Centres",
            StakeholderCategory::ServiceProviders => "Service & Product Providers",
            StakeholderCategory::Industry => "Industry",
            StakeholderCategory::ProjectPartner => "Project Partner",
        }
    }

    /// Annual membership fee in whole rupees.
    pub fn annual_fee_inr(&self) -> u64 {
        match self {
            StakeholderCategory::Students => 1000,
            StakeholderCategory::Freelancers => 5000,
            StakeholderCategory::Educational => 10_000,
            StakeholderCategory::Startups => 10_000,
            StakeholderCategory::Incubation => 10_000,
            StakeholderCategory::ServiceProviders => 25_000,
            StakeholderCategory::Industry => 25_000,
            StakeholderCategory::ProjectPartner => 25_000,
        }
    }
}

impl fmt::Display for StakeholderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for StakeholderCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StakeholderCategory::ALL
            .into_iter()
            .find(|c| c.id() == s || c.user_type() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "stakeholder_category",
                    format!("Unknown stakeholder type: {}", s),
                )
            })
    }
}

/// The step-2 choice: category plus resolved title and price.
///
/// `price_inr` defaults to the category's fee table entry; a server-supplied
/// price, when present, takes precedence at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderSelection {
    pub category: StakeholderCategory,
    pub title: String,
    pub price_inr: u64,
}

impl StakeholderSelection {
    /// Selects a category at its table price.
    pub fn new(category: StakeholderCategory) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            price_inr: category.annual_fee_inr(),
        }
    }

    /// Selects a category with a server-supplied price override.
    pub fn with_server_price(category: StakeholderCategory, price_inr: u64) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            price_inr,
        }
    }
}
