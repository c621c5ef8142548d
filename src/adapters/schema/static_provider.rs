//! Static field schema, used when the schema endpoints are unreachable.
//!
//! The field sets mirror the registration payload: every definition's
//! `name` is the payload key the form value lands in.

use async_trait::async_trait;

use crate::domain::registration::{FALLBACK_OBJECTIVES, StakeholderCategory};
use crate::ports::{ApiError, FieldDef, FieldType, SchemaProvider, UserTypeOption};

fn field(name: &str, label: &str, field_type: FieldType, required: bool) -> FieldDef {
    FieldDef {
        name: name.to_string(),
        label: label.to_string(),
        field_type,
        required,
        options: Vec::new(),
        min_length: None,
        max_length: None,
        placeholder: Some(format!("Enter {}", label.to_lowercase())),
        helper_text: None,
    }
}

fn text(name: &str, label: &str) -> FieldDef {
    field(name, label, FieldType::Text, true)
}

fn textarea(name: &str, label: &str) -> FieldDef {
    field(name, label, FieldType::Textarea, true)
}

fn number(name: &str, label: &str) -> FieldDef {
    field(name, label, FieldType::Number, true)
}

fn select(name: &str, label: &str, options: &[&str]) -> FieldDef {
    FieldDef {
        options: options.iter().map(|o| o.to_string()).collect(),
        placeholder: None,
        ..field(name, label, FieldType::Select, true)
    }
}

const PREFERRED_MODES: [&str; 3] = ["Online", "Offline", "Hybrid"];

/// Schema provider backed by the built-in catalog.
#[derive(Debug, Default)]
pub struct StaticSchemaProvider;

impl StaticSchemaProvider {
    pub fn new() -> Self {
        Self
    }

    fn detail_fields(category: StakeholderCategory) -> Vec<FieldDef> {
        match category {
            StakeholderCategory::Students => vec![
                text("college_name", "College/University Name"),
                text("degree", "Course/Degree"),
                text("specialization", "Specialization/Stream"),
                textarea("key_skills", "Key Skills"),
                select("preferred_mode", "Preferred Mode", &PREFERRED_MODES),
                FieldDef {
                    required: false,
                    ..textarea("experience_projects", "Experience/Projects (if any)")
                },
            ],
            StakeholderCategory::Freelancers => vec![
                select(
                    "freelancer_type",
                    "Freelancer Type",
                    &[
                        "Developer",
                        "Designer",
                        "Writer",
                        "Consultant",
                        "Marketing",
                        "Finance",
                        "Legal",
                        "Other",
                    ],
                ),
                textarea("primary_skills", "Primary Skills"),
                select(
                    "experience_level",
                    "Experience Level",
                    &["Entry Level", "Intermediate", "Experienced", "Expert"],
                ),
                select(
                    "availability",
                    "Availability",
                    &["Full Time", "Part Time", "Freelance", "Contract"],
                ),
                select("preferred_mode", "Preferred Work Mode", &PREFERRED_MODES),
            ],
            StakeholderCategory::Educational => vec![
                text("institution_name", "Institution Name"),
                select(
                    "institution_type",
                    "Institution Type",
                    &["School", "College", "University", "Training Institute", "Other"],
                ),
                text("affiliated_university_board", "Affiliated University/Board"),
                number("year_of_establishment", "Year of Establishment"),
                textarea("courses_offered", "Courses Offered"),
                text("departments_streams", "Departments/Streams"),
                number("total_students_approx", "Total Students (Approx)"),
                text("institution_location", "Institution Location"),
            ],
            StakeholderCategory::Startups => vec![
                select(
                    "startup_type",
                    "Startup Type",
                    &[
                        "Product Based",
                        "Service Based",
                        "Hybrid",
                        "E-Commerce",
                        "SaaS",
                        "Other",
                    ],
                ),
                select(
                    "startup_stage",
                    "Startup Stage",
                    &[
                        "Idea Stage",
                        "Prototype",
                        "MVP",
                        "Early Revenue",
                        "Growth Stage",
                        "Established",
                    ],
                ),
                text("business_location", "Business Location"),
                number("year_of_establishment", "Year of Establishment"),
                text("industry_domain", "Industry/Domain"),
            ],
            StakeholderCategory::Incubation => vec![
                text("incubation_centre_name", "Incubation Centre Name"),
                select(
                    "incubation_type",
                    "Incubation Type",
                    &[
                        "Government",
                        "Private",
                        "Academic",
                        "Corporate",
                        "Non-Profit",
                        "Other",
                    ],
                ),
                number("year_of_establishment", "Year of Establishment"),
                text("focus_areas", "Focus Areas"),
                text("startup_stages_supported", "Startup Stages Supported"),
                text("facilities_provided", "Facilities Provided"),
                text("centre_location", "Centre Location"),
            ],
            StakeholderCategory::ServiceProviders => vec![
                text("company_brand_name", "Company/Brand Name"),
                select(
                    "provider_type",
                    "Provider Type",
                    &[
                        "Product Provider",
                        "Service Provider",
                        "Both",
                        "Consultant",
                        "Agency",
                        "Other",
                    ],
                ),
                textarea("services_products_offered", "Services/Products Offered"),
                number("years_of_experience", "Years of Experience"),
                select(
                    "client_type",
                    "Client Type",
                    &["B2B", "B2C", "B2G", "Enterprise", "SME", "Startups", "All"],
                ),
                text("operating_location", "Operating Location"),
            ],
            StakeholderCategory::Industry => vec![
                text("organization_company_name", "Organization/Company Name"),
                select(
                    "organization_type",
                    "Organization Type",
                    &[
                        "Private",
                        "Public",
                        "Government",
                        "MNC",
                        "Partnership",
                        "Proprietorship",
                        "Other",
                    ],
                ),
                text("industry_sector_domain", "Industry Sector/Domain"),
                number("year_of_establishment", "Year of Establishment"),
                select(
                    "company_size",
                    "Company Size",
                    &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"],
                ),
                text("operational_location", "Operational Location"),
            ],
            StakeholderCategory::ProjectPartner => vec![
                select(
                    "investor_type",
                    "Investor Type",
                    &["Angel", "VC", "Corporate", "Family Office", "Other"],
                ),
                text("preferred_investment_stage", "Preferred Investment Stage"),
                text("typical_investment_size", "Typical Investment Size"),
                text("preferred_sectors", "Preferred Sectors"),
                text("preferred_geography", "Preferred Geography"),
            ],
        }
    }
}

#[async_trait]
impl SchemaProvider for StaticSchemaProvider {
    async fn common_fields(&self) -> Result<Vec<FieldDef>, ApiError> {
        Ok(vec![
            text("full_name", "Full Name"),
            FieldDef {
                helper_text: Some("This will be your User ID".to_string()),
                ..field("email", "Email Address", FieldType::Email, true)
            },
            field("phone_number", "Mobile Number", FieldType::Tel, true),
            field("password", "Password", FieldType::Password, true),
            text("address", "Address"),
            text("city", "City"),
            text("state", "State"),
            textarea("about_yourself", "Tell us about yourself"),
            FieldDef {
                required: false,
                helper_text: Some("Optional - If you have a reference number".to_string()),
                ..field("reference_number", "Reference Number", FieldType::Text, false)
            },
            select("objective", "Objectives", &FALLBACK_OBJECTIVES),
            field("category", "Category", FieldType::MultiSelect, true),
            field("sub_category", "Sub Category", FieldType::MultiSelect, true),
            textarea("describe_your_need", "Describe Your Need"),
        ])
    }

    async fn user_types(&self) -> Result<Vec<UserTypeOption>, ApiError> {
        Ok(StakeholderCategory::ALL
            .into_iter()
            .map(|c| UserTypeOption {
                value: c.user_type().to_string(),
                label: c.title().to_string(),
            })
            .collect())
    }

    async fn user_type_fields(
        &self,
        category: StakeholderCategory,
    ) -> Result<Vec<FieldDef>, ApiError> {
        Ok(Self::detail_fields(category))
    }
}
