//! Assembly of the flat registration payload.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

use super::{CategoryTags, PersonalInfo, StakeholderDetail, StakeholderSelection};

/// The merged `/register` request body.
///
/// Personal, tag, and detail fields flatten into one JSON object with the
/// `user_type` discriminant, matching what the API expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    #[serde(flatten)]
    personal: PersonalInfo,
    user_type: String,
    #[serde(flatten)]
    tags: CategoryTags,
    #[serde(flatten)]
    detail: StakeholderDetail,
}

impl RegistrationRequest {
    /// Assembles the payload, enforcing that the detail variant matches the
    /// selected category and that step-1 fields validate.
    pub fn assemble(
        personal: PersonalInfo,
        selection: &StakeholderSelection,
        detail: StakeholderDetail,
        tags: CategoryTags,
    ) -> Result<Self, Vec<ValidationError>> {
        personal.validate()?;

        if detail.category() != selection.category {
            return Err(vec![ValidationError::invalid_format(
                "stakeholder_detail",
                format!(
                    "detail form is for '{}' but '{}' was selected",
                    detail.category(),
                    selection.category
                ),
            )]);
        }

        Ok(Self {
            personal,
            user_type: selection.category.user_type().to_string(),
            tags,
            detail,
        })
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn applicant_name(&self) -> &str {
        &self.personal.full_name
    }

    pub fn applicant_email(&self) -> &str {
        &self.personal.email
    }

    pub fn applicant_phone(&self) -> &str {
        &self.personal.phone_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::StakeholderCategory;

    fn personal() -> PersonalInfo {
        PersonalInfo {
            full_name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "pw123456".to_string(),
            phone_number: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            about_yourself: "Student".to_string(),
            objective: "Education & Learning".to_string(),
            ..Default::default()
        }
    }

    fn student_detail() -> StakeholderDetail {
        StakeholderDetail::Student {
            college_name: "IIT Bombay".to_string(),
            degree: "B.Tech".to_string(),
            specialization: "CS".to_string(),
            key_skills: "Rust".to_string(),
            preferred_mode: "online".to_string(),
            experience_projects: String::new(),
        }
    }

    #[test]
    fn assembles_flat_payload() {
        let selection = StakeholderSelection::new(StakeholderCategory::Students);
        let mut tags = CategoryTags::default();
        tags.category = vec!["Technology".to_string()];
        tags.sub_category = vec!["AI/ML".to_string()];
        tags.describe_your_need = "Mentorship".to_string();

        let request =
            RegistrationRequest::assemble(personal(), &selection, student_detail(), tags).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["full_name"], "A");
        assert_eq!(value["user_type"], "student");
        assert_eq!(value["college_name"], "IIT Bombay");
        assert_eq!(value["category"][0], "Technology");
        assert_eq!(value["describe_your_need"], "Mentorship");
        // Flat object: no nested step sub-objects
        assert!(value.get("personal").is_none());
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn rejects_detail_variant_mismatching_selection() {
        let selection = StakeholderSelection::new(StakeholderCategory::Freelancers);
        let result = RegistrationRequest::assemble(
            personal(),
            &selection,
            student_detail(),
            CategoryTags::default(),
        );
        let errors = result.unwrap_err();
        assert_eq!(errors[0].field(), "stakeholder_detail");
    }

    #[test]
    fn rejects_invalid_personal_info() {
        let selection = StakeholderSelection::new(StakeholderCategory::Students);
        let mut info = personal();
        info.email = "broken".to_string();
        let result = RegistrationRequest::assemble(
            info,
            &selection,
            student_detail(),
            CategoryTags::default(),
        );
        assert!(result.is_err());
    }
}
