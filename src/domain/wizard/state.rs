//! Explicit accumulated wizard state.
//!
//! The state is a plain value passed through the navigator's transition
//! functions; there is no ambient session global. Session persistence is
//! layered on top by the navigator via the step store port.

use serde::{Deserialize, Serialize};

use crate::domain::registration::{
    CategoryTags, PersonalInfo, StakeholderDetail, StakeholderSelection, SubscriptionPreferences,
};

use super::{GuardViolation, WizardStep};

/// Everything the wizard has accumulated so far, plus the current step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    #[serde(default = "WizardState::first_step")]
    pub step: WizardStep,
    pub personal: Option<PersonalInfo>,
    pub selection: Option<StakeholderSelection>,
    pub detail: Option<StakeholderDetail>,
    pub tags: Option<CategoryTags>,
    pub preferences: Option<SubscriptionPreferences>,
}

impl WizardState {
    fn first_step() -> WizardStep {
        WizardStep::Personal
    }

    /// A fresh wizard at step 1.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Personal,
            ..Default::default()
        }
    }

    /// Checks that `target` is reachable given the accumulated data.
    ///
    /// Guard invariants: steps 3 through Success require the stakeholder
    /// selection from step 2; step 5 and Success additionally require the
    /// step-3 detail and the step-4 payload.
    pub fn guard_entry(&self, target: WizardStep) -> Result<(), GuardViolation> {
        let needs_personal = target.ordinal() >= WizardStep::Category.ordinal();
        let needs_selection = target.ordinal() >= WizardStep::CategoryDetail.ordinal();
        let needs_payload = target.ordinal() >= WizardStep::Payment.ordinal();

        if needs_personal && self.personal.is_none() {
            return Err(GuardViolation {
                missing: "personal details",
                resume_at: WizardStep::Personal,
            });
        }
        if needs_selection && self.selection.is_none() {
            return Err(GuardViolation {
                missing: "stakeholder selection",
                resume_at: WizardStep::Category,
            });
        }
        if needs_payload {
            if self.detail.is_none() {
                return Err(GuardViolation {
                    missing: "stakeholder details",
                    resume_at: WizardStep::CategoryDetail,
                });
            }
            if self.tags.is_none() || self.preferences.is_none() {
                return Err(GuardViolation {
                    missing: "category preferences",
                    resume_at: WizardStep::Preferences,
                });
            }
        }
        Ok(())
    }

    /// The furthest step the accumulated data can legally enter.
    pub fn last_valid_step(&self) -> WizardStep {
        let mut last = WizardStep::Personal;
        for step in WizardStep::ALL {
            if step == WizardStep::Success {
                break;
            }
            if self.guard_entry(step).is_ok() {
                last = step;
            } else {
                break;
            }
        }
        last
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
            state: "MH".to_string(),
            about_yourself: "Student".to_string(),
            objective: "Education & Learning".to_string(),
            ..Default::default()
        }
    }

    fn detail() -> StakeholderDetail {
        StakeholderDetail::Student {
            college_name: "IIT".to_string(),
            degree: "B.Tech".to_string(),
            specialization: "CS".to_string(),
            key_skills: "Rust".to_string(),
            preferred_mode: "online".to_string(),
            experience_projects: String::new(),
        }
    }

    #[test]
    fn fresh_wizard_cannot_enter_detail_steps() {
        let state = WizardState::new();
        let violation = state.guard_entry(WizardStep::CategoryDetail).unwrap_err();
        assert_eq!(violation.resume_at, WizardStep::Personal);
    }

    #[test]
    fn missing_selection_blocks_step_three_onward() {
        let state = WizardState {
            personal: Some(personal()),
            ..WizardState::new()
        };
        assert!(state.guard_entry(WizardStep::Category).is_ok());

        for step in [
            WizardStep::CategoryDetail,
            WizardStep::Preferences,
            WizardStep::Payment,
            WizardStep::Success,
        ] {
            let violation = state.guard_entry(step).unwrap_err();
            assert_eq!(violation.missing, "stakeholder selection");
            assert_eq!(violation.resume_at, WizardStep::Category);
        }
    }

    #[test]
    fn payment_requires_full_upstream_payload() {
        let mut state = WizardState {
            personal: Some(personal()),
            selection: Some(StakeholderSelection::new(StakeholderCategory::Students)),
            detail: Some(detail()),
            ..WizardState::new()
        };
        let violation = state.guard_entry(WizardStep::Payment).unwrap_err();
        assert_eq!(violation.resume_at, WizardStep::Preferences);

        state.tags = Some(CategoryTags::default());
        state.preferences = Some(SubscriptionPreferences::default());
        assert!(state.guard_entry(WizardStep::Payment).is_ok());
    }

    #[test]
    fn last_valid_step_tracks_accumulated_data() {
        let mut state = WizardState::new();
        assert_eq!(state.last_valid_step(), WizardStep::Personal);

        state.personal = Some(personal());
        assert_eq!(state.last_valid_step(), WizardStep::Category);

        state.selection = Some(StakeholderSelection::new(StakeholderCategory::Students));
        assert_eq!(state.last_valid_step(), WizardStep::Preferences);

        state.detail = Some(detail());
        state.tags = Some(CategoryTags::default());
        state.preferences = Some(SubscriptionPreferences::default());
        assert_eq!(state.last_valid_step(), WizardStep::Payment);
    }
}
