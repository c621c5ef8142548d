//! Store-backed wizard navigation.

use std::sync::Arc;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::registration::{
    CategoryTags, PersonalInfo, StakeholderDetail, StakeholderSelection, SubscriptionPreferences,
};
use crate::domain::wizard::{WizardError, WizardState, WizardStep};
use crate::ports::{StepStore, StepStoreExt};

use serde::{Deserialize, Serialize};

/// Reserved store key for the current step marker.
const STEP_KEY: &str = "wizard_step";

/// Step-4 values are stored as one blob: the category tags and the
/// subscription flags are edited on the same screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesBlob {
    tags: CategoryTags,
    preferences: SubscriptionPreferences,
}

/// Drives the step sequence over an explicit [`WizardState`], persisting
/// every mutation to the step store so a reload resumes where the user
/// left off.
///
/// Navigation is strictly adjacent via [`next`](Self::next) and
/// [`back`](Self::back); [`go_to`](Self::go_to) exists only for guard
/// recovery and never moves forward past accumulated data.
pub struct WizardNavigator {
    store: Arc<dyn StepStore>,
    state: WizardState,
}

impl WizardNavigator {
    /// A fresh wizard at step 1.
    pub fn new(store: Arc<dyn StepStore>) -> Self {
        Self {
            store,
            state: WizardState::new(),
        }
    }

    /// Rebuilds the wizard from whatever the store still holds.
    ///
    /// The stored step marker is clamped to the furthest step the loaded
    /// data can legally enter, so a marker that outlived its blobs never
    /// resumes past a guard.
    pub fn resume(store: Arc<dyn StepStore>) -> Self {
        let mut state = WizardState::new();
        state.personal = store.load_typed(WizardStep::Personal.storage_key());
        state.selection = store.load_typed(WizardStep::Category.storage_key());
        state.detail = store.load_typed(WizardStep::CategoryDetail.storage_key());
        if let Some(blob) =
            store.load_typed::<PreferencesBlob>(WizardStep::Preferences.storage_key())
        {
            state.tags = Some(blob.tags);
            state.preferences = Some(blob.preferences);
        }

        let marker: WizardStep = store.load_typed(STEP_KEY).unwrap_or_default();
        let last_valid = state.last_valid_step();
        state.step = if marker.ordinal() <= last_valid.ordinal() {
            marker
        } else {
            tracing::warn!(marker = %marker, resumed_at = %last_valid, "Step marker outran stored data");
            last_valid
        };

        Self { store, state }
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Records step-1 values. Saved immediately; validation happens on
    /// [`next`](Self::next).
    pub fn set_personal(&mut self, personal: PersonalInfo) {
        self.store
            .save_typed(WizardStep::Personal.storage_key(), &personal);
        self.state.personal = Some(personal);
    }

    /// Records the step-2 stakeholder choice.
    pub fn set_selection(&mut self, selection: StakeholderSelection) {
        self.store
            .save_typed(WizardStep::Category.storage_key(), &selection);
        self.state.selection = Some(selection);
    }

    /// Records the step-3 per-category detail form.
    pub fn set_detail(&mut self, detail: StakeholderDetail) {
        self.store
            .save_typed(WizardStep::CategoryDetail.storage_key(), &detail);
        self.state.detail = Some(detail);
    }

    /// Records the step-4 category tags and subscription flags.
    pub fn set_preferences(&mut self, tags: CategoryTags, preferences: SubscriptionPreferences) {
        let blob = PreferencesBlob {
            tags: tags.clone(),
            preferences: preferences.clone(),
        };
        self.store
            .save_typed(WizardStep::Preferences.storage_key(), &blob);
        self.state.tags = Some(tags);
        self.state.preferences = Some(preferences);
    }

    /// Advances one step, enforcing that the current step's data exists
    /// and validates before the target's entry guard is checked.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let current = self.state.step;
        self.require_step_data(current)?;
        if current == WizardStep::Personal {
            if let Some(personal) = &self.state.personal {
                personal
                    .validate()
                    .map_err(|errors| WizardError::InvalidFields {
                        step: current,
                        errors,
                    })?;
            }
        }

        let target = match current.next() {
            Some(step) => step,
            None => {
                return Err(WizardError::InvalidTransition(
                    ValidationError::invalid_format(
                        "state_transition",
                        format!("No step after {}", current),
                    ),
                ));
            }
        };
        self.state.guard_entry(target)?;
        self.move_to(target)
    }

    /// Moves one step backward. Success is terminal and refuses.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.state.step.back() {
            Some(step) => step,
            None => {
                return Err(WizardError::InvalidTransition(
                    ValidationError::invalid_format(
                        "state_transition",
                        format!("No step before {}", self.state.step),
                    ),
                ));
            }
        };
        self.move_to(target)
    }

    /// Jumps to an earlier step, the recovery action a guard violation
    /// offers. Forward jumps are rejected.
    pub fn go_to(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        if target.ordinal() > self.state.step.ordinal() {
            return Err(WizardError::MissingStepData { step: target });
        }
        self.state.guard_entry(target)?;
        self.state.step = target;
        self.store.save_typed(STEP_KEY, &target);
        Ok(target)
    }

    fn move_to(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        self.state.step = self.state.step.transition_to(target)?;
        self.store.save_typed(STEP_KEY, &target);
        tracing::debug!(step = %target, "Wizard step change");
        Ok(target)
    }

    fn require_step_data(&self, step: WizardStep) -> Result<(), WizardError> {
        let present = match step {
            WizardStep::Personal => self.state.personal.is_some(),
            WizardStep::Category => self.state.selection.is_some(),
            WizardStep::CategoryDetail => self.state.detail.is_some(),
            WizardStep::Preferences => {
                self.state.tags.is_some() && self.state.preferences.is_some()
            }
            WizardStep::Payment | WizardStep::Success => true,
        };
        if present {
            Ok(())
        } else {
            Err(WizardError::MissingStepData { step })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemoryStepStore;
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

    fn filled_navigator(store: Arc<dyn StepStore>) -> WizardNavigator {
        let mut nav = WizardNavigator::new(store);
        nav.set_personal(personal());
        nav.next().unwrap();
        nav.set_selection(StakeholderSelection::new(StakeholderCategory::Students));
        nav.next().unwrap();
        nav.set_detail(detail());
        nav.next().unwrap();
        nav.set_preferences(CategoryTags::default(), SubscriptionPreferences::default());
        nav.next().unwrap();
        nav
    }

    #[test]
    fn next_requires_current_step_data() {
        let mut nav = WizardNavigator::new(Arc::new(InMemoryStepStore::new()));
        let err = nav.next().unwrap_err();
        assert!(matches!(
            err,
            WizardError::MissingStepData {
                step: WizardStep::Personal
            }
        ));
    }

    #[test]
    fn next_validates_personal_fields() {
        let mut nav = WizardNavigator::new(Arc::new(InMemoryStepStore::new()));
        nav.set_personal(PersonalInfo {
            email: "broken".to_string(),
            ..personal()
        });
        let err = nav.next().unwrap_err();
        assert!(matches!(err, WizardError::InvalidFields { .. }));
        assert_eq!(nav.current_step(), WizardStep::Personal);
    }

    #[test]
    fn full_forward_walk_reaches_payment() {
        let nav = filled_navigator(Arc::new(InMemoryStepStore::new()));
        assert_eq!(nav.current_step(), WizardStep::Payment);
    }

    #[test]
    fn back_then_forward_reproduces_identical_values() {
        let mut nav = filled_navigator(Arc::new(InMemoryStepStore::new()));
        let before = nav.state().clone();

        assert_eq!(nav.back().unwrap(), WizardStep::Preferences);
        assert!(nav.state().tags.is_some());
        assert!(nav.state().personal.is_some());

        assert_eq!(nav.next().unwrap(), WizardStep::Payment);
        assert_eq!(*nav.state(), before);
    }

    #[test]
    fn go_to_rejects_forward_jumps() {
        let mut nav = WizardNavigator::new(Arc::new(InMemoryStepStore::new()));
        nav.set_personal(personal());
        nav.next().unwrap();
        assert!(nav.go_to(WizardStep::Payment).is_err());
        assert_eq!(nav.go_to(WizardStep::Personal).unwrap(), WizardStep::Personal);
    }

    #[test]
    fn resume_restores_step_and_data() {
        let store: Arc<dyn StepStore> = Arc::new(InMemoryStepStore::new());
        {
            filled_navigator(store.clone());
        }
        let nav = WizardNavigator::resume(store);
        assert_eq!(nav.current_step(), WizardStep::Payment);
        assert_eq!(
            nav.state().selection.as_ref().unwrap().category,
            StakeholderCategory::Students
        );
        assert!(nav.state().preferences.is_some());
    }

    #[test]
    fn resume_clamps_marker_that_outran_its_data() {
        let store: Arc<dyn StepStore> = Arc::new(InMemoryStepStore::new());
        store.save_typed(STEP_KEY, &WizardStep::Payment);
        store.save_typed(WizardStep::Personal.storage_key(), &personal());

        let nav = WizardNavigator::resume(store);
        assert_eq!(nav.current_step(), WizardStep::Category);
    }

    #[test]
    fn resume_of_empty_store_starts_fresh() {
        let nav = WizardNavigator::resume(Arc::new(InMemoryStepStore::new()));
        assert_eq!(nav.current_step(), WizardStep::Personal);
        assert!(nav.state().personal.is_none());
    }
}
