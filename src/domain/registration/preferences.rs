//! Subscription opt-in flags collected at step 4.

use serde::{Deserialize, Serialize};

/// Communication opt-ins with the form's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPreferences {
    pub newsletter: bool,
    pub events: bool,
    pub resources: bool,
    pub career: bool,
    pub tenders: bool,
    pub advertisements: bool,
}

impl Default for SubscriptionPreferences {
    fn default() -> Self {
        Self {
            newsletter: true,
            events: true,
            resources: false,
            career: false,
            tenders: true,
            advertisements: false,
        }
    }
}

impl SubscriptionPreferences {
    /// Toggles a flag by its form id. Unknown ids are ignored so a stale
    /// saved blob cannot wedge the form.
    pub fn toggle(&mut self, id: &str) {
        match id {
            "newsletter" => self.newsletter = !self.newsletter,
            "events" => self.events = !self.events,
            "resources" => self.resources = !self.resources,
            "career" => self.career = !self.career,
            "tenders" => self.tenders = !self.tenders,
            "advertisements" => self.advertisements = !self.advertisements,
            _ => {}
        }
    }
}
