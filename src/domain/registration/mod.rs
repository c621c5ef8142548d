//! Registration data model.
//!
//! # Module Structure
//!
//! - `personal_info` - Step 1 applicant details
//! - `stakeholder` - Stakeholder category enumeration and selection
//! - `detail` - Per-category detail record (tagged union)
//! - `category_selector` - Dependent category/sub-category multi-select
//! - `preferences` - Subscription opt-in flags
//! - `request` - Assembly of the flat registration payload

mod category_selector;
mod detail;
mod personal_info;
mod preferences;
mod request;
mod stakeholder;

pub use category_selector::{CategoryCatalog, CategorySelector, CategoryTags, SelectionError};
pub use detail::StakeholderDetail;
pub use personal_info::{FALLBACK_OBJECTIVES, PersonalInfo};
pub use preferences::SubscriptionPreferences;
pub use request::RegistrationRequest;
pub use stakeholder::{StakeholderCategory, StakeholderSelection};
