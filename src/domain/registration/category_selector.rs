//! Dependent category/sub-category multi-select.
//!
//! The candidate sub-category universe is the deduplicated union of the
//! sub-category lists of every currently selected category. Deselecting a
//! category prunes any selected sub-category that is no longer reachable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Maps a category to its sub-category options.
pub type CategoryCatalog = BTreeMap<String, Vec<String>>;

/// The interest catalog used when the schema endpoint is unavailable.
static DEFAULT_CATALOG: Lazy<CategoryCatalog> = Lazy::new(|| {
    let entries: [(&str, &[&str]); 10] = [
        (
            "Technology",
            &[
                "Web Development",
                "Mobile Development",
                "AI/ML",
                "Cloud Computing",
                "Cybersecurity",
                "Data Science",
            ],
        ),
        (
            "Business",
            &[
                "Company incorporation",
                "Business Strategy",
                "Operations",
                "Project Management",
                "Consulting",
            ],
        ),
        (
            "Marketing",
            &[
                "Digital Marketing",
                "Content Marketing",
                "SEO/SEM",
                "Social Media",
                "Branding",
            ],
        ),
        (
            "Finance",
            &[
                "Accounting",
                "Investment",
                "Taxation",
                "Auditing",
                "Financial Planning",
            ],
        ),
        (
            "Legal",
            &[
                "Company Law",
                "IPR",
                "Contract Law",
                "Compliance",
                "Litigation",
            ],
        ),
        (
            "HR",
            &["Recruitment", "Training", "Payroll", "Employee Relations"],
        ),
        (
            "Design",
            &["UI/UX", "Graphic Design", "Product Design", "Branding"],
        ),
        (
            "Content",
            &[
                "Copywriting",
                "Technical Writing",
                "Video Production",
                "Photography",
            ],
        ),
        (
            "Research",
            &["Market Research", "Academic Research", "Product Research"],
        ),
        ("Other", &["Other Services"]),
    ];

    entries
        .into_iter()
        .map(|(category, subs)| {
            (
                category.to_string(),
                subs.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
});

/// Errors from select/deselect operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category already selected: {0}")]
    AlreadySelected(String),

    #[error("Category not selected: {0}")]
    NotSelected(String),

    #[error("Sub-category '{0}' is not reachable from the selected categories")]
    UnreachableSubCategory(String),

    #[error("Sub-category already selected: {0}")]
    SubCategoryAlreadySelected(String),

    #[error("Sub-category not selected: {0}")]
    SubCategoryNotSelected(String),
}

/// Stateful dependent multi-select backing step 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    catalog: CategoryCatalog,
    categories: BTreeSet<String>,
    sub_categories: BTreeSet<String>,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG.clone())
    }
}

impl CategorySelector {
    /// Creates a selector over the given catalog.
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            catalog,
            categories: BTreeSet::new(),
            sub_categories: BTreeSet::new(),
        }
    }

    /// Adds a category. Re-selection is rejected explicitly, matching the
    /// disabled-option behaviour of the form control.
    pub fn select_category(&mut self, id: &str) -> Result<(), SelectionError> {
        if !self.catalog.contains_key(id) {
            return Err(SelectionError::UnknownCategory(id.to_string()));
        }
        if !self.categories.insert(id.to_string()) {
            return Err(SelectionError::AlreadySelected(id.to_string()));
        }
        Ok(())
    }

    /// Removes a category and prunes sub-categories that are no longer
    /// reachable from the remaining selection.
    pub fn deselect_category(&mut self, id: &str) -> Result<(), SelectionError> {
        if !self.categories.remove(id) {
            return Err(SelectionError::NotSelected(id.to_string()));
        }
        let universe = self.available_sub_categories();
        self.sub_categories.retain(|s| universe.contains(s));
        Ok(())
    }

    /// Adds a sub-category from the current universe.
    pub fn select_sub_category(&mut self, id: &str) -> Result<(), SelectionError> {
        if !self.available_sub_categories().contains(id) {
            return Err(SelectionError::UnreachableSubCategory(id.to_string()));
        }
        if !self.sub_categories.insert(id.to_string()) {
            return Err(SelectionError::SubCategoryAlreadySelected(id.to_string()));
        }
        Ok(())
    }

    /// Removes a sub-category.
    pub fn deselect_sub_category(&mut self, id: &str) -> Result<(), SelectionError> {
        if !self.sub_categories.remove(id) {
            return Err(SelectionError::SubCategoryNotSelected(id.to_string()));
        }
        Ok(())
    }

    /// Deduplicated union of sub-categories reachable from the selection.
    pub fn available_sub_categories(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .filter_map(|c| self.catalog.get(c))
            .flatten()
            .cloned()
            .collect()
    }

    /// The sub-category control is disabled (not merely empty) while no
    /// category is selected.
    pub fn sub_categories_enabled(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn selected_sub_categories(&self) -> &BTreeSet<String> {
        &self.sub_categories
    }

    /// Finalises the selection into the payload shape.
    pub fn into_tags(self, describe_your_need: impl Into<String>) -> CategoryTags {
        CategoryTags {
            category: self.categories.into_iter().collect(),
            custom_category: String::new(),
            sub_category: self.sub_categories.into_iter().collect(),
            custom_sub_category: String::new(),
            describe_your_need: describe_your_need.into(),
        }
    }
}

/// Step-4 interest tags, shaped for the registration payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTags {
    pub category: Vec<String>,
    #[serde(default)]
    pub custom_category: String,
    pub sub_category: Vec<String>,
    #[serde(default)]
    pub custom_sub_category: String,
    pub describe_your_need: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reselecting_a_category_is_rejected_not_ignored() {
        let mut selector = CategorySelector::default();
        selector.select_category("Technology").unwrap();
        assert_eq!(
            selector.select_category("Technology"),
            Err(SelectionError::AlreadySelected("Technology".to_string()))
        );
        assert_eq!(selector.selected_categories().len(), 1);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut selector = CategorySelector::default();
        assert!(matches!(
            selector.select_category("Astrology"),
            Err(SelectionError::UnknownCategory(_))
        ));
    }

    #[test]
    fn universe_is_deduplicated_union() {
        let mut selector = CategorySelector::default();
        selector.select_category("Design").unwrap();
        selector.select_category("Marketing").unwrap();
        let universe = selector.available_sub_categories();
        // "Branding" appears under both Design and Marketing
        assert_eq!(universe.iter().filter(|s| *s == "Branding").count(), 1);
        assert!(universe.contains("UI/UX"));
        assert!(universe.contains("SEO/SEM"));
    }

    #[test]
    fn deselecting_a_category_prunes_orphaned_sub_categories() {
        let mut selector = CategorySelector::default();
        selector.select_category("Technology").unwrap();
        selector.select_category("Finance").unwrap();
        selector.select_sub_category("AI/ML").unwrap();
        selector.select_sub_category("Taxation").unwrap();

        selector.deselect_category("Technology").unwrap();

        assert!(!selector.selected_sub_categories().contains("AI/ML"));
        assert!(selector.selected_sub_categories().contains("Taxation"));
    }

    #[test]
    fn shared_sub_category_survives_while_one_parent_remains() {
        let mut selector = CategorySelector::default();
        selector.select_category("Design").unwrap();
        selector.select_category("Marketing").unwrap();
        selector.select_sub_category("Branding").unwrap();

        selector.deselect_category("Design").unwrap();
        assert!(selector.selected_sub_categories().contains("Branding"));

        selector.deselect_category("Marketing").unwrap();
        assert!(selector.selected_sub_categories().is_empty());
    }

    #[test]
    fn sub_category_control_disabled_with_no_categories() {
        let mut selector = CategorySelector::default();
        assert!(!selector.sub_categories_enabled());
        assert!(matches!(
            selector.select_sub_category("AI/ML"),
            Err(SelectionError::UnreachableSubCategory(_))
        ));

        selector.select_category("Technology").unwrap();
        assert!(selector.sub_categories_enabled());
    }

    #[test]
    fn into_tags_produces_payload_shape() {
        let mut selector = CategorySelector::default();
        selector.select_category("Technology").unwrap();
        selector.select_sub_category("AI/ML").unwrap();
        let tags = selector.into_tags("Need ML consulting");
        assert_eq!(tags.category, vec!["Technology".to_string()]);
        assert_eq!(tags.sub_category, vec!["AI/ML".to_string()]);
        assert_eq!(tags.describe_your_need, "Need ML consulting");
        assert!(tags.custom_category.is_empty());
    }

    // Random operation sequences for the subset invariant.
    #[derive(Debug, Clone)]
    enum Op {
        SelectCategory(usize),
        DeselectCategory(usize),
        SelectSub(usize),
        DeselectSub(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..10).prop_map(Op::SelectCategory),
            (0usize..10).prop_map(Op::DeselectCategory),
            (0usize..40).prop_map(Op::SelectSub),
            (0usize..40).prop_map(Op::DeselectSub),
        ]
    }

    proptest! {
        #[test]
        fn sub_categories_always_subset_of_reachable_universe(
            ops in proptest::collection::vec(op_strategy(), 0..60)
        ) {
            let mut selector = CategorySelector::default();
            let categories: Vec<String> = DEFAULT_CATALOG.keys().cloned().collect();
            let all_subs: Vec<String> = DEFAULT_CATALOG
                .values()
                .flatten()
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            for op in ops {
                // Individual operations may legitimately fail; the invariant
                // must hold regardless.
                let _ = match op {
                    Op::SelectCategory(i) => {
                        selector.select_category(&categories[i % categories.len()])
                    }
                    Op::DeselectCategory(i) => {
                        selector.deselect_category(&categories[i % categories.len()])
                    }
                    Op::SelectSub(i) => {
                        selector.select_sub_category(&all_subs[i % all_subs.len()])
                    }
                    Op::DeselectSub(i) => {
                        selector.deselect_sub_category(&all_subs[i % all_subs.len()])
                    }
                };

                let universe = selector.available_sub_categories();
                prop_assert!(
                    selector.selected_sub_categories().is_subset(&universe),
                    "stale sub-categories survived: {:?} vs {:?}",
                    selector.selected_sub_categories(),
                    universe
                );
            }
        }
    }
}
