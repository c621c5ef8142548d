//! Command-line smoke runner.
//!
//! Loads the configuration, prints the stakeholder catalog, and reports
//! any resumable session found on disk. Useful for checking an
//! environment before pointing a shell at it.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use membership_wizard::adapters::session::SessionFileStore;
use membership_wizard::application::WizardNavigator;
use membership_wizard::config::AppConfig;
use membership_wizard::domain::registration::StakeholderCategory;
use membership_wizard::ports::StepStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    tracing::info!(api = %config.api.base_url, "Configuration loaded");

    println!("Membership catalog:");
    for category in StakeholderCategory::ALL {
        println!(
            "  {:30} {:26} Rs {}/year",
            category.title(),
            category.user_type(),
            category.annual_fee_inr()
        );
    }

    let store = Arc::new(SessionFileStore::open(&config.session.dir));
    if store.degraded() {
        tracing::warn!("Session directory unavailable; progress will not persist");
    }
    let navigator = WizardNavigator::resume(store);
    println!(
        "\nSession in {}: resumes at step {} ({})",
        config.session.dir.display(),
        navigator.current_step().ordinal(),
        navigator.current_step()
    );

    Ok(())
}
