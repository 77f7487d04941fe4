mod property_selector;
pub use property_selector::PropertySelector;
mod revenue_summary;
pub use revenue_summary::RevenueSummary;
