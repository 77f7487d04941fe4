mod dashboard;
pub use dashboard::{Dashboard, Props as DashboardProps};
