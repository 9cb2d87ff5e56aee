//! Admin module.
//!
//! Demo login, dashboard figures and the product form.

mod auth;
mod dashboard;
mod draft;

pub use auth::{AdminCredentials, AdminSession, DEMO_PASSWORD, DEMO_USERNAME};
pub use dashboard::{demo_recent_orders, Dashboard, DemoMetrics, RecentOrder};
pub use draft::{request_delete, submit_draft, ProductDraft};
