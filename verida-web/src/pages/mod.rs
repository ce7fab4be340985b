mod account;
mod communities;
mod dashboard;
mod deliveries;
mod donations;
mod landing;
pub mod login;

pub use account::AccountPage;
pub use communities::CommunitiesPage;
pub use dashboard::DashboardPage;
pub use deliveries::DeliveriesPage;
pub use donations::DonationsPage;
pub use landing::LandingPage;
pub use login::LoginPage;
