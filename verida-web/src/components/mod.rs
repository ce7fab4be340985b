pub mod loading;
pub mod status_badge;

pub use loading::Loading;
pub use status_badge::{DonationStatusBadge, VerificationBadge};
