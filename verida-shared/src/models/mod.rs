//! REST contract types and the locally persisted session record.

pub mod community;
pub mod delivery;
pub mod donation;
pub mod errors;
pub mod session;
pub mod stats;
pub mod stellar;
pub mod user;

pub use community::{
    CommunitiesResponse, Community, CommunityResponse, CreateCommunityRequest, VerificationStatus,
};
pub use delivery::{DeliveriesResponse, Delivery, DeliveryResponse, ValidateDeliveryRequest};
pub use donation::{
    CreateDonationRequest, Donation, DonationResponse, DonationStatus, DonationsResponse,
    STROOPS_PER_XLM,
};
pub use errors::ErrorResponse;
pub use session::SessionUser;
pub use stats::Statistics;
pub use stellar::{StellarAccount, StellarBalance, StellarTransaction};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserResponse, UserType, UsersResponse};

use serde::{Deserialize, Serialize};

/// Response carrying only an informational message, returned by the
/// verify/validate/complete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable outcome of the operation.
    pub message: String,
}

/// Response schema for `/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Service status, `"healthy"` when the backend is up.
    pub status: String,
    /// Reporting service name.
    pub service: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}
