//! REST client for the Verida backend.
//!
//! Every outgoing request picks up the stored bearer token when one is
//! present. A 401 response clears that token and forces one navigation to
//! the public landing route; all other failures propagate to the caller
//! as [`ApiError`] with no retry.

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::storage::TokenStore;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, CommunitiesResponse, CommunityResponse, CreateCommunityRequest,
    CreateDonationRequest, DeliveriesResponse, DeliveryResponse, DonationResponse,
    DonationsResponse, ErrorResponse, HealthResponse, LoginRequest, MessageResponse,
    RegisterRequest, Statistics, StellarAccount, StellarBalance, StellarTransaction, UserResponse,
    UsersResponse, ValidateDeliveryRequest,
};
use std::cell::Cell;
use std::time::Duration;
use uuid::Uuid;

const ROOT_PATH: &str = "/";

thread_local! {
    static SHARED_CLIENT: OnceCell<VeridaClient> = OnceCell::new();
    // Set once the 401 handler has fired; concurrent failures must not
    // clear the token twice or queue duplicate navigations.
    static UNAUTHORIZED_LATCH: Cell<bool> = const { Cell::new(false) };
}

/// Lightweight API client for the Verida web interactions.
#[derive(Clone, Debug)]
pub struct VeridaClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl VeridaClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: FrontendConfig::new().request_timeout(),
            client: Client::new(),
        }
    }

    /// The app-wide instance, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match TokenStore::load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(Self::failure(status, response).await);
        }
        Ok(response)
    }

    /// Prefer the backend's own error message when the body carries one.
    async fn failure(status: StatusCode, response: Response) -> ApiError {
        match response.json::<ErrorResponse>().await {
            Ok(body) => ApiError::Unknown(body.to_string()),
            Err(_) => ApiError::from_status(Some(status)),
        }
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json().await.map_err(ApiError::from)
    }

    /// Backend liveness probe.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.api_url("health");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// List all registered users.
    pub async fn get_users(&self) -> Result<UsersResponse, ApiError> {
        let url = self.api_url("users");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Fetch one user by id.
    pub async fn get_user(&self, user_id: &Uuid) -> Result<UserResponse, ApiError> {
        let url = self.api_url(&format!("users/{}", user_id));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Register a user through the users collection.
    pub async fn create_user(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("users");
        let response = self.send(self.client.post(url).json(payload)).await?;
        Self::json(response).await
    }

    /// List all communities.
    pub async fn get_communities(&self) -> Result<CommunitiesResponse, ApiError> {
        let url = self.api_url("communities");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Fetch one community by id.
    pub async fn get_community(&self, community_id: &Uuid) -> Result<CommunityResponse, ApiError> {
        let url = self.api_url(&format!("communities/{}", community_id));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Register a new community.
    pub async fn create_community(
        &self,
        payload: &CreateCommunityRequest,
    ) -> Result<CommunityResponse, ApiError> {
        let url = self.api_url("communities");
        let response = self.send(self.client.post(url).json(payload)).await?;
        Self::json(response).await
    }

    /// Mark a community as verified.
    pub async fn verify_community(&self, community_id: &Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("communities/{}/verify", community_id));
        let response = self.send(self.client.post(url)).await?;
        Self::json(response).await
    }

    /// List all donations.
    pub async fn get_donations(&self) -> Result<DonationsResponse, ApiError> {
        let url = self.api_url("donations");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Fetch one donation by id.
    pub async fn get_donation(&self, donation_id: &Uuid) -> Result<DonationResponse, ApiError> {
        let url = self.api_url(&format!("donations/{}", donation_id));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Create a donation, opening its escrow.
    pub async fn create_donation(
        &self,
        payload: &CreateDonationRequest,
    ) -> Result<DonationResponse, ApiError> {
        let url = self.api_url("donations");
        let response = self.send(self.client.post(url).json(payload)).await?;
        Self::json(response).await
    }

    /// Mark a donation's delivery conditions as validated.
    pub async fn validate_donation(&self, donation_id: &Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("donations/{}/validate", donation_id));
        let response = self.send(self.client.post(url)).await?;
        Self::json(response).await
    }

    /// Release a donation's escrow.
    pub async fn complete_donation(&self, donation_id: &Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("donations/{}/complete", donation_id));
        let response = self.send(self.client.post(url)).await?;
        Self::json(response).await
    }

    /// List all recorded deliveries.
    pub async fn get_deliveries(&self) -> Result<DeliveriesResponse, ApiError> {
        let url = self.api_url("deliveries");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Fetch one delivery by id.
    pub async fn get_delivery(&self, delivery_id: &Uuid) -> Result<DeliveryResponse, ApiError> {
        let url = self.api_url(&format!("deliveries/{}", delivery_id));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Record a delivery against a donation.
    pub async fn create_delivery(
        &self,
        payload: &ValidateDeliveryRequest,
    ) -> Result<DeliveryResponse, ApiError> {
        let url = self.api_url("deliveries");
        let response = self.send(self.client.post(url).json(payload)).await?;
        Self::json(response).await
    }

    /// Mark a delivery as verified.
    pub async fn verify_delivery(&self, delivery_id: &Uuid) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("deliveries/{}/verify", delivery_id));
        let response = self.send(self.client.post(url)).await?;
        Self::json(response).await
    }

    /// Authenticate by Stellar key; stores the returned bearer token.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.send(self.client.post(url).json(payload)).await?;
        let body: AuthResponse = Self::json(response).await?;
        TokenStore::save(&body.token);
        Ok(body)
    }

    /// Register a new account; stores the returned bearer token.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/register");
        let response = self.send(self.client.post(url).json(payload)).await?;
        let body: AuthResponse = Self::json(response).await?;
        TokenStore::save(&body.token);
        Ok(body)
    }

    /// Look up a Stellar account through the read-only proxy.
    pub async fn stellar_account(&self, public_key: &str) -> Result<StellarAccount, ApiError> {
        let url = self.api_url(&format!("stellar/account/{}", public_key));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Look up a Stellar balance through the read-only proxy.
    pub async fn stellar_balance(&self, public_key: &str) -> Result<StellarBalance, ApiError> {
        let url = self.api_url(&format!("stellar/balance/{}", public_key));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Look up a Stellar transaction through the read-only proxy.
    pub async fn stellar_transaction(&self, tx_hash: &str) -> Result<StellarTransaction, ApiError> {
        let url = self.api_url(&format!("stellar/transactions/{}", tx_hash));
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }

    /// Aggregate platform statistics.
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        let url = self.api_url("stats");
        let response = self.send(self.client.get(url)).await?;
        Self::json(response).await
    }
}

/// True only for the first 401 since the latch was last reset.
pub(crate) fn latch_first_fire() -> bool {
    UNAUTHORIZED_LATCH.with(|latch| !latch.replace(true))
}

#[cfg(test)]
pub(crate) fn reset_unauthorized_latch() {
    UNAUTHORIZED_LATCH.with(|latch| latch.set(false));
}

fn handle_unauthorized() {
    if !latch_first_fire() {
        return;
    }
    TokenStore::clear();
    force_navigation(ROOT_PATH);
}

fn force_navigation(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
