use crate::api::VeridaClient;
use crate::components::DonationStatusBadge;
use crate::error::ApiError;
use futures::future::join;
use shared::models::{
    CommunitiesResponse, Community, CreateDonationRequest, Donation, DonationsResponse,
};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const DEFAULT_CONDITIONS: &str = "Delivery verified by community";
const DEMO_DONOR_KEY: &str = "DEMO_STELLAR_KEY_123456789";

/// First failure from the paired fetch, if any. A clean reload yields
/// `None`, replacing any banner left over from an earlier attempt.
fn load_error(
    donations: &Result<DonationsResponse, ApiError>,
    communities: &Result<CommunitiesResponse, ApiError>,
) -> Option<String> {
    donations
        .as_ref()
        .err()
        .or(communities.as_ref().err())
        .map(ToString::to_string)
}

/// Donations page: create a donation and follow existing ones.
#[function_component(DonationsPage)]
pub fn donations_page() -> Html {
    let donations = use_state(Vec::<Donation>::new);
    let communities = use_state(Vec::<Community>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let community_id = use_state(String::new);
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let submitting = use_state(|| false);

    let load = {
        let donations = donations.clone();
        let communities = communities.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let donations = donations.clone();
            let communities = communities.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let client = VeridaClient::shared();
                let (donations_result, communities_result) =
                    join(client.get_donations(), client.get_communities()).await;
                error.set(load_error(&donations_result, &communities_result));
                if let Ok(response) = donations_result {
                    donations.set(response.donations);
                }
                if let Ok(response) = communities_result {
                    communities.set(response.communities);
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let onsubmit = {
        let community_id = community_id.clone();
        let amount = amount.clone();
        let description = description.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        let load = load;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);
            success.set(None);

            let Ok(community) = Uuid::parse_str(&community_id) else {
                error.set(Some("Please select a community".to_string()));
                return;
            };
            let Ok(amount_xlm) = amount.parse::<f64>() else {
                error.set(Some("Amount must be a number".to_string()));
                return;
            };
            if amount_xlm <= 0.0 {
                error.set(Some("Amount must be greater than zero".to_string()));
                return;
            }
            if description.is_empty() {
                error.set(Some("Please describe what the donation funds".to_string()));
                return;
            }

            let payload = CreateDonationRequest {
                community_id: community,
                amount: amount_xlm,
                description: (*description).clone(),
                conditions: DEFAULT_CONDITIONS.to_string(),
                donor_stellar_key: DEMO_DONOR_KEY.to_string(),
            };

            let community_id = community_id.clone();
            let amount = amount.clone();
            let description = description.clone();
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            let load = load.clone();
            submitting.set(true);
            spawn_local(async move {
                match VeridaClient::shared().create_donation(&payload).await {
                    Ok(_) => {
                        success.set(Some("Donation created and escrow opened".to_string()));
                        community_id.set(String::new());
                        amount.set(String::new());
                        description.set(String::new());
                        load.emit(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_community_change = {
        let community_id = community_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                community_id.set(select.value());
            }
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                amount.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    let community_name = |id: &Uuid| -> String {
        communities
            .iter()
            .find(|community| community.id == *id)
            .map_or_else(|| id.to_string(), |community| community.name.clone())
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Donations"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{ message.clone() }</span></div>
            }
            if let Some(message) = &*success {
                <div class="alert alert-success"><span>{ message.clone() }</span></div>
            }

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title">{"New donation"}</h2>
                    <div class="form-control">
                        <label class="label" for="donation-community">
                            <span class="label-text">{"Community"}</span>
                        </label>
                        <select
                            id="donation-community"
                            class="select select-bordered"
                            onchange={on_community_change}
                            disabled={*submitting}
                        >
                            <option value="" selected={community_id.is_empty()}>
                                {"Select a community"}
                            </option>
                            { for communities.iter().map(|community| {
                                let value = community.id.to_string();
                                html! {
                                    <option
                                        value={value.clone()}
                                        selected={*community_id == value}
                                    >
                                        { format!("{} ({})", community.name, community.location) }
                                    </option>
                                }
                            }) }
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="donation-amount">
                            <span class="label-text">{"Amount (XLM)"}</span>
                        </label>
                        <input
                            id="donation-amount"
                            class="input input-bordered"
                            type="number"
                            step="0.0000001"
                            min="0"
                            placeholder="10.0"
                            value={(*amount).clone()}
                            oninput={on_amount_change}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="donation-description">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            id="donation-description"
                            class="textarea textarea-bordered"
                            placeholder="What should this donation fund?"
                            value={(*description).clone()}
                            oninput={on_description_change}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" type="submit" disabled={*submitting}>
                            { if *submitting { "Creating..." } else { "Create donation" } }
                        </button>
                    </div>
                </form>
            </div>

            if *loading {
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if donations.is_empty() {
                <p class="text-base-content/70">{"No donations yet."}</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Community"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Description"}</th>
                                <th>{"Status"}</th>
                                <th>{"Created"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for donations.iter().map(|donation| html! {
                                <tr key={donation.id.to_string()}>
                                    <td>{ community_name(&donation.community_id) }</td>
                                    <td>{ format!("{} XLM", donation.amount_xlm()) }</td>
                                    <td>{ donation.description.clone() }</td>
                                    <td><DonationStatusBadge status={donation.status} /></td>
                                    <td>{ donation.created_at.format("%Y-%m-%d").to_string() }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_donations() -> Result<DonationsResponse, ApiError> {
        Ok(DonationsResponse { donations: vec![] })
    }

    fn empty_communities() -> Result<CommunitiesResponse, ApiError> {
        Ok(CommunitiesResponse {
            communities: vec![],
        })
    }

    #[test]
    fn successful_reload_clears_previous_failure() {
        // The banner is recomputed from the latest pair of results, so a
        // clean refetch after a failed one leaves no stale message.
        assert_eq!(load_error(&empty_donations(), &empty_communities()), None);
    }

    #[test]
    fn donations_failure_is_surfaced() {
        let failed: Result<DonationsResponse, ApiError> = Err(ApiError::Network);
        assert_eq!(
            load_error(&failed, &empty_communities()),
            Some("Unable to connect to server".to_string())
        );
    }

    #[test]
    fn communities_failure_is_surfaced() {
        let failed: Result<CommunitiesResponse, ApiError> =
            Err(ApiError::Unknown("503 Service Unavailable".to_string()));
        assert_eq!(
            load_error(&empty_donations(), &failed),
            Some("Request failed: 503 Service Unavailable".to_string())
        );
    }
}
