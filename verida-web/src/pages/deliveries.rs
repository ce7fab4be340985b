use crate::api::VeridaClient;
use crate::components::VerificationBadge;
use shared::models::{Delivery, VerificationStatus};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Deliveries page: recorded hand-overs with a verification-status filter.
#[function_component(DeliveriesPage)]
pub fn deliveries_page() -> Html {
    let deliveries = use_state(Vec::<Delivery>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // None means the "All" tab.
    let filter = use_state(|| None::<VerificationStatus>);

    let load = {
        let deliveries = deliveries.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let deliveries = deliveries.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match VeridaClient::shared().get_deliveries().await {
                    Ok(response) => deliveries.set(response.deliveries),
                    Err(err) => error.set(Some(err.to_string())),
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

    let on_verify = {
        let error = error.clone();
        let load = load;
        Callback::from(move |delivery_id: Uuid| {
            let error = error.clone();
            let load = load.clone();
            spawn_local(async move {
                match VeridaClient::shared().verify_delivery(&delivery_id).await {
                    Ok(_) => load.emit(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let count_for = |status: Option<VerificationStatus>| {
        deliveries
            .iter()
            .filter(|delivery| status.is_none_or(|wanted| delivery.verification_status == wanted))
            .count()
    };

    let visible: Vec<&Delivery> = deliveries
        .iter()
        .filter(|delivery| filter.is_none_or(|wanted| delivery.verification_status == wanted))
        .collect();

    let tab = |label: &'static str, status: Option<VerificationStatus>| {
        let filter = filter.clone();
        let active = *filter == status;
        let count = count_for(status);
        let onclick = Callback::from(move |_: MouseEvent| filter.set(status));
        html! {
            <button
                class={classes!("tab", active.then_some("tab-active"))}
                onclick={onclick}
            >
                { format!("{label} ({count})") }
            </button>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Deliveries"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{ message.clone() }</span></div>
            }

            <div class="tabs tabs-boxed w-fit">
                { tab("All", None) }
                { tab("Pending", Some(VerificationStatus::Pending)) }
                { tab("Verified", Some(VerificationStatus::Verified)) }
                { tab("Rejected", Some(VerificationStatus::Rejected)) }
            </div>

            if *loading {
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if visible.is_empty() {
                <p class="text-base-content/70">{"No deliveries in this view."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for visible.iter().map(|delivery| {
                        let delivery_id = delivery.id;
                        let on_verify = on_verify.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_verify.emit(delivery_id);
                        });
                        html! {
                            <div class="card bg-base-100 shadow-xl" key={delivery.id.to_string()}>
                                <div class="card-body">
                                    <div class="flex justify-between items-start">
                                        <h2 class="card-title">{ delivery.goods_received.clone() }</h2>
                                        <VerificationBadge status={delivery.verification_status} />
                                    </div>
                                    <p>{ format!("Quantity: {}", delivery.quantity) }</p>
                                    <p class="text-sm text-base-content/70 break-all">
                                        { format!("Proof: {}", delivery.delivery_proof) }
                                    </p>
                                    <p class="text-sm text-base-content/70">
                                        { format!("Recorded {}", delivery.created_at.format("%Y-%m-%d %H:%M")) }
                                    </p>
                                    if delivery.verification_status == VerificationStatus::Pending {
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-success btn-sm" onclick={onclick}>
                                                {"Verify"}
                                            </button>
                                        </div>
                                    }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
