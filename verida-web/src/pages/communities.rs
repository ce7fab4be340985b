use crate::api::VeridaClient;
use crate::components::VerificationBadge;
use shared::models::{Community, CreateCommunityRequest, VerificationStatus};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Communities page: registration form plus the verified roster.
#[function_component(CommunitiesPage)]
pub fn communities_page() -> Html {
    let communities = use_state(Vec::<Community>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let name = use_state(String::new);
    let location = use_state(String::new);
    let description = use_state(String::new);
    let representative_key = use_state(String::new);
    let submitting = use_state(|| false);

    let load = {
        let communities = communities.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let communities = communities.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match VeridaClient::shared().get_communities().await {
                    Ok(response) => communities.set(response.communities),
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

    let onsubmit = {
        let name = name.clone();
        let location = location.clone();
        let description = description.clone();
        let representative_key = representative_key.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        let load = load.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);
            success.set(None);

            if name.is_empty() || location.is_empty() || representative_key.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }

            let payload = CreateCommunityRequest {
                name: (*name).clone(),
                location: (*location).clone(),
                description: (*description).clone(),
                representative_stellar_key: (*representative_key).clone(),
            };

            let name = name.clone();
            let location = location.clone();
            let description = description.clone();
            let representative_key = representative_key.clone();
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            let load = load.clone();
            submitting.set(true);
            spawn_local(async move {
                match VeridaClient::shared().create_community(&payload).await {
                    Ok(_) => {
                        success.set(Some("Community registered".to_string()));
                        name.set(String::new());
                        location.set(String::new());
                        description.set(String::new());
                        representative_key.set(String::new());
                        load.emit(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_verify = {
        let error = error.clone();
        let load = load;
        Callback::from(move |community_id: Uuid| {
            let error = error.clone();
            let load = load.clone();
            spawn_local(async move {
                match VeridaClient::shared().verify_community(&community_id).await {
                    Ok(_) => load.emit(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
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

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Communities"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{ message.clone() }</span></div>
            }
            if let Some(message) = &*success {
                <div class="alert alert-success"><span>{ message.clone() }</span></div>
            }

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title">{"Register a community"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="community-name">
                                <span class="label-text">{"Name"}</span>
                            </label>
                            <input
                                id="community-name"
                                class="input input-bordered"
                                type="text"
                                value={(*name).clone()}
                                oninput={text_input(&name)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="community-location">
                                <span class="label-text">{"Location"}</span>
                            </label>
                            <input
                                id="community-location"
                                class="input input-bordered"
                                type="text"
                                value={(*location).clone()}
                                oninput={text_input(&location)}
                                disabled={*submitting}
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label" for="community-description">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            id="community-description"
                            class="textarea textarea-bordered"
                            value={(*description).clone()}
                            oninput={on_description_change}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="community-representative">
                            <span class="label-text">{"Representative Stellar key"}</span>
                        </label>
                        <input
                            id="community-representative"
                            class="input input-bordered font-mono"
                            type="text"
                            placeholder="G..."
                            value={(*representative_key).clone()}
                            oninput={text_input(&representative_key)}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" type="submit" disabled={*submitting}>
                            { if *submitting { "Registering..." } else { "Register" } }
                        </button>
                    </div>
                </form>
            </div>

            if *loading {
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if communities.is_empty() {
                <p class="text-base-content/70">{"No communities registered yet."}</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for communities.iter().map(|community| {
                        let community_id = community.id;
                        let on_verify = on_verify.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_verify.emit(community_id);
                        });
                        html! {
                            <div class="card bg-base-100 shadow-xl" key={community.id.to_string()}>
                                <div class="card-body">
                                    <div class="flex justify-between items-start">
                                        <h2 class="card-title">{ community.name.clone() }</h2>
                                        <VerificationBadge status={community.verification_status} />
                                    </div>
                                    <p class="text-sm">{ community.location.clone() }</p>
                                    <p class="text-base-content/70">{ community.description.clone() }</p>
                                    <p class="text-xs font-mono break-all text-base-content/50">
                                        { community.stellar_public_key.clone() }
                                    </p>
                                    if community.verification_status == VerificationStatus::Pending {
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
