use crate::api::VeridaClient;
use crate::routes::MainRoute;
use shared::models::Statistics;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Dashboard page: aggregate platform statistics plus quick actions.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(|| None::<Statistics>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let load = {
        let stats = stats.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |()| {
            let stats = stats.clone();
            let error = error.clone();
            let loading = loading.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let client = VeridaClient::shared();
                match client.statistics().await {
                    Ok(response) => stats.set(Some(response)),
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

    let onretry = {
        let load = load;
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            if *loading {
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                    <button class="btn btn-sm" onclick={onretry}>{"Retry"}</button>
                </div>
            } else if let Some(stats) = &*stats {
                <div class="stats shadow w-full">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-8 h-8" />
                        </div>
                        <div class="stat-title">{"Donations"}</div>
                        <div class="stat-value text-primary">{ stats.total_donations }</div>
                        <div class="stat-desc">{"Tracked end to end"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-secondary">
                            <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="w-8 h-8" />
                        </div>
                        <div class="stat-title">{"Success rate"}</div>
                        <div class="stat-value text-secondary">{ format!("{}%", stats.success_rate) }</div>
                        <div class="stat-desc">{"Deliveries completed"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-accent">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-8 h-8" />
                        </div>
                        <div class="stat-title">{"Communities"}</div>
                        <div class="stat-value text-accent">{ stats.total_communities }</div>
                        <div class="stat-desc">{"Registered"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-success">
                            <Icon icon_id={IconId::HeroiconsOutlineCurrencyDollar} class="w-8 h-8" />
                        </div>
                        <div class="stat-title">{"Total donated"}</div>
                        <div class="stat-value text-success">{ format!("{} XLM", stats.total_amount) }</div>
                        <div class="stat-desc">{"Across all communities"}</div>
                    </div>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-6 h-6" />
                            {"Donations"}
                        </h2>
                        <p>{"Create a donation or follow one through its escrow."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Donations} classes="btn btn-primary">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineTruck} class="w-6 h-6" />
                            {"Deliveries"}
                        </h2>
                        <p>{"Review recorded hand-overs and verify pending ones."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Deliveries} classes="btn btn-secondary">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-6 h-6" />
                            {"Communities"}
                        </h2>
                        <p>{"Register and verify recipient communities."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Communities} classes="btn btn-outline">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
