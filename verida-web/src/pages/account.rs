use crate::api::VeridaClient;
use crate::auth::SessionManager;
use crate::models::auth_state::AuthState;
use crate::routes::MainRoute;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

const COPIED_RESET_MS: u32 = 2_000;

/// Account page: session details, Stellar balance, and sign-out.
#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let (state, dispatch) = use_store::<AuthState>();
    let navigator = use_navigator();
    let balance = use_state(|| None::<String>);
    let balance_error = use_state(|| None::<String>);
    let copied = use_state(|| false);

    let public_key = state
        .user
        .as_ref()
        .map(|user| user.stellar_public_key.clone());

    {
        let balance = balance.clone();
        let balance_error = balance_error.clone();
        let public_key = public_key.clone();
        use_effect_with(public_key, move |key| {
            if let Some(key) = key.clone() {
                spawn_local(async move {
                    match VeridaClient::shared().stellar_balance(&key).await {
                        Ok(response) => balance.set(Some(response.balance)),
                        Err(err) => balance_error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

    let on_copy = {
        let copied = copied.clone();
        let public_key = public_key.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(key) = public_key.clone() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&key);
            }
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
        })
    };

    let on_logout = {
        let session = SessionManager::new(dispatch);
        Callback::from(move |_: MouseEvent| {
            session.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Landing);
            }
        })
    };

    let Some(user) = state.user.as_ref() else {
        // The route guard keeps anonymous visitors out; nothing to show here.
        return html! {};
    };

    html! {
        <div class="p-4 space-y-6 max-w-2xl mx-auto">
            <h1 class="text-2xl font-bold">{"Account"}</h1>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-2">
                    <div>
                        <p class="text-sm text-base-content/70">{"Name"}</p>
                        <p class="font-semibold">{ user.name.clone() }</p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/70">{"Email"}</p>
                        <p>{ user.email.clone() }</p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/70">{"Stellar public key"}</p>
                        <div class="flex items-center gap-2">
                            <code class="text-xs break-all">{ user.stellar_public_key.clone() }</code>
                            <button class="btn btn-ghost btn-xs" onclick={on_copy}>
                                if *copied {
                                    <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-4 h-4 text-success" />
                                } else {
                                    <Icon icon_id={IconId::HeroiconsOutlineClipboard} class="w-4 h-4" />
                                }
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Stellar balance"}</h2>
                    if let Some(message) = &*balance_error {
                        <div class="alert alert-warning"><span>{ message.clone() }</span></div>
                    } else if let Some(amount) = &*balance {
                        <p class="text-3xl font-bold">{ format!("{amount} XLM") }</p>
                    } else {
                        <span class="loading loading-spinner"></span>
                    }
                </div>
            </div>

            <button class="btn btn-outline btn-error" onclick={on_logout}>
                {"Sign out"}
            </button>
        </div>
    }
}
