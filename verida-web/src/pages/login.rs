use crate::auth::{MIN_PASSWORD_LEN, SessionManager};
use crate::models::auth_state::AuthState;
use crate::routes::{LoginQuery, MainRoute, login_target};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Sign-in form. Validation errors render inline; a successful login
/// navigates to the pending target carried by the guard's redirect, or the
/// dashboard when there is none.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let (state, dispatch) = use_store::<AuthState>();
    let navigator = use_navigator();
    let location = use_location();

    // Consumed once: the path the route guard sent us here from.
    let pending_target = location
        .as_ref()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .and_then(|query| query.from);

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let session = SessionManager::new(dispatch);
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();

            if email_value.is_empty() || password_value.is_empty() {
                error_handle.set(Some("Please fill in all fields".to_string()));
                return;
            }
            if password_value.len() < MIN_PASSWORD_LEN {
                error_handle.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            if session.login(&email_value, &password_value) {
                error_handle.set(None);
                if let Some(navigator) = &navigator {
                    navigator.push(&login_target(pending_target.as_deref()));
                }
            } else {
                error_handle.set(Some("Invalid credentials".to_string()));
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                error.set(None);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                error.set(None);
            }
        })
    };

    let is_busy = state.loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="w-full max-w-md">
                <Link<MainRoute> to={MainRoute::Landing} classes="btn btn-ghost btn-sm mb-4">
                    {"← Back to home"}
                </Link<MainRoute>>
                <div class="card shadow-lg bg-base-100">
                    <form class="card-body" onsubmit={onsubmit}>
                        <h2 class="card-title text-2xl">{"Welcome"}</h2>
                        <p class="text-sm text-base-content/70">{"Sign in to your Verida account"}</p>
                        if let Some(message) = &*error {
                            <div class="alert alert-error">
                                <span>{message.clone()}</span>
                            </div>
                        }
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{"Email Address"}</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered"
                                type="email"
                                placeholder="your@email.com"
                                value={(*email).clone()}
                                oninput={on_email_change}
                                disabled={is_busy}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{"Password"}</span>
                            </label>
                            <input
                                id="password"
                                class="input input-bordered"
                                type="password"
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                oninput={on_password_change}
                                disabled={is_busy}
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                {if is_busy { "Signing in..." } else { "Sign In" }}
                            </button>
                        </div>
                        <div class="mt-4 p-4 bg-base-200 rounded-lg text-sm">
                            <p class="font-semibold">{"Demo credentials"}</p>
                            <p>{"Email: demo@verida.org"}</p>
                            <p>{"Password: demo123"}</p>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
