use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::models::auth_state::AuthState;
use crate::pages::*;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/donations")]
    Donations,
    // Legacy spelling kept so saved links don't break.
    #[at("/deliverys")]
    Deliveries,
    #[at("/communities")]
    Communities,
    #[at("/account")]
    Account,
    // Legacy alias for the dashboard.
    #[at("/home")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Whether the route sits behind the route guard.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Donations | Self::Deliveries | Self::Communities | Self::Account
        )
    }

    /// Header label for routes that appear in the navigation bar.
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Dashboard"),
            Self::Donations => Some("Donations"),
            Self::Deliveries => Some("Deliveries"),
            Self::Communities => Some("Communities"),
            Self::Account => Some("Account"),
            _ => None,
        }
    }
}

/// Query string carried by the login redirect: the originally requested
/// location, consumed once after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginQuery {
    /// Path the user was trying to reach.
    pub from: Option<String>,
}

/// What the route guard decided to do for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restore or login still settling: show a placeholder, decide nothing.
    Wait,
    /// Send the user to the login screen, remembering where they were going.
    Redirect {
        /// The originally requested path.
        from: String,
    },
    /// Render the protected content unchanged.
    Render,
}

/// Pure guard rule. Never redirects while `loading` is true — restore must
/// settle before any redirect decision is made.
#[must_use]
pub fn guard(state: &AuthState, requested_path: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if !state.is_authenticated() {
        return GuardDecision::Redirect {
            from: requested_path.to_string(),
        };
    }
    GuardDecision::Render
}

/// Where to land after a successful login: the pending target when it names
/// a real route, the dashboard otherwise.
#[must_use]
pub fn login_target(from: Option<&str>) -> MainRoute {
    match from.and_then(MainRoute::recognize) {
        Some(MainRoute::Login) | Some(MainRoute::NotFound) | None => MainRoute::Dashboard,
        Some(route) => route,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Wraps protected content: waits out the restore, redirects anonymous
/// visitors to `/login` with the requested path attached, renders otherwise.
/// Holds no state of its own; recomputes on every auth store change.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let (state, _) = use_store::<AuthState>();
    let location = use_location();
    let navigator = use_navigator();

    let requested_path = location
        .as_ref()
        .map_or_else(|| "/".to_string(), |location| location.path().to_string());

    match guard(&state, &requested_path) {
        GuardDecision::Wait => html! { <Loading /> },
        GuardDecision::Redirect { from } => {
            if let Some(navigator) = navigator {
                let _ = navigator.replace_with_query(&MainRoute::Login, &LoginQuery { from: Some(from) });
            }
            html! {}
        }
        GuardDecision::Render => html! { <>{ for props.children.iter() }</> },
    }
}

fn protected(route: MainRoute, page: Html) -> Html {
    html! {
        <RouteGuard>
            <Layout current_route={route}>
                { page }
            </Layout>
        </RouteGuard>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::Landing => html! { <LandingPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Dashboard => protected(MainRoute::Dashboard, html! { <DashboardPage /> }),
        MainRoute::Donations => protected(MainRoute::Donations, html! { <DonationsPage /> }),
        MainRoute::Deliveries => protected(MainRoute::Deliveries, html! { <DeliveriesPage /> }),
        MainRoute::Communities => protected(MainRoute::Communities, html! { <CommunitiesPage /> }),
        MainRoute::Account => protected(MainRoute::Account, html! { <AccountPage /> }),
        MainRoute::Home => html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> },
        MainRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::Landing} /> },
    }
}
