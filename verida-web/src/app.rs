use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

/// Root component: the store root, the router, and the route switch.
///
/// The auth store is created by `YewduxRoot` when first used; its
/// constructor performs the synchronous restore-from-storage pass, so by
/// the time any route renders the session state is already settled.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </YewduxRoot>
    }
}
