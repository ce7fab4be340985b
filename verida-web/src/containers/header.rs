use crate::auth::SessionManager;
use crate::models::auth_state::AuthState;
use crate::routes::MainRoute;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Top navigation bar: brand, protected-page links, user badge, logout.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (state, dispatch) = use_store::<AuthState>();
    let navigator = use_navigator();

    let on_logout = {
        let session = SessionManager::new(dispatch);
        Callback::from(move |_: MouseEvent| {
            session.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Landing);
            }
        })
    };

    let nav_items = MainRoute::iter()
        .filter(MainRoute::is_protected)
        .map(|route| {
            let label = route.nav_label().unwrap_or_default();
            let active = props.current_route.as_ref() == Some(&route);
            let classes = if active { "btn btn-ghost btn-sm btn-active" } else { "btn btn-ghost btn-sm" };
            html! {
                <li>
                    <Link<MainRoute> to={route} classes={classes}>
                        { label }
                    </Link<MainRoute>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost text-lg">
                {"Verida"}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal">
                { nav_items }
            </ul>
            <div class="flex items-center gap-2">
                {
                    state.user.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &user.name }</span>
                                <button class="btn btn-outline btn-sm" onclick={on_logout.clone()}>
                                    {"Sign out"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
