use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Public marketing page at `/`.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <div class="hero min-h-[60vh]">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">{"Verida"}</h1>
                        <p class="py-6">
                            {"Transparent donations on Stellar. Funds stay in escrow until the \
                              community confirms the delivery arrived."}
                        </p>
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-lg">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 p-8 max-w-5xl mx-auto">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-8 h-8 text-primary" />
                        <h2 class="card-title">{"Donate"}</h2>
                        <p>{"Fund a community and set the conditions for releasing the escrow."}</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <Icon icon_id={IconId::HeroiconsOutlineTruck} class="w-8 h-8 text-primary" />
                        <h2 class="card-title">{"Deliver"}</h2>
                        <p>{"Representatives record each hand-over with proof on chain."}</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8 text-primary" />
                        <h2 class="card-title">{"Verify"}</h2>
                        <p>{"Validators confirm deliveries and the escrow settles automatically."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
