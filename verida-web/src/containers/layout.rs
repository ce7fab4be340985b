use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Shell around every authenticated page: header, content area, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2025 Verida · Transparent donations on Stellar"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
