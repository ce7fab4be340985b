use yew::{Html, function_component, html};

/// Neutral waiting placeholder shown while the session restore settles or a
/// page fetch is in flight.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <span class="text-primary font-bold">{"V"}</span>
                    <span>{"Verida"}</span>
                </div>
                <div class="mt-3 flex items-center">
                    <span>{"Checking authentication"}</span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                </div>
            </div>
        </div>
    }
}
