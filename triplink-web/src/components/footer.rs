use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="mt-8 py-4 text-center text-xs text-gray-500">
            { "© 2025 WorldTripLink. All rights reserved." }
        </footer>
    }
}
