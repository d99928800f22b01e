use yew::prelude::*;
use yew_router::Routable;

use crate::router::Route;

/// Top navigation bar. Plain anchors so the bar renders identically with or
/// without a router context.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="bg-white shadow-md px-4 py-3 flex items-center justify-between" data-testid="navbar">
            <a href={Route::Home.to_path()} class="text-xl font-bold text-blue-600">
                { "WorldTripLink" }
            </a>
            <div class="flex gap-4 text-sm text-gray-700">
                <a href={Route::Search.to_path()} class="hover:text-blue-600">{ "Cabs" }</a>
                <a href={Route::Login.to_path()} class="hover:text-blue-600">{ "Login" }</a>
            </div>
        </nav>
    }
}
