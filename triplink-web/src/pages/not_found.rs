use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="min-h-screen flex flex-col items-center justify-center gap-4" aria-live="assertive">
            <h1 class="text-3xl font-bold text-gray-800">{ "Page not found" }</h1>
            <p class="text-gray-600">{ "The page you were looking for does not exist." }</p>
            <button
                type="button"
                class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                onclick={go_home}
            >
                { "Back to home" }
            </button>
        </section>
    }
}
