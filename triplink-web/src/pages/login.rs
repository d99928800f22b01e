use triplink_core::{LoginForm, LoginStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub form: LoginForm,
    pub on_mobile: Callback<String>,
    pub on_password: Callback<String>,
    pub on_submit: Callback<()>,
}

fn input_value_callback(cb: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            cb.emit(input.value());
        }
    })
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let submitting = props.form.is_submitting();
    let on_mobile = input_value_callback(props.on_mobile.clone());
    let on_password = input_value_callback(props.on_password.clone());
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4" data-testid="login-page">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl p-8">
                <h1 class="text-2xl font-bold text-gray-800 mb-1">{ "Log in to your account" }</h1>
                <p class="text-sm text-gray-500 mb-6">
                    { "Don't have an account? " }
                    <a href="/Register" class="text-blue-600 hover:underline">{ "Create an account" }</a>
                </p>

                <form {onsubmit}>
                    if let Some(error) = props.form.error() {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-2 rounded mb-4" role="alert">
                            { error }
                        </div>
                    }
                    if let Some(banner) = props.form.banner() {
                        <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-2 rounded mb-4" role="status">
                            { banner }
                        </div>
                    }

                    <div class="mb-4">
                        <label for="mobileNo" class="block text-sm font-medium text-gray-700 mb-1">
                            { "Mobile Number" }
                        </label>
                        <input
                            type="text"
                            id="mobileNo"
                            name="mobileNo"
                            placeholder="Enter your mobile number"
                            class="w-full border rounded-lg px-3 py-2"
                            value={props.form.mobile().to_string()}
                            oninput={on_mobile}
                            disabled={submitting}
                        />
                    </div>

                    <div class="mb-6">
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                            { "Password" }
                        </label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            class="w-full border rounded-lg px-3 py-2"
                            value={props.form.password().to_string()}
                            oninput={on_password}
                            disabled={submitting}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-60"
                        disabled={submitting}
                    >
                        if submitting {
                            { "Logging in..." }
                        } else if props.form.status() == LoginStatus::Succeeded {
                            { "Redirecting..." }
                        } else {
                            { "Login" }
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
