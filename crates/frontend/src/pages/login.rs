use super::set_title;
use sales_frontend_common::auth::context::login;
use sales_frontend_common::auth::{use_auth_api, use_session};
use sales_frontend_common::{AppRoute, LoadingSpinner, Route};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let api = use_auth_api();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    use_effect_with((), |_| set_title("Sign in"));

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(api) = api.clone() else {
                error.set(Some("The application is not configured to reach the server.".into()));
                return;
            };

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let username = (*username).clone();
            let password = (*password).clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match login(&session, &api, &username, &password).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&AppRoute::Sales);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <form class="max-w-sm w-full bg-white rounded-lg shadow p-8 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900 text-center">{"Sales Console"}</h1>

                if let Some(message) = &*error {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded p-3 text-sm">
                        {message}
                    </div>
                }

                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    placeholder="Username"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <input
                    type="password"
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    placeholder="Password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={on_password}
                />

                if *submitting {
                    <LoadingSpinner text={Some(AttrValue::from("Signing in..."))} />
                } else {
                    <button
                        type="submit"
                        class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded font-medium"
                    >
                        {"Sign in"}
                    </button>
                }

                <p class="text-sm text-center text-gray-600">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                        {"Register"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
