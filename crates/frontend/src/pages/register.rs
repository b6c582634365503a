use super::set_title;
use sales_frontend_common::auth::use_auth_api;
use sales_frontend_common::services::{RegisterRequest, RegistrationRole};
use sales_frontend_common::{LoadingSpinner, Route};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

fn role_label(role: RegistrationRole) -> &'static str {
    match role {
        RegistrationRole::Sales => "Sales",
        RegistrationRole::ProductManager => "Product manager",
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_auth_api();

    let name = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(RegistrationRole::default);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);
    let registered = use_state(|| false);

    use_effect_with((), |_| set_title("Register"));

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = RegistrationRole::parse(&select.value()) {
                role.set(selected);
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let username = username.clone();
        let password = password.clone();
        let role = role.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let registered = registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(api) = api.clone() else {
                error.set(Some("The application is not configured to reach the server.".into()));
                return;
            };

            let request = RegisterRequest {
                name: (*name).clone(),
                username: (*username).clone(),
                password: (*password).clone(),
                role: *role,
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let registered = registered.clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api.register(&request).await {
                    Ok(_) => registered.set(true),
                    Err(err) => error.set(Some(err.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    if *registered {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
                <div class="max-w-sm w-full bg-white rounded-lg shadow p-8 space-y-4 text-center">
                    <h1 class="text-xl font-bold text-gray-900">{"Registration received"}</h1>
                    <p class="text-gray-600">{"An administrator has to approve the account before you can sign in."}</p>
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Back to sign in"}
                    </Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <form class="max-w-sm w-full bg-white rounded-lg shadow p-8 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900 text-center">{"Create an account"}</h1>

                if let Some(message) = &*error {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded p-3 text-sm">
                        {message}
                    </div>
                }

                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    placeholder="Full name"
                    value={(*name).clone()}
                    oninput={text_input(&name)}
                />
                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    placeholder="Username"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={text_input(&username)}
                />
                <input
                    type="password"
                    class="w-full px-3 py-2 border border-gray-300 rounded"
                    placeholder="Password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    oninput={text_input(&password)}
                />
                <select class="w-full px-3 py-2 border border-gray-300 rounded" onchange={on_role}>
                    { for RegistrationRole::ALL.into_iter().map(|option| html! {
                        <option value={option.as_str()} selected={option == *role}>
                            {role_label(option)}
                        </option>
                    }) }
                </select>

                if *submitting {
                    <LoadingSpinner text={Some(AttrValue::from("Submitting..."))} />
                } else {
                    <button
                        type="submit"
                        class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded font-medium"
                    >
                        {"Register"}
                    </button>
                }

                <p class="text-sm text-center text-gray-600">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Already registered? Sign in"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
