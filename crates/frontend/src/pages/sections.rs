use super::set_title;
use sales_frontend_common::auth::use_is_authenticated;
use sales_frontend_common::{AppRoute, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

/// Dashboard section shell; the section bodies are provided by feature pages
#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    use_effect_with(props.title.clone(), |title| set_title(title));

    html! {
        <section>
            <h1 class="text-2xl font-semibold text-gray-900">{props.title.clone()}</h1>
            if let Some(subtitle) = &props.subtitle {
                <p class="mt-1 text-sm text-gray-500">{subtitle.clone()}</p>
            }
        </section>
    }
}

pub(super) fn switch_section(route: AppRoute) -> Html {
    match route {
        AppRoute::Sales => html! { <Section title="Sales dashboard" /> },
        AppRoute::Orders => html! { <Section title="Orders" /> },
        AppRoute::OrderDetail { id } => {
            html! { <Section title="Order" subtitle={AttrValue::from(format!("#{id}"))} /> }
        }
        AppRoute::Products => html! { <Section title="Products" /> },
        AppRoute::NewProduct => html! { <Section title="New product" /> },
        AppRoute::EditProduct { id } => {
            html! { <Section title="Edit product" subtitle={AttrValue::from(format!("#{id}"))} /> }
        }
        AppRoute::Categories => html! { <Section title="Categories" /> },
        AppRoute::Admin => html! { <Section title="Administration" /> },
        AppRoute::Accounts => html! { <Section title="Accounts" /> },
        AppRoute::NotFound => html! {
            <Section title="Dashboard" subtitle={AttrValue::from("Choose a section from the menu.")} />
        },
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let is_authenticated = use_is_authenticated();
    use_effect_with((), |_| set_title("Not found"));

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-3 bg-gray-50">
            <h1 class="text-2xl font-semibold text-gray-900">{"Page not found"}</h1>
            if is_authenticated {
                <Link<AppRoute> to={AppRoute::Sales} classes="text-blue-600 hover:underline">
                    {"Back to the dashboard"}
                </Link<AppRoute>>
            } else {
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                    {"Go to sign in"}
                </Link<Route>>
            }
        </div>
    }
}
