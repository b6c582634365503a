use crate::pages::{DashboardLayout, LoginPage, NotFoundPage, RegisterPage};
use sales_frontend_common::{GuardedSwitch, Route, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SalesApp)]
pub fn sales_app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <GuardedSwitch render={Callback::from(switch)} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::AppHome | Route::App => html! { <DashboardLayout /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
