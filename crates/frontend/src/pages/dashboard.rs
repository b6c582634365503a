use super::sections::switch_section;
use sales_frontend_common::auth::{SessionAction, use_session};
use sales_frontend_common::{AppRoute, Route};
use yew::prelude::*;
use yew_router::prelude::*;

/// Navigation entries: route, label, admin only
const NAV: [(AppRoute, &str, bool); 6] = [
    (AppRoute::Sales, "Sales", false),
    (AppRoute::Orders, "Orders", false),
    (AppRoute::Products, "Products", false),
    (AppRoute::Categories, "Categories", false),
    (AppRoute::Admin, "Admin", true),
    (AppRoute::Accounts, "Accounts", true),
];

/// Frame around every `/app` page
#[function_component(DashboardLayout)]
pub fn dashboard_layout() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<AppRoute>();

    let username = session.username();
    let role = session.role();
    let is_admin = role == "admin";

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <nav class="w-56 bg-white border-r border-gray-200 p-4 space-y-1">
                <div class="text-lg font-bold text-gray-900 mb-4">{"Sales Console"}</div>
                { for NAV.iter().filter(|(_, _, admin_only)| is_admin || !admin_only).map(|(route, label, _)| {
                    let active = current.as_ref() == Some(route);
                    let classes = if active {
                        "block px-3 py-2 rounded bg-blue-50 text-blue-700 font-medium"
                    } else {
                        "block px-3 py-2 rounded text-gray-700 hover:bg-gray-100"
                    };
                    html! {
                        <Link<AppRoute> to={route.clone()} classes={classes}>{*label}</Link<AppRoute>>
                    }
                }) }
            </nav>

            <div class="flex-1 flex flex-col">
                <header class="h-14 bg-white border-b border-gray-200 px-6 flex items-center justify-end gap-4">
                    <span class="text-sm text-gray-700">{username}</span>
                    <span class="text-xs uppercase tracking-wide px-2 py-1 rounded bg-gray-100 text-gray-600">{role}</span>
                    <button
                        onclick={on_logout}
                        class="px-3 py-1.5 text-sm text-gray-700 bg-gray-100 hover:bg-gray-200 rounded"
                    >
                        {"Sign out"}
                    </button>
                </header>
                <main class="flex-1 p-6">
                    <Switch<AppRoute> render={Callback::from(switch_section)} />
                </main>
            </div>
        </div>
    }
}
