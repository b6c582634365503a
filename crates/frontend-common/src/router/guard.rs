//! Navigation guard for the protected dashboard subtree
//!
//! The check is synchronous and reads only the in-memory session. It keeps
//! signed-out users away from dashboard pages; it is not access control,
//! which the backend enforces on every request.

use super::Route;
use crate::auth::context::use_session;
use crate::config::RouteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

/// Outcome of a navigation attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Decide whether `path` may be entered
///
/// Plain prefix test, so `/app`, `/app/orders` and `/apple` are all
/// protected. An expired session counts as no session.
pub fn guard(path: &str, authenticated: bool) -> Navigation {
    if path.starts_with(RouteConfig::PROTECTED_PREFIX) && !authenticated {
        Navigation::Redirect(RouteConfig::LOGIN_PATH)
    } else {
        Navigation::Allow
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedSwitchProps {
    pub render: Callback<Route, Html>,
}

/// `Switch<Route>` that runs [`guard`] on every location change
#[function_component(GuardedSwitch)]
pub fn guarded_switch(props: &GuardedSwitchProps) -> Html {
    let session = use_session();
    let location = use_location();
    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    match guard(&path, session.is_authenticated()) {
        Navigation::Allow => html! { <Switch<Route> render={props.render.clone()} /> },
        Navigation::Redirect(target) => {
            tracing::debug!(%path, redirect_to = target, "no session, redirecting");
            let to = Route::recognize(target).unwrap_or(Route::Login);
            html! { <Redirect<Route> to={to} /> }
        }
    }
}
