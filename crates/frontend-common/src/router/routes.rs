//! Static route table
//!
//! Everything under `/app` belongs to the dashboard and is only reachable
//! with a session; see [`super::guard`].

use yew_router::prelude::*;

/// Top-level routes
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    /// Redirects to the login page
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    /// Dashboard layout with no section selected
    #[at("/app")]
    AppHome,
    /// Dashboard layout, section chosen by [`AppRoute`]
    #[at("/app/*")]
    App,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Sections rendered inside the dashboard layout
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum AppRoute {
    #[at("/app/sales")]
    Sales,
    #[at("/app/orders")]
    Orders,
    #[at("/app/orders/:id")]
    OrderDetail { id: String },
    #[at("/app/products")]
    Products,
    #[at("/app/products/new")]
    NewProduct,
    #[at("/app/products/:id")]
    EditProduct { id: String },
    #[at("/app/categories")]
    Categories,
    #[at("/app/admin")]
    Admin,
    #[at("/app/accounts")]
    Accounts,
    #[not_found]
    #[at("/app/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_paths() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/app"), Some(Route::AppHome));
        assert_eq!(Route::recognize("/app/orders/7"), Some(Route::App));
    }

    #[test]
    fn dashboard_paths() {
        assert_eq!(
            AppRoute::OrderDetail { id: "42".into() }.to_path(),
            "/app/orders/42"
        );
        assert_eq!(
            AppRoute::recognize("/app/orders/42"),
            Some(AppRoute::OrderDetail { id: "42".into() })
        );
        assert_eq!(
            AppRoute::recognize("/app/products/new"),
            Some(AppRoute::NewProduct)
        );
        assert_eq!(
            AppRoute::recognize("/app/products/9"),
            Some(AppRoute::EditProduct { id: "9".into() })
        );
        assert_eq!(AppRoute::recognize("/app/accounts"), Some(AppRoute::Accounts));
    }
}
