use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/search")]
    Search,
    #[at("/booking/invoice")]
    Invoice,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Map a post-login path (role dashboards live outside this app and
    /// fall through to home).
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/search" => Self::Search,
            "/booking/invoice" => Self::Invoice,
            _ => Self::Home,
        }
    }
}
