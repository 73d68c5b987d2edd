use crate::http::request::Method;

/// The privileged control endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    SetFan,
    PowerOn,
    PowerOff,
    SetTimer,
    Reset,
}

/// Static routing table, built once at startup and read-only afterwards.
///
/// Lookups are exact string matches; `/` and `/index.html` are two
/// separately registered entries, not a redirect pair.
#[derive(Debug)]
pub struct Router {
    routes: Vec<(Method, &'static str, Route)>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![
                (Method::GET, "/", Route::Index),
                (Method::GET, "/index.html", Route::Index),
                (Method::GET, "/priv-api/fan", Route::SetFan),
                (Method::GET, "/priv-api/on", Route::PowerOn),
                (Method::GET, "/priv-api/off", Route::PowerOff),
                (Method::GET, "/priv-api/timer", Route::SetTimer),
                (Method::GET, "/priv-api/reset", Route::Reset),
            ],
        }
    }

    /// Resolves a (method, path) pair to a route. Pure and total: every
    /// unmatched pair is `None`, which the connection layer answers 404.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<Route> {
        self.routes
            .iter()
            .find(|(m, p, _)| m == method && *p == path)
            .map(|(_, _, route)| *route)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
