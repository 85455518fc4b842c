//! Rendering core for the AppRunner marketing site.
//!
//! Every page of the site is a [`route::Route`] producing a [`route::Page`],
//! which [`layout::layout`] wraps in the chrome shared by the whole site. The
//! server crate mounts the routes returned by [`routes!`] and serves them.

// Modules the server will interact directly or indirectly with
pub mod clock;
pub mod layout;
pub mod route;

mod routes;

// Exports for the server
pub use routes::{About, Home};

/// Helps to define every route that should be served.
///
/// ## Example
/// ```rs
/// use apprunner::{route::Route, routes, About, Home};
///
/// fn site_routes() -> &'static [&'static dyn Route] {
///     routes![Home, About]
/// }
/// ```
#[macro_export]
macro_rules! routes {
    [$($route:expr),*] => {
        &[$(&$route),*]
    };
}

/// The version of AppRunner being used.
///
/// Can be used to create a generator tag in the output HTML.
///
/// ## Example
/// ```rs
/// use apprunner::GENERATOR;
///
/// format!("<meta name=\"generator\" content=\"{}\">", GENERATOR);
/// ```
pub const GENERATOR: &str = concat!("AppRunner v", env!("CARGO_PKG_VERSION"));
