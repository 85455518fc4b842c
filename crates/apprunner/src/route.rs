//! Core traits and structs to define the pages of the site.
//!
//! Every page implements the [`Route`] trait. The server then mounts routes
//! through the [`routes!`](crate::routes) macro to serve them.
use maud::Markup;

use crate::clock::Clock;
use crate::layout::layout;

/// What a route contributes to its document: the title that goes into
/// `<title>` (and decides which nav link is active) and the main content.
pub struct Page {
    pub title: String,
    pub content: Markup,
}

impl Page {
    pub fn new(title: impl Into<String>, content: Markup) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// A page of the site, mounted at a fixed path.
///
/// ## Example
/// ```rs
/// use apprunner::route::{Page, Route};
/// use maud::html;
///
/// pub struct Index;
///
/// impl Route for Index {
///     fn path(&self) -> &'static str {
///         "/"
///     }
///
///     fn page(&self) -> Page {
///         Page::new("Home — AppRunner", html! { h1 { "Hello, world!" } })
///     }
/// }
/// ```
pub trait Route: Sync {
    /// The URL path this route answers on, e.g. `/about`.
    fn path(&self) -> &'static str;

    /// The page itself, before the shared chrome is applied.
    fn page(&self) -> Page;

    /// The full HTML document for this route at the instant given by `clock`.
    fn render(&self, clock: &dyn Clock) -> Markup {
        layout(&self.page(), clock)
    }
}
