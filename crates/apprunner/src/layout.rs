//! The document chrome shared by every page of the site.
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::GENERATOR;
use crate::clock::Clock;
use crate::route::Page;

/// Title of the home page. The nav only marks "Home" as active on an exact match.
pub const HOME_TITLE: &str = "Home — AppRunner";
/// Title of the about page. Same exact-match rule as [`HOME_TITLE`].
pub const ABOUT_TITLE: &str = "About — AppRunner";

/// Nav entries as (label, href, title of the page they are active on).
const NAV_ITEMS: [(&str, &str, &str); 2] = [
    ("Home", "/", HOME_TITLE),
    ("About", "/about", ABOUT_TITLE),
];

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// Wraps a page in the full HTML document shared by the whole site: head with
/// fonts and styles, glow orbs, nav, and footer.
///
/// The page's content is spliced in as-is, exactly once. Pages build their
/// content with maud, which already escaped anything dynamic when the markup
/// was constructed.
pub fn layout(page: &Page, clock: &dyn Clock) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                (generator())
                link rel="preconnect" href="https://fonts.googleapis.com";
                link href="https://fonts.googleapis.com/css2?family=Syne:wght@400;600;700;800&family=DM+Mono:wght@300;400;500&display=swap" rel="stylesheet";
                style { (PreEscaped(include_str!("../assets/styles.css"))) }
            }
            body {
                div.orb.orb-1 {}
                div.orb.orb-2 {}

                nav {
                    a.nav-logo href="/" { "App" span { "Runner" } }
                    div.nav-links {
                        @for (label, href, active_on) in NAV_ITEMS {
                            a href=(href) class=[(page.title == active_on).then_some("active")] { (label) }
                        }
                    }
                    div.status-pill { "Live" }
                }

                (page.content)

                footer {
                    "© " (clock.year()) (PreEscaped(" &nbsp;·&nbsp; ")) "Deployed via AWS App Runner" (PreEscaped(" &nbsp;·&nbsp; ")) "Rust + Axum"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock {
        year: i32,
    }

    impl Clock for FixedClock {
        fn year(&self) -> i32 {
            self.year
        }
    }

    fn render(title: &str, year: i32) -> String {
        let page = Page::new(title, html! { main { "content" } });
        layout(&page, &FixedClock { year }).into_string()
    }

    #[test]
    fn test_nav_marks_home_active() {
        let out = render(HOME_TITLE, 2026);

        assert!(out.contains(r#"<a href="/" class="active">Home</a>"#));
        assert!(out.contains(r#"<a href="/about">About</a>"#));
    }

    #[test]
    fn test_nav_marks_about_active() {
        let out = render(ABOUT_TITLE, 2026);

        assert!(out.contains(r#"<a href="/about" class="active">About</a>"#));
        assert!(out.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn test_nav_marks_nothing_active_for_other_titles() {
        let out = render("Other", 2026);

        assert!(out.contains(r#"<a href="/">Home</a>"#));
        assert!(out.contains(r#"<a href="/about">About</a>"#));
        assert!(!out.contains(r#"class="active""#));
    }

    #[test]
    fn test_footer_year_comes_from_clock() {
        assert!(render(HOME_TITLE, 2026).contains("© 2026"));
        assert!(render(HOME_TITLE, 1999).contains("© 1999"));
    }

    #[test]
    fn test_content_appears_exactly_once() {
        let page = Page::new("Other", html! { main { "one-of-a-kind marker" } });
        let out = layout(&page, &FixedClock { year: 2026 }).into_string();

        assert_eq!(out.matches("one-of-a-kind marker").count(), 1);
    }

    #[test]
    fn test_same_inputs_render_identical_documents() {
        assert_eq!(render(HOME_TITLE, 2026), render(HOME_TITLE, 2026));
    }

    #[test]
    fn test_chrome_is_always_present() {
        let out = render("Other", 2026);

        assert!(out.contains(r#"<div class="orb orb-1"></div>"#));
        assert!(out.contains(r#"<div class="orb orb-2"></div>"#));
        assert!(out.contains(r#"<div class="status-pill">Live</div>"#));
        assert!(out.contains(r#"<a class="nav-logo" href="/">App<span>Runner</span></a>"#));
        assert!(out.contains(GENERATOR));
        // The stylesheet made it into the document
        assert!(out.contains("--accent:"));
        assert!(out.contains("fonts.googleapis.com"));
    }

    #[test]
    fn test_title_is_escaped() {
        let out = render("R&D — AppRunner", 2026);

        assert!(out.contains("<title>R&amp;D — AppRunner</title>"));
    }
}
