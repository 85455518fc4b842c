mod home;
pub use home::Home;
mod about;
pub use about::About;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use crate::layout::{ABOUT_TITLE, HOME_TITLE};
    use crate::route::Route;

    struct FixedClock {
        year: i32,
    }

    impl Clock for FixedClock {
        fn year(&self) -> i32 {
            self.year
        }
    }

    #[test]
    fn test_routes_have_expected_paths() {
        assert_eq!(Home.path(), "/");
        assert_eq!(About.path(), "/about");
    }

    #[test]
    fn test_home_renders_full_document() {
        let out = Home.render(&FixedClock { year: 2026 }).into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains(&format!("<title>{}</title>", HOME_TITLE)));
        assert!(out.contains(r#"<span class="highlight">AWS App Runner</span>"#));
        assert!(out.contains(r#"<div class="stat-label">Uptime SLA</div>"#));
        assert!(out.contains(r#"<a href="/" class="active">Home</a>"#));
        assert!(out.contains("© 2026"));
    }

    #[test]
    fn test_about_renders_full_document() {
        let out = About.render(&FixedClock { year: 2026 }).into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains(&format!("<title>{}</title>", ABOUT_TITLE)));
        assert!(out.contains(r#"<div class="code-tag">GET /about</div>"#));
        assert!(out.contains("<h3>Instant Deploy</h3>"));
        assert!(out.contains("<h3>Global Edge</h3>"));
        assert!(out.contains(r#"<a href="/about" class="active">About</a>"#));
    }
}
