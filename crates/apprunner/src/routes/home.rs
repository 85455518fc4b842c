use maud::html;

use crate::layout::HOME_TITLE;
use crate::route::{Page, Route};

/// The landing page.
pub struct Home;

impl Route for Home {
    fn path(&self) -> &'static str {
        "/"
    }

    fn page(&self) -> Page {
        let stats = [
            ("∞", "Auto Scaling"),
            ("0", "Servers Managed"),
            ("99.9%", "Uptime SLA"),
        ];

        Page::new(
            HOME_TITLE,
            html! {
                main {
                    p.eyebrow { "Production · Scalable · Serverless" }
                    h1 {
                        "Hello from" br;
                        span.highlight { "AWS App Runner" } " 🚀"
                    }
                    p.subtitle {
                        "Your application is live and running on fully managed infrastructure. Auto-scales from zero — no servers to manage, no clusters to configure."
                    }
                    div.ctas {
                        a.btn.btn-primary href="/about" { "Learn More" }
                        a.btn.btn-ghost href="https://aws.amazon.com/apprunner/" target="_blank" rel="noopener" { "AWS Docs ↗" }
                    }
                    div.stats {
                        @for (value, label) in stats {
                            div.stat-item {
                                div.stat-value { (value) }
                                div.stat-label { (label) }
                            }
                        }
                    }
                }
            },
        )
    }
}
