use maud::html;

use crate::layout::ABOUT_TITLE;
use crate::route::{Page, Route};

/// The page telling the deployment story.
pub struct About;

impl Route for About {
    fn path(&self) -> &'static str {
        "/about"
    }

    fn page(&self) -> Page {
        let cards = [
            ("⚡", "Instant Deploy", "Push code and App Runner automatically builds, deploys, and serves your application within minutes."),
            ("📈", "Auto Scaling", "Traffic spikes are handled gracefully. Scale to zero when idle, scale up instantly on demand."),
            ("🔒", "Secure by Default", "Automatic HTTPS, managed TLS certificates, and built-in AWS IAM integration out of the box."),
            ("🌐", "Global Edge", "Serve users worldwide with low latency, backed by AWS's global infrastructure and CDN."),
        ];

        Page::new(
            ABOUT_TITLE,
            html! {
                main {
                    div.code-tag { "GET /about" }
                    p.eyebrow { "About this deployment" }
                    h1 style="font-size: clamp(2.5rem, 6vw, 4.5rem)" {
                        "Built on " span.highlight { "App Runner" }
                    }
                    p.subtitle {
                        "AWS App Runner automatically builds and deploys your application, then load balances traffic with TLS encryption — so you can focus on code."
                    }
                    div.card-grid {
                        @for (icon, name, description) in cards {
                            div.card {
                                div.card-icon { (icon) }
                                h3 { (name) }
                                p { (description) }
                            }
                        }
                    }
                }
            },
        )
    }
}
