use axum::{body::Body, http::Uri, response::Response};
use colored::Colorize;
use local_ip_address::local_ip;
use std::{net::SocketAddr, time::Duration};
use tower_http::trace::OnResponse;
use tracing::{info, Span};

use crate::logging::{format_elapsed_time, FormatElapsedTimeOptions};

pub fn log_server_start(start_time: std::time::Instant, addr: SocketAddr) {
    let elapsed_time =
        format_elapsed_time(start_time.elapsed(), &FormatElapsedTimeOptions::startup());

    info!(name: "SKIP_FORMAT", "");
    info!(name: "SKIP_FORMAT", "{} {}", "AppRunner 🚀".bold().bright_green(), format!("server started in {}", elapsed_time));
    info!(name: "SKIP_FORMAT", "");

    let port = addr.port();
    let url = format!("\x1b]8;;http://localhost:{port}\x1b\\http://localhost:{port}\x1b]8;;\x1b\\")
        .bold()
        .underline()
        .bright_blue();
    // The server always binds every interface, so show the network URL when
    // the local IP can be resolved.
    let network_url = match local_ip() {
        Ok(local_ip) => {
            format!("\x1b]8;;http://{local_ip}:{port}\x1b\\http://{local_ip}:{port}\x1b]8;;\x1b\\")
                .bold()
                .underline()
                .bright_magenta()
        }
        Err(_) => "unavailable".dimmed(),
    };
    info!(name: "SKIP_FORMAT", "🮔  {}    {}", "Local".bold(), url);
    info!(name: "SKIP_FORMAT", "🮔  {}  {}", "Network".bold(), network_url);
    info!(name: "SKIP_FORMAT", "");

    info!(name: "server", "{}", "waiting for requests...".dimmed());
}

#[derive(Clone, Debug)]
pub struct CustomOnResponse;

impl OnResponse<Body> for CustomOnResponse {
    fn on_response(self, response: &Response<Body>, latency: Duration, _span: &Span) {
        let status = response.status();

        // Skip informational responses
        if status.is_informational() {
            return;
        }

        let status = if status.is_server_error() {
            status.to_string().red()
        } else if status.is_client_error() {
            status.to_string().yellow()
        } else {
            status.to_string().green()
        };

        // The request URI is recorded in the response extensions by the
        // middleware, the span doesn't expose it.
        let uri = response
            .extensions()
            .get::<Uri>()
            .unwrap_or(&Uri::default())
            .to_string()
            .bold();

        let latency = format_elapsed_time(latency, &FormatElapsedTimeOptions::default());

        info!(name: "", "{} {} {}", status, uri, latency);
    }
}
