//! Navi Store browser entry point.
//!
//! Compiled to WebAssembly and loaded by the storefront pages. Everything
//! interactive on the page is wired from here.
//!
//! The stored theme must be on the root element before first paint, so pages
//! load the bundle from `<head>` as a render-blocking async module:
//!
//! ```html
//! <script type="module" async blocking="render">
//!   import init from "./storefront-web.js";
//!   await init();
//! </script>
//! ```
//!
//! Loaded that way the module usually starts while the document is still
//! parsing; `app::launch` applies the theme immediately and waits for
//! `DOMContentLoaded` before mounting the other features.

mod app;
mod components;
mod dom;
mod selectors;

use storefront_core::logging::{LogLine, LoggingBuilder};
use storefront_core::SiteConfig;

/// Forward a log line to the browser's developer console.
fn console_sink(line: &LogLine) {
    let text = line.render();
    match line.level.as_str() {
        "error" => gloo::console::error!(text),
        "warn" => gloo::console::warn!(text),
        "debug" | "trace" => gloo::console::debug!(text),
        _ => gloo::console::info!(text),
    }
}

fn main() {
    let document = gloo::utils::document();

    let parsed = app::embedded_config(&document).map(|raw| SiteConfig::from_json(&raw));
    let config = match &parsed {
        Some(Ok(config)) => config.clone(),
        _ => SiteConfig::default(),
    };

    if let Err(e) = LoggingBuilder::new(console_sink)
        .with_filter(config.log_filter.clone())
        .init()
    {
        gloo::console::warn!(e.to_string());
    }

    if let Some(Err(e)) = parsed {
        tracing::warn!(error = %e, "Ignoring embedded site config");
    }

    tracing::debug!(sold = config.sold_ids.len(), "Starting storefront");
    app::launch(document, config);
}
