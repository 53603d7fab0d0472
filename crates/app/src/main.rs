//! Interactive text storefront: one typed line per click.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use storefront_app::input::{self, Input};
use storefront_app::session::CartEnvelope;
use storefront_app::{AppConfig, Session, view};
use storefront_cart::Storefront;
use storefront_core::SessionId;
use storefront_events::InMemoryEventBus;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    storefront_observability::init(config.log_format);

    if let Some(raw) = &config.rejected_log_format {
        tracing::warn!(value = %raw, "unknown log format; using json");
    }

    let catalog = config.load_catalog()?;
    let session_id = SessionId::new();
    tracing::info!(
        session = %session_id,
        products = catalog.len(),
        custom_catalog = config.catalog_path.is_some(),
        "storefront starting"
    );

    let bus: Arc<InMemoryEventBus<CartEnvelope>> = Arc::new(InMemoryEventBus::new());
    let mut session = Session::new(Storefront::new(session_id, catalog), bus);
    let redraws = session.subscribe();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    write!(out, "{}", view::render(session.state()))?;
    writeln!(out, "{}", input::HELP)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match input::parse_input(&line) {
            Ok(None) => continue,
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Help)) => writeln!(out, "{}", input::HELP)?,
            Ok(Some(Input::Render)) => write!(out, "{}", view::render(session.state()))?,
            Ok(Some(Input::Command(command))) => {
                session.dispatch(command)?;
                // Redraw only when something actually happened.
                if !redraws.drain().is_empty() {
                    write!(out, "{}", view::render(session.state()))?;
                }
            }
            Err(e) => {
                tracing::warn!(input = %line, error = %e, "ignoring input");
                writeln!(out, "{e}")?;
            }
        }
        out.flush()?;
    }

    tracing::info!(
        session = %session_id,
        cart_count = session.state().cart_count(),
        "storefront closed"
    );
    Ok(())
}
