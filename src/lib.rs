#![cfg(target_arch = "wasm32")]
use header_core::{HeaderStyle, HeaderStyler, StylerConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod guard;

// One listener per page; released again if an install attempt fails
static INSTALL: guard::InstallGuard = guard::InstallGuard::new();

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("header-scroll starting");

    if cfg!(feature = "manual-install") {
        return Ok(());
    }
    if let Err(e) = install(StylerConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Install the styler with a custom threshold and marker class. Meant for
/// builds with the `manual-install` feature; fails if a styler is already
/// listening on this page.
#[wasm_bindgen]
pub fn install_with(threshold_px: f64, marker_class: &str) -> Result<(), JsValue> {
    let config = StylerConfig {
        threshold_px,
        marker_class: marker_class.to_string(),
        ..StylerConfig::default()
    };
    install(config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn install(config: StylerConfig) -> anyhow::Result<()> {
    let styler = HeaderStyler::new(config)?;
    let claim = INSTALL
        .try_claim()
        .ok_or_else(|| anyhow::anyhow!("header styler already installed"))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Toggling the class still works without the injected rules
    let cfg = styler.config();
    let css = HeaderStyle::default().to_css(&cfg.header_selector, &cfg.marker_class);
    match dom::inject_stylesheet(&document, constants::STYLE_ELEMENT_ID, &css) {
        Ok(true) => {}
        Ok(false) => log::info!(
            "#{} already present, keeping page styles",
            constants::STYLE_ELEMENT_ID
        ),
        Err(e) => log::warn!("stylesheet not injected: {:#}", e),
    }

    // Reflect the offset the page loaded at before the first scroll event
    let page = dom::BrowserPage::new(window.clone());
    events::sync_header_at_load(&styler, &page);

    log::info!(
        "header styler listening (threshold {}px, class `{}`)",
        cfg.threshold_px,
        cfg.marker_class
    );
    events::wire_scroll_listener(&window, styler, page)?;
    claim.commit();
    Ok(())
}
