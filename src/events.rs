use crate::constants::SCROLL_EVENT;
use crate::dom::BrowserPage;
use header_core::HeaderStyler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run the styler once against the page, reporting failures to the console.
/// A failure leaves nothing behind; the next notification retries from scratch.
pub fn sync_header(styler: &HeaderStyler, page: &BrowserPage) {
    if let Err(e) = styler.handle_scroll(page) {
        log::error!("[scroll] {}", e);
    }
}

/// Startup variant of [`sync_header`]; a header that is not there yet is
/// only logged at debug level.
pub fn sync_header_at_load(styler: &HeaderStyler, page: &BrowserPage) {
    if let Err(e) = styler.sync_at_load(page) {
        log::error!("[load] {}", e);
    }
}

/// Register the scroll listener on `window`. The closure is leaked: the
/// listener lives as long as the page and is never removed.
pub fn wire_scroll_listener(
    window: &web::Window,
    styler: HeaderStyler,
    page: BrowserPage,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || {
        sync_header(&styler, &page);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", SCROLL_EVENT, e))?;
    closure.forget();
    Ok(())
}
