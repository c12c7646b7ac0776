use header_core::{ClassList, Page, StylerError};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn js_reason(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// `DOMTokenList` of the header element.
pub struct HeaderClasses(web::DomTokenList);

impl ClassList for HeaderClasses {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn add(&self, class: &str) -> Result<(), StylerError> {
        self.0.add_1(class).map_err(|e| StylerError::ClassList {
            class: class.to_string(),
            reason: js_reason(&e),
        })
    }

    fn remove(&self, class: &str) -> Result<(), StylerError> {
        self.0.remove_1(class).map_err(|e| StylerError::ClassList {
            class: class.to_string(),
            reason: js_reason(&e),
        })
    }
}

/// The live browsing context. Holds only the window; the document and header
/// are looked up on every call.
#[derive(Clone)]
pub struct BrowserPage {
    window: web::Window,
}

impl BrowserPage {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Page for BrowserPage {
    type Header = HeaderClasses;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn query_header(&self, selector: &str) -> Result<Option<HeaderClasses>, StylerError> {
        let Some(document) = self.window.document() else {
            return Ok(None);
        };
        document
            .query_selector(selector)
            .map(|el| el.map(|el| HeaderClasses(el.class_list())))
            .map_err(|e| StylerError::Query {
                selector: selector.to_string(),
                reason: js_reason(&e),
            })
    }
}

/// Append a `<style id=..>` with `css` to `<head>`. Returns false when an
/// element with that id is already present.
pub fn inject_stylesheet(document: &web::Document, id: &str, css: &str) -> anyhow::Result<bool> {
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create <style>: {}", js_reason(&e)))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("append <style>: {}", js_reason(&e)))?;
    Ok(true)
}
