use crate::style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] failed to add {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn on_click(element: &web::Element, handler: impl FnMut() + 'static) -> Option<Listener> {
    Listener::new(element.as_ref(), "click", handler)
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element failed: {:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

pub fn set_text_by_id(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn attr<T: std::str::FromStr>(el: &web::Element, name: &str) -> Option<T> {
    style::parse_attr(el.get_attribute(name).as_deref())
}

/// Every element carrying `attr_name`, paired with the attribute value.
pub fn elements_with_attr(document: &web::Document, attr_name: &str) -> Vec<(web::Element, String)> {
    let Ok(list) = document.query_selector_all(&format!("[{attr_name}]")) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .filter_map(|el| el.get_attribute(attr_name).map(|v| (el, v)))
        .collect()
}
