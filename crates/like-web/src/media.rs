//! `prefers-reduced-motion` bridge between `matchMedia` and `MotionPreference`.

use crate::constants::REDUCED_MOTION_QUERY;
use like_core::MotionPreference;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live `change` listener on the media query; removed on drop.
pub struct MediaWatch {
    list: web::MediaQueryList,
    closure: Closure<dyn FnMut(web::MediaQueryListEvent)>,
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        _ = self
            .list
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
        log::debug!("[motion] media listener removed");
    }
}

fn media_query_list() -> Option<web::MediaQueryList> {
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Build the shared preference from the browser, pushing later changes into it.
///
/// Without `matchMedia` the preference stays at full motion and no watch is returned.
pub fn watch_reduced_motion() -> (MotionPreference, Option<MediaWatch>) {
    let Some(list) = media_query_list() else {
        return (MotionPreference::headless(), None);
    };
    // the query asks for "no-preference", so a match means full motion
    let pref = MotionPreference::from_query(Some(!list.matches()));

    let pref_for_change = pref.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        pref_for_change.set_reduced(!ev.matches());
    }) as Box<dyn FnMut(web::MediaQueryListEvent)>);
    if let Err(e) =
        list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        log::warn!("[motion] cannot listen for preference changes: {:?}", e);
        return (pref, None);
    }
    log::info!("[motion] prefers reduced motion: {}", pref.reduced());
    (pref, Some(MediaWatch { list, closure }))
}
