#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::frame::{FrameContext, FrameLoop};
use like_core::{CardAction, CardState, LikeButton, LikeButtonProps, MotionPreference};
use like_core::{SubscriptionId, DEFAULT_BUTTON_SIZE, DEFAULT_CONFETTI_PIECES, RETWEET_COLOR};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod media;
mod render;
mod style;

/// Everything wired up by `init`; dropping it detaches the page again.
struct App {
    card: Rc<RefCell<CardState>>,
    frame_loop: Rc<FrameLoop>,
    subscriptions: Vec<(CardAction, SubscriptionId)>,
    _listeners: Vec<dom::Listener>,
    _media: Option<media::MediaWatch>,
    _motion: MotionPreference,
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame_loop.stop();
        let mut card = self.card.borrow_mut();
        for (action, id) in self.subscriptions.drain(..) {
            match action {
                CardAction::ToggleLike => card.like.unsubscribe(id),
                CardAction::ToggleRetweet => card.retweet.unsubscribe(id),
            };
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("like-web starting");

    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the button down: cancels frames, removes listeners and created nodes.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::info!("like-web stopping");
    }
    drop(app);
}

fn init() -> anyhow::Result<App> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::HtmlElement = document
        .get_element_by_id(LIKE_BUTTON_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", LIKE_BUTTON_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut rng = rand::thread_rng();
    let likes =
        dom::attr(&root, ATTR_LIKES).unwrap_or_else(|| rng.gen_range(0..=MAX_INITIAL_LIKES));
    let retweets = rng.gen_range(0..=MAX_INITIAL_RETWEETS);
    let props = LikeButtonProps {
        is_liked: false,
        num_of_likes: likes,
        size: dom::attr(&root, ATTR_SIZE).unwrap_or(DEFAULT_BUTTON_SIZE),
        num_of_confetti_pieces: dom::attr(&root, ATTR_CONFETTI).unwrap_or(DEFAULT_CONFETTI_PIECES),
    };
    log::info!(
        "[card] likes={} retweets={} size={} confetti={}",
        likes,
        retweets,
        props.size,
        props.num_of_confetti_pieces
    );

    let card = Rc::new(RefCell::new(CardState::new(likes, retweets)));
    let (motion, media_watch) = media::watch_reduced_motion();

    let card_for_toggle = card.clone();
    let button = LikeButton::new(props, &motion)?
        .on_toggle(move || card_for_toggle.borrow_mut().dispatch(CardAction::ToggleLike));
    let button = Rc::new(RefCell::new(button));

    let view = render::ButtonView::mount(&document, &root)?;
    let frame_loop = FrameLoop::new(FrameContext::new(button.clone(), view));
    frame_loop.refresh();

    let mut subscriptions = Vec::new();
    {
        let button = button.clone();
        let frame_loop = frame_loop.clone();
        let id = card.borrow_mut().like.subscribe(move |s| {
            button.borrow_mut().set_liked(s.is_liked, s.count);
            frame_loop.refresh();
        });
        subscriptions.push((CardAction::ToggleLike, id));
    }
    {
        let document = document.clone();
        dom::set_text_by_id(&document, RETWEET_COUNT_ID, &retweets.to_string());
        let id = card.borrow_mut().retweet.subscribe(move |s| {
            dom::set_text_by_id(&document, RETWEET_COUNT_ID, &s.count.to_string());
        });
        subscriptions.push((CardAction::ToggleRetweet, id));
    }

    let mut listeners = Vec::new();
    let button_for_click = button.clone();
    listeners.extend(dom::on_click(&root, move || {
        // clone the handler out so the card can update the button re-entrantly
        let handler = button_for_click.borrow().toggle_handler();
        if let Some(handler) = handler {
            handler();
        }
    }));
    listeners.extend(wire_action_buttons(&document, &card));

    Ok(App {
        card,
        frame_loop,
        subscriptions,
        _listeners: listeners,
        _media: media_watch,
        _motion: motion,
    })
}

/// Wire the card's other action buttons, declared in markup with `data-action`.
fn wire_action_buttons(
    document: &web::Document,
    card: &Rc<RefCell<CardState>>,
) -> Vec<dom::Listener> {
    let mut listeners = Vec::new();
    for (el, name) in dom::elements_with_attr(document, ATTR_ACTION) {
        let action = match name.parse::<CardAction>() {
            Ok(CardAction::ToggleLike) => {
                log::warn!("[card] toggle-like is driven by #{}; ignoring", LIKE_BUTTON_ID);
                continue;
            }
            Ok(action) => action,
            Err(e) => {
                log::error!("[card] {}", e);
                continue;
            }
        };
        let card = card.clone();
        let el_for_click = el.clone();
        listeners.extend(dom::on_click(&el, move || {
            card.borrow_mut().dispatch(action);
            let on = card.borrow().state(action).is_liked;
            _ = el_for_click.class_list().toggle_with_force(ACTIVE_CLASS, on);
            dom::set_style(&el_for_click, &style::action_color_style(on, RETWEET_COLOR));
        }));
        log::info!("[card] wired {}", action.name());
    }
    listeners
}
