use crate::render::ButtonView;
use instant::Instant;
use like_core::LikeButton;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub button: Rc<RefCell<LikeButton>>,
    pub view: ButtonView,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(button: Rc<RefCell<LikeButton>>, view: ButtonView) -> Self {
        Self {
            button,
            view,
            last_instant: Instant::now(),
        }
    }

    /// Advance by wall-clock time since the previous frame and draw.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let animating = self.button.borrow_mut().advance(dt);
        self.draw();
        animating
    }

    pub fn draw(&mut self) {
        let frame = self.button.borrow().render();
        self.view.apply(&frame);
    }
}

/// `requestAnimationFrame` loop that only runs while the button is animating.
pub struct FrameLoop {
    ctx: RefCell<FrameContext>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Rc<Self> {
        let this = Rc::new(Self {
            ctx: RefCell::new(ctx),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<Self> = Rc::downgrade(&this);
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(l) = weak.upgrade() {
                l.on_frame();
            }
        }) as Box<dyn FnMut()>));
        this
    }

    fn on_frame(&self) {
        self.pending.set(None);
        let animating = self.ctx.borrow_mut().frame();
        if animating {
            self.request();
        }
    }

    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Draw the current state now and wake the loop if something started moving.
    pub fn refresh(&self) {
        let animating = {
            let mut ctx = self.ctx.borrow_mut();
            ctx.draw();
            ctx.button.borrow().is_animating()
        };
        if animating && self.pending.get().is_none() {
            // idle until now: don't count the parked time as one huge frame
            self.ctx.borrow_mut().last_instant = Instant::now();
            self.request();
        }
    }

    /// Cancel any pending frame and remove the view's nodes.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.ctx.borrow_mut().view.unmount();
    }
}
