use crate::constants::LIKE_COUNT_ID;
use crate::dom;
use crate::style;
use like_core::{BurstId, LikeButtonFrame, CONFETTI_PIECE_PX, IDLE_ICON_COLOR, LIKE_COLOR};
use web_sys as web;

/// DOM nodes owned by one like button.
///
/// The page supplies the root element; everything under it is created here and
/// reconciled against each `LikeButtonFrame`.
pub struct ButtonView {
    document: web::Document,
    root: web::HtmlElement,
    heart: web::Element,
    background: web::Element,
    count_label: Option<web::Element>,
    circles: Vec<(BurstId, web::Element)>,
    confetti: Vec<web::Element>,
    heart_filled: Option<bool>,
}

impl ButtonView {
    pub fn mount(document: &web::Document, root: &web::HtmlElement) -> anyhow::Result<Self> {
        let foreground = dom::create_div(document, "like-foreground")?;
        dom::set_style(&foreground, &style::layer_style(true));
        let heart = dom::create_div(document, "like-heart")?;
        let background = dom::create_div(document, "like-background")?;
        dom::set_style(&background, &style::layer_style(false));

        foreground
            .append_child(&heart)
            .and_then(|_| root.append_child(&foreground))
            .and_then(|_| root.append_child(&background))
            .map_err(|e| anyhow::anyhow!("mounting like button failed: {:?}", e))?;

        Ok(Self {
            document: document.clone(),
            root: root.clone(),
            heart,
            background,
            count_label: document.get_element_by_id(LIKE_COUNT_ID),
            circles: Vec::new(),
            confetti: Vec::new(),
            heart_filled: None,
        })
    }

    pub fn apply(&mut self, frame: &LikeButtonFrame) {
        let root_style = self.root.style();
        let size = style::px(frame.size);
        for (name, value) in [
            ("position", "relative"),
            ("display", "flex"),
            ("justify-content", "center"),
            ("align-items", "center"),
            ("width", size.as_str()),
            ("height", size.as_str()),
        ] {
            _ = root_style.set_property(name, value);
        }

        if self.heart_filled != Some(frame.heart.filled) {
            self.heart
                .set_inner_html(&style::heart_svg(frame.heart.filled, LIKE_COLOR, IDLE_ICON_COLOR));
            self.heart_filled = Some(frame.heart.filled);
        }
        dom::set_style(
            &self.heart,
            &style::heart_style(frame.heart.width, frame.heart.scale),
        );

        self.apply_circles(frame);
        self.apply_confetti(frame);

        if let Some(label) = &self.count_label {
            label.set_text_content(Some(&frame.count.to_string()));
        }
    }

    fn apply_circles(&mut self, frame: &LikeButtonFrame) {
        self.circles.retain(|(id, el)| {
            let live = frame.circles.iter().any(|c| c.id == *id);
            if !live {
                el.remove();
            }
            live
        });
        for sprite in &frame.circles {
            let css = style::circle_style(sprite.diameter, sprite.scale, sprite.opacity, sprite.color);
            if let Some((_, el)) = self.circles.iter().find(|(id, _)| *id == sprite.id) {
                dom::set_style(el, &css);
                continue;
            }
            match dom::create_div(&self.document, "like-circle") {
                Ok(el) => {
                    dom::set_style(&el, &css);
                    _ = self.background.append_child(&el);
                    self.circles.push((sprite.id, el));
                }
                Err(e) => log::error!("[render] {:?}", e),
            }
        }
    }

    fn apply_confetti(&mut self, frame: &LikeButtonFrame) {
        while self.confetti.len() > frame.confetti.len() {
            if let Some(el) = self.confetti.pop() {
                el.remove();
            }
        }
        while self.confetti.len() < frame.confetti.len() {
            match dom::create_div(&self.document, "like-confetti") {
                Ok(el) => {
                    _ = self.background.append_child(&el);
                    self.confetti.push(el);
                }
                Err(e) => {
                    log::error!("[render] {:?}", e);
                    break;
                }
            }
        }
        for (el, sprite) in self.confetti.iter().zip(&frame.confetti) {
            dom::set_style(
                el,
                &style::confetti_style(
                    sprite.offset.x,
                    sprite.offset.y,
                    CONFETTI_PIECE_PX,
                    sprite.opacity,
                    sprite.color,
                ),
            );
        }
    }

    /// Remove every node this view created.
    pub fn unmount(&mut self) {
        for (_, el) in self.circles.drain(..) {
            el.remove();
        }
        for el in self.confetti.drain(..) {
            el.remove();
        }
        if let Some(fg) = self.heart.parent_element() {
            fg.remove();
        }
        self.background.remove();
    }
}
