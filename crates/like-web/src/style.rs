// Inline style builders for the like button's DOM nodes.
// Kept free of web-sys so host-side tests can include this file directly.

pub const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

pub fn layer_style(foreground: bool) -> String {
    if foreground {
        "position:relative;z-index:1;display:flex;".to_string()
    } else {
        "position:absolute;z-index:0;left:50%;top:50%;width:0;height:0;".to_string()
    }
}

pub fn heart_style(width: f32, scale: f32) -> String {
    format!(
        "display:block;width:{w};height:{w};transform:scale({scale:.4});transform-origin:center;",
        w = px(width)
    )
}

/// Inline SVG for the heart. Filled when liked, outlined otherwise.
pub fn heart_svg(filled: bool, liked_color: &str, idle_color: &str) -> String {
    let (fill, stroke) = if filled {
        (liked_color, liked_color)
    } else {
        ("none", idle_color)
    };
    format!(
        "<svg viewBox=\"0 0 24 24\" width=\"100%\" height=\"100%\"><path d=\"{HEART_PATH}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/></svg>"
    )
}

/// Popping circle centred on the background layer's origin.
pub fn circle_style(diameter: f32, scale: f32, opacity: f32, color: &str) -> String {
    let r = diameter * 0.5;
    format!(
        "position:absolute;left:{l};top:{l};width:{d};height:{d};border-radius:50%;background:{color};transform:scale({scale:.4});opacity:{opacity:.4};",
        l = px(-r),
        d = px(diameter)
    )
}

/// Confetti piece at (x, y) px from the button centre.
pub fn confetti_style(x: f32, y: f32, piece: f32, opacity: f32, color: &str) -> String {
    let half = piece * 0.5;
    format!(
        "position:absolute;left:{l};top:{l};width:{p};height:{p};border-radius:50%;background:{color};transform:translate({x:.2}px,{y:.2}px);opacity:{opacity:.4};",
        l = px(-half),
        p = px(piece)
    )
}

pub fn action_color_style(on: bool, color: &str) -> String {
    if on {
        format!("color:{color};")
    } else {
        String::new()
    }
}

/// Parse a numeric data attribute, ignoring surrounding whitespace.
pub fn parse_attr<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}
