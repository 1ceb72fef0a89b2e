//! Geometry behind the page's decorative effects.
//!
//! Everything here is stateless: the view layer measures the document,
//! calls into these functions and applies the returned styles.

/// Layout of one `<section id=..>` in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section the reader is currently in, if any.
///
/// Each section's top is pulled up by `offset` so that the link switches a
/// little before the heading reaches the top edge. When several sections
/// match, the last one in document order wins.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &[SectionBounds<'a>],
    offset: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.offset_top - offset;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id)
}

/// Whether an element with the given viewport-relative `top` and `height`
/// is visible enough to start its reveal animation.
///
/// The viewport is shrunk by `bottom_margin` at the bottom, and at least
/// `threshold` (0.0..=1.0) of the element must fall inside it.
pub fn should_reveal(
    top: f64,
    height: f64,
    viewport_height: f64,
    threshold: f64,
    bottom_margin: f64,
) -> bool {
    let visible_bottom = viewport_height - bottom_margin;
    if height <= 0.0 {
        return top >= 0.0 && top <= visible_bottom;
    }
    let overlap = (top + height).min(visible_bottom) - top.max(0.0);
    overlap > 0.0 && overlap / height >= threshold
}

/// Translation in px for the `index`-th hero ball given the pointer position.
pub fn parallax_offset(
    index: usize,
    pointer: (f64, f64),
    viewport: (f64, f64),
    speed_step: f64,
) -> (f64, f64) {
    let (vw, vh) = viewport;
    if vw <= 0.0 || vh <= 0.0 {
        return (0.0, 0.0);
    }
    let speed = (index + 1) as f64 * speed_step;
    let x = (pointer.0 / vw - 0.5) * speed;
    let y = (pointer.1 / vh - 0.5) * speed;
    (x, y)
}

pub fn translate_css(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", css_num(offset.0), css_num(offset.1))
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` card.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn to_css(self, perspective_px: u32, lift_px: u32) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
            perspective_px,
            css_num(self.rotate_x),
            css_num(self.rotate_y),
            lift_px
        )
    }
}

// Adding +0.0 folds -0.0 into 0.0 so styles never print "-0".
fn css_num(v: f64) -> f64 {
    v + 0.0
}
