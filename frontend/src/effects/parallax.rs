use crate::effects::pointer::{Point, Viewport};

pub const SCROLL_FACTOR: f64 = 0.08;
pub const SCROLL_DRIFT: f64 = -0.5;

const TILT_X_DEG: f64 = 4.0;
const TILT_Y_DEG: f64 = 6.0;
const LEFT_GLOW_PX: f64 = 30.0;
const RIGHT_GLOW_PX: f64 = 40.0;
const CARD_RISE_PX: f64 = 20.0;

/// Vertical shift of the hero layer for a given page scroll.
pub fn scroll_offset(scroll_y: f64) -> f64 {
    scroll_y * SCROLL_FACTOR * SCROLL_DRIFT
}

pub fn scroll_translate(scroll_y: f64) -> String {
    format!("0 {}px", scroll_offset(scroll_y))
}

/// Pointer position relative to the viewport centre, each axis in `[-0.5, 0.5]`
/// for on-screen pointers.
pub fn normalized(position: Point, viewport: Viewport) -> Point {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Point::default();
    }
    Point::new(
        position.x / viewport.width - 0.5,
        position.y / viewport.height - 0.5,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroTilt {
    pub layer: String,
    pub left_glow: String,
    pub right_glow: String,
}

impl HeroTilt {
    pub fn from_pointer(position: Point, viewport: Viewport) -> Self {
        let Point { x, y } = normalized(position, viewport);
        Self {
            layer: format!(
                "perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg)",
                -y * TILT_X_DEG,
                x * TILT_Y_DEG
            ),
            left_glow: format!(
                "translate({:.1}px, {:.1}px)",
                -x * LEFT_GLOW_PX,
                y * LEFT_GLOW_PX
            ),
            right_glow: format!(
                "translate({:.1}px, {:.1}px)",
                x * RIGHT_GLOW_PX,
                -y * RIGHT_GLOW_PX
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardReveal {
    pub visible: f64,
}

impl CardReveal {
    pub fn new(card_top: f64, viewport_height: f64) -> Self {
        let visible = if viewport_height > 0.0 {
            (1.0 - (card_top - viewport_height) / viewport_height).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { visible }
    }

    pub fn rise(self) -> f64 {
        (1.0 - self.visible) * CARD_RISE_PX
    }

    pub fn opacity(self) -> f64 {
        0.4 + self.visible * 0.6
    }

    pub fn transform(self) -> String {
        format!("translateY({}px)", self.rise())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn scroll_moves_layer_up_proportionally() {
        assert_eq!(scroll_offset(0.0), 0.0);
        assert_eq!(scroll_offset(1000.0), -40.0);
        assert_eq!(scroll_offset(2000.0), 2.0 * scroll_offset(1000.0));
        assert_eq!(scroll_translate(500.0), "0 -20px");
    }

    #[test]
    fn centred_pointer_leaves_hero_flat() {
        assert_eq!(normalized(Point::new(500.0, 400.0), SCREEN), Point::default());
        let tilt = HeroTilt::from_pointer(Point::new(750.0, 400.0), SCREEN);
        assert!(tilt.layer.ends_with("rotateY(1.50deg)"), "{}", tilt.layer);
    }

    #[test]
    fn corner_pointer_tilts_and_pushes_glows_apart() {
        let tilt = HeroTilt::from_pointer(Point::new(1000.0, 0.0), SCREEN);
        assert_eq!(tilt.layer, "perspective(900px) rotateX(2.00deg) rotateY(3.00deg)");
        assert_eq!(tilt.left_glow, "translate(-15.0px, -15.0px)");
        assert_eq!(tilt.right_glow, "translate(20.0px, 20.0px)");
    }

    #[test]
    fn zero_sized_viewport_counts_as_centred() {
        assert_eq!(
            normalized(Point::new(300.0, 300.0), Viewport::default()),
            Point::default()
        );
    }

    #[test]
    fn cards_fade_in_as_they_approach_the_fold() {
        let below = CardReveal::new(1600.0, 800.0);
        assert_eq!(below.visible, 0.0);
        assert_eq!(below.rise(), 20.0);
        assert!((below.opacity() - 0.4).abs() < 1e-9);

        let half = CardReveal::new(1200.0, 800.0);
        assert_eq!(half.visible, 0.5);
        assert_eq!(half.transform(), "translateY(10px)");

        let on_screen = CardReveal::new(100.0, 800.0);
        assert_eq!(on_screen.visible, 1.0);
        assert_eq!(on_screen.rise(), 0.0);
        assert!((on_screen.opacity() - 1.0).abs() < 1e-9);
    }
}
