//! Hover zoom that stays inside the viewport.
//!
//! A tile scaled around its center grows by `width * (overshoot - 1) / 2` on
//! each side. When the nearer viewport edge is closer than that, the scale is
//! reduced, and the transform origin is pushed toward the nearer edge so the
//! tile grows inward.

use serde::Deserialize;

use crate::geometry::Rect;

/// Tunables for [`hover_transform`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverParams {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Growth factor assumed when measuring how much room the tile needs.
    pub overshoot: f64,
    /// Largest normalized distance from the viewport center that still
    /// shifts the origin further.
    pub bias_clamp: f64,
    /// Percentage points of origin shift per unit of normalized bias.
    pub origin_range: f64,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            min_scale: 1.02,
            max_scale: 1.08,
            overshoot: 1.105,
            bias_clamp: 0.4,
            origin_range: 30.0,
        }
    }
}

/// Scale and horizontal transform origin (percent) for a hovered tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTransform {
    pub scale: f64,
    pub origin_x: f64,
}

impl HoverTransform {
    /// Not hovered: centered origin, no scaling.
    pub const REST: HoverTransform = HoverTransform {
        scale: 1.0,
        origin_x: 50.0,
    };

    /// Value for the `transform-origin` property.
    pub fn origin_css(&self) -> String {
        format!("{}% 50%", self.origin_x)
    }
}

pub fn hover_transform(rect: Rect, viewport_width: f64, params: &HoverParams) -> HoverTransform {
    HoverTransform {
        scale: safe_scale(rect, viewport_width, params),
        origin_x: origin_x(rect, viewport_width, params),
    }
}

fn safe_scale(rect: Rect, viewport_width: f64, params: &HoverParams) -> f64 {
    if rect.width <= 0.0 {
        return params.max_scale;
    }
    let space_left = rect.left;
    let space_right = viewport_width - rect.right();
    let min_space = space_left.min(space_right);

    let extra = rect.width * (params.overshoot - 1.0) / 2.0;
    let reduction = (extra - min_space).max(0.0);
    let scale = params.max_scale - reduction / rect.width;
    scale.max(params.min_scale).min(params.max_scale)
}

fn origin_x(rect: Rect, viewport_width: f64, params: &HoverParams) -> f64 {
    if viewport_width <= 0.0 {
        return HoverTransform::REST.origin_x;
    }
    let half = viewport_width / 2.0;
    let bias = (rect.center_x() - half) / half;
    let bias = bias.max(-params.bias_clamp).min(params.bias_clamp);
    50.0 + bias * params.origin_range
}

#[cfg(test)]
mod tests {
    use super::*;

    const VW: f64 = 1000.0;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centered_tile_gets_full_scale_and_centered_origin() {
        let t = hover_transform(Rect::new(450.0, 0.0, 100.0, 100.0), VW, &HoverParams::default());
        assert!(approx(t.scale, 1.08));
        assert!(approx(t.origin_x, 50.0));
    }

    #[test]
    fn tile_touching_left_edge_is_scaled_down() {
        let t = hover_transform(Rect::new(0.0, 0.0, 100.0, 100.0), VW, &HoverParams::default());
        // extra = 5.25px needed, none available.
        assert!(approx(t.scale, 1.08 - 5.25 / 100.0), "{}", t.scale);
        assert!(approx(t.origin_x, 38.0), "{}", t.origin_x);
    }

    #[test]
    fn scale_never_drops_below_minimum() {
        let t = hover_transform(Rect::new(-40.0, 0.0, 100.0, 100.0), VW, &HoverParams::default());
        assert!(approx(t.scale, 1.02));
    }

    #[test]
    fn origin_bias_is_clamped() {
        let params = HoverParams::default();
        let right = hover_transform(Rect::new(900.0, 0.0, 100.0, 100.0), VW, &params);
        assert!(approx(right.origin_x, 62.0));

        let slight = hover_transform(Rect::new(550.0, 0.0, 100.0, 100.0), VW, &params);
        assert!(approx(slight.origin_x, 50.0 + 0.2 * 30.0));
    }

    #[test]
    fn degenerate_inputs_stay_finite() {
        let params = HoverParams::default();
        let t = hover_transform(Rect::new(10.0, 0.0, 0.0, 0.0), 0.0, &params);
        assert!(t.scale.is_finite() && t.origin_x.is_finite());
        assert!(approx(t.origin_x, 50.0));
    }

    #[test]
    fn rest_origin_css() {
        assert_eq!(HoverTransform::REST.origin_css(), "50% 50%");
    }

    /// Reflect a rect across the vertical center line of the viewport.
    fn mirror(rect: Rect, viewport_width: f64) -> Rect {
        Rect::new(viewport_width - rect.right(), rect.top, rect.width, rect.height)
    }

    #[test]
    fn mirrored_tiles_scale_alike_with_mirrored_origin() {
        let params = HoverParams::default();
        let samples = [
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Rect::new(4.0, 50.0, 120.0, 120.0),
            Rect::new(100.0, 0.0, 250.0, 250.0),
            Rect::new(-30.0, 0.0, 200.0, 150.0),
        ];

        for vw in [1920.0, 1080.0, 390.0] {
            for rect in samples {
                let a = hover_transform(rect, vw, &params);
                let b = hover_transform(mirror(rect, vw), vw, &params);
                assert!(approx(a.scale, b.scale), "vw={vw} {rect:?}: {a:?} vs {b:?}");
                assert!(
                    approx(a.origin_x - 50.0, 50.0 - b.origin_x),
                    "vw={vw} {rect:?}: {a:?} vs {b:?}"
                );
                assert!(a.scale >= params.min_scale && a.scale <= params.max_scale);
            }
        }
    }
}
