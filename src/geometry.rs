//! Hit-shape geometry.
//!
//! Every entity exposes either an axis-aligned rectangle or an axis-aligned
//! ellipse inscribed in a rectangle. Two shapes hit when their intersection
//! has a non-zero area; shapes that merely touch along an edge do not.

/// Axis-aligned rectangle, top-left anchored, in field pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// True when the two rectangles share a region of positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by the given share of each dimension, keeping the centre.
    pub fn inset(&self, share_x: f32, share_y: f32) -> Rect {
        let pad_x = self.w * share_x;
        let pad_y = self.h * share_y;
        Rect::new(
            self.x + pad_x / 2.0,
            self.y + pad_y / 2.0,
            self.w - pad_x,
            self.h - pad_y,
        )
    }
}

/// Collidable geometry of an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    /// Ellipse inscribed in the given bounding rectangle.
    Ellipse(Rect),
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(r) | Shape::Ellipse(r) => *r,
        }
    }

    /// Two-stage test: bounding boxes first, exact geometry only when they
    /// overlap.
    pub fn intersects(&self, other: &Shape) -> bool {
        if !self.bounds().overlaps(&other.bounds()) {
            return false;
        }
        match (self, other) {
            // Overlapping boxes are the shapes themselves.
            (Shape::Rect(_), Shape::Rect(_)) => true,
            (Shape::Rect(r), Shape::Ellipse(e)) | (Shape::Ellipse(e), Shape::Rect(r)) => {
                rect_meets_ellipse(r, e)
            }
            (Shape::Ellipse(a), Shape::Ellipse(b)) => ellipse_meets_ellipse(a, b),
        }
    }
}

// ── Exact tests ──────────────────────────────────────────────────────────────
//
// Both tests rescale the plane so that one ellipse becomes the unit circle.
// Axis-aligned scaling keeps rectangles and the other ellipse axis-aligned.

fn rect_meets_ellipse(rect: &Rect, ellipse: &Rect) -> bool {
    let (cx, cy) = ellipse.center();
    let rx = f64::from(ellipse.w) / 2.0;
    let ry = f64::from(ellipse.h) / 2.0;

    let x0 = (f64::from(rect.x) - f64::from(cx)) / rx;
    let x1 = (f64::from(rect.right()) - f64::from(cx)) / rx;
    let y0 = (f64::from(rect.y) - f64::from(cy)) / ry;
    let y1 = (f64::from(rect.bottom()) - f64::from(cy)) / ry;

    // Point of the rectangle closest to the circle centre.
    let qx = 0.0_f64.clamp(x0, x1);
    let qy = 0.0_f64.clamp(y0, y1);
    qx * qx + qy * qy < 1.0
}

fn ellipse_meets_ellipse(a: &Rect, b: &Rect) -> bool {
    let (acx, acy) = a.center();
    let (bcx, bcy) = b.center();
    let arx = f64::from(a.w) / 2.0;
    let ary = f64::from(a.h) / 2.0;

    // `b` in the frame where `a` is the unit circle at the origin.
    let ox = (f64::from(bcx) - f64::from(acx)) / arx;
    let oy = (f64::from(bcy) - f64::from(acy)) / ary;
    let ex = f64::from(b.w) / 2.0 / arx;
    let ey = f64::from(b.h) / 2.0 / ary;

    // Origin relative to b's centre.
    let px = -ox;
    let py = -oy;
    if (px / ex).powi(2) + (py / ey).powi(2) <= 1.0 {
        return true;
    }
    distance_to_ellipse(ex, ey, px, py) < 1.0
}

/// Distance from an outside point to an origin-centred, axis-aligned ellipse
/// with semi-axes `ex` and `ey`.
fn distance_to_ellipse(ex: f64, ey: f64, px: f64, py: f64) -> f64 {
    // Reduce to the first quadrant with the major axis along x.
    let (e0, e1, y0, y1) = if ex >= ey {
        (ex, ey, px.abs(), py.abs())
    } else {
        (ey, ex, py.abs(), px.abs())
    };

    if y1 > 0.0 {
        if y0 > 0.0 {
            let z0 = y0 / e0;
            let z1 = y1 / e1;
            let g = z0 * z0 + z1 * z1 - 1.0;
            if g == 0.0 {
                return 0.0;
            }
            let r0 = (e0 / e1).powi(2);
            let s = bisect_root(r0, z0, z1, g);
            let x0 = r0 * y0 / (s + r0);
            let x1 = y1 / (s + 1.0);
            ((x0 - y0).powi(2) + (x1 - y1).powi(2)).sqrt()
        } else {
            (y1 - e1).abs()
        }
    } else {
        let numer = e0 * y0;
        let denom = e0 * e0 - e1 * e1;
        if numer < denom {
            let xde0 = numer / denom;
            let x0 = e0 * xde0;
            let x1 = e1 * (1.0 - xde0 * xde0).max(0.0).sqrt();
            ((x0 - y0).powi(2) + x1 * x1).sqrt()
        } else {
            (y0 - e0).abs()
        }
    }
}

fn bisect_root(r0: f64, z0: f64, z1: f64, g: f64) -> f64 {
    let n0 = r0 * z0;
    let mut s0 = z1 - 1.0;
    let mut s1 = if g < 0.0 { 0.0 } else { n0.hypot(z1) - 1.0 };
    let mut s = 0.0;
    for _ in 0..200 {
        s = (s0 + s1) / 2.0;
        if s == s0 || s == s1 {
            break;
        }
        let ratio0 = n0 / (s + r0);
        let ratio1 = z1 / (s + 1.0);
        let g = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if g > 0.0 {
            s0 = s;
        } else if g < 0.0 {
            s1 = s;
        } else {
            break;
        }
    }
    s
}
