/// Raw image moments of a pixel region, accumulated during labeling.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawMoments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m02: f64,
    pub m11: f64,
}

impl RawMoments {
    pub fn accumulate(&mut self, x: f64, y: f64) {
        self.m00 += 1.0;
        self.m10 += x;
        self.m01 += y;
        self.m20 += x * x;
        self.m02 += y * y;
        self.m11 += x * y;
    }
}

/// Equivalent ellipse of a pixel region, from its second-order central moments.
#[derive(Clone, Copy, Debug)]
pub struct EllipseFit {
    /// Centroid in pixel coordinates (x, y).
    pub center: (f64, f64),
    pub major_axis: f64,
    pub minor_axis: f64,
    /// Major-axis orientation in degrees, normalized to [0, 180).
    pub angle_deg: f64,
}

/// Fit the moments-equivalent ellipse of a region.
///
/// Axis lengths follow the regionprops convention: 4 * sqrt of the covariance
/// eigenvalues, with a 1/12 per-pixel term accounting for the unit-square
/// extent of each pixel. Returns `None` for empty or degenerate regions.
pub fn moments_ellipse(m: &RawMoments) -> Option<EllipseFit> {
    if m.m00 <= 0.0 {
        return None;
    }
    let cx = m.m10 / m.m00;
    let cy = m.m01 / m.m00;
    let mu20 = m.m20 / m.m00 - cx * cx + 1.0 / 12.0;
    let mu02 = m.m02 / m.m00 - cy * cy + 1.0 / 12.0;
    let mu11 = m.m11 / m.m00 - cx * cy;

    let common = ((mu20 - mu02).powi(2) + 4.0 * mu11 * mu11).sqrt();
    let lambda_max = (mu20 + mu02 + common) / 2.0;
    let lambda_min = (mu20 + mu02 - common) / 2.0;
    if lambda_min <= 0.0 {
        return None;
    }

    let mut angle_deg = (0.5 * (2.0 * mu11).atan2(mu20 - mu02)).to_degrees();
    if angle_deg < 0.0 {
        angle_deg += 180.0;
    }

    Some(EllipseFit {
        center: (cx, cy),
        major_axis: 4.0 * lambda_max.sqrt(),
        minor_axis: 4.0 * lambda_min.sqrt(),
        angle_deg,
    })
}

type Circle = ((f64, f64), f64);

fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn contains(circle: &Circle, p: (f64, f64)) -> bool {
    dist(circle.0, p) <= circle.1 + 1e-7
}

fn circle_from_two(a: (f64, f64), b: (f64, f64)) -> Circle {
    (((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0), dist(a, b) / 2.0)
}

fn circle_from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Option<Circle> {
    let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
    if d.abs() < 1e-12 {
        return None;
    }
    let a2 = a.0 * a.0 + a.1 * a.1;
    let b2 = b.0 * b.0 + b.1 * b.1;
    let c2 = c.0 * c.0 + c.1 * c.1;
    let ux = (a2 * (b.1 - c.1) + b2 * (c.1 - a.1) + c2 * (a.1 - b.1)) / d;
    let uy = (a2 * (c.0 - b.0) + b2 * (a.0 - c.0) + c2 * (b.0 - a.0)) / d;
    let center = (ux, uy);
    Some((center, dist(center, a)))
}

/// Largest pairwise diametric circle, the fallback for collinear triples.
fn widest_pair_circle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Circle {
    let mut best = circle_from_two(a, b);
    for candidate in [circle_from_two(a, c), circle_from_two(b, c)] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best
}

/// Minimal enclosing circle of a point set (Welzl's incremental scheme,
/// deterministic insertion order). Returns `(center, radius)`, or `None`
/// for an empty set. A single point yields radius 0.
pub fn min_enclosing_circle(points: &[(f64, f64)]) -> Option<Circle> {
    let &first = points.first()?;
    let mut circle: Circle = (first, 0.0);

    for (i, &p) in points.iter().enumerate().skip(1) {
        if contains(&circle, p) {
            continue;
        }
        circle = (p, 0.0);
        for (j, &q) in points[..i].iter().enumerate() {
            if contains(&circle, q) {
                continue;
            }
            circle = circle_from_two(p, q);
            for &r in &points[..j] {
                if contains(&circle, r) {
                    continue;
                }
                circle = circle_from_three(p, q, r).unwrap_or_else(|| widest_pair_circle(p, q, r));
            }
        }
    }
    Some(circle)
}
