use ndarray::Array2;

use super::geometry::RawMoments;

/// A connected foreground region with its outer boundary.
#[derive(Clone, Debug)]
pub struct Component {
    /// Pixel count of the region.
    pub area: usize,
    /// Raw moments over all region pixels.
    pub moments: RawMoments,
    /// Outer boundary as ordered (x, y) points; nested contours are ignored.
    pub boundary: Vec<(f64, f64)>,
}

/// Extract 8-connected foreground components from a binary image.
///
/// Pixels > 0 are foreground. Two-pass labeling with union-find (path
/// halving), then a Moore boundary trace per component. Components are
/// returned in the raster order of their first pixel, which doubles as the
/// detection order downstream.
pub fn find_components(mask: &Array2<u8>) -> Vec<Component> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    // parent[0] = 0 (background, unused). Grows as labels are assigned.
    let mut parent: Vec<u32> = vec![0];
    let mut next_label: u32 = 1;

    // Pass 1: provisional labels, merging over the four already-visited
    // 8-neighbors (W, NW, N, NE).
    for y in 0..h {
        for x in 0..w {
            if mask[[y, x]] == 0 {
                continue;
            }

            let mut merged: u32 = 0;
            let neighbors = [
                (y as isize, x as isize - 1),
                (y as isize - 1, x as isize - 1),
                (y as isize - 1, x as isize),
                (y as isize - 1, x as isize + 1),
            ];
            for (ny, nx) in neighbors {
                if ny < 0 || nx < 0 || nx >= w as isize {
                    continue;
                }
                let label = labels[[ny as usize, nx as usize]];
                if label == 0 {
                    continue;
                }
                if merged == 0 {
                    merged = find(&mut parent, label);
                } else {
                    let root = find(&mut parent, label);
                    if root != merged {
                        let low = root.min(merged);
                        let high = root.max(merged);
                        parent[high as usize] = low;
                        merged = low;
                    }
                }
            }

            if merged == 0 {
                labels[[y, x]] = next_label;
                parent.push(next_label); // self-referencing root
                next_label += 1;
            } else {
                labels[[y, x]] = merged;
            }
        }
    }

    for i in 1..parent.len() {
        parent[i] = find(&mut parent, i as u32);
    }

    // Pass 2: accumulate area and moments per root, ordering components by
    // the raster position of their first pixel.
    let mut order: Vec<Option<usize>> = vec![None; parent.len()];
    let mut components: Vec<(RawMoments, (usize, usize))> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let label = labels[[y, x]];
            if label == 0 {
                continue;
            }
            let root = parent[label as usize] as usize;
            let index = match order[root] {
                Some(index) => index,
                None => {
                    components.push((RawMoments::default(), (y, x)));
                    order[root] = Some(components.len() - 1);
                    components.len() - 1
                }
            };
            components[index].0.accumulate(x as f64, y as f64);
        }
    }

    components
        .into_iter()
        .map(|(moments, seed)| Component {
            area: moments.m00 as usize,
            boundary: trace_boundary(mask, seed),
            moments,
        })
        .collect()
}

/// Union-find with path halving.
fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        parent[x as usize] = parent[parent[x as usize] as usize];
        x = parent[x as usize];
    }
    x
}

/// Clockwise 8-neighborhood, starting west, y growing downward.
const NEIGHBORS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Moore neighbor tracing of a component's outer boundary, clockwise from
/// its top-most left-most pixel. Returns ordered (x, y) points; an isolated
/// pixel yields a single point.
fn trace_boundary(mask: &Array2<u8>, start: (usize, usize)) -> Vec<(f64, f64)> {
    let (h, w) = mask.dim();
    let foreground = |y: isize, x: isize| {
        y >= 0 && x >= 0 && (y as usize) < h && (x as usize) < w && mask[[y as usize, x as usize]] > 0
    };

    let start = (start.0 as isize, start.1 as isize);
    let mut boundary = vec![(start.1 as f64, start.0 as f64)];
    let mut current = start;
    // The search resumes one step past the backtrack direction; the start
    // pixel has no foreground above or to its left, so west is a valid seed.
    let mut search_from = 0;
    let step_limit = 4 * (h + w) * 2 + 8;

    loop {
        let mut advanced = false;
        for i in 0..8 {
            let k = (search_from + i) % 8;
            let (dy, dx) = NEIGHBORS[k];
            let next = (current.0 + dy, current.1 + dx);
            if !foreground(next.0, next.1) {
                continue;
            }
            if next == start && boundary.len() > 1 {
                return boundary;
            }
            boundary.push((next.1 as f64, next.0 as f64));
            current = next;
            search_from = (k + 5) % 8;
            advanced = true;
            break;
        }
        if !advanced || boundary.len() > step_limit {
            // Isolated pixel, or a pathological trace hit the guard.
            return boundary;
        }
    }
}
