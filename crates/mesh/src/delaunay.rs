use hashbrown::HashMap;

/// Output of [`triangulate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    /// Counter-clockwise triangles, each rotated so its smallest index comes
    /// first, sorted lexicographically.
    pub faces: Vec<[u32; 3]>,
    /// `(duplicate, representative)` pairs of exactly coincident points. The
    /// duplicate never appears in `faces`.
    pub coincident: Vec<(u32, u32)>,
    /// Number of input points skipped because a coordinate was not finite.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy)]
struct Triangle {
    v: [u32; 3],
    center: [f64; 2],
    radius_sq: f64,
}

/// Delaunay triangulation of a 2D point set.
///
/// Incremental Bowyer-Watson over the points sorted by `(x, y, index)`: a
/// triangle whose circumcircle lies entirely left of the current point can no
/// longer be invalidated and is retired from the working set. The sort makes
/// the output a pure function of the input.
///
/// Fewer than three distinct points, or a collinear set, produce no faces.
pub fn triangulate(points: &[[f32; 2]]) -> Triangulation {
    let n = points.len();
    let mut order: Vec<u32> = (0..n as u32)
        .filter(|&i| points[i as usize].iter().all(|v| v.is_finite()))
        .collect();
    let skipped = n - order.len();
    if skipped > 0 {
        log::warn!("triangulation skipped {skipped} non-finite points");
    }

    order.sort_by(|&a, &b| {
        let pa = points[a as usize];
        let pb = points[b as usize];
        pa[0]
            .total_cmp(&pb[0])
            .then(pa[1].total_cmp(&pb[1]))
            .then(a.cmp(&b))
    });

    // Coincident points sit next to each other once sorted.
    let mut unique: Vec<u32> = Vec::with_capacity(order.len());
    let mut coincident = Vec::new();
    for &i in &order {
        match unique.last() {
            Some(&last) if points[last as usize] == points[i as usize] => {
                coincident.push((i, last));
            }
            _ => unique.push(i),
        }
    }
    coincident.sort_unstable();

    let mut result = Triangulation {
        faces: Vec::new(),
        coincident,
        skipped,
    };
    if unique.len() < 3 {
        return result;
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &i in &unique {
        let p = points[i as usize];
        min_x = min_x.min(p[0] as f64);
        min_y = min_y.min(p[1] as f64);
        max_x = max_x.max(p[0] as f64);
        max_y = max_y.max(p[1] as f64);
    }
    let extent = (max_x - min_x).max(max_y - min_y);
    if extent <= 0.0 {
        return result;
    }
    let mid = [(min_x + max_x) * 0.5, (min_y + max_y) * 0.5];

    let mut coords: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [p[0] as f64, p[1] as f64])
        .collect();
    let super_base = n as u32;
    coords.push([mid[0] - 20.0 * extent, mid[1] - extent]);
    coords.push([mid[0], mid[1] + 20.0 * extent]);
    coords.push([mid[0] + 20.0 * extent, mid[1] - extent]);

    let degenerate_eps = f64::EPSILON * extent * extent;
    let make_triangle = |a: u32, b: u32, c: u32| -> Option<Triangle> {
        let pa = coords[a as usize];
        let pb = coords[b as usize];
        let pc = coords[c as usize];
        let (bx, by) = (pb[0] - pa[0], pb[1] - pa[1]);
        let (cx, cy) = (pc[0] - pa[0], pc[1] - pa[1]);
        let det = bx * cy - by * cx;
        if det.abs() <= degenerate_eps {
            return None;
        }

        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let d = 2.0 * det;
        let ux = (cy * b2 - by * c2) / d;
        let uy = (bx * c2 - cx * b2) / d;

        let v = if det > 0.0 { [a, b, c] } else { [a, c, b] };
        Some(Triangle {
            v,
            center: [pa[0] + ux, pa[1] + uy],
            radius_sq: ux * ux + uy * uy,
        })
    };

    let Some(root) = make_triangle(super_base, super_base + 1, super_base + 2) else {
        return result;
    };
    let mut open = vec![root];
    let mut closed: Vec<Triangle> = Vec::new();
    let mut edges: Vec<[u32; 2]> = Vec::new();
    let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();

    for &p in &unique {
        let pp = coords[p as usize];
        edges.clear();

        let mut k = 0;
        while k < open.len() {
            let t = open[k];
            let dx = pp[0] - t.center[0];
            if dx > 0.0 && dx * dx > t.radius_sq {
                closed.push(open.swap_remove(k));
                continue;
            }
            let dy = pp[1] - t.center[1];
            if dx * dx + dy * dy <= t.radius_sq {
                edges.push([t.v[0], t.v[1]]);
                edges.push([t.v[1], t.v[2]]);
                edges.push([t.v[2], t.v[0]]);
                open.swap_remove(k);
                continue;
            }
            k += 1;
        }

        edge_counts.clear();
        for e in &edges {
            *edge_counts.entry(edge_key(*e)).or_insert(0) += 1;
        }
        for e in &edges {
            if edge_counts[&edge_key(*e)] != 1 {
                continue;
            }
            if let Some(t) = make_triangle(e[0], e[1], p) {
                open.push(t);
            }
        }
    }

    closed.extend(open);
    let mut faces: Vec<[u32; 3]> = closed
        .into_iter()
        .filter(|t| t.v.iter().all(|&v| v < super_base))
        .map(|t| canonical(t.v))
        .collect();
    faces.sort_unstable();

    result.faces = faces;
    result
}

#[inline]
fn edge_key(e: [u32; 2]) -> (u32, u32) {
    if e[0] < e[1] {
        (e[0], e[1])
    } else {
        (e[1], e[0])
    }
}

/// Rotates a triangle so its smallest index leads, keeping the winding.
#[inline]
fn canonical(v: [u32; 3]) -> [u32; 3] {
    if v[0] <= v[1] && v[0] <= v[2] {
        v
    } else if v[1] <= v[2] {
        [v[1], v[2], v[0]]
    } else {
        [v[2], v[0], v[1]]
    }
}
