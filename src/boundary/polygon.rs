//! Point-in-polygon containment
//!
//! Even-odd (ray casting) test with latitude as x and longitude as y.
//! See <https://www.eecs.umich.edu/courses/eecs380/HANDOUTS/PROJ2/InsidePoly.html>

use crate::coord::Coordinates;

/// Test whether `(lat, lng)` lies inside a ring given as its points
///
/// Walks the N edges `p[i] -> p[(i + 1) % N]`, flipping an inside flag at
/// every edge the ray crosses, and only answers after the last edge. The
/// answer does not depend on which point the ring starts at.
///
/// Edge treatment: an edge qualifies when `min(y0, y1) < lng <= max(y0, y1)`
/// and `lat <= max(x0, x1)`. Points on the minimum-latitude or
/// minimum-longitude side of a ring are therefore outside, points on the
/// maximum side inside.
///
/// Rings with fewer than 3 points never contain anything.
pub fn contains(lat: f64, lng: f64, ring: &[Coordinates]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let next = ring.iter().cycle().skip(1);
    ring.iter().zip(next).fold(false, |inside, (a, b)| {
        if crosses(lat, lng, a, b) {
            !inside
        } else {
            inside
        }
    })
}

fn crosses(lat: f64, lng: f64, a: &Coordinates, b: &Coordinates) -> bool {
    let (x0, y0) = (a.lat(), a.lng());
    let (x1, y1) = (b.lat(), b.lng());

    if lng <= y0.min(y1) || lng > y0.max(y1) || lat > x0.max(x1) {
        return false;
    }

    // y0 != y1 here: lng lies strictly above one of them and at most the other
    let xinters = x0 + (lng - y0) * (x1 - x0) / (y1 - y0);
    x0 == x1 || lat <= xinters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Coordinates> {
        points
            .iter()
            .map(|(lat, lng)| Coordinates::new(*lat, *lng).unwrap())
            .collect()
    }

    fn square() -> Vec<Coordinates> {
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    fn rotations(points: &[Coordinates]) -> Vec<Vec<Coordinates>> {
        (0..points.len())
            .map(|k| {
                let mut rotated = points.to_vec();
                rotated.rotate_left(k);
                rotated
            })
            .collect()
    }

    #[test]
    fn test_square_inside_and_outside() {
        let sq = square();
        assert!(contains(5.0, 5.0, &sq));
        assert!(!contains(15.0, 15.0, &sq));
        assert!(!contains(-1.0, 5.0, &sq));
        assert!(!contains(5.0, 11.0, &sq));
    }

    #[test]
    fn test_square_edges() {
        let sq = square();
        // Minimum-latitude edge is outside, maximum-latitude edge inside
        assert!(!contains(0.0, 5.0, &sq));
        assert!(contains(10.0, 5.0, &sq));
        // Minimum-longitude edge is outside, maximum-longitude edge inside
        assert!(!contains(5.0, 0.0, &sq));
        assert!(contains(5.0, 10.0, &sq));
    }

    #[test]
    fn test_square_traversal_direction() {
        let mut reversed = square();
        reversed.reverse();
        for (lat, lng) in [(5.0, 5.0), (15.0, 15.0), (0.0, 5.0), (10.0, 5.0)] {
            assert_eq!(contains(lat, lng, &square()), contains(lat, lng, &reversed));
        }
    }

    #[test]
    fn test_concave_polygon() {
        // A "U" shape open to the north: the notch between the arms is outside
        let u = ring(&[
            (0.0, 0.0),
            (0.0, 9.0),
            (9.0, 9.0),
            (9.0, 6.0),
            (3.0, 6.0),
            (3.0, 3.0),
            (9.0, 3.0),
            (9.0, 0.0),
        ]);

        assert!(contains(1.5, 4.5, &u)); // base of the U
        assert!(contains(6.0, 1.5, &u)); // west arm
        assert!(contains(6.0, 7.5, &u)); // east arm
        assert!(!contains(6.0, 4.5, &u)); // inside the notch
        assert!(!contains(12.0, 4.5, &u));
    }

    #[test]
    fn test_rotation_invariance() {
        let shapes = vec![
            square(),
            ring(&[
                (0.0, 0.0),
                (0.0, 9.0),
                (9.0, 9.0),
                (9.0, 6.0),
                (3.0, 6.0),
                (3.0, 3.0),
                (9.0, 3.0),
                (9.0, 0.0),
            ]),
            // Star-ish shape with diagonal edges
            ring(&[
                (0.0, 5.0),
                (3.5, 6.5),
                (4.0, 10.0),
                (6.0, 7.0),
                (10.0, 7.5),
                (7.5, 4.5),
                (9.0, 0.5),
                (5.5, 2.5),
                (2.0, 0.0),
                (2.5, 3.5),
            ]),
        ];

        let probes: Vec<(f64, f64)> = (0..=24)
            .flat_map(|i| (0..=24).map(move |j| (i as f64 * 0.5 - 1.0, j as f64 * 0.5 - 1.0)))
            .collect();

        for shape in &shapes {
            let variants = rotations(shape);
            for (lat, lng) in &probes {
                let expected = contains(*lat, *lng, &variants[0]);
                for variant in &variants[1..] {
                    assert_eq!(
                        contains(*lat, *lng, variant),
                        expected,
                        "rotation changed the answer at ({}, {})",
                        lat,
                        lng
                    );
                }
            }
        }
    }

    #[test]
    fn test_last_edge_matters() {
        // The first qualifying edge alone would say "inside"; the full walk
        // crosses twice and says "outside"
        let zigzag = ring(&[(0.0, 0.0), (2.0, 4.0), (4.0, 0.0), (6.0, 4.0), (6.0, 6.0), (0.0, 6.0)]);
        assert!(!contains(-1.0, 2.0, &zigzag));
        assert!(!contains(2.0, 1.0, &zigzag));
        assert!(contains(3.0, 5.0, &zigzag));
    }

    #[test]
    fn test_degenerate_rings() {
        assert!(!contains(0.0, 0.0, &[]));
        assert!(!contains(1.0, 1.0, &ring(&[(1.0, 1.0)])));
        assert!(!contains(1.0, 1.0, &ring(&[(0.0, 0.0), (2.0, 2.0)])));
    }

    #[test]
    fn test_triangle() {
        let tri = ring(&[(0.0, 0.0), (10.0, 5.0), (0.0, 10.0)]);
        assert!(contains(2.0, 5.0, &tri));
        assert!(!contains(8.0, 1.0, &tri));
        assert!(!contains(8.0, 9.0, &tri));
    }
}
