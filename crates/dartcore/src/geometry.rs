//! Static board layout: sector angles, point hit-testing and ring radii.
//!
//! Angles follow screen orientation (y grows downward), so sector indices run
//! clockwise on screen starting from the wedge centered at the top.

use derive_more::{Display, Into};
use std::f64::consts::{PI, TAU};

pub const SECTOR_COUNT: usize = 20;
pub const SECTOR_WIDTH: f64 = TAU / SECTOR_COUNT as f64;
pub const ROTATION_OFFSET: f64 = -PI / 2.0 - SECTOR_WIDTH / 2.0;

// fraction of a sector width treated as lying on a separator
const SEPARATOR_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_polar(angle: f64, distance: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(distance * cos, distance * sin)
    }

    /// `atan2(y, x)`; the origin yields `0.0`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into)]
pub struct Sector(usize);

crate::impl_bounded_newtype!(Sector, usize, 0..SECTOR_COUNT, Sector);

impl Sector {
    pub fn all() -> impl Iterator<Item = Sector> {
        (0..SECTOR_COUNT).map(Sector)
    }

    /// Wraps any index onto the board, `index mod 20`.
    pub const fn wrapping(index: usize) -> Self {
        Self(index % SECTOR_COUNT)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SECTOR_COUNT)
    }

    /// Parity of the wedge. Only used to alternate board colors.
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    pub fn bounds(self) -> SectorBounds {
        sector_bounds(self)
    }

    pub fn mid_angle(self) -> f64 {
        self.bounds().start + SECTOR_WIDTH / 2.0
    }

    /// Point on the sector's center line at `distance` from the board center.
    pub fn point_at(self, distance: f64) -> Point {
        Point::from_polar(self.mid_angle(), distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorBounds {
    pub start: f64,
    pub end: f64,
}

pub fn sector_bounds(sector: Sector) -> SectorBounds {
    let start = ROTATION_OFFSET + sector.index() as f64 * SECTOR_WIDTH;
    SectorBounds {
        start,
        end: start + SECTOR_WIDTH,
    }
}

/// Resolves the sector under `point`. The distance from the center is ignored:
/// a point beyond the outer ring or inside the bull still hits its wedge.
pub fn sector_at(point: Point) -> Sector {
    sector_at_angle(point.angle())
}

/// Ranges are half open, `[start, end)`, except at the separators: an angle
/// less than `SEPARATOR_TOLERANCE` sector widths (about 3e-10 rad) short of a
/// separator already belongs to the sector that starts there, so the start
/// angle from `sector_bounds` resolves to its own sector despite rounding.
pub fn sector_at_angle(angle: f64) -> Sector {
    let adjusted = (angle - ROTATION_OFFSET).rem_euclid(TAU);
    let steps = adjusted / SECTOR_WIDTH;
    let nearest = steps.round();
    let steps = if (steps - nearest).abs() < SEPARATOR_TOLERANCE {
        nearest
    } else {
        steps.floor()
    };
    Sector(steps as usize % SECTOR_COUNT)
}

/// Ring radii as absolute lengths for a board of the given radius.
/// Drawing only; placement never looks at them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    pub outer: f64,
    pub double_outer: f64,
    pub double_inner: f64,
    pub triple_outer: f64,
    pub triple_inner: f64,
    pub inner: f64,
    pub bull_outer: f64,
    pub bull_inner: f64,
}

impl RingRadii {
    pub fn for_radius(radius: f64) -> Self {
        Self {
            outer: radius * 0.95,
            double_outer: radius * 0.85,
            double_inner: radius * 0.78,
            triple_outer: radius * 0.60,
            triple_inner: radius * 0.53,
            inner: radius * 0.45,
            bull_outer: radius * 0.06,
            bull_inner: radius * 0.03,
        }
    }

    /// Circles stroked as ring separators, outermost first.
    pub fn separators(&self) -> [f64; 5] {
        [
            self.double_outer,
            self.double_inner,
            self.triple_outer,
            self.triple_inner,
            self.bull_outer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(i: usize) -> Sector {
        Sector::try_from(i).unwrap()
    }

    #[test]
    fn test_sector_zero_is_centered_at_top() {
        // screen coordinates: "up" is negative y
        assert_eq!(sector_at(Point::new(0.0, -100.0)), sector(0));
        assert!((sector(0).mid_angle() + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sectors_run_clockwise_on_screen() {
        assert_eq!(sector_at(Point::new(100.0, 0.0)), sector(5));
        assert_eq!(sector_at(Point::new(0.0, 100.0)), sector(10));
        assert_eq!(sector_at(Point::new(-100.0, 0.0)), sector(15));
    }

    #[test]
    fn test_full_circle_is_partitioned() {
        let samples = 20_000;
        let mut hits = [0usize; SECTOR_COUNT];
        for k in 0..samples {
            let theta = TAU * k as f64 / samples as f64;
            let s = sector_at(Point::new(theta.cos(), theta.sin()));
            assert!(s.index() < SECTOR_COUNT);
            hits[s.index()] += 1;
        }
        // every wedge spans the same arc
        for count in hits {
            assert!(count.abs_diff(samples / SECTOR_COUNT) <= 1, "{count}");
        }
    }

    #[test]
    fn test_sampled_angles_fall_inside_their_bounds() {
        for k in 0..3600 {
            let theta = TAU * k as f64 / 3600.0 - PI;
            let s = sector_at_angle(theta);
            let offset = (theta - s.bounds().start + 1e-12).rem_euclid(TAU);
            assert!(offset < SECTOR_WIDTH + 1e-12, "{theta} -> {s}");
        }
    }

    #[test]
    fn test_boundaries_belong_to_the_starting_sector() {
        for s in Sector::all() {
            let b = s.bounds();
            assert_eq!(sector_at_angle(b.start), s);
            assert_eq!(sector_at_angle(b.end), s.next());
            assert_eq!(sector_at(Point::from_polar(b.start, 250.0)), s);
            assert_eq!(sector_at(Point::from_polar(b.end, 250.0)), s.next());
            let gap = (sector_bounds(s.next()).start - b.end).rem_euclid(TAU);
            assert!(gap < 1e-12 || TAU - gap < 1e-12);
        }
    }

    #[test]
    fn test_just_before_separator_stays_in_previous_sector() {
        for s in Sector::all() {
            let b = s.bounds();
            assert_eq!(sector_at_angle(b.end - 1e-6), s);
        }
    }

    #[test]
    fn test_rounding_band_below_separator_snaps_forward() {
        let band = SEPARATOR_TOLERANCE * SECTOR_WIDTH;
        for s in Sector::all() {
            let b = s.bounds();
            assert_eq!(sector_at_angle(b.end - band / 4.0), s.next());
            assert_eq!(sector_at_angle(b.end - band * 4.0), s);
        }
    }

    #[test]
    fn test_origin_and_negative_zero() {
        // atan2(0, 0) == 0 points right
        assert_eq!(sector_at(Point::default()), sector(5));
        assert_eq!(sector_at(Point::new(-1.0, 0.0)), sector(15));
        assert_eq!(sector_at(Point::new(-1.0, -0.0)), sector(15));
    }

    #[test]
    fn test_radius_does_not_matter() {
        for s in Sector::all() {
            for distance in [0.5, 10.0, 300.0, 1e6] {
                assert_eq!(sector_at(s.point_at(distance)), s);
            }
        }
    }

    #[test]
    fn test_sector_bounds_are_rejected_out_of_range() {
        assert!(Sector::try_from(19).is_ok());
        assert_eq!(
            Sector::try_from(20),
            Err(crate::error::BoundsError::Sector(20))
        );
    }

    #[test]
    fn test_ring_radii_are_nested() {
        let r = RingRadii::for_radius(300.0);
        let ordered = [
            r.outer,
            r.double_outer,
            r.double_inner,
            r.triple_outer,
            r.triple_inner,
            r.inner,
            r.bull_outer,
            r.bull_inner,
        ];
        assert!(ordered.windows(2).all(|w| w[0] > w[1]));
        assert!((r.outer - 285.0).abs() < 1e-9);
    }
}
