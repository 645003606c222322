//! # Region Window Math
//!
//! The inclusive region-coordinate rectangle a region scan iterates.
//!
//! The window is a deliberately conservative superset: a region's candidate
//! can land anywhere inside the region, not just near its corner, so the
//! bounds carry a fixed 2-region padding margin on every side. The padding
//! is sound while `chunk_range <= region_size` holds for every placement
//! config (asserted in `lodestone_worldgen`'s tests).

use lodestone_shared::ColumnPos;

/// Fixed conservative padding, in regions, applied to every window edge.
pub(crate) const WINDOW_PADDING: i64 = 2;

/// An inclusive rectangular range in region coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionWindow {
    /// Smallest region X (inclusive).
    pub rx0: i32,
    /// Largest region X (inclusive).
    pub rx1: i32,
    /// Smallest region Z (inclusive).
    pub rz0: i32,
    /// Largest region Z (inclusive).
    pub rz1: i32,
}

impl RegionWindow {
    /// Computes the window around an origin.
    ///
    /// Floor division keeps the bounds correct for negative coordinates;
    /// the ±2 padding absorbs in-region candidate offsets.
    ///
    /// # Panics
    ///
    /// Panics if `region_blocks` is not positive or `radius_blocks` is
    /// negative; placement configs and the CLI guarantee both.
    #[must_use]
    pub fn around(origin: ColumnPos, radius_blocks: i64, region_blocks: i64) -> Self {
        assert!(region_blocks > 0, "region size must be positive");
        assert!(radius_blocks >= 0, "radius must be non-negative");

        let x = i64::from(origin.x);
        let z = i64::from(origin.z);

        let rx0 = (x - radius_blocks).div_euclid(region_blocks) - WINDOW_PADDING;
        let rx1 = (x + radius_blocks).div_euclid(region_blocks) + WINDOW_PADDING;
        let rz0 = (z - radius_blocks).div_euclid(region_blocks) - WINDOW_PADDING;
        let rz1 = (z + radius_blocks).div_euclid(region_blocks) + WINDOW_PADDING;

        Self {
            rx0: rx0 as i32,
            rx1: rx1 as i32,
            rz0: rz0 as i32,
            rz1: rz1 as i32,
        }
    }

    /// Whether a region coordinate lies inside the window.
    #[must_use]
    pub const fn contains(&self, rx: i32, rz: i32) -> bool {
        rx >= self.rx0 && rx <= self.rx1 && rz >= self.rz0 && rz <= self.rz1
    }

    /// Number of regions in the window.
    #[must_use]
    pub fn region_count(&self) -> u64 {
        let width = u64::try_from(i64::from(self.rx1) - i64::from(self.rx0) + 1).unwrap_or(0);
        let height = u64::try_from(i64::from(self.rz1) - i64::from(self.rz0) + 1).unwrap_or(0);
        width * height
    }

    /// Iterates the window row-major: Z outer, X inner, both ascending.
    ///
    /// The order is fixed so scan output is reproducible.
    #[must_use]
    pub const fn iter(&self) -> RegionIter {
        RegionIter {
            window: *self,
            rx: self.rx0,
            rz: self.rz0,
        }
    }
}

impl IntoIterator for &RegionWindow {
    type Item = (i32, i32);
    type IntoIter = RegionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over a [`RegionWindow`].
#[derive(Clone, Copy, Debug)]
pub struct RegionIter {
    /// The window being iterated.
    window: RegionWindow,
    /// Next region X.
    rx: i32,
    /// Next region Z; past `rz1` means exhausted.
    rz: i32,
}

impl Iterator for RegionIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rz > self.window.rz1 {
            return None;
        }
        let item = (self.rx, self.rz);
        if self.rx == self.window.rx1 {
            self.rx = self.window.rx0;
            self.rz += 1;
        } else {
            self.rx += 1;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_window_small_radius() {
        // Ruined portals at 1.18: 40-chunk regions = 640 blocks.
        // Radius 2 chunks = 32 blocks around the origin.
        let window = RegionWindow::around(ColumnPos::ORIGIN, 32, 640);
        assert_eq!(
            window,
            RegionWindow {
                rx0: -3,
                rx1: 2,
                rz0: -3,
                rz1: 2,
            }
        );
        assert_eq!(window.region_count(), 36);
    }

    #[test]
    fn test_floor_division_negative_origin() {
        // Truncating division would give -1 here; floor must give -2.
        let window = RegionWindow::around(ColumnPos::new(-650, -650), 0, 640);
        assert_eq!(window.rx0, -2 - 2);
        assert_eq!(window.rx1, -2 + 2);
    }

    #[test]
    fn test_zero_radius_still_padded() {
        let window = RegionWindow::around(ColumnPos::new(100, 100), 0, 512);
        assert_eq!((window.rx0, window.rx1), (-2, 2));
        assert_eq!(window.region_count(), 25);
    }

    #[test]
    fn test_iteration_order_is_row_major() {
        let window = RegionWindow {
            rx0: 0,
            rx1: 1,
            rz0: 10,
            rz1: 11,
        };
        let order: Vec<(i32, i32)> = window.iter().collect();
        assert_eq!(order, vec![(0, 10), (1, 10), (0, 11), (1, 11)]);
    }

    #[test]
    fn test_iter_matches_region_count() {
        let window = RegionWindow::around(ColumnPos::new(-12_345, 54_321), 16_000, 512);
        assert_eq!(window.iter().count() as u64, window.region_count());
    }

    #[test]
    fn test_contains_bounds_are_inclusive() {
        let window = RegionWindow {
            rx0: -1,
            rx1: 3,
            rz0: -4,
            rz1: 0,
        };
        assert!(window.contains(-1, -4));
        assert!(window.contains(3, 0));
        assert!(!window.contains(4, 0));
        assert!(!window.contains(-1, 1));
    }
}
