//! Per-octant arctangent tables.
//!
//! Each table holds `size + 1` entries. Entry `i` of the canonical table is
//! `atan(i / size)` scaled so that a half turn equals `stretch`. The seven other
//! tables are reflections and translations of the canonical one, chosen so that
//! every octant can be served by a single non-negative index.

// Based on GPL-licensed code (c) 2012 by Thomas Friedel

use alloc::boxed::Box;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

/// Steps per octant of the shared tables.
pub const LUT_ATAN2_SIZE: usize = 1024;

/// Output of the shared tables swings from `-STRETCH` to `STRETCH`.
pub const STRETCH: f64 = core::f64::consts::PI;

static ATAN2_TABLES: Once<Atan2Tables> = Once::new();

/// One region of the plane, named by sign of x, sign of y and the dominant axis.
///
/// `P`/`N` stand for non-negative/negative, the trailing `X`/`Y` for the
/// component with the smaller magnitude (the numerator of the table ratio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    Ppy,
    Ppx,
    Pny,
    Pnx,
    Npy,
    Npx,
    Nny,
    Nnx,
}

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant::Ppy,
        Octant::Ppx,
        Octant::Pny,
        Octant::Pnx,
        Octant::Npy,
        Octant::Npx,
        Octant::Nny,
        Octant::Nnx,
    ];

    /// Maps an entry of the canonical table to this octant's table.
    #[inline]
    fn transform(self, canonical: f64, stretch: f64) -> f64 {
        let half = stretch * 0.5;
        match self {
            Octant::Ppy => canonical,
            Octant::Ppx => half - canonical,
            Octant::Pny => -canonical,
            Octant::Pnx => canonical - half,
            Octant::Npy => stretch - canonical,
            Octant::Npx => canonical + half,
            Octant::Nny => canonical - stretch,
            Octant::Nnx => -half - canonical,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Atan2Tables {
    size: usize,
    stretch: f64,
    tables: [Box<[f64]>; 8],
}

impl Atan2Tables {
    /// Builds all eight tables with `size` steps per octant.
    pub fn new(size: usize, stretch: f64) -> Self {
        debug_assert!(size > 0);

        let scale = stretch / core::f64::consts::PI;
        let canonical: Vec<f64> = (0..=size)
            .map(|i| (i as f64 / size as f64).atan() * scale)
            .collect();

        let tables = Octant::ALL.map(|octant| {
            canonical
                .iter()
                .map(|&value| octant.transform(value, stretch))
                .collect::<Box<[f64]>>()
        });

        log::debug!(
            "Built atan2 octant tables, size = {}, stretch = {}",
            size,
            stretch
        );

        Self {
            size,
            stretch,
            tables,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    #[inline]
    pub fn table(&self, octant: Octant) -> &[f64] {
        &self.tables[octant as usize]
    }
}

impl Default for Atan2Tables {
    fn default() -> Self {
        Self::new(LUT_ATAN2_SIZE, STRETCH)
    }
}

/// Shared tables with [`LUT_ATAN2_SIZE`] steps and output in radians.
#[inline]
pub fn atan2_tables() -> &'static Atan2Tables {
    ATAN2_TABLES.call_once(Atan2Tables::default)
}
