//! Concentric ring layout for the timer's dots.
//!
//! Rings are generated from the outside in, then a single dot is placed at the
//! center. The order of generation is the order in which dots go dark.

use crate::defaults;
use log::info;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Fixed geometry the layout is generated from. All lengths are CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    /// Diameter of a single dot.
    pub dot_size: f64,
    /// Radius of the outermost ring.
    pub base_radius: f64,
    /// Margin between the outermost ring and the edge of the drawing area.
    pub padding: f64,
    pub ring_count: u32,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            dot_size: defaults::DOT_SIZE,
            base_radius: defaults::BASE_RADIUS,
            padding: defaults::PADDING,
            ring_count: defaults::RING_COUNT,
        }
    }
}

impl LayoutGeometry {
    /// Width and height of the square drawing area.
    pub fn extent(&self) -> f64 {
        2.0 * (self.base_radius + self.padding)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !self.dot_size.is_finite() || self.dot_size <= 0.0 {
            return Err(LayoutError::InvalidDotSize(self.dot_size));
        }
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(LayoutError::InvalidBaseRadius(self.base_radius));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LayoutError::InvalidPadding(self.padding));
        }
        if self.ring_count == 0 {
            return Err(LayoutError::NoRings);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    InvalidDotSize(f64),
    InvalidBaseRadius(f64),
    InvalidPadding(f64),
    NoRings,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDotSize(size) => {
                write!(f, "Dot size must be a positive length, got {}", size)
            }
            LayoutError::InvalidBaseRadius(radius) => {
                write!(f, "Base radius must be a positive length, got {}", radius)
            }
            LayoutError::InvalidPadding(padding) => {
                write!(f, "Padding cannot be negative, got {}", padding)
            }
            LayoutError::NoRings => write!(f, "Layout needs at least one ring"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A single dot. Coordinates are relative to the ring center with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    /// 0 for the center dot, 1..=N from the innermost ring outwards.
    pub ring: u32,
    /// Global generation order, starting at 1 on the outermost ring.
    pub sequence: usize,
    /// Angular slot within the ring.
    pub slot: usize,
    /// Number of dots sharing this ring.
    pub ring_size: usize,
}

impl Dot {
    pub fn is_center(&self) -> bool {
        self.ring == 0
    }
}

/// The immutable dot set for one mount of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DotLayout {
    geometry: LayoutGeometry,
    dots: Vec<Dot>,
    ring_dot_count: usize,
}

impl DotLayout {
    /// All dots in generation order; the center dot is last.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Number of dots excluding the center one.
    pub fn ring_dot_count(&self) -> usize {
        self.ring_dot_count
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn extent(&self) -> f64 {
        self.geometry.extent()
    }

    /// Map a dot into drawing-area coordinates (origin top-left, y down).
    pub fn to_viewport(&self, dot: &Dot) -> (f64, f64) {
        let center = self.geometry.base_radius + self.geometry.padding;
        (center + dot.x, center - dot.y)
    }
}

/// How many dots of diameter `dot_size` fit on a ring of `radius`, keeping
/// at least two diameters of arc between neighbouring centers.
pub fn dots_on_ring(radius: f64, dot_size: f64) -> usize {
    let circumference = 2.0 * PI * radius;
    (circumference / (2.0 * dot_size)).floor() as usize
}

/// Generate the full dot layout for `geometry`.
///
/// Rings run from `ring_count` down to 1, each starting at angle 0 and going
/// counterclockwise. A ring too small to hold a single dot is left empty.
pub fn generate_dots(geometry: &LayoutGeometry) -> Result<DotLayout, LayoutError> {
    geometry.validate()?;

    let ring_spacing = geometry.base_radius / geometry.ring_count as f64;
    let mut dots = Vec::new();
    let mut sequence = 0;

    for ring in (1..=geometry.ring_count).rev() {
        let radius = ring as f64 * ring_spacing;
        let ring_size = dots_on_ring(radius, geometry.dot_size);
        if ring_size == 0 {
            continue;
        }
        let angle_step = 2.0 * PI / ring_size as f64;

        for slot in 0..ring_size {
            let angle = angle_step * slot as f64;
            sequence += 1;
            dots.push(Dot {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
                ring,
                sequence,
                slot,
                ring_size,
            });
        }
    }

    let ring_dot_count = dots.len();
    dots.push(Dot {
        x: 0.0,
        y: 0.0,
        ring: 0,
        sequence: sequence + 1,
        slot: 0,
        ring_size: 1,
    });

    info!(
        "Generated dot layout: {} rings, {} ring dots plus center",
        geometry.ring_count, ring_dot_count
    );

    Ok(DotLayout {
        geometry: *geometry,
        dots,
        ring_dot_count,
    })
}
