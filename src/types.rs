//! Core types: points and arena handles.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane.
///
/// Small `#[repr(C)]` representation with a stable layout. Vertices handed out by
/// the diagram are copies; the registry itself never changes a stored point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `Point2Like`.
    #[inline]
    pub fn from_like<P: Point2Like>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    #[inline]
    pub(crate) fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub(crate) fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Convert to a glam::DVec2 (available when the `glam` feature is enabled).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        self.to_dvec2()
    }

    /// Create from a glam::DVec2 (available when the `glam` feature is enabled).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::from_dvec2(v)
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for [f64; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "glam")]
impl From<glam::DVec2> for Point2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

#[cfg(feature = "glam")]
impl From<Point2> for glam::DVec2 {
    #[inline]
    fn from(p: Point2) -> glam::DVec2 {
        p.to_glam()
    }
}

/// Trait for types that can be used as site positions.
pub trait Point2Like {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Point2Like for Point2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2Like for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Point2Like for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

#[cfg(feature = "glam")]
impl Point2Like for glam::DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Panics past `u32::MAX` slots rather than aliasing an earlier handle.
            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                match u32::try_from(index) {
                    Ok(raw) => Self(raw),
                    Err(_) => panic!(
                        concat!(stringify!($name), " index {} does not fit in u32"),
                        index
                    ),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

arena_id!(
    /// Stable handle of a vertex in the diagram's registry.
    VertexId
);
arena_id!(
    /// Stable handle of an edge. Stays valid (possibly tombstoned) for the diagram's lifetime.
    EdgeId
);
arena_id!(
    /// Handle of a site and its cell.
    SiteId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array_and_tuple() {
        let a: Point2 = [1.0, 2.0].into();
        let b: Point2 = (1.0, 2.0).into();
        assert_eq!(a, b);
        let back: [f64; 2] = a.into();
        assert_eq!(back, [1.0, 2.0]);
    }

    #[test]
    fn test_point2_like_trait() {
        fn accepts_like<P: Point2Like>(p: &P) -> f64 {
            p.x() + p.y()
        }

        assert_eq!(accepts_like(&Point2::new(1.0, 2.0)), 3.0);
        assert_eq!(accepts_like(&[1.0f64, 2.0]), 3.0);
        assert_eq!(accepts_like(&(1.0f64, 2.0f64)), 3.0);
    }

    #[test]
    fn test_pod_layout() {
        let p = Point2::new(3.0, -4.0);
        let raw: &[f64] = bytemuck::cast_slice(std::slice::from_ref(&p));
        assert_eq!(raw, &[3.0, -4.0]);
    }

    #[test]
    fn test_ids_round_trip_index() {
        assert_eq!(VertexId::from_index(7).index(), 7);
        assert_eq!(EdgeId::from_index(0).to_string(), "0");
    }

    #[test]
    fn test_id_at_u32_limit() {
        let last = u32::MAX as usize;
        assert_eq!(EdgeId::from_index(last).index(), last);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "VertexId index 4294967296 does not fit in u32")]
    fn test_id_overflow_panics() {
        VertexId::from_index(u32::MAX as usize + 1);
    }
}
