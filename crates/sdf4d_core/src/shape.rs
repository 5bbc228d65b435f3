//! Shape kinds and boolean operations
//!
//! Both enums have a stable integer index; that index is what the packed
//! per-pass payload carries, so the declaration order here is part of the
//! binary layout and must not be reshuffled.

use serde::{Serialize, Deserialize};

/// The closed set of primitive shapes a [`Primitive`](crate::Primitive) can take
///
/// The first 27 variants are ordinary 3D shapes and ignore the fourth axis.
/// `Fractal` and everything after it are evaluated on the point lifted into
/// 4D, so their visible cross-section depends on the observer's w-pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ShapeKind {
    Sphere = 0,
    Torus,
    CappedTorus,
    Link,
    Plane,
    Cone,
    InfCone,
    HexPrism,
    TriPrism,
    Capsule,
    InfiniteCylinder,
    Box,
    RoundBox,
    RoundedCylinder,
    CappedCone,
    BoxFrame,
    SolidAngle,
    CutSphere,
    CutHollowSphere,
    DeathStar,
    RoundCone,
    Ellipsoid,
    Rhombus,
    Octahedron,
    Pyramid,
    Triangle,
    Quad,
    Fractal,
    Tesseract,
    HyperSphere,
    DuoCylinder,
    VerticalCapsule,
    FiveCell,
    SixteenCell,
}

impl ShapeKind {
    /// Every shape kind, in index order
    pub const ALL: [ShapeKind; 34] = [
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::CappedTorus,
        ShapeKind::Link,
        ShapeKind::Plane,
        ShapeKind::Cone,
        ShapeKind::InfCone,
        ShapeKind::HexPrism,
        ShapeKind::TriPrism,
        ShapeKind::Capsule,
        ShapeKind::InfiniteCylinder,
        ShapeKind::Box,
        ShapeKind::RoundBox,
        ShapeKind::RoundedCylinder,
        ShapeKind::CappedCone,
        ShapeKind::BoxFrame,
        ShapeKind::SolidAngle,
        ShapeKind::CutSphere,
        ShapeKind::CutHollowSphere,
        ShapeKind::DeathStar,
        ShapeKind::RoundCone,
        ShapeKind::Ellipsoid,
        ShapeKind::Rhombus,
        ShapeKind::Octahedron,
        ShapeKind::Pyramid,
        ShapeKind::Triangle,
        ShapeKind::Quad,
        ShapeKind::Fractal,
        ShapeKind::Tesseract,
        ShapeKind::HyperSphere,
        ShapeKind::DuoCylinder,
        ShapeKind::VerticalCapsule,
        ShapeKind::FiveCell,
        ShapeKind::SixteenCell,
    ];

    /// Payload index of this kind
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Look up a kind by payload index
    ///
    /// Returns `None` for indices that name no shape; callers turn that into
    /// the far-distance sentinel.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Whether the shape is evaluated in 4D
    #[inline]
    pub const fn is_four_dimensional(self) -> bool {
        self.index() >= ShapeKind::Fractal.index()
    }

    /// How many of the twelve dimension slots this shape reads
    pub const fn slot_count(self) -> usize {
        match self {
            ShapeKind::Sphere
            | ShapeKind::Box
            | ShapeKind::Octahedron
            | ShapeKind::Pyramid
            | ShapeKind::HyperSphere
            | ShapeKind::SixteenCell => 1,
            ShapeKind::Torus
            | ShapeKind::InfCone
            | ShapeKind::HexPrism
            | ShapeKind::TriPrism
            | ShapeKind::RoundBox
            | ShapeKind::CutSphere
            | ShapeKind::DuoCylinder
            | ShapeKind::VerticalCapsule => 2,
            ShapeKind::Link
            | ShapeKind::Cone
            | ShapeKind::InfiniteCylinder
            | ShapeKind::RoundedCylinder
            | ShapeKind::CappedCone
            | ShapeKind::SolidAngle
            | ShapeKind::CutHollowSphere
            | ShapeKind::DeathStar
            | ShapeKind::RoundCone
            | ShapeKind::Ellipsoid
            | ShapeKind::Fractal => 3,
            ShapeKind::CappedTorus
            | ShapeKind::Plane
            | ShapeKind::BoxFrame
            | ShapeKind::Rhombus
            | ShapeKind::Tesseract
            | ShapeKind::FiveCell => 4,
            ShapeKind::Capsule => 7,
            ShapeKind::Triangle => 9,
            ShapeKind::Quad => 12,
        }
    }
}

/// How a primitive folds into the running scene distance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Operation {
    #[default]
    Union = 0,
    Intersect,
    Subtract,
}

impl Operation {
    /// Payload index of this operation
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Look up an operation by payload index
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Operation::Union),
            1 => Some(Operation::Intersect),
            2 => Some(Operation::Subtract),
            _ => None,
        }
    }

    /// Combine the accumulated distance with a new primitive's distance
    ///
    /// `Subtract` keeps the new primitive minus everything accumulated so
    /// far, so the carving solid has to come earlier in the order.
    #[inline]
    pub fn apply(self, accumulated: f32, delta: f32) -> f32 {
        match self {
            Operation::Union => accumulated.min(delta),
            Operation::Intersect => accumulated.max(delta),
            Operation::Subtract => (-accumulated).max(delta),
        }
    }
}
