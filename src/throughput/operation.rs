use core::fmt;
use core::str::FromStr;

use super::error::ThroughputError;
use crate::numerics::{Vec3, Vec4};

/// Left operand for every `Vec3` measurement.
pub const VEC3_LHS: Vec3 = Vec3::new(1.0, 2.0, 3.0);
/// Right operand for binary `Vec3` measurements.
pub const VEC3_RHS: Vec3 = Vec3::new(4.0, 5.0, 6.0);
/// Left operand for every `Vec4` measurement.
pub const VEC4_LHS: Vec4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
/// Right operand for binary `Vec4` measurements.
pub const VEC4_RHS: Vec4 = Vec4::new(5.0, 6.0, 7.0, 8.0);

/// A single vector operation that can be measured in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Vec3Add,
    Vec4Add,
    Vec3Sub,
    Vec4Sub,
    Vec3Dot,
    Vec4Dot,
    Vec3Normalize,
    Vec4Normalize,
    Vec4NormalizeFast,
    Vec3Cross,
    Vec4Cross,
}

impl Operation {
    /// Every operation, in reporting order.
    pub const ALL: [Operation; 11] = [
        Operation::Vec3Add,
        Operation::Vec4Add,
        Operation::Vec3Sub,
        Operation::Vec4Sub,
        Operation::Vec3Dot,
        Operation::Vec4Dot,
        Operation::Vec3Normalize,
        Operation::Vec4Normalize,
        Operation::Vec4NormalizeFast,
        Operation::Vec3Cross,
        Operation::Vec4Cross,
    ];

    /// Stable snake_case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Operation::Vec3Add => "vec3_add",
            Operation::Vec4Add => "vec4_add",
            Operation::Vec3Sub => "vec3_sub",
            Operation::Vec4Sub => "vec4_sub",
            Operation::Vec3Dot => "vec3_dot",
            Operation::Vec4Dot => "vec4_dot",
            Operation::Vec3Normalize => "vec3_normalize",
            Operation::Vec4Normalize => "vec4_normalize",
            Operation::Vec4NormalizeFast => "vec4_normalize_fast",
            Operation::Vec3Cross => "vec3_cross",
            Operation::Vec4Cross => "vec4_cross",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ThroughputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| ThroughputError::UnknownOperation(s.to_string()))
    }
}
