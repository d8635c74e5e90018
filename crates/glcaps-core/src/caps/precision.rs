// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shader numeric precision descriptors.
//!
//! Most drivers cannot report shader precision, so every stage and qualifier
//! gets the conservative portable baseline: IEEE-754 single precision for
//! floats and 32-bit two's-complement for integers.

use serde::{Deserialize, Serialize};

/// A programmable shader stage that exposes precision qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderStage {
    /// The vertex shader stage.
    Vertex,
    /// The fragment shader stage.
    Fragment,
}

impl ShaderStage {
    /// Both stages, in table order.
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    const fn index(self) -> usize {
        match self {
            ShaderStage::Vertex => 0,
            ShaderStage::Fragment => 1,
        }
    }
}

/// A GLSL ES precision qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecisionQualifier {
    /// `highp`
    High,
    /// `mediump`
    Medium,
    /// `lowp`
    Low,
}

impl PrecisionQualifier {
    /// All qualifiers, in table order.
    pub const ALL: [PrecisionQualifier; 3] = [
        PrecisionQualifier::High,
        PrecisionQualifier::Medium,
        PrecisionQualifier::Low,
    ];

    const fn index(self) -> usize {
        match self {
            PrecisionQualifier::High => 0,
            PrecisionQualifier::Medium => 1,
            PrecisionQualifier::Low => 2,
        }
    }
}

/// Whether a precision descriptor applies to float or integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// Floating-point values.
    Float,
    /// Integer values.
    Int,
}

impl NumericKind {
    /// Both kinds, in table order.
    pub const ALL: [NumericKind; 2] = [NumericKind::Float, NumericKind::Int];

    const fn index(self) -> usize {
        match self {
            NumericKind::Float => 0,
            NumericKind::Int => 1,
        }
    }
}

/// The range and precision of one shader numeric type, in the shape
/// `glGetShaderPrecisionFormat` reports.
///
/// `range` holds log2 of the absolute value of the minimum and maximum
/// representable values; `precision` is log2 of the relative precision
/// (zero for integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypePrecision {
    /// `[log2(|min|), log2(|max|)]`.
    pub range: [i32; 2],
    /// Number of mantissa bits, or zero for integer types.
    pub precision: i32,
}

impl TypePrecision {
    /// IEEE-754 single precision: 8 exponent bits, 23 mantissa bits.
    pub const fn ieee_float() -> Self {
        Self {
            range: [127, 127],
            precision: 23,
        }
    }

    /// A two's-complement integer of `bits` width.
    pub const fn twos_complement_int(bits: i32) -> Self {
        Self {
            range: [bits - 1, bits - 2],
            precision: 0,
        }
    }

    /// The portable baseline descriptor for `kind`.
    pub const fn baseline(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Float => Self::ieee_float(),
            NumericKind::Int => Self::twos_complement_int(32),
        }
    }

    /// Returns `true` if this descriptor is the IEEE-754 single precision baseline.
    pub fn is_ieee_float(&self) -> bool {
        *self == Self::ieee_float()
    }
}

/// One precision descriptor for every stage, qualifier and numeric kind.
///
/// The table is a fixed-size array, so no combination can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderPrecisions {
    table: [[[TypePrecision; 2]; 3]; 2],
}

impl ShaderPrecisions {
    /// Builds the table with the portable baseline in every slot.
    pub fn baseline() -> Self {
        let mut table = [[[TypePrecision::default(); 2]; 3]; 2];
        for stage in ShaderStage::ALL {
            for qualifier in PrecisionQualifier::ALL {
                for kind in NumericKind::ALL {
                    table[stage.index()][qualifier.index()][kind.index()] =
                        TypePrecision::baseline(kind);
                }
            }
        }
        Self { table }
    }

    /// Returns the descriptor for one stage/qualifier/kind triple.
    pub fn get(
        &self,
        stage: ShaderStage,
        qualifier: PrecisionQualifier,
        kind: NumericKind,
    ) -> TypePrecision {
        self.table[stage.index()][qualifier.index()][kind.index()]
    }

    /// Iterates over all twelve descriptors with their keys.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ShaderStage, PrecisionQualifier, NumericKind, TypePrecision)> + '_
    {
        ShaderStage::ALL.into_iter().flat_map(move |stage| {
            PrecisionQualifier::ALL.into_iter().flat_map(move |qualifier| {
                NumericKind::ALL
                    .into_iter()
                    .map(move |kind| (stage, qualifier, kind, self.get(stage, qualifier, kind)))
            })
        })
    }
}

impl Default for ShaderPrecisions {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ieee_float_matches_single_precision() {
        let p = TypePrecision::ieee_float();
        assert_eq!(p.range, [127, 127]);
        assert_eq!(p.precision, 23);
        assert!(p.is_ieee_float());
    }

    #[test]
    fn int32_is_twos_complement() {
        let p = TypePrecision::twos_complement_int(32);
        assert_eq!(p.range, [31, 30]);
        assert_eq!(p.precision, 0);
        assert!(!p.is_ieee_float());
    }

    #[test]
    fn baseline_table_has_twelve_entries() {
        let precisions = ShaderPrecisions::baseline();
        let entries: Vec<_> = precisions.iter().collect();
        assert_eq!(entries.len(), 12);

        for (_, _, kind, precision) in entries {
            match kind {
                NumericKind::Float => assert_eq!(precision, TypePrecision::ieee_float()),
                NumericKind::Int => assert_eq!(precision, TypePrecision::twos_complement_int(32)),
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        let precisions = ShaderPrecisions::default();
        assert_eq!(
            precisions.get(ShaderStage::Fragment, PrecisionQualifier::Low, NumericKind::Int),
            TypePrecision::twos_complement_int(32)
        );
        assert_eq!(
            precisions.get(ShaderStage::Vertex, PrecisionQualifier::High, NumericKind::Float),
            TypePrecision::ieee_float()
        );
    }
}
