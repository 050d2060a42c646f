//! Operator identities for parse-tree nodes.

use glc_types::{Sampler, SamplerDim};

/// Every operation a parse-tree node can carry.
///
/// Declaration order is significant: the `*GuardBegin`/`*GuardEnd`
/// variants bound contiguous sub-ranges so that membership in a category
/// (texture op, sampling op, image op, sparse op) is a single range
/// check. Insert new operators inside the guard pair they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// Only valid on a node still being built.
    Null,
    /// A list of statements, parameters, etc.
    Sequence,
    /// Aggregate of objects the linker may need that the AST does not reference.
    LinkerObjects,
    FunctionCall,
    Function,
    Parameters,

    // unary
    Negative,
    LogicalNot,
    VectorLogicalNot,
    BitwiseNot,
    PostIncrement,
    PostDecrement,
    PreIncrement,
    PreDecrement,

    // conversions; the scalar constructor ops below double as the
    // conversion identities for constructors
    ConvIntToBool,
    ConvUintToBool,
    ConvFloatToBool,
    ConvDoubleToBool,
    ConvInt64ToBool,
    ConvUint64ToBool,
    ConvBoolToFloat,
    ConvIntToFloat,
    ConvUintToFloat,
    ConvDoubleToFloat,
    ConvInt64ToFloat,
    ConvUint64ToFloat,
    ConvUintToInt,
    ConvFloatToInt,
    ConvBoolToInt,
    ConvDoubleToInt,
    ConvInt64ToInt,
    ConvUint64ToInt,
    ConvIntToUint,
    ConvFloatToUint,
    ConvBoolToUint,
    ConvDoubleToUint,
    ConvInt64ToUint,
    ConvUint64ToUint,
    ConvIntToDouble,
    ConvUintToDouble,
    ConvFloatToDouble,
    ConvBoolToDouble,
    ConvInt64ToDouble,
    ConvUint64ToDouble,
    ConvBoolToInt64,
    ConvIntToInt64,
    ConvUintToInt64,
    ConvFloatToInt64,
    ConvDoubleToInt64,
    ConvUint64ToInt64,
    ConvBoolToUint64,
    ConvIntToUint64,
    ConvUintToUint64,
    ConvFloatToUint64,
    ConvDoubleToUint64,
    ConvInt64ToUint64,

    // binary
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    RightShift,
    LeftShift,
    And,
    InclusiveOr,
    ExclusiveOr,
    Equal,
    NotEqual,
    VectorEqual,
    VectorNotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Comma,

    VectorTimesScalar,
    VectorTimesMatrix,
    MatrixTimesVector,
    MatrixTimesScalar,

    LogicalOr,
    LogicalXor,
    LogicalAnd,

    IndexDirect,
    IndexIndirect,
    IndexDirectStruct,

    VectorSwizzle,
    Method,
    Scoping,

    // built-in functions mapped to operators
    Radians,
    Degrees,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,

    Pow,
    Exp,
    Log,
    Exp2,
    Log2,
    Sqrt,
    InverseSqrt,

    Abs,
    Sign,
    Floor,
    Trunc,
    Round,
    RoundEven,
    Ceil,
    Fract,
    Modf,
    Min,
    Max,
    Clamp,
    Mix,
    Step,
    SmoothStep,

    IsNan,
    IsInf,

    Fma,
    Frexp,
    Ldexp,

    FloatBitsToInt,
    FloatBitsToUint,
    IntBitsToFloat,
    UintBitsToFloat,
    DoubleBitsToInt64,
    DoubleBitsToUint64,
    Int64BitsToDouble,
    Uint64BitsToDouble,

    PackSnorm2x16,
    UnpackSnorm2x16,
    PackUnorm2x16,
    UnpackUnorm2x16,
    PackSnorm4x8,
    UnpackSnorm4x8,
    PackUnorm4x8,
    UnpackUnorm4x8,
    PackHalf2x16,
    UnpackHalf2x16,
    PackDouble2x32,
    UnpackDouble2x32,
    PackInt2x32,
    UnpackInt2x32,
    PackUint2x32,
    UnpackUint2x32,

    Length,
    Distance,
    Dot,
    Cross,
    Normalize,
    FaceForward,
    Reflect,
    Refract,

    DPdx,
    DPdy,
    Fwidth,
    DPdxFine,
    DPdyFine,
    FwidthFine,
    DPdxCoarse,
    DPdyCoarse,
    FwidthCoarse,

    InterpolateAtCentroid,
    InterpolateAtSample,
    InterpolateAtOffset,

    MatrixTimesMatrix,
    OuterProduct,
    Determinant,
    MatrixInverse,
    Transpose,

    Ftransform,
    Noise,

    EmitVertex,
    EndPrimitive,
    EmitStreamVertex,
    EndStreamPrimitive,

    Barrier,
    MemoryBarrier,
    MemoryBarrierAtomicCounter,
    MemoryBarrierBuffer,
    MemoryBarrierImage,
    MemoryBarrierShared,
    GroupMemoryBarrier,

    AtomicAdd,
    AtomicMin,
    AtomicMax,
    AtomicAnd,
    AtomicOr,
    AtomicXor,
    AtomicExchange,
    AtomicCompSwap,

    AtomicCounterIncrement,
    AtomicCounterDecrement,
    AtomicCounter,

    Any,
    All,

    // branch
    Kill,
    Return,
    Break,
    Continue,
    Case,
    Default,

    // constructors
    ConstructGuardStart,
    ConstructInt,
    ConstructUint,
    ConstructInt64,
    ConstructUint64,
    ConstructBool,
    ConstructFloat,
    ConstructDouble,
    ConstructVec2,
    ConstructVec3,
    ConstructVec4,
    ConstructDVec2,
    ConstructDVec3,
    ConstructDVec4,
    ConstructBVec2,
    ConstructBVec3,
    ConstructBVec4,
    ConstructIVec2,
    ConstructIVec3,
    ConstructIVec4,
    ConstructUVec2,
    ConstructUVec3,
    ConstructUVec4,
    ConstructMat2x2,
    ConstructMat2x3,
    ConstructMat2x4,
    ConstructMat3x2,
    ConstructMat3x3,
    ConstructMat3x4,
    ConstructMat4x2,
    ConstructMat4x3,
    ConstructMat4x4,
    ConstructDMat2x2,
    ConstructDMat2x3,
    ConstructDMat2x4,
    ConstructDMat3x2,
    ConstructDMat3x3,
    ConstructDMat3x4,
    ConstructDMat4x2,
    ConstructDMat4x3,
    ConstructDMat4x4,
    ConstructStruct,
    ConstructTextureSampler,
    ConstructGuardEnd,

    // moves
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    VectorTimesMatrixAssign,
    VectorTimesScalarAssign,
    MatrixTimesScalarAssign,
    MatrixTimesMatrixAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    InclusiveOrAssign,
    ExclusiveOrAssign,
    LeftShiftAssign,
    RightShiftAssign,

    /// `.length()` on arrays, vectors and matrices.
    ArrayLength,

    // image operations
    ImageGuardBegin,
    ImageQuerySize,
    ImageQuerySamples,
    ImageLoad,
    ImageStore,
    ImageAtomicAdd,
    ImageAtomicMin,
    ImageAtomicMax,
    ImageAtomicAnd,
    ImageAtomicOr,
    ImageAtomicXor,
    ImageAtomicExchange,
    ImageAtomicCompSwap,
    SubpassLoad,
    SubpassLoadMs,
    SparseImageLoad,
    ImageGuardEnd,

    // texture operations
    TextureGuardBegin,
    TextureQuerySize,
    TextureQueryLod,
    TextureQueryLevels,
    TextureQuerySamples,

    SamplingGuardBegin,
    Texture,
    TextureProj,
    TextureLod,
    TextureOffset,
    TextureFetch,
    TextureFetchOffset,
    TextureProjOffset,
    TextureLodOffset,
    TextureProjLod,
    TextureProjLodOffset,
    TextureGrad,
    TextureGradOffset,
    TextureProjGrad,
    TextureProjGradOffset,
    TextureGather,
    TextureGatherOffset,
    TextureGatherOffsets,
    TextureClamp,
    TextureOffsetClamp,
    TextureGradClamp,
    TextureGradOffsetClamp,

    SparseTextureGuardBegin,
    SparseTexture,
    SparseTextureLod,
    SparseTextureOffset,
    SparseTextureFetch,
    SparseTextureFetchOffset,
    SparseTextureLodOffset,
    SparseTextureGrad,
    SparseTextureGradOffset,
    SparseTextureGather,
    SparseTextureGatherOffset,
    SparseTextureGatherOffsets,
    SparseTexelsResident,
    SparseTextureClamp,
    SparseTextureOffsetClamp,
    SparseTextureGradClamp,
    SparseTextureGradOffsetClamp,
    SparseTextureGuardEnd,
    SamplingGuardEnd,
    TextureGuardEnd,

    // integer operations
    AddCarry,
    SubBorrow,
    UMulExtended,
    IMulExtended,
    BitfieldExtract,
    BitfieldInsert,
    BitFieldReverse,
    BitCount,
    FindLsb,
    FindMsb,

    // HLSL compatibility
    /// discard when the input value is < 0
    Clip,
    IsFinite,
    Log10,
    /// 1/x
    Rcp,
    /// clamp to [0, 1]
    Saturate,
    /// sin and cos through out parameters
    SinCos,
    /// mul(x, y) over any mat/vec/scalar mix
    GenMul,
    Dst,
    InterlockedAdd,
    InterlockedAnd,
    InterlockedCompareExchange,
    InterlockedCompareStore,
    InterlockedExchange,
    InterlockedMax,
    InterlockedMin,
    InterlockedOr,
    InterlockedXor,
    AllMemoryBarrierWithGroupSync,
    GroupMemoryBarrierWithGroupSync,
    WorkgroupMemoryBarrier,
    WorkgroupMemoryBarrierWithGroupSync,
    /// half of a PackHalf2x16
    F32tof16,
    /// half of an UnpackHalf2x16
    F16tof32,
    /// lighting coefficient vector
    Lit,
    /// lowered to Texture before code generation
    TextureBias,
    AsDouble,
    /// select multiple matrix components (non-column)
    MatrixSwizzle,
}

/// The independent capabilities of one texturing operator, decoded by
/// [`Operator::crack_texture`]. Everything downstream consumes these
/// booleans, never the raw operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrackedTextureOp {
    pub query: bool,
    pub proj: bool,
    pub lod: bool,
    pub fetch: bool,
    pub offset: bool,
    pub offsets: bool,
    pub gather: bool,
    pub grad: bool,
    pub subpass: bool,
    pub lod_clamp: bool,
}

impl Operator {
    fn in_range(self, begin: Operator, end: Operator) -> bool {
        let v = self as u16;
        v > begin as u16 && v < end as u16
    }

    pub fn is_texture(self) -> bool {
        self.in_range(Operator::TextureGuardBegin, Operator::TextureGuardEnd)
    }

    pub fn is_sampling(self) -> bool {
        self.in_range(Operator::SamplingGuardBegin, Operator::SamplingGuardEnd)
    }

    pub fn is_image(self) -> bool {
        self.in_range(Operator::ImageGuardBegin, Operator::ImageGuardEnd)
    }

    pub fn is_sparse_texture(self) -> bool {
        self.in_range(
            Operator::SparseTextureGuardBegin,
            Operator::SparseTextureGuardEnd,
        )
    }

    pub fn is_sparse_image(self) -> bool {
        self == Operator::SparseImageLoad
    }

    pub fn is_constructor(self) -> bool {
        self.in_range(Operator::ConstructGuardStart, Operator::ConstructGuardEnd)
    }

    /// True for operations that write through an operand: assignments,
    /// increments, stores and atomics.
    pub fn modifies_state(self) -> bool {
        matches!(
            self,
            Operator::PostIncrement
                | Operator::PostDecrement
                | Operator::PreIncrement
                | Operator::PreDecrement
                | Operator::Assign
                | Operator::AddAssign
                | Operator::SubAssign
                | Operator::MulAssign
                | Operator::VectorTimesMatrixAssign
                | Operator::VectorTimesScalarAssign
                | Operator::MatrixTimesScalarAssign
                | Operator::MatrixTimesMatrixAssign
                | Operator::DivAssign
                | Operator::ModAssign
                | Operator::AndAssign
                | Operator::InclusiveOrAssign
                | Operator::ExclusiveOrAssign
                | Operator::LeftShiftAssign
                | Operator::RightShiftAssign
                | Operator::ImageStore
                | Operator::ImageAtomicAdd
                | Operator::ImageAtomicMin
                | Operator::ImageAtomicMax
                | Operator::ImageAtomicAnd
                | Operator::ImageAtomicOr
                | Operator::ImageAtomicXor
                | Operator::ImageAtomicExchange
                | Operator::ImageAtomicCompSwap
                | Operator::AtomicAdd
                | Operator::AtomicMin
                | Operator::AtomicMax
                | Operator::AtomicAnd
                | Operator::AtomicOr
                | Operator::AtomicXor
                | Operator::AtomicExchange
                | Operator::AtomicCompSwap
                | Operator::AtomicCounterIncrement
                | Operator::AtomicCounterDecrement
        )
    }

    /// Decode a texturing operator into its orthogonal capabilities.
    ///
    /// This is the single place that translates the many texture
    /// built-in spellings into what a call actually needs. The match is
    /// exhaustive over the texture and image guard ranges and mutually
    /// exclusive: each operator sets exactly its documented combination.
    /// Operators outside those ranges decode to all-false.
    pub fn crack_texture(self, sampler: &Sampler) -> CrackedTextureOp {
        let mut cracked = CrackedTextureOp::default();
        // fetch carries an explicit lod argument except for rect,
        // buffer and multi-sample sources
        let fetch_has_lod = sampler.dim == SamplerDim::Dim1D
            || (sampler.dim == SamplerDim::Dim2D && !sampler.ms)
            || sampler.dim == SamplerDim::Dim3D;

        match self {
            Operator::ImageQuerySize
            | Operator::ImageQuerySamples
            | Operator::TextureQuerySize
            | Operator::TextureQueryLod
            | Operator::TextureQueryLevels
            | Operator::TextureQuerySamples
            | Operator::SparseTexelsResident => cracked.query = true,
            Operator::Texture | Operator::SparseTexture => {}
            Operator::TextureClamp | Operator::SparseTextureClamp => cracked.lod_clamp = true,
            Operator::TextureProj => cracked.proj = true,
            Operator::TextureLod | Operator::SparseTextureLod => cracked.lod = true,
            Operator::TextureOffset | Operator::SparseTextureOffset => cracked.offset = true,
            Operator::TextureOffsetClamp | Operator::SparseTextureOffsetClamp => {
                cracked.offset = true;
                cracked.lod_clamp = true;
            }
            Operator::TextureFetch | Operator::SparseTextureFetch => {
                cracked.fetch = true;
                cracked.lod = fetch_has_lod;
            }
            Operator::TextureFetchOffset | Operator::SparseTextureFetchOffset => {
                cracked.fetch = true;
                cracked.offset = true;
                cracked.lod = fetch_has_lod;
            }
            Operator::TextureProjOffset => {
                cracked.offset = true;
                cracked.proj = true;
            }
            Operator::TextureLodOffset | Operator::SparseTextureLodOffset => {
                cracked.offset = true;
                cracked.lod = true;
            }
            Operator::TextureProjLod => {
                cracked.lod = true;
                cracked.proj = true;
            }
            Operator::TextureProjLodOffset => {
                cracked.offset = true;
                cracked.lod = true;
                cracked.proj = true;
            }
            Operator::TextureGrad | Operator::SparseTextureGrad => cracked.grad = true,
            Operator::TextureGradClamp | Operator::SparseTextureGradClamp => {
                cracked.grad = true;
                cracked.lod_clamp = true;
            }
            Operator::TextureGradOffset | Operator::SparseTextureGradOffset => {
                cracked.grad = true;
                cracked.offset = true;
            }
            Operator::TextureProjGrad => {
                cracked.grad = true;
                cracked.proj = true;
            }
            Operator::TextureProjGradOffset => {
                cracked.grad = true;
                cracked.offset = true;
                cracked.proj = true;
            }
            Operator::TextureGradOffsetClamp | Operator::SparseTextureGradOffsetClamp => {
                cracked.grad = true;
                cracked.offset = true;
                cracked.lod_clamp = true;
            }
            Operator::TextureGather | Operator::SparseTextureGather => cracked.gather = true,
            Operator::TextureGatherOffset | Operator::SparseTextureGatherOffset => {
                cracked.gather = true;
                cracked.offset = true;
            }
            Operator::TextureGatherOffsets | Operator::SparseTextureGatherOffsets => {
                cracked.gather = true;
                cracked.offsets = true;
            }
            Operator::SubpassLoad | Operator::SubpassLoadMs => cracked.subpass = true,
            _ => {}
        }
        cracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glc_types::BasicType;

    #[test]
    fn test_guard_ranges() {
        assert!(Operator::Texture.is_texture());
        assert!(Operator::Texture.is_sampling());
        assert!(!Operator::Texture.is_image());

        assert!(Operator::TextureQuerySize.is_texture());
        assert!(!Operator::TextureQuerySize.is_sampling());

        assert!(Operator::ImageLoad.is_image());
        assert!(!Operator::ImageLoad.is_texture());

        assert!(Operator::SparseTextureGather.is_sparse_texture());
        assert!(Operator::SparseTextureGather.is_sampling());
        assert!(!Operator::TextureGather.is_sparse_texture());

        assert!(Operator::SparseImageLoad.is_sparse_image());

        assert!(!Operator::Add.is_texture());
        assert!(!Operator::Add.is_image());
    }

    #[test]
    fn test_constructor_range() {
        assert!(Operator::ConstructVec4.is_constructor());
        assert!(Operator::ConstructStruct.is_constructor());
        assert!(!Operator::FunctionCall.is_constructor());
        assert!(!Operator::Assign.is_constructor());
    }

    #[test]
    fn test_modifies_state() {
        assert!(Operator::Assign.modifies_state());
        assert!(Operator::ImageStore.modifies_state());
        assert!(Operator::AtomicExchange.modifies_state());
        assert!(!Operator::Texture.modifies_state());
        assert!(!Operator::Add.modifies_state());
    }

    #[test]
    fn test_crack_fetch_lod_depends_on_dim() {
        let mut s = Sampler::default();
        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        let cracked = Operator::TextureFetch.crack_texture(&s);
        assert!(cracked.fetch && cracked.lod);

        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, true);
        let cracked = Operator::TextureFetch.crack_texture(&s);
        assert!(cracked.fetch && !cracked.lod);

        s.set_combined(BasicType::Float, SamplerDim::Buffer, false, false, false);
        let cracked = Operator::TextureFetch.crack_texture(&s);
        assert!(cracked.fetch && !cracked.lod);
    }

    #[test]
    fn test_crack_outside_range_is_all_false() {
        let s = Sampler::default();
        assert_eq!(Operator::Add.crack_texture(&s), CrackedTextureOp::default());
        assert_eq!(Operator::Mix.crack_texture(&s), CrackedTextureOp::default());
    }
}
