//! Storage, precision, layout and built-in-identity qualification.

use crate::Stage;

/// Storage class of a declaration.
///
/// The trailing variants are storage classes reserved for built-in
/// variables; user code cannot spell them, they are applied by the
/// registry's tagging pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageQualifier {
    #[default]
    Temporary,
    Global,
    Const,
    VaryingIn,
    VaryingOut,
    Uniform,
    Buffer,
    Shared,
    In,
    Out,
    InOut,
    ConstReadOnly,
    // built-in only from here down
    VertexId,
    InstanceId,
    Position,
    PointSize,
    ClipVertex,
    Face,
    FragCoord,
    PointCoord,
    FragColor,
    FragDepth,
}

impl StorageQualifier {
    pub fn glsl_name(self) -> &'static str {
        match self {
            StorageQualifier::Temporary => "temp",
            StorageQualifier::Global => "global",
            StorageQualifier::Const => "const",
            StorageQualifier::VaryingIn => "in",
            StorageQualifier::VaryingOut => "out",
            StorageQualifier::Uniform => "uniform",
            StorageQualifier::Buffer => "buffer",
            StorageQualifier::Shared => "shared",
            StorageQualifier::In => "in",
            StorageQualifier::Out => "out",
            StorageQualifier::InOut => "inout",
            StorageQualifier::ConstReadOnly => "const (read only)",
            StorageQualifier::VertexId => "gl_VertexId",
            StorageQualifier::InstanceId => "gl_InstanceId",
            StorageQualifier::Position => "gl_Position",
            StorageQualifier::PointSize => "gl_PointSize",
            StorageQualifier::ClipVertex => "gl_ClipVertex",
            StorageQualifier::Face => "gl_FrontFacing",
            StorageQualifier::FragCoord => "gl_FragCoord",
            StorageQualifier::PointCoord => "gl_PointCoord",
            StorageQualifier::FragColor => "fragColor",
            StorageQualifier::FragDepth => "gl_FragDepth",
        }
    }
}

/// Precision of an operation or declaration (ES profiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Precision {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Precision {
    pub fn glsl_name(self) -> &'static str {
        match self {
            Precision::None => "none",
            Precision::Low => "lowp",
            Precision::Medium => "mediump",
            Precision::High => "highp",
        }
    }
}

/// Identity of a built-in variable, attached by the tagging pass.
///
/// `None` marks ordinary user variables. The set covers the core
/// pipeline interface plus the compatibility-profile names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltIn {
    #[default]
    None,
    NumWorkGroups,
    WorkGroupSize,
    WorkGroupId,
    LocalInvocationId,
    GlobalInvocationId,
    LocalInvocationIndex,
    VertexId,
    InstanceId,
    VertexIndex,
    InstanceIndex,
    Position,
    PointSize,
    ClipVertex,
    ClipDistance,
    CullDistance,
    FragCoord,
    PointCoord,
    Face,
    FragColor,
    FragData,
    FragDepth,
    HelperInvocation,
    PrimitiveId,
    InvocationId,
    Layer,
    ViewportIndex,
    PatchVertices,
    TessLevelOuter,
    TessLevelInner,
    TessCoord,
    BoundingBox,
    SampleId,
    SamplePosition,
    SampleMask,
    DeviceIndex,
    ViewIndex,
    // compatibility profile
    Color,
    SecondaryColor,
    Normal,
    Vertex,
    MultiTexCoord0,
    MultiTexCoord1,
    MultiTexCoord2,
    MultiTexCoord3,
    MultiTexCoord4,
    MultiTexCoord5,
    MultiTexCoord6,
    MultiTexCoord7,
    FrontColor,
    BackColor,
    FrontSecondaryColor,
    BackSecondaryColor,
    TexCoord,
    FogFragCoord,
}

impl BuiltIn {
    pub fn glsl_name(self) -> &'static str {
        match self {
            BuiltIn::None => "none",
            BuiltIn::NumWorkGroups => "gl_NumWorkGroups",
            BuiltIn::WorkGroupSize => "gl_WorkGroupSize",
            BuiltIn::WorkGroupId => "gl_WorkGroupID",
            BuiltIn::LocalInvocationId => "gl_LocalInvocationID",
            BuiltIn::GlobalInvocationId => "gl_GlobalInvocationID",
            BuiltIn::LocalInvocationIndex => "gl_LocalInvocationIndex",
            BuiltIn::VertexId => "gl_VertexId",
            BuiltIn::InstanceId => "gl_InstanceId",
            BuiltIn::VertexIndex => "gl_VertexIndex",
            BuiltIn::InstanceIndex => "gl_InstanceIndex",
            BuiltIn::Position => "gl_Position",
            BuiltIn::PointSize => "gl_PointSize",
            BuiltIn::ClipVertex => "gl_ClipVertex",
            BuiltIn::ClipDistance => "gl_ClipDistance",
            BuiltIn::CullDistance => "gl_CullDistance",
            BuiltIn::FragCoord => "gl_FragCoord",
            BuiltIn::PointCoord => "gl_PointCoord",
            BuiltIn::Face => "gl_FrontFacing",
            BuiltIn::FragColor => "gl_FragColor",
            BuiltIn::FragData => "gl_FragData",
            BuiltIn::FragDepth => "gl_FragDepth",
            BuiltIn::HelperInvocation => "gl_HelperInvocation",
            BuiltIn::PrimitiveId => "gl_PrimitiveID",
            BuiltIn::InvocationId => "gl_InvocationID",
            BuiltIn::Layer => "gl_Layer",
            BuiltIn::ViewportIndex => "gl_ViewportIndex",
            BuiltIn::PatchVertices => "gl_PatchVerticesIn",
            BuiltIn::TessLevelOuter => "gl_TessLevelOuter",
            BuiltIn::TessLevelInner => "gl_TessLevelInner",
            BuiltIn::TessCoord => "gl_TessCoord",
            BuiltIn::BoundingBox => "gl_BoundingBox",
            BuiltIn::SampleId => "gl_SampleID",
            BuiltIn::SamplePosition => "gl_SamplePosition",
            BuiltIn::SampleMask => "gl_SampleMask",
            BuiltIn::DeviceIndex => "gl_DeviceIndex",
            BuiltIn::ViewIndex => "gl_ViewIndex",
            BuiltIn::Color => "gl_Color",
            BuiltIn::SecondaryColor => "gl_SecondaryColor",
            BuiltIn::Normal => "gl_Normal",
            BuiltIn::Vertex => "gl_Vertex",
            BuiltIn::MultiTexCoord0 => "gl_MultiTexCoord0",
            BuiltIn::MultiTexCoord1 => "gl_MultiTexCoord1",
            BuiltIn::MultiTexCoord2 => "gl_MultiTexCoord2",
            BuiltIn::MultiTexCoord3 => "gl_MultiTexCoord3",
            BuiltIn::MultiTexCoord4 => "gl_MultiTexCoord4",
            BuiltIn::MultiTexCoord5 => "gl_MultiTexCoord5",
            BuiltIn::MultiTexCoord6 => "gl_MultiTexCoord6",
            BuiltIn::MultiTexCoord7 => "gl_MultiTexCoord7",
            BuiltIn::FrontColor => "gl_FrontColor",
            BuiltIn::BackColor => "gl_BackColor",
            BuiltIn::FrontSecondaryColor => "gl_FrontSecondaryColor",
            BuiltIn::BackSecondaryColor => "gl_BackSecondaryColor",
            BuiltIn::TexCoord => "gl_TexCoord",
            BuiltIn::FogFragCoord => "gl_FogFragCoord",
        }
    }
}

/// Uniform/buffer block packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutPacking {
    Shared,
    Std140,
    Std430,
    Packed,
}

impl LayoutPacking {
    pub fn glsl_name(self) -> &'static str {
        match self {
            LayoutPacking::Shared => "shared",
            LayoutPacking::Std140 => "std140",
            LayoutPacking::Std430 => "std430",
            LayoutPacking::Packed => "packed",
        }
    }
}

/// Matrix memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixLayout {
    RowMajor,
    ColumnMajor,
}

impl MatrixLayout {
    pub fn glsl_name(self) -> &'static str {
        match self {
            MatrixLayout::RowMajor => "row_major",
            MatrixLayout::ColumnMajor => "column_major",
        }
    }
}

/// Image unit format from a `layout(...)` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Rgba32f,
    Rgba16f,
    Rg32f,
    Rg16f,
    R11fG11fB10f,
    R32f,
    R16f,
    Rgba16,
    Rgb10A2,
    Rgba8,
    Rg16,
    Rg8,
    R16,
    R8,
    Rgba16Snorm,
    Rgba8Snorm,
    Rg16Snorm,
    Rg8Snorm,
    R16Snorm,
    R8Snorm,
    Rgba32i,
    Rgba16i,
    Rgba8i,
    Rg32i,
    Rg16i,
    Rg8i,
    R32i,
    R16i,
    R8i,
    Rgba32ui,
    Rgba16ui,
    Rgba8ui,
    Rg32ui,
    Rg16ui,
    Rgb10A2ui,
    Rg8ui,
    R32ui,
    R16ui,
    R8ui,
}

impl ImageFormat {
    pub fn glsl_name(self) -> &'static str {
        match self {
            ImageFormat::Rgba32f => "rgba32f",
            ImageFormat::Rgba16f => "rgba16f",
            ImageFormat::Rg32f => "rg32f",
            ImageFormat::Rg16f => "rg16f",
            ImageFormat::R11fG11fB10f => "r11f_g11f_b10f",
            ImageFormat::R32f => "r32f",
            ImageFormat::R16f => "r16f",
            ImageFormat::Rgba16 => "rgba16",
            ImageFormat::Rgb10A2 => "rgb10_a2",
            ImageFormat::Rgba8 => "rgba8",
            ImageFormat::Rg16 => "rg16",
            ImageFormat::Rg8 => "rg8",
            ImageFormat::R16 => "r16",
            ImageFormat::R8 => "r8",
            ImageFormat::Rgba16Snorm => "rgba16_snorm",
            ImageFormat::Rgba8Snorm => "rgba8_snorm",
            ImageFormat::Rg16Snorm => "rg16_snorm",
            ImageFormat::Rg8Snorm => "rg8_snorm",
            ImageFormat::R16Snorm => "r16_snorm",
            ImageFormat::R8Snorm => "r8_snorm",
            ImageFormat::Rgba32i => "rgba32i",
            ImageFormat::Rgba16i => "rgba16i",
            ImageFormat::Rgba8i => "rgba8i",
            ImageFormat::Rg32i => "rg32i",
            ImageFormat::Rg16i => "rg16i",
            ImageFormat::Rg8i => "rg8i",
            ImageFormat::R32i => "r32i",
            ImageFormat::R16i => "r16i",
            ImageFormat::R8i => "r8i",
            ImageFormat::Rgba32ui => "rgba32ui",
            ImageFormat::Rgba16ui => "rgba16ui",
            ImageFormat::Rgba8ui => "rgba8ui",
            ImageFormat::Rg32ui => "rg32ui",
            ImageFormat::Rg16ui => "rg16ui",
            ImageFormat::Rgb10A2ui => "rgb10_a2ui",
            ImageFormat::Rg8ui => "rg8ui",
            ImageFormat::R32ui => "r32ui",
            ImageFormat::R16ui => "r16ui",
            ImageFormat::R8ui => "r8ui",
        }
    }
}

/// Layout fields of a qualifier.
///
/// Every field has an explicit "not set" state (`None` / `false`) so the
/// merge rule can tell set from unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutQualifier {
    pub location: Option<u32>,
    pub component: Option<u32>,
    pub set: Option<u32>,
    pub binding: Option<u32>,
    pub index: Option<u32>,
    pub stream: Option<u32>,
    pub xfb_buffer: Option<u32>,
    pub xfb_stride: Option<u32>,
    pub xfb_offset: Option<u32>,
    pub attachment: Option<u32>,
    pub spec_constant_id: Option<u32>,
    pub format: Option<ImageFormat>,
    pub matrix: Option<MatrixLayout>,
    pub packing: Option<LayoutPacking>,
    pub align: Option<i32>,
    pub offset: Option<i32>,
    pub push_constant: bool,
}

impl LayoutQualifier {
    pub fn clear(&mut self) {
        *self = LayoutQualifier::default();
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn has_any_location(&self) -> bool {
        self.location.is_some() || self.component.is_some() || self.index.is_some()
    }

    pub fn has_uniform_layout(&self) -> bool {
        self.matrix.is_some()
            || self.packing.is_some()
            || self.offset.is_some()
            || self.binding.is_some()
            || self.set.is_some()
            || self.align.is_some()
    }

    pub fn has_xfb(&self) -> bool {
        self.xfb_buffer.is_some() || self.xfb_stride.is_some() || self.xfb_offset.is_some()
    }

    pub fn is_set(&self) -> bool {
        self.has_uniform_layout()
            || self.has_any_location()
            || self.stream.is_some()
            || self.has_xfb()
            || self.format.is_some()
            || self.attachment.is_some()
            || self.spec_constant_id.is_some()
            || self.push_constant
    }

    /// Copy every field the source explicitly sets; leave the rest alone.
    pub fn merge(&mut self, src: &LayoutQualifier) {
        fn take<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }
        take(&mut self.location, src.location);
        take(&mut self.component, src.component);
        take(&mut self.set, src.set);
        take(&mut self.binding, src.binding);
        take(&mut self.index, src.index);
        take(&mut self.stream, src.stream);
        take(&mut self.xfb_buffer, src.xfb_buffer);
        take(&mut self.xfb_stride, src.xfb_stride);
        take(&mut self.xfb_offset, src.xfb_offset);
        take(&mut self.attachment, src.attachment);
        take(&mut self.spec_constant_id, src.spec_constant_id);
        take(&mut self.format, src.format);
        take(&mut self.matrix, src.matrix);
        take(&mut self.packing, src.packing);
        take(&mut self.align, src.align);
        take(&mut self.offset, src.offset);
        if src.push_constant {
            self.push_constant = true;
        }
    }
}

/// Full qualification of a type: storage, precision, built-in identity,
/// interpolation/auxiliary/memory flags, and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifier {
    pub storage: StorageQualifier,
    pub builtin: BuiltIn,
    /// Built-in identity as declared in text, before tagging overwrites
    /// `builtin` (redeclarations need the original).
    pub declared_builtin: BuiltIn,
    pub precision: Precision,
    pub invariant: bool,
    /// `precise`: forbid contraction and reassociation.
    pub no_contraction: bool,
    pub centroid: bool,
    pub smooth: bool,
    pub flat: bool,
    pub nopersp: bool,
    pub patch: bool,
    pub sample: bool,
    pub coherent: bool,
    pub volatil: bool,
    pub restrict: bool,
    pub readonly: bool,
    pub writeonly: bool,
    pub spec_constant: bool,
    pub layout: LayoutQualifier,
}

impl Qualifier {
    /// A fully cleared qualifier (temporary storage, nothing set).
    pub fn new() -> Qualifier {
        Qualifier::default()
    }

    pub fn with_storage(storage: StorageQualifier) -> Qualifier {
        Qualifier {
            storage,
            ..Qualifier::default()
        }
    }

    /// Drop everything that does not belong on a temporary.
    pub fn make_temporary(&mut self) {
        let precision = self.precision;
        let invariant = self.invariant;
        let no_contraction = self.no_contraction;
        let declared_builtin = self.declared_builtin;
        *self = Qualifier::default();
        self.precision = precision;
        self.invariant = invariant;
        self.no_contraction = no_contraction;
        self.declared_builtin = declared_builtin;
    }

    pub fn clear_interpolation(&mut self) {
        self.centroid = false;
        self.smooth = false;
        self.flat = false;
        self.nopersp = false;
    }

    pub fn clear_interstage(&mut self) {
        self.clear_interpolation();
        self.patch = false;
        self.sample = false;
    }

    pub fn clear_memory(&mut self) {
        self.coherent = false;
        self.volatil = false;
        self.restrict = false;
        self.readonly = false;
        self.writeonly = false;
    }

    pub fn is_memory(&self) -> bool {
        self.coherent || self.volatil || self.restrict || self.readonly || self.writeonly
    }

    pub fn is_interpolation(&self) -> bool {
        self.flat || self.smooth || self.nopersp
    }

    pub fn is_auxiliary(&self) -> bool {
        self.centroid || self.patch || self.sample
    }

    pub fn is_pipe_input(&self) -> bool {
        matches!(
            self.storage,
            StorageQualifier::VaryingIn
                | StorageQualifier::FragCoord
                | StorageQualifier::PointCoord
                | StorageQualifier::Face
                | StorageQualifier::VertexId
                | StorageQualifier::InstanceId
        )
    }

    pub fn is_pipe_output(&self) -> bool {
        matches!(
            self.storage,
            StorageQualifier::Position
                | StorageQualifier::PointSize
                | StorageQualifier::ClipVertex
                | StorageQualifier::VaryingOut
                | StorageQualifier::FragColor
                | StorageQualifier::FragDepth
        )
    }

    pub fn is_param_input(&self) -> bool {
        matches!(
            self.storage,
            StorageQualifier::In | StorageQualifier::InOut | StorageQualifier::ConstReadOnly
        )
    }

    pub fn is_param_output(&self) -> bool {
        matches!(self.storage, StorageQualifier::Out | StorageQualifier::InOut)
    }

    pub fn is_uniform_or_buffer(&self) -> bool {
        matches!(
            self.storage,
            StorageQualifier::Uniform | StorageQualifier::Buffer
        )
    }

    pub fn is_io(&self) -> bool {
        self.is_uniform_or_buffer() || self.is_pipe_input() || self.is_pipe_output()
    }

    /// Whether this kind of IO gets an extra array level for per-vertex data.
    pub fn is_arrayed_io(&self, stage: Stage) -> bool {
        match stage {
            Stage::Geometry => self.is_pipe_input(),
            Stage::TessControl => !self.patch && (self.is_pipe_input() || self.is_pipe_output()),
            Stage::TessEvaluation => !self.patch && self.is_pipe_input(),
            _ => false,
        }
    }

    /// True when the front end knows the final constant value.
    pub fn is_front_end_constant(&self) -> bool {
        self.storage == StorageQualifier::Const && !self.spec_constant
    }

    pub fn is_spec_constant(&self) -> bool {
        self.spec_constant
    }

    pub fn is_constant(&self) -> bool {
        self.is_front_end_constant() || self.is_spec_constant()
    }

    pub fn make_spec_constant(&mut self) {
        self.storage = StorageQualifier::Const;
        self.spec_constant = true;
    }

    /// Merge a declaration-wide qualifier into this per-name qualifier.
    ///
    /// A field is overwritten only when the source explicitly sets it;
    /// unset fields never clobber.
    pub fn merge(&mut self, src: &Qualifier) {
        if src.storage != StorageQualifier::Temporary {
            self.storage = src.storage;
        }
        if src.builtin != BuiltIn::None {
            self.builtin = src.builtin;
        }
        if src.declared_builtin != BuiltIn::None {
            self.declared_builtin = src.declared_builtin;
        }
        if src.precision != Precision::None {
            self.precision = src.precision;
        }
        self.invariant |= src.invariant;
        self.no_contraction |= src.no_contraction;
        self.centroid |= src.centroid;
        self.smooth |= src.smooth;
        self.flat |= src.flat;
        self.nopersp |= src.nopersp;
        self.patch |= src.patch;
        self.sample |= src.sample;
        self.coherent |= src.coherent;
        self.volatil |= src.volatil;
        self.restrict |= src.restrict;
        self.readonly |= src.readonly;
        self.writeonly |= src.writeonly;
        self.spec_constant |= src.spec_constant;
        self.layout.merge(&src.layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_never_clobbers_set_with_unset() {
        let mut dst = Qualifier::with_storage(StorageQualifier::Uniform);
        dst.precision = Precision::High;
        dst.layout.binding = Some(3);

        let src = Qualifier::new(); // fully unset
        dst.merge(&src);

        assert_eq!(dst.storage, StorageQualifier::Uniform);
        assert_eq!(dst.precision, Precision::High);
        assert_eq!(dst.layout.binding, Some(3));
    }

    #[test]
    fn test_merge_set_fields_overwrite() {
        let mut dst = Qualifier::new();
        dst.layout.location = Some(1);

        let mut src = Qualifier::with_storage(StorageQualifier::VaryingOut);
        src.flat = true;
        src.layout.location = Some(7);
        src.layout.component = Some(2);
        dst.merge(&src);

        assert_eq!(dst.storage, StorageQualifier::VaryingOut);
        assert!(dst.flat);
        assert_eq!(dst.layout.location, Some(7));
        assert_eq!(dst.layout.component, Some(2));
    }

    #[test]
    fn test_make_temporary_keeps_precision() {
        let mut q = Qualifier::with_storage(StorageQualifier::VaryingIn);
        q.precision = Precision::Medium;
        q.flat = true;
        q.layout.location = Some(0);
        q.make_temporary();
        assert_eq!(q.storage, StorageQualifier::Temporary);
        assert_eq!(q.precision, Precision::Medium);
        assert!(!q.flat);
        assert!(!q.layout.is_set());
    }

    #[test]
    fn test_front_end_constant() {
        let mut q = Qualifier::with_storage(StorageQualifier::Const);
        assert!(q.is_front_end_constant());
        assert!(q.is_constant());
        q.make_spec_constant();
        assert!(!q.is_front_end_constant());
        assert!(q.is_spec_constant());
    }

    #[test]
    fn test_arrayed_io() {
        let q = Qualifier::with_storage(StorageQualifier::VaryingIn);
        assert!(q.is_arrayed_io(Stage::Geometry));
        assert!(q.is_arrayed_io(Stage::TessControl));
        assert!(q.is_arrayed_io(Stage::TessEvaluation));
        assert!(!q.is_arrayed_io(Stage::Vertex));

        let mut patch = Qualifier::with_storage(StorageQualifier::VaryingIn);
        patch.patch = true;
        assert!(!patch.is_arrayed_io(Stage::TessControl));
    }
}
