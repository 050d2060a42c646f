//! Basic type tags and compile parameters.

/// Basic type of a value or declaration.
///
/// `Struct` and `Block` carry their member list in the owning
/// [`Type`](crate::Type); `Sampler` carries a [`Sampler`](crate::Sampler)
/// descriptor there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasicType {
    #[default]
    Void,
    Bool,
    Int,
    Uint,
    Int64,
    Uint64,
    Int16,
    Uint16,
    Float,
    Double,
    Float16,
    AtomicUint,
    Sampler,
    Struct,
    Block,
}

impl BasicType {
    /// The GLSL spelling of this type, for diagnostics and generated text.
    pub fn glsl_name(self) -> &'static str {
        match self {
            BasicType::Void => "void",
            BasicType::Bool => "bool",
            BasicType::Int => "int",
            BasicType::Uint => "uint",
            BasicType::Int64 => "int64_t",
            BasicType::Uint64 => "uint64_t",
            BasicType::Int16 => "int16_t",
            BasicType::Uint16 => "uint16_t",
            BasicType::Float => "float",
            BasicType::Double => "double",
            BasicType::Float16 => "float16_t",
            BasicType::AtomicUint => "atomic_uint",
            BasicType::Sampler => "sampler/image",
            BasicType::Struct => "structure",
            BasicType::Block => "block",
        }
    }

    /// Single-letter vector prefix ("ivec4", "uvec4", ...); empty for float.
    pub fn vec_prefix(self) -> &'static str {
        match self {
            BasicType::Int => "i",
            BasicType::Uint => "u",
            BasicType::Bool => "b",
            BasicType::Double => "d",
            _ => "",
        }
    }

    pub fn is_floating_domain(self) -> bool {
        matches!(
            self,
            BasicType::Float | BasicType::Double | BasicType::Float16
        )
    }

    pub fn is_integer_domain(self) -> bool {
        matches!(
            self,
            BasicType::Int
                | BasicType::Uint
                | BasicType::Int64
                | BasicType::Uint64
                | BasicType::Int16
                | BasicType::Uint16
                | BasicType::AtomicUint
        )
    }
}

impl core::fmt::Display for BasicType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.glsl_name())
    }
}

/// Pipeline stage being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
    Compute,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Vertex,
        Stage::TessControl,
        Stage::TessEvaluation,
        Stage::Geometry,
        Stage::Fragment,
        Stage::Compute,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::TessControl => "tessellation control",
            Stage::TessEvaluation => "tessellation evaluation",
            Stage::Geometry => "geometry",
            Stage::Fragment => "fragment",
            Stage::Compute => "compute",
        }
    }
}

/// GLSL dialect selector.
///
/// Gates which built-ins and legacy features are legal for a given
/// version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// No `#version`/profile given (pre-150 desktop).
    None,
    Core,
    Compatibility,
    Es,
}

impl Profile {
    pub fn is_es(self) -> bool {
        self == Profile::Es
    }
}

/// Which binary IR, if any, the compilation targets.
///
/// Several built-in declarations differ between plain GL and SPIR-V /
/// Vulkan consumers (`gl_VertexID` vs `gl_VertexIndex`, subpass inputs,
/// legacy texture spellings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpvTarget {
    /// (major, minor) of the SPIR-V binary being generated, if any.
    pub spirv: Option<(u8, u8)>,
    /// (major, minor) of the Vulkan environment, if any.
    pub vulkan: Option<(u8, u8)>,
}

impl SpvTarget {
    /// Plain GL: no binary IR.
    pub const NONE: SpvTarget = SpvTarget {
        spirv: None,
        vulkan: None,
    };

    /// SPIR-V 1.0 for Vulkan 1.0.
    pub fn vulkan_1_0() -> SpvTarget {
        SpvTarget {
            spirv: Some((1, 0)),
            vulkan: Some((1, 0)),
        }
    }

    /// True when generating any binary IR.
    pub fn targets_binary(self) -> bool {
        self.spirv.is_some()
    }

    pub fn is_vulkan(self) -> bool {
        self.vulkan.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_type_names() {
        assert_eq!(BasicType::Float.glsl_name(), "float");
        assert_eq!(BasicType::AtomicUint.glsl_name(), "atomic_uint");
        assert_eq!(BasicType::Uint.vec_prefix(), "u");
        assert_eq!(BasicType::Float.vec_prefix(), "");
    }

    #[test]
    fn test_domains() {
        assert!(BasicType::Double.is_floating_domain());
        assert!(BasicType::AtomicUint.is_integer_domain());
        assert!(!BasicType::Bool.is_integer_domain());
        assert!(!BasicType::Bool.is_floating_domain());
    }

    #[test]
    fn test_target() {
        assert!(!SpvTarget::NONE.targets_binary());
        assert!(SpvTarget::vulkan_1_0().targets_binary());
        assert!(SpvTarget::vulkan_1_0().is_vulkan());
    }

    #[test]
    fn test_stage_indices() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }
}
