//! Sampler, texture, image and subpass-input descriptors.

use alloc::string::String;

use crate::BasicType;

/// Dimensionality of a texture or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SamplerDim {
    #[default]
    None,
    Dim1D,
    Dim2D,
    Dim3D,
    Cube,
    Rect,
    Buffer,
    /// Input attachment; only valid as a non-sampled image.
    Subpass,
}

impl SamplerDim {
    /// Coordinate component count for this dimensionality.
    pub fn coord_size(self) -> u8 {
        match self {
            SamplerDim::None | SamplerDim::Subpass => 0,
            SamplerDim::Dim1D | SamplerDim::Buffer => 1,
            SamplerDim::Dim2D | SamplerDim::Rect => 2,
            SamplerDim::Dim3D | SamplerDim::Cube => 3,
        }
    }
}

/// Compact description of a sampler/texture/image type.
///
/// One descriptor covers combined texture+samplers, textures without a
/// sampler, non-sampled images, subpass inputs, and the pure `sampler`
/// type. The shape setters are mutually exclusive and always clear the
/// descriptor first so no stale flag combination can survive a
/// reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sampler {
    /// Basic type returned by a lookup.
    pub basic: BasicType,
    pub dim: SamplerDim,
    pub arrayed: bool,
    pub shadow: bool,
    pub ms: bool,
    /// Non-sampled image; `combined` must be false.
    pub image: bool,
    /// Texture combined with a sampler.
    pub combined: bool,
    /// The pure `sampler` keyword; every other field is clear.
    pub sampler: bool,
    /// External-image texture (EGL image source).
    pub external: bool,
    /// Component count of the returned vector.
    pub vector_size: u8,
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler {
            basic: BasicType::Void,
            dim: SamplerDim::None,
            arrayed: false,
            shadow: false,
            ms: false,
            image: false,
            combined: false,
            sampler: false,
            external: false,
            vector_size: 4,
        }
    }
}

impl Sampler {
    pub fn clear(&mut self) {
        *self = Sampler::default();
    }

    /// A combined texture + sampler.
    pub fn combined(basic: BasicType, dim: SamplerDim) -> Sampler {
        Sampler {
            basic,
            dim,
            combined: true,
            ..Sampler::default()
        }
    }

    pub fn set_combined(
        &mut self,
        basic: BasicType,
        dim: SamplerDim,
        arrayed: bool,
        shadow: bool,
        ms: bool,
    ) {
        self.clear();
        self.basic = basic;
        self.dim = dim;
        self.arrayed = arrayed;
        self.shadow = shadow;
        self.ms = ms;
        self.combined = true;
    }

    /// A non-sampled image.
    pub fn set_image(
        &mut self,
        basic: BasicType,
        dim: SamplerDim,
        arrayed: bool,
        shadow: bool,
        ms: bool,
    ) {
        self.clear();
        self.basic = basic;
        self.dim = dim;
        self.arrayed = arrayed;
        self.shadow = shadow;
        self.ms = ms;
        self.image = true;
    }

    /// A texture with no sampler attached.
    pub fn set_texture(
        &mut self,
        basic: BasicType,
        dim: SamplerDim,
        arrayed: bool,
        shadow: bool,
        ms: bool,
    ) {
        self.clear();
        self.basic = basic;
        self.dim = dim;
        self.arrayed = arrayed;
        self.shadow = shadow;
        self.ms = ms;
    }

    /// A subpass input attachment.
    pub fn set_subpass(&mut self, basic: BasicType, ms: bool) {
        self.clear();
        self.basic = basic;
        self.dim = SamplerDim::Subpass;
        self.ms = ms;
        self.image = true;
    }

    /// The pure `sampler` type.
    pub fn set_pure_sampler(&mut self, shadow: bool) {
        self.clear();
        self.sampler = true;
        self.shadow = shadow;
    }

    pub fn is_image(&self) -> bool {
        self.image && self.dim != SamplerDim::Subpass
    }

    pub fn is_subpass(&self) -> bool {
        self.dim == SamplerDim::Subpass
    }

    pub fn is_combined(&self) -> bool {
        self.combined
    }

    pub fn is_pure_sampler(&self) -> bool {
        self.sampler
    }

    pub fn is_texture(&self) -> bool {
        !self.sampler && !self.image
    }

    pub fn is_shadow(&self) -> bool {
        self.shadow
    }

    pub fn is_arrayed(&self) -> bool {
        self.arrayed
    }

    pub fn is_multi_sample(&self) -> bool {
        self.ms
    }

    /// Canonical GLSL spelling of this descriptor, e.g. `usampler2DArray`,
    /// `imageBuffer`, `subpassInputMS`.
    pub fn type_name(&self) -> String {
        let mut s = String::new();
        if self.sampler {
            s.push_str("sampler");
            if self.shadow {
                s.push_str("Shadow");
            }
            return s;
        }
        s.push_str(match self.basic {
            BasicType::Int => "i",
            BasicType::Uint => "u",
            _ => "",
        });
        if self.image {
            if self.dim == SamplerDim::Subpass {
                s.push_str("subpass");
            } else {
                s.push_str("image");
            }
        } else if self.combined {
            s.push_str("sampler");
        } else {
            s.push_str("texture");
        }
        if self.external {
            s.push_str("ExternalOES");
            return s;
        }
        s.push_str(match self.dim {
            SamplerDim::Dim1D => "1D",
            SamplerDim::Dim2D => "2D",
            SamplerDim::Dim3D => "3D",
            SamplerDim::Cube => "Cube",
            SamplerDim::Rect => "2DRect",
            SamplerDim::Buffer => "Buffer",
            SamplerDim::Subpass => "Input",
            SamplerDim::None => "",
        });
        if self.ms {
            s.push_str("MS");
        }
        if self.arrayed {
            s.push_str("Array");
        }
        if self.shadow {
            s.push_str("Shadow");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let mut s = Sampler::default();
        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        assert_eq!(s.type_name(), "sampler2D");

        s.set_combined(BasicType::Uint, SamplerDim::Cube, true, false, false);
        assert_eq!(s.type_name(), "usamplerCubeArray");

        s.set_combined(BasicType::Float, SamplerDim::Dim2D, true, false, true);
        assert_eq!(s.type_name(), "sampler2DMSArray");

        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, true, false);
        assert_eq!(s.type_name(), "sampler2DShadow");

        s.set_image(BasicType::Int, SamplerDim::Dim2D, true, false, false);
        assert_eq!(s.type_name(), "iimage2DArray");

        s.set_image(BasicType::Float, SamplerDim::Buffer, false, false, false);
        assert_eq!(s.type_name(), "imageBuffer");

        s.set_texture(BasicType::Float, SamplerDim::Buffer, false, false, false);
        assert_eq!(s.type_name(), "textureBuffer");

        s.set_subpass(BasicType::Uint, true);
        assert_eq!(s.type_name(), "usubpassInputMS");

        s.set_pure_sampler(false);
        assert_eq!(s.type_name(), "sampler");
    }

    #[test]
    fn test_setters_clear_stale_flags() {
        let mut s = Sampler::default();
        s.set_image(BasicType::Int, SamplerDim::Dim3D, false, false, false);
        assert!(s.is_image());
        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        assert!(!s.image);
        assert!(s.is_combined());
        assert_eq!(s.basic, BasicType::Float);

        s.set_pure_sampler(true);
        assert!(s.is_pure_sampler());
        assert!(!s.is_combined());
        assert!(s.is_shadow());
        assert_eq!(s.dim, SamplerDim::None);
    }

    #[test]
    fn test_structural_equality() {
        let mut a = Sampler::default();
        a.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        let mut b = Sampler::default();
        b.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        assert_eq!(a, b);
        b.arrayed = true;
        assert_ne!(a, b);
    }

    #[test]
    fn test_classification() {
        let mut s = Sampler::default();
        s.set_subpass(BasicType::Float, false);
        assert!(s.is_subpass());
        assert!(!s.is_image()); // subpass is not a plain image
        s.set_texture(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        assert!(s.is_texture());
    }
}
