//! The combinatorial sampler/texture/image enumeration.
//!
//! Walks the Cartesian product of {image-or-sampler, shadow,
//! multisample, arrayed, dimensionality, returned basic type}, prunes
//! it with the language's legality matrix, and fans each surviving
//! combination out into query, load/store, lookup and gather function
//! prototypes. Every legality rule is a named predicate so it can be
//! tested on its own.

use std::fmt::Write;

use glc_types::{BasicType, Sampler, SamplerDim, Stage};

use crate::{BuiltIns, Config};

const RETURN_TYPES: [BasicType; 3] = [BasicType::Float, BasicType::Int, BasicType::Uint];

const DIMS: [SamplerDim; 7] = [
    SamplerDim::Dim1D,
    SamplerDim::Dim2D,
    SamplerDim::Dim3D,
    SamplerDim::Cube,
    SamplerDim::Rect,
    SamplerDim::Buffer,
    SamplerDim::Subpass,
];

/// Coordinate component count per dimensionality.
fn dim_size(dim: SamplerDim) -> u8 {
    match dim {
        SamplerDim::None => 0,
        SamplerDim::Dim1D | SamplerDim::Buffer => 1,
        SamplerDim::Dim2D | SamplerDim::Rect | SamplerDim::Subpass => 2,
        SamplerDim::Dim3D | SamplerDim::Cube => 3,
    }
}

/// `int`/`ivec3`-style spelling for an n-component value of a basic type.
fn vec_name(basic: BasicType, size: u8) -> String {
    if size == 1 {
        basic.glsl_name().to_string()
    } else {
        format!("{}vec{}", basic.vec_prefix(), size)
    }
}

fn gvec4(basic: BasicType) -> String {
    format!("{}vec4", basic.vec_prefix())
}

/// One point of the enumerated type space.
#[derive(Debug, Clone, Copy)]
struct Combination {
    image: bool,
    shadow: bool,
    ms: bool,
    arrayed: bool,
    dim: SamplerDim,
    basic: BasicType,
}

fn buffer_textures_missing(cfg: &Config) -> bool {
    (cfg.es() && cfg.version < 310) || (cfg.desktop() && cfg.version < 140)
}

fn cube_arrays_missing(cfg: &Config) -> bool {
    (cfg.es() && cfg.version < 310) || (cfg.desktop() && cfg.version < 130)
}

/// Shadow comparison exists only on sampled, single-sample textures.
fn shadow_excludes_ms_and_image(c: &Combination) -> bool {
    (c.ms || c.image) && c.shadow
}

fn ms_below_version(c: &Combination, cfg: &Config) -> bool {
    c.ms && ((cfg.desktop() && cfg.version < 150)
        || (cfg.es() && c.image)
        || (cfg.es() && cfg.version < 310))
}

/// Subpass inputs exist only when compiling for Vulkan.
fn subpass_needs_vulkan(c: &Combination, cfg: &Config) -> bool {
    c.dim == SamplerDim::Subpass && !cfg.target.is_vulkan()
}

/// A subpass input is its own shape: never arrayed, shadowed, or an
/// (explicitly enumerated) image.
fn subpass_shape(c: &Combination) -> bool {
    c.dim == SamplerDim::Subpass && (c.image || c.shadow || c.arrayed)
}

/// ES has no 1D or rectangle textures.
fn dim_not_in_es(c: &Combination, cfg: &Config) -> bool {
    (c.dim == SamplerDim::Dim1D || c.dim == SamplerDim::Rect) && cfg.es()
}

/// Multisampling exists only for 2D textures and subpass inputs.
fn ms_needs_2d(c: &Combination) -> bool {
    c.ms && c.dim != SamplerDim::Dim2D && c.dim != SamplerDim::Subpass
}

/// 3D and rectangle textures have no arrayed forms.
fn arrayed_dim(c: &Combination) -> bool {
    (c.dim == SamplerDim::Dim3D || c.dim == SamplerDim::Rect) && c.arrayed
}

fn shadow_3d(c: &Combination) -> bool {
    c.dim == SamplerDim::Dim3D && c.shadow
}

fn cube_arrayed_below_version(c: &Combination, cfg: &Config) -> bool {
    c.dim == SamplerDim::Cube && c.arrayed && cube_arrays_missing(cfg)
}

fn buffer_below_version(c: &Combination, cfg: &Config) -> bool {
    c.dim == SamplerDim::Buffer && buffer_textures_missing(cfg)
}

/// Buffer textures are unshaped: no shadow, arraying or multisampling.
fn buffer_shape(c: &Combination) -> bool {
    c.dim == SamplerDim::Buffer && (c.shadow || c.arrayed || c.ms)
}

fn ms_arrayed_es_below_310(c: &Combination, cfg: &Config) -> bool {
    c.ms && c.arrayed && cfg.es() && cfg.version < 310
}

/// Shadow lookups return a single float; no int/uint shadow types.
fn shadow_non_float(c: &Combination) -> bool {
    c.shadow && c.basic != BasicType::Float
}

fn rect_non_float_below_140(c: &Combination, cfg: &Config) -> bool {
    c.dim == SamplerDim::Rect && cfg.version < 140 && c.basic != BasicType::Float
}

fn combination_excluded(c: &Combination, cfg: &Config) -> bool {
    shadow_excludes_ms_and_image(c)
        || ms_below_version(c, cfg)
        || subpass_needs_vulkan(c, cfg)
        || subpass_shape(c)
        || dim_not_in_es(c, cfg)
        || ms_needs_2d(c)
        || arrayed_dim(c)
        || shadow_3d(c)
        || cube_arrayed_below_version(c, cfg)
        || buffer_below_version(c, cfg)
        || buffer_shape(c)
        || ms_arrayed_es_below_310(c, cfg)
        || shadow_non_float(c)
        || rect_non_float_below_140(c, cfg)
}

// lookup-variant predicates

/// Projection needs a divisible coordinate: no cube, buffer, arrayed
/// or multisample sources.
fn proj_excluded(s: &Sampler) -> bool {
    s.dim == SamplerDim::Cube || s.dim == SamplerDim::Buffer || s.arrayed || s.ms
}

fn lod_excluded(s: &Sampler) -> bool {
    s.dim == SamplerDim::Buffer
        || s.dim == SamplerDim::Rect
        || s.ms
        || (s.dim == SamplerDim::Dim2D && s.arrayed && s.shadow)
        || (s.dim == SamplerDim::Cube && s.shadow)
}

/// Bias is an implicit-lod feature; it excludes explicit lod and the
/// lod-free dimensionalities.
fn bias_excluded(s: &Sampler, lod: bool) -> bool {
    lod || s.ms
        || (s.dim == SamplerDim::Dim2D && s.shadow && s.arrayed)
        || s.dim == SamplerDim::Rect
        || s.dim == SamplerDim::Buffer
}

fn offset_excluded(s: &Sampler) -> bool {
    s.dim == SamplerDim::Cube || s.dim == SamplerDim::Buffer || s.ms
}

/// texelFetch addresses texels directly; comparison and cube lookups
/// have no direct addressing.
fn fetch_excluded(s: &Sampler, lod: bool, bias: bool) -> bool {
    lod || bias || s.shadow || s.dim == SamplerDim::Cube
}

/// Multisample and buffer sources are only reachable through fetch.
fn fetch_required(s: &Sampler) -> bool {
    s.ms || s.dim == SamplerDim::Buffer
}

fn grad_excluded(s: &Sampler, lod: bool, bias: bool) -> bool {
    lod || bias || s.ms || s.dim == SamplerDim::Buffer
}

fn extra_proj_excluded(s: &Sampler, proj: bool) -> bool {
    !proj || s.dim == SamplerDim::Dim3D || s.shadow
}

fn lod_clamp_excluded(cfg: &Config, proj: bool, lod: bool, fetch: bool) -> bool {
    cfg.es() || cfg.version < 450 || proj || lod || fetch
}

/// Sparse feedback is not defined for 1D, buffer or projective lookups.
fn sparse_excluded(s: &Sampler, cfg: &Config, proj: bool) -> bool {
    cfg.es() || cfg.version < 450 || s.dim == SamplerDim::Dim1D || s.dim == SamplerDim::Buffer || proj
}

/// GLSL defines no lookup with more than three variations applied.
fn too_many_variations(flags: [bool; 6]) -> bool {
    flags.iter().filter(|f| **f).count() > 3
}

impl BuiltIns {
    /// Enumerate the sampler/image type space and emit every function
    /// prototype it induces.
    pub(crate) fn add_sampling_and_imaging(&mut self, cfg: &Config) {
        for image in [false, true] {
            for shadow in [false, true] {
                for ms in [false, true] {
                    for arrayed in [false, true] {
                        for dim in DIMS {
                            for basic in RETURN_TYPES {
                                let c = Combination {
                                    image,
                                    shadow,
                                    ms,
                                    arrayed,
                                    dim,
                                    basic,
                                };
                                if combination_excluded(&c, cfg) {
                                    continue;
                                }

                                let mut sampler = Sampler::default();
                                if dim == SamplerDim::Subpass {
                                    sampler.set_subpass(basic, ms);
                                } else if image {
                                    sampler.set_image(basic, dim, arrayed, shadow, ms);
                                } else {
                                    sampler.set_combined(basic, dim, arrayed, shadow, ms);
                                }
                                let type_name = sampler.type_name();

                                if dim == SamplerDim::Subpass {
                                    self.add_subpass_sampling(&sampler, &type_name);
                                    continue;
                                }

                                self.add_query_functions(&sampler, &type_name, cfg);

                                if image {
                                    self.add_image_functions(&sampler, &type_name, cfg);
                                } else {
                                    self.add_sampling_functions(&sampler, &type_name, cfg);
                                    self.add_gather_functions(&sampler, &type_name, cfg);

                                    if cfg.target.is_vulkan()
                                        && dim == SamplerDim::Buffer
                                        && sampler.is_combined()
                                    {
                                        // a Vulkan texture buffer allows texelFetch
                                        // without a sampler attached
                                        let mut texture = sampler;
                                        texture.set_texture(basic, dim, arrayed, shadow, ms);
                                        let texture_name = texture.type_name();
                                        self.add_sampling_functions(&texture, &texture_name, cfg);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if cfg.desktop_at_least(450) {
            self.common().push_str("bool sparseTexelsResidentARB(int code);\n");
        }
    }

    /// textureSize/imageSize, textureSamples, textureQueryLod and
    /// textureQueryLevels for one type.
    fn add_query_functions(&mut self, sampler: &Sampler, type_name: &str, cfg: &Config) {
        if sampler.image
            && ((cfg.es() && cfg.version < 310) || (cfg.desktop() && cfg.version < 430))
        {
            return;
        }

        let size_dims = dim_size(sampler.dim) + u8::from(sampler.arrayed)
            - u8::from(sampler.dim == SamplerDim::Cube);
        let es = cfg.es();
        let common = self.common();
        if es {
            common.push_str("highp ");
        }
        common.push_str(&vec_name(BasicType::Int, size_dims));
        if sampler.image {
            common.push_str(" imageSize(readonly writeonly volatile coherent ");
        } else {
            common.push_str(" textureSize(");
        }
        common.push_str(type_name);
        if !sampler.image
            && sampler.dim != SamplerDim::Rect
            && sampler.dim != SamplerDim::Buffer
            && !sampler.ms
        {
            common.push_str(",int);\n");
        } else {
            common.push_str(");\n");
        }

        if cfg.desktop_at_least(430) && sampler.ms {
            let line = if sampler.image {
                format!("int imageSamples(readonly writeonly volatile coherent {});\n", type_name)
            } else {
                format!("int textureSamples({});\n", type_name)
            };
            self.common().push_str(&line);
        }

        let plain_lookup = !sampler.image
            && sampler.dim != SamplerDim::Rect
            && sampler.dim != SamplerDim::Buffer
            && !sampler.ms;
        if cfg.desktop_at_least(400) && plain_lookup {
            let coord = vec_name(BasicType::Float, dim_size(sampler.dim));
            let line = format!("vec2 textureQueryLod({}, {});\n", type_name, coord);
            self.stage(Stage::Fragment).push_str(&line);
        }
        if cfg.desktop_at_least(430) && plain_lookup {
            let line = format!("int textureQueryLevels({});\n", type_name);
            self.common().push_str(&line);
        }
    }

    /// imageLoad/imageStore and the image atomics for one image type.
    fn add_image_functions(&mut self, sampler: &Sampler, type_name: &str, cfg: &Config) {
        let mut dims = dim_size(sampler.dim);
        if sampler.arrayed && sampler.dim != SamplerDim::Cube {
            dims += 1;
        }

        let mut image_params = type_name.to_string();
        image_params.push_str(", ");
        image_params.push_str(&vec_name(BasicType::Int, dims));
        if sampler.ms {
            image_params.push_str(", int");
        }

        let es_prefix = if cfg.es() { "highp " } else { "" };
        let texel = gvec4(sampler.basic);

        let mut s = String::new();
        let _ = write!(
            s,
            "{}{} imageLoad(readonly volatile coherent {});\n",
            es_prefix, texel, image_params
        );
        let _ = write!(
            s,
            "void imageStore(writeonly volatile coherent {}, {});\n",
            image_params, texel
        );

        if sampler.dim != SamplerDim::Dim1D
            && sampler.dim != SamplerDim::Buffer
            && cfg.desktop_at_least(450)
        {
            let _ = write!(
                s,
                "int sparseImageLoadARB(readonly volatile coherent {}, out {});\n",
                image_params, texel
            );
        }

        if cfg.desktop() || cfg.es_at_least(310) {
            if sampler.basic == BasicType::Int || sampler.basic == BasicType::Uint {
                let data = if sampler.basic == BasicType::Int {
                    "highp int"
                } else {
                    "highp uint"
                };
                for op in [
                    "imageAtomicAdd",
                    "imageAtomicMin",
                    "imageAtomicMax",
                    "imageAtomicAnd",
                    "imageAtomicOr",
                    "imageAtomicXor",
                    "imageAtomicExchange",
                ] {
                    let _ = write!(
                        s,
                        "{} {}(volatile coherent {}, {});\n",
                        data, op, image_params, data
                    );
                }
                let _ = write!(
                    s,
                    "{} imageAtomicCompSwap(volatile coherent {}, {}, {});\n",
                    data, image_params, data, data
                );
            } else if cfg.desktop_at_least(450) || cfg.es_at_least(310) {
                let _ = write!(
                    s,
                    "float imageAtomicExchange(volatile coherent {}, float);\n",
                    image_params
                );
            }
        }

        self.common().push_str(&s);
    }

    /// subpassLoad for one input-attachment type; fragment only.
    fn add_subpass_sampling(&mut self, sampler: &Sampler, type_name: &str) {
        let mut s = gvec4(sampler.basic);
        s.push_str(" subpassLoad(");
        s.push_str(type_name);
        if sampler.ms {
            s.push_str(", int");
        }
        s.push_str(");\n");
        self.stage(Stage::Fragment).push_str(&s);
    }

    /// All the texture lookup spellings for one sampled type.
    fn add_sampling_functions(&mut self, sampler: &Sampler, type_name: &str, cfg: &Config) {
        for proj in [false, true] {
            if proj && proj_excluded(sampler) {
                continue;
            }
            for lod in [false, true] {
                if lod && lod_excluded(sampler) {
                    continue;
                }
                for bias in [false, true] {
                    if bias && bias_excluded(sampler, lod) {
                        continue;
                    }
                    for offset in [false, true] {
                        if offset && offset_excluded(sampler) {
                            continue;
                        }
                        for fetch in [false, true] {
                            if fetch && fetch_excluded(sampler, lod, bias) {
                                continue;
                            }
                            if !fetch && fetch_required(sampler) {
                                continue;
                            }
                            for grad in [false, true] {
                                if grad && grad_excluded(sampler, lod, bias) {
                                    continue;
                                }
                                if too_many_variations([proj, offset, fetch, grad, bias, lod]) {
                                    continue;
                                }
                                for extra_proj in [false, true] {
                                    if extra_proj && extra_proj_excluded(sampler, proj) {
                                        continue;
                                    }

                                    let mut total_dims =
                                        dim_size(sampler.dim) + u8::from(sampler.arrayed);
                                    // a 1D non-array shadow still takes a
                                    // two-component coordinate
                                    if sampler.shadow && total_dims < 2 {
                                        total_dims = 2;
                                    }
                                    total_dims += u8::from(sampler.shadow) + u8::from(proj);
                                    let compare = total_dims > 4 && sampler.shadow;
                                    if compare {
                                        total_dims = 4;
                                    }
                                    if bias && compare {
                                        continue;
                                    }

                                    for lod_clamp in [false, true] {
                                        if lod_clamp
                                            && lod_clamp_excluded(cfg, proj, lod, fetch)
                                        {
                                            continue;
                                        }
                                        for sparse in [false, true] {
                                            if sparse && sparse_excluded(sampler, cfg, proj) {
                                                continue;
                                            }

                                            let s = build_sampling_prototype(
                                                sampler,
                                                type_name,
                                                SamplingVariant {
                                                    proj,
                                                    lod,
                                                    bias,
                                                    offset,
                                                    fetch,
                                                    grad,
                                                    extra_proj,
                                                    lod_clamp,
                                                    sparse,
                                                    total_dims,
                                                    compare,
                                                },
                                            );

                                            // implicit-lod variants need
                                            // derivatives: fragment only
                                            if bias || lod_clamp {
                                                self.stage(Stage::Fragment).push_str(&s);
                                            } else {
                                                self.common().push_str(&s);
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// textureGather and friends for one sampled type.
    fn add_gather_functions(&mut self, sampler: &Sampler, type_name: &str, cfg: &Config) {
        match sampler.dim {
            SamplerDim::Dim2D | SamplerDim::Rect | SamplerDim::Cube => {}
            _ => return,
        }
        if sampler.ms {
            return;
        }
        if cfg.version < 140 && sampler.dim == SamplerDim::Rect && sampler.basic != BasicType::Float
        {
            return;
        }

        for offset in 0..3u8 {
            for comp in [false, true] {
                if comp && sampler.shadow {
                    continue;
                }
                if offset > 0 && sampler.dim == SamplerDim::Cube {
                    continue;
                }
                for sparse in [false, true] {
                    if sparse && (cfg.es() || cfg.version < 450) {
                        continue;
                    }

                    let mut s = String::new();
                    if sparse {
                        s.push_str("int ");
                        s.push_str("sparseTextureGather");
                    } else {
                        s.push_str(&gvec4(sampler.basic));
                        s.push(' ');
                        s.push_str("textureGather");
                    }
                    match offset {
                        1 => s.push_str("Offset"),
                        2 => s.push_str("Offsets"),
                        _ => {}
                    }
                    if sparse {
                        s.push_str("ARB");
                    }
                    s.push('(');
                    s.push_str(type_name);

                    let total_dims = dim_size(sampler.dim) + u8::from(sampler.arrayed);
                    s.push(',');
                    s.push_str(&vec_name(BasicType::Float, total_dims));

                    if sampler.shadow {
                        s.push_str(",float");
                    }
                    if offset > 0 {
                        s.push_str(",ivec2");
                        if offset == 2 {
                            s.push_str("[4]");
                        }
                    }
                    if sparse {
                        s.push_str(",out ");
                        s.push_str(&gvec4(sampler.basic));
                        s.push(' ');
                    }
                    if comp {
                        s.push_str(",int");
                    }
                    s.push_str(");\n");
                    self.common().push_str(&s);
                }
            }
        }
    }
}

struct SamplingVariant {
    proj: bool,
    lod: bool,
    bias: bool,
    offset: bool,
    fetch: bool,
    grad: bool,
    extra_proj: bool,
    lod_clamp: bool,
    sparse: bool,
    total_dims: u8,
    compare: bool,
}

fn build_sampling_prototype(sampler: &Sampler, type_name: &str, v: SamplingVariant) -> String {
    let mut s = String::new();

    if v.sparse {
        s.push_str("int ");
    } else if sampler.shadow {
        s.push_str("float ");
    } else {
        s.push_str(&gvec4(sampler.basic));
        s.push(' ');
    }

    if v.sparse {
        s.push_str(if v.fetch { "sparseTexel" } else { "sparseTexture" });
    } else {
        s.push_str(if v.fetch { "texel" } else { "texture" });
    }
    if v.proj {
        s.push_str("Proj");
    }
    if v.lod {
        s.push_str("Lod");
    }
    if v.grad {
        s.push_str("Grad");
    }
    if v.fetch {
        s.push_str("Fetch");
    }
    if v.offset {
        s.push_str("Offset");
    }
    if v.lod_clamp {
        s.push_str("Clamp");
    }
    if v.lod_clamp || v.sparse {
        s.push_str("ARB");
    }
    s.push('(');
    s.push_str(type_name);

    // P coordinate
    if v.extra_proj {
        s.push_str(",vec4");
    } else {
        s.push(',');
        let coord_basic = if v.fetch {
            BasicType::Int
        } else {
            BasicType::Float
        };
        s.push_str(&vec_name(coord_basic, v.total_dims));
    }

    // the lod/sample argument fetch always carries
    if (v.fetch
        && sampler.dim != SamplerDim::Buffer
        && sampler.dim != SamplerDim::Rect
        && !sampler.ms)
        || (sampler.ms && v.fetch)
    {
        s.push_str(",int");
    }

    if v.lod {
        s.push_str(",float");
    }

    if v.grad {
        let grad_dims = dim_size(sampler.dim);
        if grad_dims == 1 {
            s.push_str(",float,float");
        } else {
            let vec = vec_name(BasicType::Float, grad_dims);
            s.push(',');
            s.push_str(&vec);
            s.push(',');
            s.push_str(&vec);
        }
    }

    if v.offset {
        s.push(',');
        s.push_str(&vec_name(BasicType::Int, dim_size(sampler.dim)));
    }

    if v.compare {
        s.push_str(",float");
    }
    if v.lod_clamp {
        s.push_str(",float");
    }
    if v.sparse {
        if sampler.shadow {
            s.push_str(",out float ");
        } else {
            s.push_str(",out ");
            s.push_str(&gvec4(sampler.basic));
            s.push(' ');
        }
    }
    if v.bias {
        s.push_str(",float");
    }

    s.push_str(");\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use glc_types::{Profile, SpvTarget};

    fn combo(
        image: bool,
        shadow: bool,
        ms: bool,
        arrayed: bool,
        dim: SamplerDim,
        basic: BasicType,
    ) -> Combination {
        Combination {
            image,
            shadow,
            ms,
            arrayed,
            dim,
            basic,
        }
    }

    #[test]
    fn test_shadow_exclusions() {
        let c = combo(false, true, true, false, SamplerDim::Dim2D, BasicType::Float);
        assert!(shadow_excludes_ms_and_image(&c));
        let c = combo(true, true, false, false, SamplerDim::Dim2D, BasicType::Float);
        assert!(shadow_excludes_ms_and_image(&c));
        let c = combo(false, true, false, false, SamplerDim::Dim2D, BasicType::Int);
        assert!(shadow_non_float(&c));
    }

    #[test]
    fn test_dimension_exclusions() {
        let cfg = Config::new(310, Profile::Es, SpvTarget::NONE);
        let c = combo(false, false, false, false, SamplerDim::Rect, BasicType::Float);
        assert!(dim_not_in_es(&c, &cfg));

        let c = combo(false, false, false, true, SamplerDim::Dim3D, BasicType::Float);
        assert!(arrayed_dim(&c));

        let c = combo(false, false, true, false, SamplerDim::Dim3D, BasicType::Float);
        assert!(ms_needs_2d(&c));

        let c = combo(false, true, false, false, SamplerDim::Buffer, BasicType::Float);
        assert!(buffer_shape(&c));
    }

    #[test]
    fn test_version_gates() {
        let core130 = Config::new(130, Profile::Core, SpvTarget::NONE);
        let core450 = Config::new(450, Profile::Core, SpvTarget::NONE);
        assert!(buffer_textures_missing(&core130));
        assert!(!buffer_textures_missing(&core450));

        let c = combo(false, false, false, true, SamplerDim::Cube, BasicType::Float);
        let core120 = Config::new(120, Profile::Core, SpvTarget::NONE);
        assert!(cube_arrayed_below_version(&c, &core120));
        assert!(!cube_arrayed_below_version(&c, &core450));
    }

    #[test]
    fn test_subpass_gates() {
        let gl = Config::new(450, Profile::Core, SpvTarget::NONE);
        let vk = Config::new(450, Profile::Core, SpvTarget::vulkan_1_0());
        let c = combo(false, false, false, false, SamplerDim::Subpass, BasicType::Float);
        assert!(subpass_needs_vulkan(&c, &gl));
        assert!(!subpass_needs_vulkan(&c, &vk));

        let c = combo(false, false, false, true, SamplerDim::Subpass, BasicType::Float);
        assert!(subpass_shape(&c));
    }

    #[test]
    fn test_lookup_variant_predicates() {
        let mut s = Sampler::default();
        s.set_combined(BasicType::Float, SamplerDim::Cube, false, false, false);
        assert!(proj_excluded(&s));
        assert!(offset_excluded(&s));
        assert!(fetch_excluded(&s, false, false));

        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, true);
        assert!(fetch_required(&s));
        assert!(grad_excluded(&s, false, false));

        s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
        assert!(!fetch_required(&s));
        assert!(bias_excluded(&s, true)); // bias and lod are exclusive
        assert!(!bias_excluded(&s, false));
    }

    #[test]
    fn test_variation_limit() {
        assert!(!too_many_variations([true, true, true, false, false, false]));
        assert!(too_many_variations([true, true, true, true, false, false]));
    }

    #[test]
    fn test_shadow_coordinate_padding() {
        // 1D shadow: 1 dim padded to 2, +1 for the reference value
        let mut s = Sampler::default();
        s.set_combined(BasicType::Float, SamplerDim::Dim1D, false, true, false);
        let proto = build_sampling_prototype(
            &s,
            "sampler1DShadow",
            SamplingVariant {
                proj: false,
                lod: false,
                bias: false,
                offset: false,
                fetch: false,
                grad: false,
                extra_proj: false,
                lod_clamp: false,
                sparse: false,
                total_dims: 3,
                compare: false,
            },
        );
        assert_eq!(proto, "float texture(sampler1DShadow,vec3);\n");
    }
}
