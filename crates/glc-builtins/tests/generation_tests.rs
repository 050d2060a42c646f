//! Tests over the generated declaration text itself.

use filecheck::{CheckerBuilder, NO_VARIABLES};
use glc_builtins::{BuiltIns, Config};
use glc_types::{Profile, SpvTarget, Stage};

fn core(version: u32) -> BuiltIns {
    BuiltIns::new(&Config::new(version, Profile::Core, SpvTarget::NONE))
}

fn check(text: &str, directives: &str) {
    let mut builder = CheckerBuilder::new();
    builder.text(directives).expect("valid directives");
    let checker = builder.finish();
    assert!(
        checker.check(text, NO_VARIABLES).expect("filecheck runs"),
        "directives not satisfied:\n{}",
        directives
    );
}

#[test]
fn test_core_450_declares_modern_texture_and_no_legacy_spelling() {
    let builtins = core(450);
    let common = builtins.common_builtins();

    assert!(common.contains("vec4 texture(sampler2D,vec2);"));
    // the legacy spelling is gone above 420 outside compatibility;
    // only the fragment-only bias overload remains declared
    assert!(!common.contains("texture2D("));
    let fragment = builtins.stage_builtins(Stage::Fragment);
    assert!(!fragment.contains("vec4 texture2D(sampler2D, vec2);"));
    assert!(fragment.contains("vec4 texture2D(sampler2D, vec2, float);"));
}

#[test]
fn test_compatibility_450_keeps_legacy_spelling() {
    let builtins = BuiltIns::new(&Config::new(450, Profile::Compatibility, SpvTarget::NONE));
    assert!(builtins.common_builtins().contains("vec4 texture2D(sampler2D, vec2);"));
    assert!(builtins.common_builtins().contains("vec4 shadow2D(sampler2DShadow, vec3);"));
}

#[test]
fn test_core_410_still_has_legacy_spelling() {
    let builtins = core(410);
    assert!(builtins.common_builtins().contains("vec4 texture2D(sampler2D, vec2);"));
}

#[test]
fn test_es100_position_is_plain_variable() {
    let builtins = BuiltIns::new(&Config::new(100, Profile::Es, SpvTarget::NONE));
    let vertex = builtins.stage_builtins(Stage::Vertex);
    assert!(vertex.contains("highp   vec4  gl_Position;"));
    assert!(vertex.contains("mediump float gl_PointSize;"));
    assert!(!vertex.contains("gl_PerVertex"));
}

#[test]
fn test_core_450_position_is_block_member() {
    let builtins = core(450);
    check(
        builtins.stage_builtins(Stage::Vertex),
        "check: out gl_PerVertex {\n\
         sameln: vec4 gl_Position;\n\
         sameln: float gl_PointSize;\n\
         sameln: float gl_ClipDistance[];\n\
         sameln: float gl_CullDistance[];",
    );
}

#[test]
fn test_sampling_families_in_core_450() {
    let builtins = core(450);
    check(
        builtins.common_builtins(),
        "check: vec4 texture(sampler2D,vec2);\n\
         check: vec4 textureProjLodOffset(sampler2D,vec4,float,ivec2);\n\
         check: vec4 textureGather(sampler2D,vec2);\n\
         check: vec4 textureGather(sampler2D,vec2,int);\n\
         check: int sparseTextureARB(sampler2D,vec2,out vec4 );\n\
         check: uvec4 texelFetch(usamplerBuffer,int);\n\
         check: bool sparseTexelsResidentARB(int code);",
    );
}

#[test]
fn test_implicit_lod_variants_are_fragment_only() {
    let builtins = core(450);
    let fragment = builtins.stage_builtins(Stage::Fragment);
    // bias and lod-clamp forms need derivatives
    assert!(fragment.contains("vec4 texture(sampler2D,vec2,float);"));
    assert!(fragment.contains("vec4 textureClampARB(sampler2D,vec2,float);"));
    assert!(!builtins.common_builtins().contains("vec4 texture(sampler2D,vec2,float);"));
    assert!(!builtins.common_builtins().contains("ClampARB"));
}

#[test]
fn test_query_functions_for_every_surviving_combination() {
    let builtins = core(450);
    let common = builtins.common_builtins();
    for type_name in [
        "sampler1D",
        "sampler2D",
        "sampler3D",
        "samplerCube",
        "sampler2DRect",
        "samplerBuffer",
        "sampler2DMS",
        "sampler2DMSArray",
        "sampler1DArray",
        "sampler2DArray",
        "samplerCubeArray",
        "sampler1DShadow",
        "sampler2DShadow",
        "samplerCubeShadow",
        "sampler2DRectShadow",
        "usampler2D",
        "isampler3D",
        "image2D",
        "uimageBuffer",
        "iimage2DArray",
    ] {
        assert!(
            common.contains(&format!("textureSize({}", type_name))
                || common.contains(&format!(
                    "imageSize(readonly writeonly volatile coherent {}",
                    type_name
                )),
            "no size query generated for {}",
            type_name
        );
    }
}

#[test]
fn test_ms_and_shadow_exclusions_hold_in_output() {
    let builtins = core(450);
    let common = builtins.common_builtins();
    // no shadow multisample type is ever named
    assert!(!common.contains("sampler2DMSShadow"));
    // no multisample gather
    assert!(!common.contains("textureGather(sampler2DMS"));
    // no buffer shadow
    assert!(!common.contains("samplerBufferShadow"));
    // no int/uint shadow samplers
    assert!(!common.contains("isampler2DShadow"));
    assert!(!common.contains("usampler2DShadow"));
}

#[test]
fn test_vulkan_target_gets_subpass_and_texture_buffer() {
    let builtins = BuiltIns::new(&Config::new(450, Profile::Core, SpvTarget::vulkan_1_0()));
    let fragment = builtins.stage_builtins(Stage::Fragment);
    assert!(fragment.contains("vec4 subpassLoad(subpassInput);"));
    assert!(fragment.contains("uvec4 subpassLoad(usubpassInputMS, int);"));
    assert!(builtins.common_builtins().contains("vec4 texelFetch(textureBuffer,int);"));
    // atomic counters are a plain-GL feature
    assert!(!builtins.common_builtins().contains("atomicCounterIncrement"));
}

#[test]
fn test_gl_target_has_no_subpass() {
    let builtins = core(450);
    assert!(!builtins.stage_builtins(Stage::Fragment).contains("subpassLoad"));
}

#[test]
fn test_image_functions_gated_and_shaped() {
    let builtins = core(450);
    check(
        builtins.common_builtins(),
        "check: vec4 imageLoad(readonly volatile coherent image2D, ivec2);\n\
         check: void imageStore(writeonly volatile coherent image2D, ivec2, vec4);\n\
         check: highp int imageAtomicAdd(volatile coherent iimage2D, ivec2, highp int);\n\
         check: float imageAtomicExchange(volatile coherent image2D, ivec2, float);\n\
         check: int sparseImageLoadARB(readonly volatile coherent image2D, ivec2, out vec4);",
    );

    // the size query joins only once the query functions exist (4.30)
    let builtins = core(420);
    assert!(!builtins.common_builtins().contains("imageSize"));
}

#[test]
fn test_es_310_has_highp_queries_and_no_desktop_only_families() {
    let builtins = BuiltIns::new(&Config::new(310, Profile::Es, SpvTarget::NONE));
    let common = builtins.common_builtins();
    assert!(common.contains("highp ivec2 textureSize(sampler2D,int);"));
    assert!(!common.contains("sparseTexture"));
    assert!(!common.contains("textureQueryLevels"));
    assert!(!common.contains("noise1"));
    assert!(!common.contains("sampler1D"));
}

#[test]
fn test_resource_constants_render_limits() {
    let cfg = Config::new(450, Profile::Core, SpvTarget::NONE);
    let mut builtins = BuiltIns::new(&cfg);
    let mut resources = glc_builtins::ResourceLimits::default();
    resources.max_draw_buffers = 17;
    builtins.add_stage_resources(&resources, &cfg, Stage::Fragment);
    assert!(builtins.common_builtins().contains("const int  gl_MaxDrawBuffers = 17;"));
    assert!(builtins
        .common_builtins()
        .contains("const int gl_MaxCullDistances = 8;"));
}

#[test]
fn test_tess_input_block_is_resource_dependent() {
    let cfg = Config::new(450, Profile::Core, SpvTarget::NONE);
    let resources = glc_builtins::ResourceLimits::default();

    let mut builtins = BuiltIns::new(&cfg);
    assert!(!builtins.common_builtins().contains("gl_in[gl_MaxPatchVertices]"));

    builtins.add_stage_resources(&resources, &cfg, Stage::TessEvaluation);
    assert!(builtins.common_builtins().contains("} gl_in[gl_MaxPatchVertices];"));

    // other stages do not get the block
    let mut builtins = BuiltIns::new(&cfg);
    builtins.add_stage_resources(&resources, &cfg, Stage::Vertex);
    assert!(!builtins.common_builtins().contains("gl_in[gl_MaxPatchVertices]"));
}

#[test]
fn test_barrier_placement() {
    let builtins = core(450);
    assert!(builtins.stage_builtins(Stage::TessControl).contains("void barrier();"));
    assert!(builtins.stage_builtins(Stage::Compute).contains("void barrier();"));
    assert!(!builtins.stage_builtins(Stage::Vertex).contains("void barrier();"));
    assert!(builtins.common_builtins().contains("void memoryBarrier();"));
    assert!(builtins
        .stage_builtins(Stage::Compute)
        .contains("void memoryBarrierShared();"));
}
