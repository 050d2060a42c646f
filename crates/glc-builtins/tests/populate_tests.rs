//! End-to-end tests: the generated text must parse under the same
//! grammar as user shaders, for every supported (profile, version)
//! pair, and land in the symbol table with the right shapes.

mod support;

use glc_builtins::SymbolKind;
use glc_types::{BasicType, Profile, SamplerDim, SpvTarget, Stage};
use support::build_stage;

#[test]
fn test_generated_text_parses_for_all_profiles_and_stages() {
    let configs = [
        (100, Profile::Es, SpvTarget::NONE),
        (300, Profile::Es, SpvTarget::NONE),
        (310, Profile::Es, SpvTarget::NONE),
        (140, Profile::None, SpvTarget::NONE),
        (330, Profile::Core, SpvTarget::NONE),
        (420, Profile::Core, SpvTarget::NONE),
        (450, Profile::Core, SpvTarget::NONE),
        (450, Profile::Compatibility, SpvTarget::NONE),
        (310, Profile::Es, SpvTarget::vulkan_1_0()),
        (450, Profile::Core, SpvTarget::vulkan_1_0()),
    ];
    for (version, profile, target) in configs {
        for stage in Stage::ALL {
            // build_stage panics with the parse diagnostics on failure
            let (table, _arena) = build_stage(version, profile, target, stage);
            assert!(
                !table.is_empty(),
                "no symbols for {:?} {} {:?}",
                profile,
                version,
                stage
            );
        }
    }
}

#[test]
fn test_fragment_450_core_has_modern_texture_overloads_only() {
    let (table, arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Fragment);

    let texture = table.find("texture").expect("texture overload set");
    let SymbolKind::Function { prototypes } = texture.kind() else {
        panic!("texture should be a function");
    };
    let has_2d_form = prototypes.iter().any(|p| {
        p.params.len() == 2
            && p.params[0].basic() == BasicType::Sampler
            && p.params[0].sampler().dim == SamplerDim::Dim2D
            && p.params[0].sampler().is_combined()
            && !p.params[0].sampler().is_shadow()
            && p.params[1].vector_size() == 2
            && p.params[1].basic() == BasicType::Float
            && p.return_type.vector_size() == 4
    });
    assert!(has_2d_form, "vec4 texture(sampler2D, vec2) missing");

    // the two-argument legacy spelling is excluded above 420 outside
    // compatibility; only the fragment bias overload survives
    if let Some(legacy) = table.find("texture2D") {
        assert!(legacy.prototypes().iter().all(|p| p.params.len() != 2));
    }
    let _ = arena;
}

#[test]
fn test_fragment_es100_keeps_legacy_texture2d() {
    let (table, _arena) = build_stage(100, Profile::Es, SpvTarget::NONE, Stage::Fragment);
    assert!(table.find("texture2D").is_some());
    // the modern spelling arrives with 1.30 / ES 3.00
    assert!(table.find("texture").is_none());
}

#[test]
fn test_vertex_es100_position_is_plain_variable() {
    let (table, _arena) = build_stage(100, Profile::Es, SpvTarget::NONE, Stage::Vertex);
    let position = table.find("gl_Position").expect("gl_Position");
    let ty = position.ty().expect("variable");
    assert_eq!(ty.basic(), BasicType::Float);
    assert_eq!(ty.vector_size(), 4);
    assert!(!ty.is_struct());
    assert!(table.find("gl_PointSize").is_some());
}

#[test]
fn test_vertex_450_core_position_comes_from_per_vertex_block() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Vertex);
    // anonymous block members are directly visible
    let position = table.find("gl_Position").expect("gl_Position");
    let ty = position.ty().expect("variable");
    assert_eq!(ty.vector_size(), 4);
    assert!(table.find("gl_CullDistance").is_some());
}

#[test]
fn test_tess_eval_input_block_sized_by_patch_limit() {
    let (table, arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::TessEvaluation);
    let gl_in = table.find("gl_in").expect("gl_in block");
    let ty = gl_in.ty().expect("variable");
    assert!(ty.is_array());
    let sizes = arena.array_sizes(ty.array_sizes_id().unwrap());
    assert_eq!(sizes.outer_size(), Some(32)); // default gl_MaxPatchVertices
    assert!(ty.members_id().is_some());
}

#[test]
fn test_resource_constants_are_scalar_int_constants() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Vertex);
    let max_draw = table.find("gl_MaxDrawBuffers").expect("limit constant");
    assert_eq!(max_draw.constant_value(), Some(32));
    let ty = max_draw.ty().expect("variable");
    assert_eq!(ty.basic(), BasicType::Int);
    assert!(ty.is_scalar());
}

#[test]
fn test_compute_interface_is_present_at_430() {
    let (table, _arena) = build_stage(430, Profile::Core, SpvTarget::NONE, Stage::Compute);
    let size = table.find("gl_WorkGroupSize").expect("gl_WorkGroupSize");
    let ty = size.ty().expect("variable");
    assert_eq!(ty.basic(), BasicType::Uint);
    assert_eq!(ty.vector_size(), 3);
    assert!(table.find("gl_LocalInvocationIndex").is_some());
    assert!(table.find("gl_MaxComputeWorkGroupCount").is_some());
}

#[test]
fn test_depth_range_struct_round_trips() {
    let (table, arena) = build_stage(330, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    let depth_range = table.find("gl_DepthRange").expect("gl_DepthRange");
    let ty = depth_range.ty().expect("variable");
    assert!(ty.is_struct());
    let members = arena.members(ty.members_id().unwrap());
    let names: Vec<_> = members.iter().filter_map(|m| m.field_name()).collect();
    assert_eq!(names, ["near", "far", "diff"]);
}

#[test]
fn test_overload_sets_are_consistent_across_common_and_stage_text() {
    // dFdx lives in the fragment string, sin in the common string; both
    // populate one table without conflicts
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    assert!(table.find("sin").is_some());
    assert!(table.find("dFdx").is_some());
    // vertex-only names are absent from a fragment table
    assert!(table.find("ftransform").is_none());
}

#[test]
fn test_vulkan_vertex_uses_index_spellings() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::vulkan_1_0(), Stage::Vertex);
    assert!(table.find("gl_VertexIndex").is_some());
    assert!(table.find("gl_VertexID").is_none());

    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Vertex);
    assert!(table.find("gl_VertexID").is_some());
    assert!(table.find("gl_VertexIndex").is_none());
}
