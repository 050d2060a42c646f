//! Tests for the programmatic tagging pass: qualifier fix-ups, operator
//! bindings and extension requirements applied after the text parses.

mod support;

use glc_ast::Operator;
use glc_builtins::{identify_builtins, populate, BuiltIns, Config, SymbolTable};
use glc_types::{BasicType, BuiltIn, Profile, SpvTarget, Stage, StorageQualifier, TypeArena};
use support::build_stage;

#[test]
fn test_frag_depth_gets_special_qualifier_without_type_change() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    let depth = table.find("gl_FragDepth").expect("gl_FragDepth");
    let ty = depth.ty().expect("variable");

    // qualifier was overwritten...
    assert_eq!(ty.qualifier().storage, StorageQualifier::FragDepth);
    assert_eq!(ty.qualifier().builtin, BuiltIn::FragDepth);
    // ...the type was not
    assert_eq!(ty.basic(), BasicType::Float);
    assert_eq!(ty.vector_size(), 1);
    assert!(ty.is_scalar());
}

#[test]
fn test_position_special_qualifier_inside_block() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Vertex);
    let position = table.find("gl_Position").expect("gl_Position");
    let ty = position.ty().expect("variable");
    assert_eq!(ty.qualifier().storage, StorageQualifier::Position);
    assert_eq!(ty.qualifier().builtin, BuiltIn::Position);
}

#[test]
fn test_es100_position_special_qualifier() {
    let (table, _arena) = build_stage(100, Profile::Es, SpvTarget::NONE, Stage::Vertex);
    let position = table.find("gl_Position").expect("gl_Position");
    let ty = position.ty().expect("variable");
    assert_eq!(ty.qualifier().storage, StorageQualifier::Position);
    // the declared precision survives the overwrite
    assert_eq!(ty.qualifier().precision, glc_types::Precision::High);
}

#[test]
fn test_tess_input_block_members_are_tagged() {
    let (table, arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::TessEvaluation);
    let gl_in = table.find("gl_in").expect("gl_in");
    let members_id = gl_in.ty().unwrap().members_id().unwrap();
    let members = arena.members(members_id);

    let position = members
        .iter()
        .find(|m| m.field_name() == Some("gl_Position"))
        .expect("gl_Position member");
    assert_eq!(position.qualifier().builtin, BuiltIn::Position);

    let clip = members
        .iter()
        .find(|m| m.field_name() == Some("gl_ClipDistance"))
        .expect("gl_ClipDistance member");
    assert_eq!(clip.qualifier().builtin, BuiltIn::ClipDistance);
}

#[test]
fn test_operator_bindings() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    assert_eq!(
        table.find("texture").unwrap().operator(),
        Some(Operator::Texture)
    );
    assert_eq!(
        table.find("texelFetch").unwrap().operator(),
        Some(Operator::TextureFetch)
    );
    assert_eq!(table.find("mix").unwrap().operator(), Some(Operator::Mix));
    assert_eq!(
        table.find("dFdx").unwrap().operator(),
        Some(Operator::DPdx)
    );
    assert_eq!(
        table.find("sparseTextureARB").unwrap().operator(),
        Some(Operator::SparseTexture)
    );
    // gather family binds to its own identities
    assert_eq!(
        table.find("textureGatherOffsets").unwrap().operator(),
        Some(Operator::TextureGatherOffsets)
    );
}

#[test]
fn test_stage_owned_operator_bindings() {
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Geometry);
    assert_eq!(
        table.find("EmitVertex").unwrap().operator(),
        Some(Operator::EmitVertex)
    );

    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Compute);
    assert_eq!(
        table.find("groupMemoryBarrier").unwrap().operator(),
        Some(Operator::GroupMemoryBarrier)
    );
}

#[test]
fn test_es100_derivatives_require_extension() {
    let (table, _arena) = build_stage(100, Profile::Es, SpvTarget::NONE, Stage::Fragment);
    let dfdx = table.find("dFdx").expect("dFdx");
    assert_eq!(dfdx.extensions(), ["GL_OES_standard_derivatives"]);
}

#[test]
fn test_legacy_lod_extension_tagging_below_130() {
    // the explicit-lod spellings live in the cross-stage text; below
    // 1.30 their use needs the texture-lod extension
    let cfg = Config::new(120, Profile::None, SpvTarget::NONE);
    let builtins = BuiltIns::new(&cfg);
    let mut table = SymbolTable::new();
    let mut arena = TypeArena::new();
    populate(&mut table, &mut arena, builtins.common_builtins()).unwrap();
    identify_builtins(&cfg, Stage::Fragment, &mut table, &mut arena);

    let lod = table.find("texture2DLod").expect("texture2DLod");
    assert_eq!(lod.extensions(), ["GL_ARB_shader_texture_lod"]);
}

#[test]
fn test_fine_derivatives_extension_below_450() {
    let (table, _arena) = build_stage(440, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    assert_eq!(
        table.find("dFdxFine").unwrap().extensions(),
        ["GL_ARB_derivative_control"]
    );

    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Fragment);
    assert!(table.find("dFdxFine").unwrap().extensions().is_empty());
}

#[test]
fn test_frag_data_inserted_with_resource_size() {
    let (table, arena) = build_stage(140, Profile::None, SpvTarget::NONE, Stage::Fragment);
    let frag_data = table.find("gl_FragData").expect("gl_FragData");
    let ty = frag_data.ty().expect("variable");
    assert_eq!(ty.qualifier().storage, StorageQualifier::FragColor);
    assert_eq!(ty.qualifier().builtin, BuiltIn::FragData);
    let sizes = arena.array_sizes(ty.array_sizes_id().unwrap());
    assert_eq!(sizes.outer_size(), Some(32));

    // gone in modern core
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::vulkan_1_0(), Stage::Fragment);
    assert!(table.find("gl_FragData").is_none());
}

#[test]
fn test_tagging_is_stage_scoped() {
    // fragment-only tags never land in a vertex table
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Vertex);
    assert!(table.find("gl_FragDepth").is_none());
    // and vertex tags never land in a compute table
    let (table, _arena) = build_stage(450, Profile::Core, SpvTarget::NONE, Stage::Compute);
    assert!(table.find("gl_VertexID").is_none());
}

#[test]
fn test_over_tagging_absent_names_is_harmless() {
    // tagging runs unconditionally across stages; a stage that declares
    // none of the names must come through untouched
    let cfg = Config::new(450, Profile::Core, SpvTarget::NONE);
    let mut table = SymbolTable::new();
    let mut arena = TypeArena::new();
    identify_builtins(&cfg, Stage::Fragment, &mut table, &mut arena);
    assert!(table.is_empty());
}

#[cfg(debug_assertions)]
#[test]
fn test_core_names_are_never_missed_in_their_owning_stage() {
    let cfg = Config::new(450, Profile::Core, SpvTarget::NONE);
    let resources = glc_builtins::ResourceLimits::default();

    for (stage, owned) in [
        (Stage::Vertex, "gl_Position"),
        (Stage::Fragment, "gl_FragDepth"),
        (Stage::Compute, "gl_WorkGroupSize"),
    ] {
        let mut builtins = BuiltIns::new(&cfg);
        builtins.add_stage_resources(&resources, &cfg, stage);
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(&mut table, &mut arena, builtins.common_builtins()).unwrap();
        populate(&mut table, &mut arena, builtins.stage_builtins(stage)).unwrap();
        identify_builtins(&cfg, stage, &mut table, &mut arena);

        let missed = table.take_missed_tags();
        assert!(
            !missed.iter().any(|name| name == owned),
            "{} missed in {:?}",
            owned,
            stage
        );
    }
}
