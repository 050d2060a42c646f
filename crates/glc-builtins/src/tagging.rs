//! Programmatic tagging of declared built-ins.
//!
//! The generated text gets types right but cannot express everything:
//! storage classes reserved for built-ins, built-in identities,
//! operator bindings, and extension requirements are applied here, by
//! mutating symbols the text already declared.
//!
//! A symbol must be tagged by exactly one stage. The per-stage tagging
//! functions below are applied in a fixed order — vertex runs the
//! vertex-only tags, then the shared pipeline tags; the tessellation
//! and geometry stages run only the shared pipeline tags — which makes
//! the ownership explicit. Tagging a name a configuration never
//! declared is a silent no-op.

use glc_ast::Operator;
use glc_types::{BasicType, BuiltIn, Precision, Stage, StorageQualifier, Type, TypeArena};

use crate::{Config, ResourceLimits, Symbol, SymbolTable};

pub const GL_ARB_SHADER_DRAW_PARAMETERS: &str = "GL_ARB_shader_draw_parameters";
pub const GL_ARB_SHADER_TEXTURE_LOD: &str = "GL_ARB_shader_texture_lod";
pub const GL_ARB_SHADER_IMAGE_LOAD_STORE: &str = "GL_ARB_shader_image_load_store";
pub const GL_ARB_SHADER_ATOMIC_COUNTERS: &str = "GL_ARB_shader_atomic_counters";
pub const GL_ARB_DERIVATIVE_CONTROL: &str = "GL_ARB_derivative_control";
pub const GL_ARB_SPARSE_TEXTURE2: &str = "GL_ARB_sparse_texture2";
pub const GL_ARB_SPARSE_TEXTURE_CLAMP: &str = "GL_ARB_sparse_texture_clamp";
pub const GL_ARB_VIEWPORT_ARRAY: &str = "GL_ARB_viewport_array";
pub const GL_ARB_COMPUTE_SHADER: &str = "GL_ARB_compute_shader";
pub const GL_ARB_ENHANCED_LAYOUTS: &str = "GL_ARB_enhanced_layouts";
pub const GL_ARB_SHADING_LANGUAGE_420PACK: &str = "GL_ARB_shading_language_420pack";
pub const GL_EXT_SHADER_TEXTURE_LOD: &str = "GL_EXT_shader_texture_lod";
pub const GL_EXT_FRAG_DEPTH: &str = "GL_EXT_frag_depth";
pub const GL_EXT_DEVICE_GROUP: &str = "GL_EXT_device_group";
pub const GL_EXT_MULTIVIEW: &str = "GL_EXT_multiview";
pub const GL_OES_STANDARD_DERIVATIVES: &str = "GL_OES_standard_derivatives";
pub const GL_OES_SAMPLE_VARIABLES: &str = "GL_OES_sample_variables";
pub const GL_OES_SHADER_IMAGE_ATOMIC: &str = "GL_OES_shader_image_atomic";
pub const GL_OES_PRIMITIVE_BOUNDING_BOX: &str = "GL_OES_primitive_bounding_box";
pub const GL_OES_GPU_SHADER5: &str = "GL_OES_gpu_shader5";
pub const GL_OES_SHADER_MULTISAMPLE_INTERPOLATION: &str =
    "GL_OES_shader_multisample_interpolation";

/// Overwrite a declared symbol's storage class and built-in identity;
/// for built-ins whose storage cannot be written as source text. The
/// type itself is never touched.
fn special_qualifier(
    table: &mut SymbolTable,
    name: &str,
    storage: StorageQualifier,
    builtin: BuiltIn,
) {
    match table.find_mut(name) {
        Some(symbol) => {
            if let Some(ty) = symbol.ty_mut() {
                ty.qualifier_mut().storage = storage;
                ty.qualifier_mut().builtin = builtin;
            }
        }
        None => table.note_missed_tag(name),
    }
}

/// Set only the built-in identity; for built-ins whose declaration text
/// already has the right qualifier.
fn builtin_variable(table: &mut SymbolTable, name: &str, builtin: BuiltIn) {
    match table.find_mut(name) {
        Some(symbol) => {
            if let Some(ty) = symbol.ty_mut() {
                ty.qualifier_mut().builtin = builtin;
            }
        }
        None => table.note_missed_tag(name),
    }
}

/// Set the built-in identity of a member of a named block (`gl_in`,
/// `gl_out`), found by field name inside the block's member list.
fn block_member_builtin(
    table: &mut SymbolTable,
    arena: &mut TypeArena,
    block_name: &str,
    member_name: &str,
    builtin: BuiltIn,
) {
    let members_id = table
        .find(block_name)
        .and_then(Symbol::ty)
        .and_then(Type::members_id);
    let Some(members_id) = members_id else {
        table.note_missed_tag(block_name);
        return;
    };
    for member in arena.members_mut(members_id) {
        if member.field_name() == Some(member_name) {
            member.qualifier_mut().builtin = builtin;
            return;
        }
    }
}

/// Tag the symbol table for one stage. Call once per compiled stage,
/// after [`populate`](crate::populate) has filled the table from the
/// generated text.
pub fn identify_builtins(
    cfg: &Config,
    stage: Stage,
    table: &mut SymbolTable,
    arena: &mut TypeArena,
) {
    // per-stage tags first, in the documented ownership order
    match stage {
        Stage::Vertex => {
            tag_vertex(cfg, table);
            tag_bounding_box(cfg, table);
            tag_pipeline_io(cfg, stage, table, arena);
        }
        Stage::TessControl => {
            tag_bounding_box(cfg, table);
            tag_pipeline_io(cfg, stage, table, arena);
        }
        Stage::TessEvaluation | Stage::Geometry => tag_pipeline_io(cfg, stage, table, arena),
        Stage::Fragment => tag_fragment(cfg, table),
        Stage::Compute => tag_compute(cfg, table),
    }

    relate_common_operators(cfg, table);
    relate_stage_operators(cfg, stage, table);
}

/// The resource-dependent additions: built-ins that need a limit value
/// in their type, plus re-tagging of the tessellation input block that
/// is only declared once `gl_MaxPatchVertices` exists.
pub fn identify_builtins_with_resources(
    cfg: &Config,
    stage: Stage,
    table: &mut SymbolTable,
    arena: &mut TypeArena,
    resources: &ResourceLimits,
) {
    if cfg.desktop() && (430..440).contains(&cfg.version) {
        table.set_variable_extensions("gl_MaxTransformFeedbackBuffers", &[GL_ARB_ENHANCED_LAYOUTS]);
        table.set_variable_extensions(
            "gl_MaxTransformFeedbackInterleavedComponents",
            &[GL_ARB_ENHANCED_LAYOUTS],
        );
    }
    if cfg.desktop() && (130..420).contains(&cfg.version) {
        table.set_variable_extensions("gl_MinProgramTexelOffset", &[GL_ARB_SHADING_LANGUAGE_420PACK]);
        table.set_variable_extensions("gl_MaxProgramTexelOffset", &[GL_ARB_SHADING_LANGUAGE_420PACK]);
    }
    if cfg.desktop() && (150..410).contains(&cfg.version) {
        table.set_variable_extensions("gl_MaxViewports", &[GL_ARB_VIEWPORT_ARRAY]);
    }

    match stage {
        Stage::Fragment => {
            // gl_FragData is sized by the draw-buffer limit, so it cannot
            // be declared in the context-independent text
            if cfg.version == 100 || cfg.include_legacy() || (cfg.desktop() && cfg.version < 420) {
                let precision = if cfg.es() {
                    Precision::Medium
                } else {
                    Precision::None
                };
                let mut ty = Type::with_precision(
                    BasicType::Float,
                    StorageQualifier::FragColor,
                    precision,
                    4,
                );
                ty.new_array_sizes(
                    glc_types::ArraySizes::with_outer(Some(resources.max_draw_buffers as u32)),
                    arena,
                );
                table.insert(Symbol::variable("gl_FragData", ty));
                special_qualifier(table, "gl_FragData", StorageQualifier::FragColor, BuiltIn::FragData);
            }
        }
        Stage::TessControl | Stage::TessEvaluation => {
            // the gl_in block arrived with the resource text; map its
            // members now
            block_member_builtin(table, arena, "gl_in", "gl_Position", BuiltIn::Position);
            block_member_builtin(table, arena, "gl_in", "gl_PointSize", BuiltIn::PointSize);
            block_member_builtin(table, arena, "gl_in", "gl_ClipDistance", BuiltIn::ClipDistance);
            block_member_builtin(table, arena, "gl_in", "gl_CullDistance", BuiltIn::CullDistance);
            block_member_builtin(table, arena, "gl_in", "gl_ClipVertex", BuiltIn::ClipVertex);
            block_member_builtin(table, arena, "gl_in", "gl_FrontColor", BuiltIn::FrontColor);
            block_member_builtin(table, arena, "gl_in", "gl_BackColor", BuiltIn::BackColor);
            block_member_builtin(
                table,
                arena,
                "gl_in",
                "gl_FrontSecondaryColor",
                BuiltIn::FrontSecondaryColor,
            );
            block_member_builtin(
                table,
                arena,
                "gl_in",
                "gl_BackSecondaryColor",
                BuiltIn::BackSecondaryColor,
            );
            block_member_builtin(table, arena, "gl_in", "gl_TexCoord", BuiltIn::TexCoord);
            block_member_builtin(table, arena, "gl_in", "gl_FogFragCoord", BuiltIn::FogFragCoord);
        }
        _ => {}
    }
}

fn tag_vertex(cfg: &Config, table: &mut SymbolTable) {
    if cfg.desktop() {
        table.set_variable_extensions("gl_BaseVertexARB", &[GL_ARB_SHADER_DRAW_PARAMETERS]);
        table.set_variable_extensions("gl_BaseInstanceARB", &[GL_ARB_SHADER_DRAW_PARAMETERS]);
        table.set_variable_extensions("gl_DrawIDARB", &[GL_ARB_SHADER_DRAW_PARAMETERS]);
    }

    // compatibility attributes, vertex only
    if !cfg.target.targets_binary() {
        builtin_variable(table, "gl_Color", BuiltIn::Color);
        builtin_variable(table, "gl_SecondaryColor", BuiltIn::SecondaryColor);
        builtin_variable(table, "gl_Normal", BuiltIn::Normal);
        builtin_variable(table, "gl_Vertex", BuiltIn::Vertex);
        builtin_variable(table, "gl_MultiTexCoord0", BuiltIn::MultiTexCoord0);
        builtin_variable(table, "gl_MultiTexCoord1", BuiltIn::MultiTexCoord1);
        builtin_variable(table, "gl_MultiTexCoord2", BuiltIn::MultiTexCoord2);
        builtin_variable(table, "gl_MultiTexCoord3", BuiltIn::MultiTexCoord3);
        builtin_variable(table, "gl_MultiTexCoord4", BuiltIn::MultiTexCoord4);
        builtin_variable(table, "gl_MultiTexCoord5", BuiltIn::MultiTexCoord5);
        builtin_variable(table, "gl_MultiTexCoord6", BuiltIn::MultiTexCoord6);
        builtin_variable(table, "gl_MultiTexCoord7", BuiltIn::MultiTexCoord7);
        builtin_variable(table, "gl_FogCoord", BuiltIn::FogFragCoord);
    }

    if cfg.es() && !cfg.target.targets_binary() {
        table.set_function_extensions("texture2DGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DProjGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("textureCubeGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
    }
    if cfg.es_at_least(310) {
        table.set_function_extensions("fma", &[GL_OES_GPU_SHADER5]);
    }
    if cfg.es() {
        table.set_function_extensions("imageAtomicAdd", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicMin", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicMax", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicAnd", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicOr", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicXor", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicExchange", &[GL_OES_SHADER_IMAGE_ATOMIC]);
        table.set_function_extensions("imageAtomicCompSwap", &[GL_OES_SHADER_IMAGE_ATOMIC]);
    }

    if cfg.target.is_vulkan() {
        builtin_variable(table, "gl_VertexIndex", BuiltIn::VertexIndex);
        builtin_variable(table, "gl_InstanceIndex", BuiltIn::InstanceIndex);
    } else {
        special_qualifier(table, "gl_VertexID", StorageQualifier::VertexId, BuiltIn::VertexId);
        special_qualifier(
            table,
            "gl_InstanceID",
            StorageQualifier::InstanceId,
            BuiltIn::InstanceId,
        );
    }
}

fn tag_bounding_box(cfg: &Config, table: &mut SymbolTable) {
    if cfg.es_at_least(310) {
        table.set_variable_extensions("gl_BoundingBoxOES", &[GL_OES_PRIMITIVE_BOUNDING_BOX]);
        builtin_variable(table, "gl_BoundingBoxOES", BuiltIn::BoundingBox);
    }
}

/// Tags shared by every stage that writes or reads the per-vertex
/// pipeline interface: vertex, tessellation, geometry.
fn tag_pipeline_io(cfg: &Config, _stage: Stage, table: &mut SymbolTable, arena: &mut TypeArena) {
    special_qualifier(table, "gl_Position", StorageQualifier::Position, BuiltIn::Position);
    special_qualifier(table, "gl_PointSize", StorageQualifier::PointSize, BuiltIn::PointSize);
    special_qualifier(table, "gl_ClipVertex", StorageQualifier::ClipVertex, BuiltIn::ClipVertex);

    for block in ["gl_in", "gl_out"] {
        block_member_builtin(table, arena, block, "gl_Position", BuiltIn::Position);
        block_member_builtin(table, arena, block, "gl_PointSize", BuiltIn::PointSize);
        block_member_builtin(table, arena, block, "gl_ClipDistance", BuiltIn::ClipDistance);
        block_member_builtin(table, arena, block, "gl_CullDistance", BuiltIn::CullDistance);
        block_member_builtin(table, arena, block, "gl_ClipVertex", BuiltIn::ClipVertex);
        block_member_builtin(table, arena, block, "gl_FrontColor", BuiltIn::FrontColor);
        block_member_builtin(table, arena, block, "gl_BackColor", BuiltIn::BackColor);
        block_member_builtin(
            table,
            arena,
            block,
            "gl_FrontSecondaryColor",
            BuiltIn::FrontSecondaryColor,
        );
        block_member_builtin(
            table,
            arena,
            block,
            "gl_BackSecondaryColor",
            BuiltIn::BackSecondaryColor,
        );
        block_member_builtin(table, arena, block, "gl_TexCoord", BuiltIn::TexCoord);
        block_member_builtin(table, arena, block, "gl_FogFragCoord", BuiltIn::FogFragCoord);
    }

    builtin_variable(table, "gl_ClipDistance", BuiltIn::ClipDistance);
    builtin_variable(table, "gl_CullDistance", BuiltIn::CullDistance);
    builtin_variable(table, "gl_PrimitiveIDIn", BuiltIn::PrimitiveId);
    builtin_variable(table, "gl_PrimitiveID", BuiltIn::PrimitiveId);
    builtin_variable(table, "gl_InvocationID", BuiltIn::InvocationId);
    builtin_variable(table, "gl_Layer", BuiltIn::Layer);
    builtin_variable(table, "gl_ViewportIndex", BuiltIn::ViewportIndex);
    builtin_variable(table, "gl_PatchVerticesIn", BuiltIn::PatchVertices);
    builtin_variable(table, "gl_TessLevelOuter", BuiltIn::TessLevelOuter);
    builtin_variable(table, "gl_TessLevelInner", BuiltIn::TessLevelInner);
    builtin_variable(table, "gl_TessCoord", BuiltIn::TessCoord);

    if cfg.version < 410 {
        table.set_variable_extensions("gl_ViewportIndex", &[GL_ARB_VIEWPORT_ARRAY]);
    }

    // compatibility variables
    builtin_variable(table, "gl_ClipVertex", BuiltIn::ClipVertex);
    builtin_variable(table, "gl_FrontColor", BuiltIn::FrontColor);
    builtin_variable(table, "gl_BackColor", BuiltIn::BackColor);
    builtin_variable(table, "gl_FrontSecondaryColor", BuiltIn::FrontSecondaryColor);
    builtin_variable(table, "gl_BackSecondaryColor", BuiltIn::BackSecondaryColor);
    builtin_variable(table, "gl_TexCoord", BuiltIn::TexCoord);
    builtin_variable(table, "gl_FogFragCoord", BuiltIn::FogFragCoord);

    if cfg.at_least(310, 140) {
        table.set_variable_extensions("gl_DeviceIndex", &[GL_EXT_DEVICE_GROUP]);
        builtin_variable(table, "gl_DeviceIndex", BuiltIn::DeviceIndex);
        table.set_variable_extensions("gl_ViewIndex", &[GL_EXT_MULTIVIEW]);
        builtin_variable(table, "gl_ViewIndex", BuiltIn::ViewIndex);
    }
}

fn tag_fragment(cfg: &Config, table: &mut SymbolTable) {
    special_qualifier(table, "gl_FrontFacing", StorageQualifier::Face, BuiltIn::Face);
    special_qualifier(table, "gl_FragCoord", StorageQualifier::FragCoord, BuiltIn::FragCoord);
    special_qualifier(table, "gl_PointCoord", StorageQualifier::PointCoord, BuiltIn::PointCoord);
    if !cfg.target.targets_binary() {
        special_qualifier(table, "gl_FragColor", StorageQualifier::FragColor, BuiltIn::FragColor);
    } else if let Some(symbol) = table.find_mut("gl_FragColor") {
        // under SPIR-V, gl_FragColor becomes an ordinary output at
        // location zero
        if let Some(ty) = symbol.ty_mut() {
            ty.qualifier_mut().storage = StorageQualifier::VaryingOut;
            ty.qualifier_mut().layout.location = Some(0);
        }
    }
    special_qualifier(table, "gl_FragDepth", StorageQualifier::FragDepth, BuiltIn::FragDepth);
    special_qualifier(table, "gl_FragDepthEXT", StorageQualifier::FragDepth, BuiltIn::FragDepth);
    special_qualifier(
        table,
        "gl_HelperInvocation",
        StorageQualifier::VaryingIn,
        BuiltIn::HelperInvocation,
    );
    if cfg.es() {
        table.set_variable_extensions("gl_FragDepthEXT", &[GL_EXT_FRAG_DEPTH]);
    }

    builtin_variable(table, "gl_ClipDistance", BuiltIn::ClipDistance);
    builtin_variable(table, "gl_CullDistance", BuiltIn::CullDistance);
    builtin_variable(table, "gl_PrimitiveID", BuiltIn::PrimitiveId);
    builtin_variable(table, "gl_Layer", BuiltIn::Layer);
    builtin_variable(table, "gl_ViewportIndex", BuiltIn::ViewportIndex);

    if cfg.at_least(310, 400) {
        builtin_variable(table, "gl_SampleID", BuiltIn::SampleId);
        builtin_variable(table, "gl_SamplePosition", BuiltIn::SamplePosition);
        builtin_variable(table, "gl_SampleMaskIn", BuiltIn::SampleMask);
        builtin_variable(table, "gl_SampleMask", BuiltIn::SampleMask);
        if cfg.es() {
            table.set_variable_extensions("gl_SampleID", &[GL_OES_SAMPLE_VARIABLES]);
            table.set_variable_extensions("gl_SamplePosition", &[GL_OES_SAMPLE_VARIABLES]);
            table.set_variable_extensions("gl_SampleMaskIn", &[GL_OES_SAMPLE_VARIABLES]);
            table.set_variable_extensions("gl_SampleMask", &[GL_OES_SAMPLE_VARIABLES]);
            table.set_variable_extensions("gl_NumSamples", &[GL_OES_SAMPLE_VARIABLES]);
        }
    }

    // compatibility variables
    builtin_variable(table, "gl_FogFragCoord", BuiltIn::FogFragCoord);
    builtin_variable(table, "gl_TexCoord", BuiltIn::TexCoord);
    builtin_variable(table, "gl_Color", BuiltIn::Color);
    builtin_variable(table, "gl_SecondaryColor", BuiltIn::SecondaryColor);

    // built-in function extensions
    if cfg.es() {
        if !cfg.target.targets_binary() {
            table.set_function_extensions("texture2DLodEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
            table.set_function_extensions("texture2DProjLodEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
            table.set_function_extensions("textureCubeLodEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
            table.set_function_extensions("texture2DGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
            table.set_function_extensions("texture2DProjGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
            table.set_function_extensions("textureCubeGradEXT", &[GL_EXT_SHADER_TEXTURE_LOD]);
        }
        if cfg.version == 100 {
            table.set_function_extensions("dFdx", &[GL_OES_STANDARD_DERIVATIVES]);
            table.set_function_extensions("dFdy", &[GL_OES_STANDARD_DERIVATIVES]);
            table.set_function_extensions("fwidth", &[GL_OES_STANDARD_DERIVATIVES]);
        }
        if cfg.version >= 310 {
            table.set_function_extensions("fma", &[GL_OES_GPU_SHADER5]);
            table.set_function_extensions(
                "interpolateAtCentroid",
                &[GL_OES_SHADER_MULTISAMPLE_INTERPOLATION],
            );
            table.set_function_extensions(
                "interpolateAtSample",
                &[GL_OES_SHADER_MULTISAMPLE_INTERPOLATION],
            );
            table.set_function_extensions(
                "interpolateAtOffset",
                &[GL_OES_SHADER_MULTISAMPLE_INTERPOLATION],
            );
        }
    } else if cfg.version < 130 && !cfg.target.targets_binary() {
        table.set_function_extensions("texture1DLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture3DLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("textureCubeLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture1DProjLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DProjLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture3DProjLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow1DLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow1DProjLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DProjLod", &[GL_ARB_SHADER_TEXTURE_LOD]);
    }

    // ...GradARB spellings are usable only with the extension enabled
    if cfg.desktop() && !cfg.target.targets_binary() {
        table.set_function_extensions("texture1DGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture1DProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture3DGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture3DProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("textureCubeGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow1DGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow1DProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DRectGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("texture2DRectProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DRectGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
        table.set_function_extensions("shadow2DRectProjGradARB", &[GL_ARB_SHADER_TEXTURE_LOD]);
    }

    if cfg.desktop() && cfg.version < 420 {
        table.set_function_extensions("memoryBarrier", &[GL_ARB_SHADER_IMAGE_LOAD_STORE]);
        table.set_function_extensions("atomicCounterIncrement", &[GL_ARB_SHADER_ATOMIC_COUNTERS]);
        table.set_function_extensions("atomicCounterDecrement", &[GL_ARB_SHADER_ATOMIC_COUNTERS]);
        table.set_function_extensions("atomicCounter", &[GL_ARB_SHADER_ATOMIC_COUNTERS]);
    }

    if cfg.desktop() && cfg.version < 450 {
        table.set_function_extensions("dFdxFine", &[GL_ARB_DERIVATIVE_CONTROL]);
        table.set_function_extensions("dFdyFine", &[GL_ARB_DERIVATIVE_CONTROL]);
        table.set_function_extensions("fwidthFine", &[GL_ARB_DERIVATIVE_CONTROL]);
        table.set_function_extensions("dFdxCoarse", &[GL_ARB_DERIVATIVE_CONTROL]);
        table.set_function_extensions("dFdyCoarse", &[GL_ARB_DERIVATIVE_CONTROL]);
        table.set_function_extensions("fwidthCoarse", &[GL_ARB_DERIVATIVE_CONTROL]);
    }

    if cfg.desktop() {
        table.set_function_extensions("sparseTextureARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureLodARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureOffsetARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTexelFetchARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTexelFetchOffsetARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureLodOffsetARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureGradARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureGradOffsetARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureGatherARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureGatherOffsetARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTextureGatherOffsetsARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseImageLoadARB", &[GL_ARB_SPARSE_TEXTURE2]);
        table.set_function_extensions("sparseTexelsResidentARB", &[GL_ARB_SPARSE_TEXTURE2]);

        table.set_function_extensions("sparseTextureClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions("sparseTextureOffsetClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions("sparseTextureGradClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions(
            "sparseTextureGradOffsetClampARB",
            &[GL_ARB_SPARSE_TEXTURE_CLAMP],
        );
        table.set_function_extensions("textureClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions("textureOffsetClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions("textureGradClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
        table.set_function_extensions("textureGradOffsetClampARB", &[GL_ARB_SPARSE_TEXTURE_CLAMP]);
    }

    if cfg.at_least(310, 140) {
        table.set_variable_extensions("gl_DeviceIndex", &[GL_EXT_DEVICE_GROUP]);
        builtin_variable(table, "gl_DeviceIndex", BuiltIn::DeviceIndex);
        table.set_variable_extensions("gl_ViewIndex", &[GL_EXT_MULTIVIEW]);
        builtin_variable(table, "gl_ViewIndex", BuiltIn::ViewIndex);
    }
}

fn tag_compute(cfg: &Config, table: &mut SymbolTable) {
    builtin_variable(table, "gl_NumWorkGroups", BuiltIn::NumWorkGroups);
    builtin_variable(table, "gl_WorkGroupSize", BuiltIn::WorkGroupSize);
    builtin_variable(table, "gl_WorkGroupID", BuiltIn::WorkGroupId);
    builtin_variable(table, "gl_LocalInvocationID", BuiltIn::LocalInvocationId);
    builtin_variable(table, "gl_GlobalInvocationID", BuiltIn::GlobalInvocationId);
    builtin_variable(table, "gl_LocalInvocationIndex", BuiltIn::LocalInvocationIndex);

    if cfg.desktop() && cfg.version < 430 {
        table.set_variable_extensions("gl_NumWorkGroups", &[GL_ARB_COMPUTE_SHADER]);
        table.set_variable_extensions("gl_WorkGroupSize", &[GL_ARB_COMPUTE_SHADER]);
        table.set_variable_extensions("gl_WorkGroupID", &[GL_ARB_COMPUTE_SHADER]);
        table.set_variable_extensions("gl_LocalInvocationID", &[GL_ARB_COMPUTE_SHADER]);
        table.set_variable_extensions("gl_GlobalInvocationID", &[GL_ARB_COMPUTE_SHADER]);
        table.set_variable_extensions("gl_LocalInvocationIndex", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("barrier", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("memoryBarrierAtomicCounter", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("memoryBarrierBuffer", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("memoryBarrierImage", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("memoryBarrierShared", &[GL_ARB_COMPUTE_SHADER]);
        table.set_function_extensions("groupMemoryBarrier", &[GL_ARB_COMPUTE_SHADER]);
    }

    if cfg.at_least(310, 140) {
        table.set_variable_extensions("gl_DeviceIndex", &[GL_EXT_DEVICE_GROUP]);
        builtin_variable(table, "gl_DeviceIndex", BuiltIn::DeviceIndex);
    }
}

/// Bind built-in function names to operator identities, cross-stage.
fn relate_common_operators(cfg: &Config, table: &mut SymbolTable) {
    table.relate_to_operator("not", Operator::VectorLogicalNot);

    table.relate_to_operator("matrixCompMult", Operator::Mul);
    if cfg.version >= 120 {
        table.relate_to_operator("outerProduct", Operator::OuterProduct);
        table.relate_to_operator("transpose", Operator::Transpose);
        if cfg.version >= 150 {
            table.relate_to_operator("determinant", Operator::Determinant);
            table.relate_to_operator("inverse", Operator::MatrixInverse);
        }
    }

    table.relate_to_operator("mod", Operator::Mod);
    table.relate_to_operator("modf", Operator::Modf);

    table.relate_to_operator("equal", Operator::VectorEqual);
    table.relate_to_operator("notEqual", Operator::VectorNotEqual);
    table.relate_to_operator("lessThan", Operator::LessThan);
    table.relate_to_operator("greaterThan", Operator::GreaterThan);
    table.relate_to_operator("lessThanEqual", Operator::LessThanEqual);
    table.relate_to_operator("greaterThanEqual", Operator::GreaterThanEqual);

    table.relate_to_operator("radians", Operator::Radians);
    table.relate_to_operator("degrees", Operator::Degrees);
    table.relate_to_operator("sin", Operator::Sin);
    table.relate_to_operator("cos", Operator::Cos);
    table.relate_to_operator("tan", Operator::Tan);
    table.relate_to_operator("asin", Operator::Asin);
    table.relate_to_operator("acos", Operator::Acos);
    table.relate_to_operator("atan", Operator::Atan);
    table.relate_to_operator("sinh", Operator::Sinh);
    table.relate_to_operator("cosh", Operator::Cosh);
    table.relate_to_operator("tanh", Operator::Tanh);
    table.relate_to_operator("asinh", Operator::Asinh);
    table.relate_to_operator("acosh", Operator::Acosh);
    table.relate_to_operator("atanh", Operator::Atanh);

    table.relate_to_operator("pow", Operator::Pow);
    table.relate_to_operator("exp", Operator::Exp);
    table.relate_to_operator("log", Operator::Log);
    table.relate_to_operator("exp2", Operator::Exp2);
    table.relate_to_operator("log2", Operator::Log2);
    table.relate_to_operator("sqrt", Operator::Sqrt);
    table.relate_to_operator("inversesqrt", Operator::InverseSqrt);

    table.relate_to_operator("abs", Operator::Abs);
    table.relate_to_operator("sign", Operator::Sign);
    table.relate_to_operator("floor", Operator::Floor);
    table.relate_to_operator("trunc", Operator::Trunc);
    table.relate_to_operator("round", Operator::Round);
    table.relate_to_operator("roundEven", Operator::RoundEven);
    table.relate_to_operator("ceil", Operator::Ceil);
    table.relate_to_operator("fract", Operator::Fract);
    table.relate_to_operator("min", Operator::Min);
    table.relate_to_operator("max", Operator::Max);
    table.relate_to_operator("clamp", Operator::Clamp);
    table.relate_to_operator("mix", Operator::Mix);
    table.relate_to_operator("step", Operator::Step);
    table.relate_to_operator("smoothstep", Operator::SmoothStep);

    table.relate_to_operator("isnan", Operator::IsNan);
    table.relate_to_operator("isinf", Operator::IsInf);

    table.relate_to_operator("fma", Operator::Fma);
    table.relate_to_operator("frexp", Operator::Frexp);
    table.relate_to_operator("ldexp", Operator::Ldexp);

    table.relate_to_operator("floatBitsToInt", Operator::FloatBitsToInt);
    table.relate_to_operator("floatBitsToUint", Operator::FloatBitsToUint);
    table.relate_to_operator("intBitsToFloat", Operator::IntBitsToFloat);
    table.relate_to_operator("uintBitsToFloat", Operator::UintBitsToFloat);
    table.relate_to_operator("doubleBitsToInt64", Operator::DoubleBitsToInt64);
    table.relate_to_operator("doubleBitsToUint64", Operator::DoubleBitsToUint64);
    table.relate_to_operator("int64BitsToDouble", Operator::Int64BitsToDouble);
    table.relate_to_operator("uint64BitsToDouble", Operator::Uint64BitsToDouble);

    table.relate_to_operator("packSnorm2x16", Operator::PackSnorm2x16);
    table.relate_to_operator("unpackSnorm2x16", Operator::UnpackSnorm2x16);
    table.relate_to_operator("packUnorm2x16", Operator::PackUnorm2x16);
    table.relate_to_operator("unpackUnorm2x16", Operator::UnpackUnorm2x16);
    table.relate_to_operator("packSnorm4x8", Operator::PackSnorm4x8);
    table.relate_to_operator("unpackSnorm4x8", Operator::UnpackSnorm4x8);
    table.relate_to_operator("packUnorm4x8", Operator::PackUnorm4x8);
    table.relate_to_operator("unpackUnorm4x8", Operator::UnpackUnorm4x8);
    table.relate_to_operator("packHalf2x16", Operator::PackHalf2x16);
    table.relate_to_operator("unpackHalf2x16", Operator::UnpackHalf2x16);
    table.relate_to_operator("packDouble2x32", Operator::PackDouble2x32);
    table.relate_to_operator("unpackDouble2x32", Operator::UnpackDouble2x32);

    table.relate_to_operator("length", Operator::Length);
    table.relate_to_operator("distance", Operator::Distance);
    table.relate_to_operator("dot", Operator::Dot);
    table.relate_to_operator("cross", Operator::Cross);
    table.relate_to_operator("normalize", Operator::Normalize);
    table.relate_to_operator("faceforward", Operator::FaceForward);
    table.relate_to_operator("reflect", Operator::Reflect);
    table.relate_to_operator("refract", Operator::Refract);

    table.relate_to_operator("any", Operator::Any);
    table.relate_to_operator("all", Operator::All);

    table.relate_to_operator("barrier", Operator::Barrier);
    table.relate_to_operator("memoryBarrier", Operator::MemoryBarrier);
    table.relate_to_operator("memoryBarrierAtomicCounter", Operator::MemoryBarrierAtomicCounter);
    table.relate_to_operator("memoryBarrierBuffer", Operator::MemoryBarrierBuffer);
    table.relate_to_operator("memoryBarrierImage", Operator::MemoryBarrierImage);

    table.relate_to_operator("atomicAdd", Operator::AtomicAdd);
    table.relate_to_operator("atomicMin", Operator::AtomicMin);
    table.relate_to_operator("atomicMax", Operator::AtomicMax);
    table.relate_to_operator("atomicAnd", Operator::AtomicAnd);
    table.relate_to_operator("atomicOr", Operator::AtomicOr);
    table.relate_to_operator("atomicXor", Operator::AtomicXor);
    table.relate_to_operator("atomicExchange", Operator::AtomicExchange);
    table.relate_to_operator("atomicCompSwap", Operator::AtomicCompSwap);

    table.relate_to_operator("atomicCounterIncrement", Operator::AtomicCounterIncrement);
    table.relate_to_operator("atomicCounterDecrement", Operator::AtomicCounterDecrement);
    table.relate_to_operator("atomicCounter", Operator::AtomicCounter);

    table.relate_to_operator("uaddCarry", Operator::AddCarry);
    table.relate_to_operator("usubBorrow", Operator::SubBorrow);
    table.relate_to_operator("umulExtended", Operator::UMulExtended);
    table.relate_to_operator("imulExtended", Operator::IMulExtended);
    table.relate_to_operator("bitfieldExtract", Operator::BitfieldExtract);
    table.relate_to_operator("bitfieldInsert", Operator::BitfieldInsert);
    table.relate_to_operator("bitfieldReverse", Operator::BitFieldReverse);
    table.relate_to_operator("bitCount", Operator::BitCount);
    table.relate_to_operator("findLSB", Operator::FindLsb);
    table.relate_to_operator("findMSB", Operator::FindMsb);

    table.relate_to_operator("imageSize", Operator::ImageQuerySize);
    table.relate_to_operator("imageSamples", Operator::ImageQuerySamples);
    table.relate_to_operator("imageLoad", Operator::ImageLoad);
    table.relate_to_operator("imageStore", Operator::ImageStore);
    table.relate_to_operator("imageAtomicAdd", Operator::ImageAtomicAdd);
    table.relate_to_operator("imageAtomicMin", Operator::ImageAtomicMin);
    table.relate_to_operator("imageAtomicMax", Operator::ImageAtomicMax);
    table.relate_to_operator("imageAtomicAnd", Operator::ImageAtomicAnd);
    table.relate_to_operator("imageAtomicOr", Operator::ImageAtomicOr);
    table.relate_to_operator("imageAtomicXor", Operator::ImageAtomicXor);
    table.relate_to_operator("imageAtomicExchange", Operator::ImageAtomicExchange);
    table.relate_to_operator("imageAtomicCompSwap", Operator::ImageAtomicCompSwap);
    table.relate_to_operator("subpassLoad", Operator::SubpassLoad);
    table.relate_to_operator("subpassLoadMS", Operator::SubpassLoadMs);

    table.relate_to_operator("textureSize", Operator::TextureQuerySize);
    table.relate_to_operator("textureQueryLod", Operator::TextureQueryLod);
    table.relate_to_operator("textureQueryLevels", Operator::TextureQueryLevels);
    table.relate_to_operator("textureSamples", Operator::TextureQuerySamples);
    table.relate_to_operator("texture", Operator::Texture);
    table.relate_to_operator("textureProj", Operator::TextureProj);
    table.relate_to_operator("textureLod", Operator::TextureLod);
    table.relate_to_operator("textureOffset", Operator::TextureOffset);
    table.relate_to_operator("texelFetch", Operator::TextureFetch);
    table.relate_to_operator("texelFetchOffset", Operator::TextureFetchOffset);
    table.relate_to_operator("textureProjOffset", Operator::TextureProjOffset);
    table.relate_to_operator("textureLodOffset", Operator::TextureLodOffset);
    table.relate_to_operator("textureProjLod", Operator::TextureProjLod);
    table.relate_to_operator("textureProjLodOffset", Operator::TextureProjLodOffset);
    table.relate_to_operator("textureGrad", Operator::TextureGrad);
    table.relate_to_operator("textureGradOffset", Operator::TextureGradOffset);
    table.relate_to_operator("textureProjGrad", Operator::TextureProjGrad);
    table.relate_to_operator("textureProjGradOffset", Operator::TextureProjGradOffset);
    table.relate_to_operator("textureGather", Operator::TextureGather);
    table.relate_to_operator("textureGatherOffset", Operator::TextureGatherOffset);
    table.relate_to_operator("textureGatherOffsets", Operator::TextureGatherOffsets);

    table.relate_to_operator("noise1", Operator::Noise);
    table.relate_to_operator("noise2", Operator::Noise);
    table.relate_to_operator("noise3", Operator::Noise);
    table.relate_to_operator("noise4", Operator::Noise);

    if !cfg.target.targets_binary() && (cfg.include_legacy() || (cfg.es() && cfg.version == 100)) {
        table.relate_to_operator("ftransform", Operator::Ftransform);

        table.relate_to_operator("texture1D", Operator::Texture);
        table.relate_to_operator("texture1DGradARB", Operator::TextureGrad);
        table.relate_to_operator("texture1DProj", Operator::TextureProj);
        table.relate_to_operator("texture1DProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("texture1DLod", Operator::TextureLod);
        table.relate_to_operator("texture1DProjLod", Operator::TextureProjLod);

        table.relate_to_operator("texture2DRect", Operator::Texture);
        table.relate_to_operator("texture2DRectProj", Operator::TextureProj);
        table.relate_to_operator("texture2DRectGradARB", Operator::TextureGrad);
        table.relate_to_operator("texture2DRectProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("shadow2DRect", Operator::Texture);
        table.relate_to_operator("shadow2DRectProj", Operator::TextureProj);
        table.relate_to_operator("shadow2DRectGradARB", Operator::TextureGrad);
        table.relate_to_operator("shadow2DRectProjGradARB", Operator::TextureProjGrad);

        table.relate_to_operator("texture2D", Operator::Texture);
        table.relate_to_operator("texture2DProj", Operator::TextureProj);
        table.relate_to_operator("texture2DGradEXT", Operator::TextureGrad);
        table.relate_to_operator("texture2DGradARB", Operator::TextureGrad);
        table.relate_to_operator("texture2DProjGradEXT", Operator::TextureProjGrad);
        table.relate_to_operator("texture2DProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("texture2DLod", Operator::TextureLod);
        table.relate_to_operator("texture2DLodEXT", Operator::TextureLod);
        table.relate_to_operator("texture2DProjLod", Operator::TextureProjLod);
        table.relate_to_operator("texture2DProjLodEXT", Operator::TextureProjLod);

        table.relate_to_operator("texture3D", Operator::Texture);
        table.relate_to_operator("texture3DGradARB", Operator::TextureGrad);
        table.relate_to_operator("texture3DProj", Operator::TextureProj);
        table.relate_to_operator("texture3DProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("texture3DLod", Operator::TextureLod);
        table.relate_to_operator("texture3DProjLod", Operator::TextureProjLod);
        table.relate_to_operator("textureCube", Operator::Texture);
        table.relate_to_operator("textureCubeGradEXT", Operator::TextureGrad);
        table.relate_to_operator("textureCubeGradARB", Operator::TextureGrad);
        table.relate_to_operator("textureCubeLod", Operator::TextureLod);
        table.relate_to_operator("textureCubeLodEXT", Operator::TextureLod);
        table.relate_to_operator("shadow1D", Operator::Texture);
        table.relate_to_operator("shadow1DGradARB", Operator::TextureGrad);
        table.relate_to_operator("shadow2D", Operator::Texture);
        table.relate_to_operator("shadow2DGradARB", Operator::TextureGrad);
        table.relate_to_operator("shadow1DProj", Operator::TextureProj);
        table.relate_to_operator("shadow2DProj", Operator::TextureProj);
        table.relate_to_operator("shadow1DProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("shadow2DProjGradARB", Operator::TextureProjGrad);
        table.relate_to_operator("shadow1DLod", Operator::TextureLod);
        table.relate_to_operator("shadow2DLod", Operator::TextureLod);
        table.relate_to_operator("shadow1DProjLod", Operator::TextureProjLod);
        table.relate_to_operator("shadow2DProjLod", Operator::TextureProjLod);
    }

    if cfg.desktop() {
        table.relate_to_operator("sparseTextureARB", Operator::SparseTexture);
        table.relate_to_operator("sparseTextureLodARB", Operator::SparseTextureLod);
        table.relate_to_operator("sparseTextureOffsetARB", Operator::SparseTextureOffset);
        table.relate_to_operator("sparseTexelFetchARB", Operator::SparseTextureFetch);
        table.relate_to_operator("sparseTexelFetchOffsetARB", Operator::SparseTextureFetchOffset);
        table.relate_to_operator("sparseTextureLodOffsetARB", Operator::SparseTextureLodOffset);
        table.relate_to_operator("sparseTextureGradARB", Operator::SparseTextureGrad);
        table.relate_to_operator("sparseTextureGradOffsetARB", Operator::SparseTextureGradOffset);
        table.relate_to_operator("sparseTextureGatherARB", Operator::SparseTextureGather);
        table.relate_to_operator(
            "sparseTextureGatherOffsetARB",
            Operator::SparseTextureGatherOffset,
        );
        table.relate_to_operator(
            "sparseTextureGatherOffsetsARB",
            Operator::SparseTextureGatherOffsets,
        );
        table.relate_to_operator("sparseImageLoadARB", Operator::SparseImageLoad);
        table.relate_to_operator("sparseTexelsResidentARB", Operator::SparseTexelsResident);

        table.relate_to_operator("sparseTextureClampARB", Operator::SparseTextureClamp);
        table.relate_to_operator("sparseTextureOffsetClampARB", Operator::SparseTextureOffsetClamp);
        table.relate_to_operator("sparseTextureGradClampARB", Operator::SparseTextureGradClamp);
        table.relate_to_operator(
            "sparseTextureGradOffsetClampARB",
            Operator::SparseTextureGradOffsetClamp,
        );
        table.relate_to_operator("textureClampARB", Operator::TextureClamp);
        table.relate_to_operator("textureOffsetClampARB", Operator::TextureOffsetClamp);
        table.relate_to_operator("textureGradClampARB", Operator::TextureGradClamp);
        table.relate_to_operator("textureGradOffsetClampARB", Operator::TextureGradOffsetClamp);
    }
}

/// Operator bindings owned by one stage.
fn relate_stage_operators(cfg: &Config, stage: Stage, table: &mut SymbolTable) {
    match stage {
        Stage::Geometry => {
            table.relate_to_operator("EmitStreamVertex", Operator::EmitStreamVertex);
            table.relate_to_operator("EndStreamPrimitive", Operator::EndStreamPrimitive);
            table.relate_to_operator("EmitVertex", Operator::EmitVertex);
            table.relate_to_operator("EndPrimitive", Operator::EndPrimitive);
        }
        Stage::Fragment => {
            table.relate_to_operator("dFdx", Operator::DPdx);
            table.relate_to_operator("dFdy", Operator::DPdy);
            table.relate_to_operator("fwidth", Operator::Fwidth);
            if cfg.desktop_at_least(400) {
                table.relate_to_operator("dFdxFine", Operator::DPdxFine);
                table.relate_to_operator("dFdyFine", Operator::DPdyFine);
                table.relate_to_operator("fwidthFine", Operator::FwidthFine);
                table.relate_to_operator("dFdxCoarse", Operator::DPdxCoarse);
                table.relate_to_operator("dFdyCoarse", Operator::DPdyCoarse);
                table.relate_to_operator("fwidthCoarse", Operator::FwidthCoarse);
            }
            table.relate_to_operator("interpolateAtCentroid", Operator::InterpolateAtCentroid);
            table.relate_to_operator("interpolateAtSample", Operator::InterpolateAtSample);
            table.relate_to_operator("interpolateAtOffset", Operator::InterpolateAtOffset);
        }
        Stage::Compute => {
            table.relate_to_operator("memoryBarrierShared", Operator::MemoryBarrierShared);
            table.relate_to_operator("groupMemoryBarrier", Operator::GroupMemoryBarrier);
        }
        Stage::Vertex | Stage::TessControl | Stage::TessEvaluation => {}
    }
}
