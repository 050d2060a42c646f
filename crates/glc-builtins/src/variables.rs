//! Per-stage built-in variable interfaces and the resource-dependent
//! constants.
//!
//! Several declarations here are not legal as-written for user code
//! (`vec4 gl_Position;` with no storage qualifier); the tagging pass
//! fixes their qualifiers after parsing, which is the only way to give
//! them storage classes the language cannot spell.

use std::fmt::Write;

use glc_types::{Profile, Stage};

use crate::{BuiltIns, Config, ResourceLimits};

impl BuiltIns {
    pub(crate) fn add_vertex_interface(&mut self, cfg: &Config) {
        if cfg.desktop() {
            if cfg.version < 130 {
                self.stage(Stage::Vertex).push_str(concat!(
                    "attribute vec4  gl_Color;",
                    "attribute vec4  gl_SecondaryColor;",
                    "attribute vec3  gl_Normal;",
                    "attribute vec4  gl_Vertex;",
                    "attribute vec4  gl_MultiTexCoord0;",
                    "attribute vec4  gl_MultiTexCoord1;",
                    "attribute vec4  gl_MultiTexCoord2;",
                    "attribute vec4  gl_MultiTexCoord3;",
                    "attribute vec4  gl_MultiTexCoord4;",
                    "attribute vec4  gl_MultiTexCoord5;",
                    "attribute vec4  gl_MultiTexCoord6;",
                    "attribute vec4  gl_MultiTexCoord7;",
                    "attribute float gl_FogCoord;",
                    "\n",
                ));
            } else if cfg.include_legacy() {
                self.stage(Stage::Vertex).push_str(concat!(
                    "in vec4  gl_Color;",
                    "in vec4  gl_SecondaryColor;",
                    "in vec3  gl_Normal;",
                    "in vec4  gl_Vertex;",
                    "in vec4  gl_MultiTexCoord0;",
                    "in vec4  gl_MultiTexCoord1;",
                    "in vec4  gl_MultiTexCoord2;",
                    "in vec4  gl_MultiTexCoord3;",
                    "in vec4  gl_MultiTexCoord4;",
                    "in vec4  gl_MultiTexCoord5;",
                    "in vec4  gl_MultiTexCoord6;",
                    "in vec4  gl_MultiTexCoord7;",
                    "in float gl_FogCoord;",
                    "\n",
                ));
            }

            if cfg.version < 150 {
                if cfg.version < 130 {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "        vec4  gl_ClipVertex;", // qualifier fixed later
                        "varying vec4  gl_FrontColor;",
                        "varying vec4  gl_BackColor;",
                        "varying vec4  gl_FrontSecondaryColor;",
                        "varying vec4  gl_BackSecondaryColor;",
                        "varying vec4  gl_TexCoord[];",
                        "varying float gl_FogFragCoord;",
                        "\n",
                    ));
                } else if cfg.include_legacy() {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "    vec4  gl_ClipVertex;", // qualifier fixed later
                        "out vec4  gl_FrontColor;",
                        "out vec4  gl_BackColor;",
                        "out vec4  gl_FrontSecondaryColor;",
                        "out vec4  gl_BackSecondaryColor;",
                        "out vec4  gl_TexCoord[];",
                        "out float gl_FogFragCoord;",
                        "\n",
                    ));
                }
                self.stage(Stage::Vertex).push_str(concat!(
                    "vec4 gl_Position;",   // qualifier fixed later
                    "float gl_PointSize;", // qualifier fixed later
                ));
                if cfg.version == 130 || cfg.version == 140 {
                    self.stage(Stage::Vertex)
                        .push_str("out float gl_ClipDistance[];");
                }
            } else {
                self.stage(Stage::Vertex).push_str(concat!(
                    "out gl_PerVertex {",
                    "vec4 gl_Position;",   // qualifier fixed later
                    "float gl_PointSize;", // qualifier fixed later
                    "float gl_ClipDistance[];",
                ));
                if cfg.include_legacy() {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "vec4 gl_ClipVertex;", // qualifier fixed later
                        "vec4 gl_FrontColor;",
                        "vec4 gl_BackColor;",
                        "vec4 gl_FrontSecondaryColor;",
                        "vec4 gl_BackSecondaryColor;",
                        "vec4 gl_TexCoord[];",
                        "float gl_FogFragCoord;",
                    ));
                }
                if cfg.version >= 450 {
                    self.stage(Stage::Vertex).push_str("float gl_CullDistance[];");
                }
                self.stage(Stage::Vertex).push_str("};\n");
            }

            if cfg.version >= 130 && !cfg.target.is_vulkan() {
                self.stage(Stage::Vertex).push_str("int gl_VertexID;"); // qualifier fixed later
            }
            if cfg.version >= 140 && !cfg.target.is_vulkan() {
                self.stage(Stage::Vertex).push_str("int gl_InstanceID;"); // qualifier fixed later
            }
            if cfg.target.is_vulkan() && cfg.version >= 140 {
                self.stage(Stage::Vertex).push_str(concat!(
                    "in int gl_VertexIndex;",
                    "in int gl_InstanceIndex;",
                ));
            }
            if cfg.version >= 440 {
                self.stage(Stage::Vertex).push_str(concat!(
                    "in int gl_BaseVertexARB;",
                    "in int gl_BaseInstanceARB;",
                    "in int gl_DrawIDARB;",
                ));
            }
        } else {
            // ES profile
            if cfg.version == 100 {
                self.stage(Stage::Vertex).push_str(concat!(
                    "highp   vec4  gl_Position;",  // qualifier fixed later
                    "mediump float gl_PointSize;", // qualifier fixed later
                ));
            } else {
                if !cfg.target.is_vulkan() {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "in highp int gl_VertexID;",   // qualifier fixed later
                        "in highp int gl_InstanceID;", // qualifier fixed later
                    ));
                } else {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "in highp int gl_VertexIndex;",
                        "in highp int gl_InstanceIndex;",
                    ));
                }
                if cfg.version < 310 {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "highp vec4  gl_Position;",  // qualifier fixed later
                        "highp float gl_PointSize;", // qualifier fixed later
                    ));
                } else {
                    self.stage(Stage::Vertex).push_str(concat!(
                        "out gl_PerVertex {",
                        "highp vec4  gl_Position;",  // qualifier fixed later
                        "highp float gl_PointSize;", // qualifier fixed later
                        "};",
                    ));
                }
            }
        }

        if cfg.at_least(310, 140) {
            self.stage(Stage::Vertex).push_str(concat!(
                "in highp int gl_DeviceIndex;",
                "in highp int gl_ViewIndex;",
                "\n",
            ));
        }
        self.stage(Stage::Vertex).push_str("\n");
    }

    pub(crate) fn add_tess_control_interface(&mut self, cfg: &Config) {
        if cfg.desktop_at_least(150) {
            self.stage(Stage::TessControl).push_str(concat!(
                "in int gl_PatchVerticesIn;",
                "in int gl_PrimitiveID;",
                "in int gl_InvocationID;",
                "out gl_PerVertex {",
                "vec4 gl_Position;",
                "float gl_PointSize;",
                "float gl_ClipDistance[];",
            ));
            if cfg.profile == Profile::Compatibility && cfg.version >= 400 {
                self.stage(Stage::TessControl).push_str(concat!(
                    "vec4 gl_ClipVertex;",
                    "vec4 gl_FrontColor;",
                    "vec4 gl_BackColor;",
                    "vec4 gl_FrontSecondaryColor;",
                    "vec4 gl_BackSecondaryColor;",
                    "vec4 gl_TexCoord[];",
                    "float gl_FogFragCoord;",
                ));
            }
            if cfg.version >= 450 {
                self.stage(Stage::TessControl)
                    .push_str("float gl_CullDistance[];");
            }
            self.stage(Stage::TessControl).push_str(concat!(
                "} gl_out[];",
                "patch out float gl_TessLevelOuter[4];",
                "patch out float gl_TessLevelInner[2];",
                "\n",
            ));
        } else if cfg.es_at_least(310) {
            self.stage(Stage::TessControl).push_str(concat!(
                "in highp int gl_PatchVerticesIn;",
                "in highp int gl_PrimitiveID;",
                "in highp int gl_InvocationID;",
                "out gl_PerVertex {",
                "highp vec4 gl_Position;",
                "highp float gl_PointSize;",
                "} gl_out[];",
                "patch out highp float gl_TessLevelOuter[4];",
                "patch out highp float gl_TessLevelInner[2];",
                "patch out highp vec4 gl_BoundingBoxOES[2];",
                "\n",
            ));
        }

        if cfg.at_least(310, 140) {
            self.stage(Stage::TessControl).push_str(concat!(
                "in highp int gl_DeviceIndex;",
                "in highp int gl_ViewIndex;",
                "\n",
            ));
        }
    }

    pub(crate) fn add_tess_eval_interface(&mut self, cfg: &Config) {
        if cfg.desktop_at_least(150) {
            self.stage(Stage::TessEvaluation).push_str(concat!(
                "in int gl_PatchVerticesIn;",
                "in int gl_PrimitiveID;",
                "in vec3 gl_TessCoord;",
                "patch in float gl_TessLevelOuter[4];",
                "patch in float gl_TessLevelInner[2];",
                "out gl_PerVertex {",
                "vec4 gl_Position;",
                "float gl_PointSize;",
                "float gl_ClipDistance[];",
            ));
            if cfg.profile == Profile::Compatibility && cfg.version >= 400 {
                self.stage(Stage::TessEvaluation).push_str(concat!(
                    "vec4 gl_ClipVertex;",
                    "vec4 gl_FrontColor;",
                    "vec4 gl_BackColor;",
                    "vec4 gl_FrontSecondaryColor;",
                    "vec4 gl_BackSecondaryColor;",
                    "vec4 gl_TexCoord[];",
                    "float gl_FogFragCoord;",
                ));
            }
            if cfg.version >= 450 {
                self.stage(Stage::TessEvaluation)
                    .push_str("float gl_CullDistance[];");
            }
            self.stage(Stage::TessEvaluation).push_str("};\n");
        } else if cfg.es_at_least(310) {
            self.stage(Stage::TessEvaluation).push_str(concat!(
                "in highp int gl_PatchVerticesIn;",
                "in highp int gl_PrimitiveID;",
                "in highp vec3 gl_TessCoord;",
                "patch in highp float gl_TessLevelOuter[4];",
                "patch in highp float gl_TessLevelInner[2];",
                "out gl_PerVertex {",
                "highp vec4 gl_Position;",
                "highp float gl_PointSize;",
                "};",
                "\n",
            ));
        }

        if cfg.at_least(310, 140) {
            self.stage(Stage::TessEvaluation).push_str(concat!(
                "in highp int gl_DeviceIndex;",
                "in highp int gl_ViewIndex;",
                "\n",
            ));
        }
    }

    pub(crate) fn add_geometry_interface(&mut self, cfg: &Config) {
        if cfg.profile == Profile::Core || cfg.profile == Profile::Compatibility {
            self.stage(Stage::Geometry).push_str(concat!(
                "in gl_PerVertex {",
                "vec4 gl_Position;",
                "float gl_PointSize;",
                "float gl_ClipDistance[];",
            ));
            if cfg.profile == Profile::Compatibility {
                self.stage(Stage::Geometry).push_str(concat!(
                    "vec4 gl_ClipVertex;",
                    "vec4 gl_FrontColor;",
                    "vec4 gl_BackColor;",
                    "vec4 gl_FrontSecondaryColor;",
                    "vec4 gl_BackSecondaryColor;",
                    "vec4 gl_TexCoord[];",
                    "float gl_FogFragCoord;",
                ));
            }
            if cfg.version >= 450 {
                self.stage(Stage::Geometry).push_str("float gl_CullDistance[];");
            }
            self.stage(Stage::Geometry).push_str(concat!(
                "} gl_in[];",
                "in int gl_PrimitiveIDIn;",
                "out gl_PerVertex {",
                "vec4 gl_Position;",
                "float gl_PointSize;",
                "float gl_ClipDistance[];",
            ));
            if cfg.profile == Profile::Compatibility && cfg.version >= 400 {
                self.stage(Stage::Geometry).push_str(concat!(
                    "vec4 gl_ClipVertex;",
                    "vec4 gl_FrontColor;",
                    "vec4 gl_BackColor;",
                    "vec4 gl_FrontSecondaryColor;",
                    "vec4 gl_BackSecondaryColor;",
                    "vec4 gl_TexCoord[];",
                    "float gl_FogFragCoord;",
                ));
            }
            if cfg.version >= 450 {
                self.stage(Stage::Geometry).push_str("float gl_CullDistance[];");
            }
            self.stage(Stage::Geometry).push_str(concat!(
                "};",
                "out int gl_PrimitiveID;",
                "out int gl_Layer;",
            ));
            if cfg.profile == Profile::Compatibility && cfg.version < 400 {
                self.stage(Stage::Geometry).push_str("out vec4 gl_ClipVertex;");
            }
            if cfg.version >= 400 {
                self.stage(Stage::Geometry).push_str("in int gl_InvocationID;");
            }
            if cfg.version >= 150 {
                self.stage(Stage::Geometry).push_str("out int gl_ViewportIndex;");
            }
            self.stage(Stage::Geometry).push_str("\n");
        } else if cfg.es_at_least(310) {
            self.stage(Stage::Geometry).push_str(concat!(
                "in gl_PerVertex {",
                "highp vec4 gl_Position;",
                "highp float gl_PointSize;",
                "} gl_in[];",
                "in highp int gl_PrimitiveIDIn;",
                "in highp int gl_InvocationID;",
                "out gl_PerVertex {",
                "highp vec4 gl_Position;",
                "highp float gl_PointSize;",
                "};",
                "out highp int gl_PrimitiveID;",
                "out highp int gl_Layer;",
                "\n",
            ));
        }

        if cfg.at_least(310, 140) {
            self.stage(Stage::Geometry).push_str(concat!(
                "in highp int gl_DeviceIndex;",
                "in highp int gl_ViewIndex;",
                "\n",
            ));
        }
    }

    pub(crate) fn add_fragment_interface(&mut self, cfg: &Config) {
        if cfg.desktop() {
            self.stage(Stage::Fragment).push_str(concat!(
                "vec4  gl_FragCoord;",   // qualifier fixed later
                "bool  gl_FrontFacing;", // qualifier fixed later
                "float gl_FragDepth;",   // qualifier fixed later
            ));
            if cfg.version >= 120 {
                self.stage(Stage::Fragment).push_str("vec2 gl_PointCoord;"); // qualifier fixed later
            }
            if cfg.include_legacy() || cfg.version < 420 {
                self.stage(Stage::Fragment).push_str("vec4 gl_FragColor;"); // qualifier fixed later
            }

            if cfg.version < 130 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "varying vec4  gl_Color;",
                    "varying vec4  gl_SecondaryColor;",
                    "varying vec4  gl_TexCoord[];",
                    "varying float gl_FogFragCoord;",
                ));
            } else {
                self.stage(Stage::Fragment).push_str("in float gl_ClipDistance[];");
                if cfg.include_legacy() {
                    if cfg.version < 150 {
                        self.stage(Stage::Fragment).push_str(concat!(
                            "in float gl_FogFragCoord;",
                            "in vec4  gl_TexCoord[];",
                            "in vec4  gl_Color;",
                            "in vec4  gl_SecondaryColor;",
                        ));
                    } else {
                        self.stage(Stage::Fragment).push_str(concat!(
                            "in gl_PerFragment {",
                            "in float gl_FogFragCoord;",
                            "in vec4  gl_TexCoord[];",
                            "in vec4  gl_Color;",
                            "in vec4  gl_SecondaryColor;",
                            "};",
                        ));
                    }
                }
            }

            if cfg.version >= 150 {
                self.stage(Stage::Fragment).push_str("flat in int gl_PrimitiveID;");
            }
            if cfg.version >= 400 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "flat in  int  gl_SampleID;",
                    "     in  vec2 gl_SamplePosition;",
                    "flat in  int  gl_SampleMaskIn[];",
                    "     out int  gl_SampleMask[];",
                ));
                if !cfg.target.targets_binary() {
                    self.stage(Stage::Fragment).push_str("uniform int gl_NumSamples;");
                }
            }
            if cfg.version >= 430 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "flat in int gl_Layer;",
                    "flat in int gl_ViewportIndex;",
                ));
            }
            if cfg.version >= 450 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "in float gl_CullDistance[];",
                    "bool gl_HelperInvocation;", // qualifier fixed later
                ));
            }
        } else {
            // ES profile
            if cfg.version == 100 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "mediump vec4 gl_FragCoord;",  // qualifier fixed later
                    "        bool gl_FrontFacing;",// qualifier fixed later
                    "mediump vec4 gl_FragColor;",  // qualifier fixed later
                    "mediump vec2 gl_PointCoord;", // qualifier fixed later
                ));
            }
            if cfg.version >= 300 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "highp   vec4  gl_FragCoord;",  // qualifier fixed later
                    "        bool  gl_FrontFacing;",// qualifier fixed later
                    "mediump vec2  gl_PointCoord;", // qualifier fixed later
                    "highp   float gl_FragDepth;",  // qualifier fixed later
                ));
            }
            if cfg.version >= 310 {
                self.stage(Stage::Fragment).push_str(concat!(
                    "bool gl_HelperInvocation;", // qualifier fixed later
                    "flat in highp int gl_PrimitiveID;",
                    "flat in highp int gl_Layer;",
                    "flat  in lowp     int gl_SampleID;",
                    "      in mediump vec2 gl_SamplePosition;",
                    "flat  in highp    int gl_SampleMaskIn[];",
                    "     out highp    int gl_SampleMask[];",
                ));
                if !cfg.target.targets_binary() {
                    self.stage(Stage::Fragment)
                        .push_str("uniform lowp int gl_NumSamples;");
                }
            }
            self.stage(Stage::Fragment).push_str("highp float gl_FragDepthEXT;"); // qualifier fixed later
        }

        if cfg.at_least(310, 140) {
            self.stage(Stage::Fragment).push_str(concat!(
                "flat in highp int gl_DeviceIndex;",
                "flat in highp int gl_ViewIndex;",
                "\n",
            ));
        }
        self.stage(Stage::Fragment).push_str("\n");
    }

    pub(crate) fn add_compute_interface(&mut self, cfg: &Config) {
        if cfg.at_least(310, 420) {
            self.stage(Stage::Compute).push_str(concat!(
                "in    highp uvec3 gl_NumWorkGroups;",
                "const highp uvec3 gl_WorkGroupSize = uvec3(1,1,1);",
                "in highp uvec3 gl_WorkGroupID;",
                "in highp uvec3 gl_LocalInvocationID;",
                "in highp uvec3 gl_GlobalInvocationID;",
                "in highp uint gl_LocalInvocationIndex;",
                "\n",
            ));
        }
        if cfg.at_least(310, 140) {
            self.stage(Stage::Compute).push_str(concat!(
                "in highp int gl_DeviceIndex;",
                "\n",
            ));
        }
    }

    /// The context-dependent declarations: implementation-limit
    /// constants, and the tessellation input block that needs
    /// `gl_MaxPatchVertices` for its size.
    pub(crate) fn add_resource_constants(
        &mut self,
        r: &ResourceLimits,
        cfg: &Config,
        stage: Stage,
    ) {
        let mut s = String::new();

        if cfg.es() {
            let _ = write!(s, "const mediump int  gl_MaxVertexAttribs = {};", r.max_vertex_attribs);
            let _ = write!(s, "const mediump int  gl_MaxVertexUniformVectors = {};", r.max_vertex_uniform_vectors);
            let _ = write!(s, "const mediump int  gl_MaxVertexTextureImageUnits = {};", r.max_vertex_texture_image_units);
            let _ = write!(s, "const mediump int  gl_MaxCombinedTextureImageUnits = {};", r.max_combined_texture_image_units);
            let _ = write!(s, "const mediump int  gl_MaxTextureImageUnits = {};", r.max_texture_image_units);
            let _ = write!(s, "const mediump int  gl_MaxFragmentUniformVectors = {};", r.max_fragment_uniform_vectors);
            let _ = write!(s, "const mediump int  gl_MaxDrawBuffers = {};", r.max_draw_buffers);
            if cfg.version == 100 {
                let _ = write!(s, "const mediump int  gl_MaxVaryingVectors = {};", r.max_varying_vectors);
            } else {
                let _ = write!(s, "const mediump int  gl_MaxVertexOutputVectors = {};", r.max_vertex_output_vectors);
                let _ = write!(s, "const mediump int  gl_MaxFragmentInputVectors = {};", r.max_fragment_input_vectors);
                let _ = write!(s, "const mediump int  gl_MinProgramTexelOffset = {};", r.min_program_texel_offset);
                let _ = write!(s, "const mediump int  gl_MaxProgramTexelOffset = {};", r.max_program_texel_offset);
            }
            if cfg.version >= 310 {
                let _ = write!(s, "const int gl_MaxGeometryInputComponents = {};", r.max_geometry_input_components);
                let _ = write!(s, "const int gl_MaxGeometryOutputComponents = {};", r.max_geometry_output_components);
                let _ = write!(s, "const int gl_MaxGeometryImageUniforms = {};", r.max_geometry_image_uniforms);
                let _ = write!(s, "const int gl_MaxGeometryTextureImageUnits = {};", r.max_geometry_texture_image_units);
                let _ = write!(s, "const int gl_MaxGeometryOutputVertices = {};", r.max_geometry_output_vertices);
                let _ = write!(s, "const int gl_MaxGeometryTotalOutputComponents = {};", r.max_geometry_total_output_components);
                let _ = write!(s, "const int gl_MaxGeometryUniformComponents = {};", r.max_geometry_uniform_components);
                let _ = write!(s, "const int gl_MaxGeometryAtomicCounters = {};", r.max_geometry_atomic_counters);
                let _ = write!(s, "const int gl_MaxGeometryAtomicCounterBuffers = {};", r.max_geometry_atomic_counter_buffers);
                let _ = write!(s, "const int gl_MaxTessControlInputComponents = {};", r.max_tess_control_input_components);
                let _ = write!(s, "const int gl_MaxTessControlOutputComponents = {};", r.max_tess_control_output_components);
                let _ = write!(s, "const int gl_MaxTessControlTextureImageUnits = {};", r.max_tess_control_texture_image_units);
                let _ = write!(s, "const int gl_MaxTessControlUniformComponents = {};", r.max_tess_control_uniform_components);
                let _ = write!(s, "const int gl_MaxTessControlTotalOutputComponents = {};", r.max_tess_control_total_output_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationInputComponents = {};", r.max_tess_evaluation_input_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationOutputComponents = {};", r.max_tess_evaluation_output_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationTextureImageUnits = {};", r.max_tess_evaluation_texture_image_units);
                let _ = write!(s, "const int gl_MaxTessEvaluationUniformComponents = {};", r.max_tess_evaluation_uniform_components);
                let _ = write!(s, "const int gl_MaxTessPatchComponents = {};", r.max_tess_patch_components);
                let _ = write!(s, "const int gl_MaxPatchVertices = {};", r.max_patch_vertices);
                let _ = write!(s, "const int gl_MaxTessGenLevel = {};", r.max_tess_gen_level);

                if stage == Stage::TessControl || stage == Stage::TessEvaluation {
                    s.push_str(concat!(
                        "in gl_PerVertex {",
                        "highp vec4 gl_Position;",
                        "highp float gl_PointSize;",
                        "} gl_in[gl_MaxPatchVertices];",
                        "\n",
                    ));
                }
            }
        } else {
            // desktop profiles
            let _ = write!(s, "const int  gl_MaxVertexAttribs = {};", r.max_vertex_attribs);
            let _ = write!(s, "const int  gl_MaxVertexTextureImageUnits = {};", r.max_vertex_texture_image_units);
            let _ = write!(s, "const int  gl_MaxCombinedTextureImageUnits = {};", r.max_combined_texture_image_units);
            let _ = write!(s, "const int  gl_MaxTextureImageUnits = {};", r.max_texture_image_units);
            let _ = write!(s, "const int  gl_MaxDrawBuffers = {};", r.max_draw_buffers);
            let _ = write!(s, "const int  gl_MaxLights = {};", r.max_lights);
            let _ = write!(s, "const int  gl_MaxClipPlanes = {};", r.max_clip_planes);
            let _ = write!(s, "const int  gl_MaxTextureUnits = {};", r.max_texture_units);
            let _ = write!(s, "const int  gl_MaxTextureCoords = {};", r.max_texture_coords);
            let _ = write!(s, "const int  gl_MaxVertexUniformComponents = {};", r.max_vertex_uniform_components);
            if cfg.version < 150 || cfg.profile == Profile::Compatibility {
                let _ = write!(s, "const int  gl_MaxVaryingFloats = {};", r.max_varying_floats);
            }
            let _ = write!(s, "const int  gl_MaxFragmentUniformComponents = {};", r.max_fragment_uniform_components);

            if cfg.version >= 130 {
                let _ = write!(s, "const int gl_MaxClipDistances = {};", r.max_clip_distances);
                let _ = write!(s, "const int gl_MaxVaryingComponents = {};", r.max_varying_components);
                let _ = write!(s, "const mediump int  gl_MinProgramTexelOffset = {};", r.min_program_texel_offset);
                let _ = write!(s, "const mediump int  gl_MaxProgramTexelOffset = {};", r.max_program_texel_offset);
            }

            if cfg.version >= 150 {
                let _ = write!(s, "const int gl_MaxGeometryInputComponents = {};", r.max_geometry_input_components);
                let _ = write!(s, "const int gl_MaxGeometryOutputComponents = {};", r.max_geometry_output_components);
                let _ = write!(s, "const int gl_MaxGeometryTextureImageUnits = {};", r.max_geometry_texture_image_units);
                let _ = write!(s, "const int gl_MaxGeometryOutputVertices = {};", r.max_geometry_output_vertices);
                let _ = write!(s, "const int gl_MaxGeometryTotalOutputComponents = {};", r.max_geometry_total_output_components);
                let _ = write!(s, "const int gl_MaxGeometryUniformComponents = {};", r.max_geometry_uniform_components);
                let _ = write!(s, "const int gl_MaxGeometryVaryingComponents = {};", r.max_geometry_varying_components);
                let _ = write!(s, "const int gl_MaxVertexOutputComponents = {};", r.max_vertex_output_components);
                let _ = write!(s, "const int gl_MaxFragmentInputComponents = {};", r.max_fragment_input_components);
                let _ = write!(s, "const int gl_MaxTessControlInputComponents = {};", r.max_tess_control_input_components);
                let _ = write!(s, "const int gl_MaxTessControlOutputComponents = {};", r.max_tess_control_output_components);
                let _ = write!(s, "const int gl_MaxTessControlTextureImageUnits = {};", r.max_tess_control_texture_image_units);
                let _ = write!(s, "const int gl_MaxTessControlUniformComponents = {};", r.max_tess_control_uniform_components);
                let _ = write!(s, "const int gl_MaxTessControlTotalOutputComponents = {};", r.max_tess_control_total_output_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationInputComponents = {};", r.max_tess_evaluation_input_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationOutputComponents = {};", r.max_tess_evaluation_output_components);
                let _ = write!(s, "const int gl_MaxTessEvaluationTextureImageUnits = {};", r.max_tess_evaluation_texture_image_units);
                let _ = write!(s, "const int gl_MaxTessEvaluationUniformComponents = {};", r.max_tess_evaluation_uniform_components);
                let _ = write!(s, "const int gl_MaxTessPatchComponents = {};", r.max_tess_patch_components);
                let _ = write!(s, "const int gl_MaxTessGenLevel = {};", r.max_tess_gen_level);
                let _ = write!(s, "const int gl_MaxPatchVertices = {};", r.max_patch_vertices);
                let _ = write!(s, "const int gl_MaxViewports = {};", r.max_viewports);

                if stage == Stage::TessControl || stage == Stage::TessEvaluation {
                    s.push_str(concat!(
                        "in gl_PerVertex {",
                        "vec4 gl_Position;",
                        "float gl_PointSize;",
                        "float gl_ClipDistance[];",
                    ));
                    if cfg.profile == Profile::Compatibility {
                        s.push_str(concat!(
                            "vec4 gl_ClipVertex;",
                            "vec4 gl_FrontColor;",
                            "vec4 gl_BackColor;",
                            "vec4 gl_FrontSecondaryColor;",
                            "vec4 gl_BackSecondaryColor;",
                            "vec4 gl_TexCoord[];",
                            "float gl_FogFragCoord;",
                        ));
                    }
                    if cfg.version >= 450 {
                        s.push_str("float gl_CullDistance[];");
                    }
                    s.push_str("} gl_in[gl_MaxPatchVertices];\n");
                }
            }

            if cfg.version >= 130 {
                let _ = write!(s, "const int gl_MaxCombinedImageUnitsAndFragmentOutputs = {};", r.max_combined_image_units_and_fragment_outputs);
                let _ = write!(s, "const int gl_MaxImageSamples = {};", r.max_image_samples);
                let _ = write!(s, "const int gl_MaxTessControlImageUniforms = {};", r.max_tess_control_image_uniforms);
                let _ = write!(s, "const int gl_MaxTessEvaluationImageUniforms = {};", r.max_tess_evaluation_image_uniforms);
                let _ = write!(s, "const int gl_MaxGeometryImageUniforms = {};", r.max_geometry_image_uniforms);
            }
            if cfg.version >= 430 {
                let _ = write!(s, "const int gl_MaxTransformFeedbackBuffers = {};", r.max_transform_feedback_buffers);
                let _ = write!(s, "const int gl_MaxTransformFeedbackInterleavedComponents = {};", r.max_transform_feedback_interleaved_components);
            }
        }

        // both profile families from here down
        if cfg.at_least(310, 130) {
            let _ = write!(s, "const int gl_MaxImageUnits = {};", r.max_image_units);
            let _ = write!(s, "const int gl_MaxCombinedShaderOutputResources = {};", r.max_combined_shader_output_resources);
            let _ = write!(s, "const int gl_MaxVertexImageUniforms = {};", r.max_vertex_image_uniforms);
            let _ = write!(s, "const int gl_MaxFragmentImageUniforms = {};", r.max_fragment_image_uniforms);
            let _ = write!(s, "const int gl_MaxCombinedImageUniforms = {};", r.max_combined_image_uniforms);
        }

        if cfg.at_least(310, 420) {
            let _ = write!(s, "const int gl_MaxVertexAtomicCounters = {};", r.max_vertex_atomic_counters);
            let _ = write!(s, "const int gl_MaxFragmentAtomicCounters = {};", r.max_fragment_atomic_counters);
            let _ = write!(s, "const int gl_MaxCombinedAtomicCounters = {};", r.max_combined_atomic_counters);
            let _ = write!(s, "const int gl_MaxAtomicCounterBindings = {};", r.max_atomic_counter_bindings);
            let _ = write!(s, "const int gl_MaxVertexAtomicCounterBuffers = {};", r.max_vertex_atomic_counter_buffers);
            let _ = write!(s, "const int gl_MaxFragmentAtomicCounterBuffers = {};", r.max_fragment_atomic_counter_buffers);
            let _ = write!(s, "const int gl_MaxCombinedAtomicCounterBuffers = {};", r.max_combined_atomic_counter_buffers);
            let _ = write!(s, "const int gl_MaxAtomicCounterBufferSize = {};", r.max_atomic_counter_buffer_size);
        }
        if cfg.desktop_at_least(420) {
            let _ = write!(s, "const int gl_MaxTessControlAtomicCounters = {};", r.max_tess_control_atomic_counters);
            let _ = write!(s, "const int gl_MaxTessEvaluationAtomicCounters = {};", r.max_tess_evaluation_atomic_counters);
            let _ = write!(s, "const int gl_MaxGeometryAtomicCounters = {};", r.max_geometry_atomic_counters);
            let _ = write!(s, "const int gl_MaxTessControlAtomicCounterBuffers = {};", r.max_tess_control_atomic_counter_buffers);
            let _ = write!(s, "const int gl_MaxTessEvaluationAtomicCounterBuffers = {};", r.max_tess_evaluation_atomic_counter_buffers);
            let _ = write!(s, "const int gl_MaxGeometryAtomicCounterBuffers = {};", r.max_geometry_atomic_counter_buffers);
        }

        if cfg.at_least(310, 420) {
            let _ = write!(
                s,
                "const ivec3 gl_MaxComputeWorkGroupCount = ivec3({},{},{});",
                r.max_compute_work_group_count_x,
                r.max_compute_work_group_count_y,
                r.max_compute_work_group_count_z
            );
            let _ = write!(
                s,
                "const ivec3 gl_MaxComputeWorkGroupSize = ivec3({},{},{});",
                r.max_compute_work_group_size_x,
                r.max_compute_work_group_size_y,
                r.max_compute_work_group_size_z
            );
            let _ = write!(s, "const int gl_MaxComputeUniformComponents = {};", r.max_compute_uniform_components);
            let _ = write!(s, "const int gl_MaxComputeTextureImageUnits = {};", r.max_compute_texture_image_units);
            let _ = write!(s, "const int gl_MaxComputeImageUniforms = {};", r.max_compute_image_uniforms);
            let _ = write!(s, "const int gl_MaxComputeAtomicCounters = {};", r.max_compute_atomic_counters);
            let _ = write!(s, "const int gl_MaxComputeAtomicCounterBuffers = {};", r.max_compute_atomic_counter_buffers);
        }

        if cfg.desktop_at_least(450) {
            let _ = write!(s, "const int gl_MaxCullDistances = {};", r.max_cull_distances);
            let _ = write!(s, "const int gl_MaxCombinedClipAndCullDistances = {};", r.max_combined_clip_and_cull_distances);
        }
        if cfg.at_least(310, 450) {
            let _ = write!(s, "const int gl_MaxSamples = {};", r.max_samples);
        }

        s.push('\n');
        self.common().push_str(&s);
    }
}
