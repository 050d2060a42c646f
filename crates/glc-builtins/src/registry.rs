//! Registry driver: builds the built-in declaration strings.

use glc_types::{Profile, SpvTarget, Stage};

use crate::ResourceLimits;

/// The compile parameters every gate in the registry is conditioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Numeric GLSL version (100, 110, ... 460).
    pub version: u32,
    pub profile: Profile,
    pub target: SpvTarget,
}

impl Config {
    pub fn new(version: u32, profile: Profile, target: SpvTarget) -> Config {
        Config {
            version,
            profile,
            target,
        }
    }

    pub fn es(&self) -> bool {
        self.profile.is_es()
    }

    pub fn desktop(&self) -> bool {
        !self.profile.is_es()
    }

    pub fn es_at_least(&self, version: u32) -> bool {
        self.es() && self.version >= version
    }

    pub fn desktop_at_least(&self, version: u32) -> bool {
        self.desktop() && self.version >= version
    }

    /// The usual two-gate shape: ES from one version, desktop from another.
    pub fn at_least(&self, es_version: u32, desktop_version: u32) -> bool {
        self.es_at_least(es_version) || self.desktop_at_least(desktop_version)
    }

    /// Whether the compatibility-profile declarations are present.
    pub(crate) fn include_legacy(&self) -> bool {
        self.desktop()
            && (self.version <= 130
                || !self.target.targets_binary()
                || self.profile == Profile::Compatibility)
    }

    /// Whether the original-style texture function spellings are legal:
    /// ES 100, compatibility, core below 420, or no declared profile.
    pub(crate) fn legacy_texture(&self) -> bool {
        (self.es() && self.version == 100)
            || self.profile == Profile::Compatibility
            || (self.profile == Profile::Core && self.version < 420)
            || self.profile == Profile::None
    }
}

/// The generated built-in declarations: one cross-stage string shared
/// by every stage, plus one string per stage. Both are ordinary GLSL,
/// parsed by the same grammar as user shaders.
#[derive(Debug, Clone)]
pub struct BuiltIns {
    common: String,
    stages: [String; 6],
}

impl BuiltIns {
    /// Generate every context-independent declaration legal under the
    /// given parameters.
    pub fn new(cfg: &Config) -> BuiltIns {
        let mut builtins = BuiltIns {
            common: String::new(),
            stages: Default::default(),
        };
        builtins.add_math_functions(cfg);
        builtins.add_matrix_functions(cfg);
        builtins.add_relational_functions(cfg);
        builtins.add_atomic_functions(cfg);
        builtins.add_integer_functions(cfg);
        builtins.add_legacy_texture_functions(cfg);
        builtins.add_noise_functions(cfg);
        builtins.add_geometry_functions(cfg);
        builtins.add_control_functions(cfg);
        builtins.add_fragment_functions(cfg);
        builtins.add_depth_range(cfg);
        builtins.add_vertex_interface(cfg);
        builtins.add_tess_control_interface(cfg);
        builtins.add_tess_eval_interface(cfg);
        builtins.add_geometry_interface(cfg);
        builtins.add_fragment_interface(cfg);
        builtins.add_compute_interface(cfg);
        if cfg.version >= 130 {
            builtins.add_sampling_and_imaging(cfg);
        }
        builtins
    }

    /// Declarations shared by every stage.
    pub fn common_builtins(&self) -> &str {
        &self.common
    }

    /// Declarations for one stage only.
    pub fn stage_builtins(&self, stage: Stage) -> &str {
        &self.stages[stage.index()]
    }

    /// Add the context-dependent declarations for one stage: the
    /// resource-limit constants and, for the tessellation stages, the
    /// `gl_in` block sized by `gl_MaxPatchVertices`. Appended to the
    /// cross-stage string because it is built per requested stage.
    pub fn add_stage_resources(&mut self, resources: &ResourceLimits, cfg: &Config, stage: Stage) {
        self.add_resource_constants(resources, cfg, stage);
    }

    pub(crate) fn common(&mut self) -> &mut String {
        &mut self.common
    }

    pub(crate) fn stage(&mut self, stage: Stage) -> &mut String {
        &mut self.stages[stage.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_texture_gate() {
        let core450 = Config::new(450, Profile::Core, SpvTarget::NONE);
        assert!(!core450.legacy_texture());

        let core410 = Config::new(410, Profile::Core, SpvTarget::NONE);
        assert!(core410.legacy_texture());

        let compat450 = Config::new(450, Profile::Compatibility, SpvTarget::NONE);
        assert!(compat450.legacy_texture());

        let es100 = Config::new(100, Profile::Es, SpvTarget::NONE);
        assert!(es100.legacy_texture());

        let es300 = Config::new(300, Profile::Es, SpvTarget::NONE);
        assert!(!es300.legacy_texture());

        let none110 = Config::new(110, Profile::None, SpvTarget::NONE);
        assert!(none110.legacy_texture());
    }

    #[test]
    fn test_gate_helpers() {
        let cfg = Config::new(310, Profile::Es, SpvTarget::NONE);
        assert!(cfg.at_least(310, 430));
        assert!(!cfg.at_least(320, 130));
        assert!(cfg.es_at_least(300));
        assert!(!cfg.desktop_at_least(100));
    }
}
