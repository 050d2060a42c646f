//! Shared helpers for the registry integration tests.

use glc_builtins::{identify_builtins, identify_builtins_with_resources};
use glc_builtins::{populate, BuiltIns, Config, ResourceLimits, SymbolTable};
use glc_types::{Profile, SpvTarget, Stage, TypeArena};

/// Generate, parse and tag the built-ins for one stage, the way a
/// compilation would: context-independent text, resource-dependent
/// text, populate, then the two tagging passes.
pub fn build_stage(
    version: u32,
    profile: Profile,
    target: SpvTarget,
    stage: Stage,
) -> (SymbolTable, TypeArena) {
    let cfg = Config::new(version, profile, target);
    let resources = ResourceLimits::default();

    let mut builtins = BuiltIns::new(&cfg);
    builtins.add_stage_resources(&resources, &cfg, stage);

    let mut table = SymbolTable::new();
    let mut arena = TypeArena::new();
    populate(&mut table, &mut arena, builtins.common_builtins()).expect("common built-ins parse");
    populate(&mut table, &mut arena, builtins.stage_builtins(stage)).expect("stage built-ins parse");

    identify_builtins(&cfg, stage, &mut table, &mut arena);
    identify_builtins_with_resources(&cfg, stage, &mut table, &mut arena, &resources);

    (table, arena)
}
