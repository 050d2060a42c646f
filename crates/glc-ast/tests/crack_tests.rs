//! Tests for texture-operator decoding: every operator in the texture
//! guard range decodes to its documented capability tuple, exactly one
//! way, and no two operators with different behavior share a tuple.

use glc_ast::{CrackedTextureOp, Operator};
use glc_types::{BasicType, Sampler, SamplerDim};

fn sampler_2d() -> Sampler {
    let mut s = Sampler::default();
    s.set_combined(BasicType::Float, SamplerDim::Dim2D, false, false, false);
    s
}

/// Every operator in the texture guard range, with whether it is the
/// sparse spelling of another entry.
const TEXTURE_OPS: &[(Operator, bool)] = &[
    (Operator::TextureQuerySize, false),
    (Operator::TextureQueryLod, false),
    (Operator::TextureQueryLevels, false),
    (Operator::TextureQuerySamples, false),
    (Operator::Texture, false),
    (Operator::TextureProj, false),
    (Operator::TextureLod, false),
    (Operator::TextureOffset, false),
    (Operator::TextureFetch, false),
    (Operator::TextureFetchOffset, false),
    (Operator::TextureProjOffset, false),
    (Operator::TextureLodOffset, false),
    (Operator::TextureProjLod, false),
    (Operator::TextureProjLodOffset, false),
    (Operator::TextureGrad, false),
    (Operator::TextureGradOffset, false),
    (Operator::TextureProjGrad, false),
    (Operator::TextureProjGradOffset, false),
    (Operator::TextureGather, false),
    (Operator::TextureGatherOffset, false),
    (Operator::TextureGatherOffsets, false),
    (Operator::TextureClamp, false),
    (Operator::TextureOffsetClamp, false),
    (Operator::TextureGradClamp, false),
    (Operator::TextureGradOffsetClamp, false),
    (Operator::SparseTexture, true),
    (Operator::SparseTextureLod, true),
    (Operator::SparseTextureOffset, true),
    (Operator::SparseTextureFetch, true),
    (Operator::SparseTextureFetchOffset, true),
    (Operator::SparseTextureLodOffset, true),
    (Operator::SparseTextureGrad, true),
    (Operator::SparseTextureGradOffset, true),
    (Operator::SparseTextureGather, true),
    (Operator::SparseTextureGatherOffset, true),
    (Operator::SparseTextureGatherOffsets, true),
    (Operator::SparseTextureClamp, true),
    (Operator::SparseTextureOffsetClamp, true),
    (Operator::SparseTextureGradClamp, true),
    (Operator::SparseTextureGradOffsetClamp, true),
    (Operator::SparseTexelsResident, true),
];

#[test]
fn test_every_texture_op_is_in_the_guard_range() {
    for (op, _) in TEXTURE_OPS {
        assert!(op.is_texture(), "{:?} outside the texture range", op);
    }
}

#[test]
fn test_sparse_forms_decode_like_their_base_spelling() {
    let s = sampler_2d();
    let pairs = [
        (Operator::SparseTexture, Operator::Texture),
        (Operator::SparseTextureLod, Operator::TextureLod),
        (Operator::SparseTextureOffset, Operator::TextureOffset),
        (Operator::SparseTextureFetch, Operator::TextureFetch),
        (
            Operator::SparseTextureFetchOffset,
            Operator::TextureFetchOffset,
        ),
        (Operator::SparseTextureLodOffset, Operator::TextureLodOffset),
        (Operator::SparseTextureGrad, Operator::TextureGrad),
        (
            Operator::SparseTextureGradOffset,
            Operator::TextureGradOffset,
        ),
        (Operator::SparseTextureGather, Operator::TextureGather),
        (
            Operator::SparseTextureGatherOffset,
            Operator::TextureGatherOffset,
        ),
        (
            Operator::SparseTextureGatherOffsets,
            Operator::TextureGatherOffsets,
        ),
        (Operator::SparseTextureClamp, Operator::TextureClamp),
        (
            Operator::SparseTextureOffsetClamp,
            Operator::TextureOffsetClamp,
        ),
        (Operator::SparseTextureGradClamp, Operator::TextureGradClamp),
        (
            Operator::SparseTextureGradOffsetClamp,
            Operator::TextureGradOffsetClamp,
        ),
    ];
    for (sparse, base) in pairs {
        assert_eq!(
            sparse.crack_texture(&s),
            base.crack_texture(&s),
            "{:?} and {:?} are spellings of one behavior",
            sparse,
            base
        );
    }
}

#[test]
fn test_non_synonymous_ops_decode_to_distinct_tuples() {
    let s = sampler_2d();
    // drop the sparse synonyms and collapse the query ops (which are
    // deliberately one category); the rest must be pairwise distinct
    let distinct: Vec<Operator> = TEXTURE_OPS
        .iter()
        .filter(|&&(op, sparse)| {
            !sparse
                && !matches!(
                    op,
                    Operator::TextureQueryLod
                        | Operator::TextureQueryLevels
                        | Operator::TextureQuerySamples
                )
        })
        .map(|&(op, _)| op)
        .collect();

    for (i, a) in distinct.iter().enumerate() {
        for b in &distinct[i + 1..] {
            assert_ne!(
                a.crack_texture(&s),
                b.crack_texture(&s),
                "{:?} and {:?} decode identically",
                a,
                b
            );
        }
    }
}

#[test]
fn test_documented_combinations() {
    let s = sampler_2d();

    let plain = Operator::Texture.crack_texture(&s);
    assert_eq!(plain, CrackedTextureOp::default());

    let proj_lod_offset = Operator::TextureProjLodOffset.crack_texture(&s);
    assert!(proj_lod_offset.proj && proj_lod_offset.lod && proj_lod_offset.offset);
    assert!(!proj_lod_offset.grad && !proj_lod_offset.fetch);

    let gather_offsets = Operator::TextureGatherOffsets.crack_texture(&s);
    assert!(gather_offsets.gather && gather_offsets.offsets && !gather_offsets.offset);

    let grad_offset_clamp = Operator::TextureGradOffsetClamp.crack_texture(&s);
    assert!(grad_offset_clamp.grad && grad_offset_clamp.offset && grad_offset_clamp.lod_clamp);

    let query = Operator::TextureQuerySize.crack_texture(&s);
    assert!(query.query);

    let subpass = Operator::SubpassLoad.crack_texture(&s);
    assert!(subpass.subpass);
}
