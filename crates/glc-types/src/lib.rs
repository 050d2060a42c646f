//! Type model for the GLSL front end.
//!
//! This crate defines the semantic type of every expression and
//! declaration the front end sees: basic types, vector/matrix shapes,
//! qualifiers with layout information, sampler/image descriptors, and
//! array descriptors. Array descriptors and struct member lists are
//! allocated from a per-compilation [`TypeArena`] and referenced by id,
//! so types can share them the way the language requires (all uses of
//! one implicitly-sized array adopt a size together).

#![no_std]

extern crate alloc;

mod arena;
mod arrays;
mod basic;
mod pool;
mod qualifier;
mod sampler;
mod types;

pub use arena::{ArraySizesId, MembersId, TypeArena};
pub use arrays::ArraySizes;
pub use basic::{BasicType, Profile, SpvTarget, Stage};
pub use pool::{EntityId, Pool};
pub use qualifier::{
    BuiltIn, ImageFormat, LayoutPacking, LayoutQualifier, MatrixLayout, Precision, Qualifier,
    StorageQualifier,
};
pub use sampler::{Sampler, SamplerDim};
pub use types::{ParsedType, Type};
