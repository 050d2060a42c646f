//! The per-compilation type arena.

use alloc::vec::Vec;

use crate::{entity_id, ArraySizes, Pool, Type};

entity_id! {
    /// Id of a shared [`ArraySizes`] descriptor.
    pub struct ArraySizesId
}

entity_id! {
    /// Id of a shared struct/block member list.
    pub struct MembersId
}

/// Owns every shared array descriptor and struct member list created
/// during one compilation.
///
/// Types reference these by id, so copying a [`Type`] aliases them
/// (shallow-copy semantics). Nothing is freed individually; dropping the
/// arena at the end of the compilation releases everything at once.
#[derive(Debug, Default)]
pub struct TypeArena {
    array_sizes: Pool<ArraySizesId, ArraySizes>,
    members: Pool<MembersId, Vec<Type>>,
}

impl TypeArena {
    pub fn new() -> TypeArena {
        TypeArena::default()
    }

    pub fn alloc_array_sizes(&mut self, sizes: ArraySizes) -> ArraySizesId {
        self.array_sizes.push(sizes)
    }

    pub fn array_sizes(&self, id: ArraySizesId) -> &ArraySizes {
        self.array_sizes.get(id)
    }

    pub fn array_sizes_mut(&mut self, id: ArraySizesId) -> &mut ArraySizes {
        self.array_sizes.get_mut(id)
    }

    /// Allocate a member list for a struct or block. Each member carries
    /// its field name on its type.
    pub fn alloc_members(&mut self, members: Vec<Type>) -> MembersId {
        self.members.push(members)
    }

    pub fn members(&self, id: MembersId) -> &[Type] {
        self.members.get(id)
    }

    pub fn members_mut(&mut self, id: MembersId) -> &mut Vec<Type> {
        self.members.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicType, StorageQualifier};

    #[test]
    fn test_shared_array_sizes_edit_visible_through_both_ids() {
        let mut arena = TypeArena::new();
        let id = arena.alloc_array_sizes(ArraySizes::with_outer(None));
        let alias = id;
        arena.array_sizes_mut(id).change_outer_size(8);
        assert_eq!(arena.array_sizes(alias).outer_size(), Some(8));
    }

    #[test]
    fn test_member_lists() {
        let mut arena = TypeArena::new();
        let mut member = Type::new(BasicType::Float, StorageQualifier::Temporary);
        member.set_field_name("x");
        let id = arena.alloc_members(alloc::vec![member]);
        assert_eq!(arena.members(id).len(), 1);
        assert_eq!(arena.members(id)[0].field_name(), Some("x"));
    }
}
