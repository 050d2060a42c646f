//! Tests for shallow/deep copy semantics: aliasing on shallow copy,
//! independence with preserved structural sharing on deep copy.

use glc_types::{ArraySizes, BasicType, StorageQualifier, Type, TypeArena};

#[test]
fn test_shallow_copy_aliases_array_sizes() {
    let mut arena = TypeArena::new();
    let id = arena.alloc_array_sizes(ArraySizes::with_outer(None));
    let mut original = Type::new(BasicType::Float, StorageQualifier::VaryingIn);
    original.set_array_sizes_id(Some(id));

    let copy = original.clone();
    assert_eq!(copy.array_sizes_id(), original.array_sizes_id());

    // sizing the copy's descriptor is visible through the original
    let copy_id = copy.array_sizes_id().unwrap();
    arena.array_sizes_mut(copy_id).change_outer_size(6);
    let original_id = original.array_sizes_id().unwrap();
    assert_eq!(arena.array_sizes(original_id).outer_size(), Some(6));
}

#[test]
fn test_implicitly_sized_uses_update_in_lockstep() {
    let mut arena = TypeArena::new();
    let id = arena.alloc_array_sizes(ArraySizes::with_outer(None));

    let mut first_use = Type::new(BasicType::Float, StorageQualifier::VaryingOut);
    first_use.set_array_sizes_id(Some(id));
    let second_use = first_use.clone();

    arena.array_sizes_mut(id).set_implicit_size(3);
    first_use.adopt_implicit_array_sizes(&mut arena);

    assert!(second_use.is_explicitly_sized_array(&arena));
    let second_id = second_use.array_sizes_id().unwrap();
    assert_eq!(arena.array_sizes(second_id).outer_size(), Some(3));
}

#[test]
fn test_deep_copy_is_independent() {
    let mut arena = TypeArena::new();
    let id = arena.alloc_array_sizes(ArraySizes::with_outer(Some(2)));
    let mut original = Type::new(BasicType::Int, StorageQualifier::Temporary);
    original.set_array_sizes_id(Some(id));

    let copy = original.deep_copy(&mut arena);
    assert_ne!(copy.array_sizes_id(), original.array_sizes_id());

    let copy_id = copy.array_sizes_id().unwrap();
    arena.array_sizes_mut(copy_id).change_outer_size(9);
    assert_eq!(arena.array_sizes(id).outer_size(), Some(2));
}

#[test]
fn test_deep_copy_preserves_structural_sharing() {
    let mut arena = TypeArena::new();

    // one member list referenced twice from an outer struct
    let mut leaf = Type::new(BasicType::Float, StorageQualifier::Temporary);
    leaf.set_field_name("v");
    let inner_id = arena.alloc_members(vec![leaf]);

    let mut a = Type::structure(inner_id, "Inner");
    a.set_type_name("Inner");
    a.set_field_name("a");
    let mut b = Type::structure(inner_id, "Inner");
    b.set_type_name("Inner");
    b.set_field_name("b");
    assert_eq!(a.members_id(), b.members_id());

    let outer_id = arena.alloc_members(vec![a, b]);
    let outer = Type::structure(outer_id, "Outer");

    let copy = outer.deep_copy(&mut arena);
    let copy_members = copy.members_id().unwrap();
    assert_ne!(copy_members, outer_id);

    let copied_a = arena.members(copy_members)[0].clone();
    let copied_b = arena.members(copy_members)[1].clone();
    // both copies still point at one (new) list, not two separate clones
    assert_eq!(copied_a.members_id(), copied_b.members_id());
    assert_ne!(copied_a.members_id(), Some(inner_id));
}

#[test]
fn test_deep_copy_of_struct_members() {
    let mut arena = TypeArena::new();

    let mut m = Type::vector(BasicType::Float, StorageQualifier::Temporary, 4);
    m.set_field_name("color");
    let sizes = arena.alloc_array_sizes(ArraySizes::with_outer(Some(2)));
    m.set_array_sizes_id(Some(sizes));

    let members = arena.alloc_members(vec![m]);
    let mut st = Type::structure(members, "S");
    st.set_type_name("S");

    let copy = st.deep_copy(&mut arena);
    assert!(copy.same_type(&st, &arena));

    // member array descriptors were cloned, not aliased
    let copy_member = arena.members(copy.members_id().unwrap())[0].clone();
    let orig_member = arena.members(members)[0].clone();
    assert_ne!(copy_member.array_sizes_id(), orig_member.array_sizes_id());
}
