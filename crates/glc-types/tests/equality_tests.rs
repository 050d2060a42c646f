//! Tests for type equality: reflexive, symmetric, transitive, and the
//! struct/array matching rules.

use glc_types::{
    ArraySizes, BasicType, Sampler, SamplerDim, StorageQualifier, Type, TypeArena,
};

fn sample_types(arena: &mut TypeArena) -> Vec<Type> {
    let mut types = vec![
        Type::new(BasicType::Float, StorageQualifier::Temporary),
        Type::new(BasicType::Int, StorageQualifier::Const),
        Type::vector(BasicType::Float, StorageQualifier::Temporary, 3),
        Type::vector(BasicType::Uint, StorageQualifier::VaryingIn, 4),
        Type::matrix(BasicType::Float, StorageQualifier::Temporary, 4, 4),
        Type::matrix(BasicType::Double, StorageQualifier::Temporary, 2, 3),
    ];

    let mut sampler = Sampler::default();
    sampler.set_combined(BasicType::Float, SamplerDim::Dim2D, false, true, false);
    types.push(Type::sampler_type(sampler, StorageQualifier::Uniform, None));

    let sizes = arena.alloc_array_sizes(ArraySizes::with_outer(Some(4)));
    let mut arr = Type::vector(BasicType::Float, StorageQualifier::Temporary, 2);
    arr.set_array_sizes_id(Some(sizes));
    types.push(arr);

    let mut x = Type::new(BasicType::Float, StorageQualifier::Temporary);
    x.set_field_name("x");
    let mut y = Type::vector(BasicType::Int, StorageQualifier::Temporary, 2);
    y.set_field_name("y");
    let members = arena.alloc_members(vec![x, y]);
    let mut st = Type::structure(members, "S");
    st.set_type_name("S");
    types.push(st);

    types
}

#[test]
fn test_equality_is_reflexive() {
    let mut arena = TypeArena::new();
    for ty in sample_types(&mut arena) {
        assert!(ty.same_type(&ty, &arena), "not reflexive: {:?}", ty.basic());
    }
}

#[test]
fn test_equality_is_symmetric() {
    let mut arena = TypeArena::new();
    let types = sample_types(&mut arena);
    for a in &types {
        for b in &types {
            assert_eq!(
                a.same_type(b, &arena),
                b.same_type(a, &arena),
                "asymmetric for {:?} vs {:?}",
                a.basic(),
                b.basic()
            );
        }
    }
}

#[test]
fn test_equality_is_transitive() {
    let mut arena = TypeArena::new();
    let types = sample_types(&mut arena);
    for a in &types {
        for b in &types {
            for c in &types {
                if a.same_type(b, &arena) && b.same_type(c, &arena) {
                    assert!(a.same_type(c, &arena));
                }
            }
        }
    }
}

#[test]
fn test_distinct_shapes_do_not_compare_equal() {
    let mut arena = TypeArena::new();
    let types = sample_types(&mut arena);
    // every sample was chosen distinct
    for (i, a) in types.iter().enumerate() {
        for (j, b) in types.iter().enumerate() {
            if i != j {
                assert!(!a.same_type(b, &arena), "samples {} and {} compare equal", i, j);
            }
        }
    }
}

#[test]
fn test_struct_equality_by_name_and_members() {
    let mut arena = TypeArena::new();

    let make = |arena: &mut TypeArena, name: &str, field: &str| {
        let mut m = Type::new(BasicType::Float, StorageQualifier::Temporary);
        m.set_field_name(field);
        let id = arena.alloc_members(vec![m]);
        let mut st = Type::structure(id, name);
        st.set_type_name(name);
        st
    };

    // independently declared but structurally identical
    let a = make(&mut arena, "S", "f");
    let b = make(&mut arena, "S", "f");
    assert!(a.same_type(&b, &arena));

    // same member list id short-circuits
    let shared = a.clone();
    assert!(a.same_type(&shared, &arena));

    // different member name
    let c = make(&mut arena, "S", "g");
    assert!(!a.same_type(&c, &arena));

    // different struct name
    let d = make(&mut arena, "T", "f");
    assert!(!a.same_type(&d, &arena));
}

#[test]
fn test_same_element_type_ignores_arrayness() {
    let mut arena = TypeArena::new();
    let scalar = Type::vector(BasicType::Float, StorageQualifier::Temporary, 2);
    let mut arr = scalar.clone();
    let id = arena.alloc_array_sizes(ArraySizes::with_outer(Some(7)));
    arr.set_array_sizes_id(Some(id));

    assert!(scalar.same_element_type(&arr, &arena));
    assert!(!scalar.same_type(&arr, &arena));
    assert!(!scalar.same_arrayness(&arr, &arena));
}

#[test]
fn test_array_equality_is_element_wise() {
    let mut arena = TypeArena::new();
    let mut a = Type::new(BasicType::Int, StorageQualifier::Temporary);
    let mut b = Type::new(BasicType::Int, StorageQualifier::Temporary);

    let id_a = arena.alloc_array_sizes(ArraySizes::with_outer(Some(4)));
    let id_b = arena.alloc_array_sizes(ArraySizes::with_outer(Some(4)));
    a.set_array_sizes_id(Some(id_a));
    b.set_array_sizes_id(Some(id_b));
    // distinct descriptors with equal contents still compare equal
    assert!(a.same_type(&b, &arena));

    arena.array_sizes_mut(id_b).change_outer_size(5);
    assert!(!a.same_type(&b, &arena));
}
