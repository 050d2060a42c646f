//! The semantic type of an expression or declaration.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    ArraySizes, ArraySizesId, BasicType, BuiltIn, MembersId, Precision, Qualifier, Sampler,
    StorageQualifier, TypeArena,
};

/// Transient type state accumulated while recognizing a declaration.
///
/// Short-lived and exclusively owned by the parser; converting it into a
/// [`Type`] hands over its array descriptor and struct reference without
/// cloning.
#[derive(Debug, Clone, Default)]
pub struct ParsedType {
    pub basic: BasicType,
    pub sampler: Sampler,
    pub qualifier: Qualifier,
    pub vector_size: u8,
    pub matrix_cols: u8,
    pub matrix_rows: u8,
    pub array_sizes: Option<ArraySizesId>,
    /// Resolved user-defined struct/block type, when the specifier names one.
    pub user_def: Option<Type>,
}

impl ParsedType {
    pub fn new() -> ParsedType {
        ParsedType {
            vector_size: 1,
            ..ParsedType::default()
        }
    }

    pub fn set_vector(&mut self, size: u8) {
        self.matrix_cols = 0;
        self.matrix_rows = 0;
        self.vector_size = size;
    }

    pub fn set_matrix(&mut self, cols: u8, rows: u8) {
        self.matrix_cols = cols;
        self.matrix_rows = rows;
        self.vector_size = 0;
    }

    pub fn is_scalar(&self) -> bool {
        self.matrix_cols == 0
            && self.vector_size == 1
            && self.array_sizes.is_none()
            && self.user_def.is_none()
    }
}

/// The type of a value or declaration.
///
/// `Clone` is a shallow copy: scalar fields are copied and the array
/// descriptor / member list ids are aliased, so the copy observes edits
/// made to those through the [`TypeArena`]. Use [`Type::deep_copy`] when
/// the copy must be independently mutable.
#[derive(Debug, Clone)]
pub struct Type {
    basic: BasicType,
    vector_size: u8,
    matrix_cols: u8,
    matrix_rows: u8,
    /// A true 1-component vector, distinct from a scalar. GLSL itself
    /// never produces this; only [`Type::make_vector`] sets it.
    vector1: bool,
    qualifier: Qualifier,
    sampler: Sampler,
    array_sizes: Option<ArraySizesId>,
    members: Option<MembersId>,
    field_name: Option<String>,
    type_name: Option<String>,
}

impl Type {
    /// A scalar of the given basic type.
    pub fn new(basic: BasicType, storage: StorageQualifier) -> Type {
        Type {
            basic,
            vector_size: 1,
            matrix_cols: 0,
            matrix_rows: 0,
            vector1: false,
            qualifier: Qualifier::with_storage(storage),
            sampler: Sampler::default(),
            array_sizes: None,
            members: None,
            field_name: None,
            type_name: None,
        }
    }

    pub fn with_precision(
        basic: BasicType,
        storage: StorageQualifier,
        precision: Precision,
        vector_size: u8,
    ) -> Type {
        let mut ty = Type::new(basic, storage);
        ty.qualifier.precision = precision;
        ty.vector_size = vector_size;
        ty
    }

    pub fn vector(basic: BasicType, storage: StorageQualifier, size: u8) -> Type {
        let mut ty = Type::new(basic, storage);
        ty.vector_size = size;
        ty
    }

    pub fn matrix(basic: BasicType, storage: StorageQualifier, cols: u8, rows: u8) -> Type {
        let mut ty = Type::new(basic, storage);
        ty.vector_size = 0;
        ty.matrix_cols = cols;
        ty.matrix_rows = rows;
        ty
    }

    /// An opaque sampler/texture/image type.
    pub fn sampler_type(
        sampler: Sampler,
        storage: StorageQualifier,
        array_sizes: Option<ArraySizesId>,
    ) -> Type {
        let mut ty = Type::new(BasicType::Sampler, storage);
        ty.sampler = sampler;
        ty.array_sizes = array_sizes;
        ty
    }

    pub fn structure(members: MembersId, name: &str) -> Type {
        let mut ty = Type::new(BasicType::Struct, StorageQualifier::Temporary);
        ty.members = Some(members);
        ty.type_name = Some(name.to_string());
        ty
    }

    pub fn block(members: MembersId, name: &str, qualifier: Qualifier) -> Type {
        let mut ty = Type::new(BasicType::Block, StorageQualifier::Temporary);
        ty.qualifier = qualifier;
        ty.members = Some(members);
        ty.type_name = Some(name.to_string());
        ty
    }

    /// Convert a transient [`ParsedType`], taking over its array
    /// descriptor and struct reference without cloning.
    pub fn from_parsed(parsed: ParsedType) -> Type {
        let mut ty = Type::new(parsed.basic, StorageQualifier::Temporary);
        ty.vector_size = parsed.vector_size;
        ty.matrix_cols = parsed.matrix_cols;
        ty.matrix_rows = parsed.matrix_rows;
        ty.qualifier = parsed.qualifier;
        if parsed.basic == BasicType::Sampler {
            ty.sampler = parsed.sampler;
        }
        ty.array_sizes = parsed.array_sizes;
        if let Some(user_def) = parsed.user_def {
            ty.members = user_def.members;
            ty.type_name = user_def.type_name;
        }
        ty
    }

    /// The type of `source[index]` (or of one matrix column/row, or one
    /// vector component), built by shallow copy.
    ///
    /// An array keeps sharing the source's descriptor only while no
    /// dimensions remain; with two or more dimensions the result gets a
    /// private copy of the remaining ones so it can be edited alone.
    pub fn dereferenced(
        source: &Type,
        index: usize,
        row_major: bool,
        arena: &mut TypeArena,
    ) -> Type {
        if let Some(id) = source.array_sizes {
            let mut ty = source.clone();
            if arena.array_sizes(id).num_dims() == 1 {
                ty.array_sizes = None;
            } else {
                let inner = arena.array_sizes(id).copy_dereferenced();
                ty.array_sizes = Some(arena.alloc_array_sizes(inner));
            }
            return ty;
        }
        if let Some(id) = source.members {
            return arena.members(id)[index].clone();
        }
        let mut ty = source.clone();
        if ty.matrix_cols > 0 {
            ty.vector_size = if row_major {
                ty.matrix_cols
            } else {
                ty.matrix_rows
            };
            ty.matrix_cols = 0;
            ty.matrix_rows = 0;
            if ty.vector_size == 1 {
                ty.vector1 = true;
            }
        } else if ty.is_vector() {
            ty.vector_size = 1;
            ty.vector1 = false;
        }
        ty
    }

    /// Fully independent copy: a fresh array descriptor and a fresh,
    /// structurally-shared-aware member graph. Two members that shared
    /// one list before the copy share one (new) list after it.
    pub fn deep_copy(&self, arena: &mut TypeArena) -> Type {
        let mut copied = BTreeMap::new();
        self.deep_copy_rec(arena, &mut copied)
    }

    fn deep_copy_rec(&self, arena: &mut TypeArena, copied: &mut BTreeMap<MembersId, MembersId>) -> Type {
        let mut ty = self.clone();
        if let Some(id) = self.array_sizes {
            let sizes = arena.array_sizes(id).clone();
            ty.array_sizes = Some(arena.alloc_array_sizes(sizes));
        }
        if let Some(id) = self.members {
            if let Some(&prev) = copied.get(&id) {
                ty.members = Some(prev);
            } else {
                let fresh = arena.alloc_members(Vec::new());
                copied.insert(id, fresh);
                let originals = arena.members(id).to_vec();
                let members: Vec<Type> = originals
                    .iter()
                    .map(|m| m.deep_copy_rec(arena, copied))
                    .collect();
                *arena.members_mut(fresh) = members;
                ty.members = Some(fresh);
            }
        }
        ty
    }

    /// Inherit the shared parts of a declaration-wide parent type, for
    /// `type a, b[3];` statements where each name gets its own type.
    pub fn merge_type(&mut self, parent: &ParsedType, arena: &mut TypeArena) {
        self.basic = parent.basic;
        self.vector_size = parent.vector_size;
        self.matrix_cols = parent.matrix_cols;
        self.matrix_rows = parent.matrix_rows;
        self.vector1 = false;
        self.qualifier = parent.qualifier;
        self.sampler = parent.sampler;
        if let Some(id) = parent.array_sizes {
            let sizes = arena.array_sizes(id).clone();
            self.array_sizes = Some(arena.alloc_array_sizes(sizes));
        }
        if let Some(user_def) = &parent.user_def {
            self.members = user_def.members;
            self.type_name = user_def.type_name.clone();
        }
    }

    pub fn basic(&self) -> BasicType {
        self.basic
    }

    /// 1 for scalars as well as 1-component vectors.
    pub fn vector_size(&self) -> u8 {
        self.vector_size
    }

    pub fn matrix_cols(&self) -> u8 {
        self.matrix_cols
    }

    pub fn matrix_rows(&self) -> u8 {
        self.matrix_rows
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    pub fn qualifier_mut(&mut self) -> &mut Qualifier {
        &mut self.qualifier
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut Sampler {
        &mut self.sampler
    }

    pub fn array_sizes_id(&self) -> Option<ArraySizesId> {
        self.array_sizes
    }

    /// Share an existing descriptor (aliasing) or clear with `None`.
    pub fn set_array_sizes_id(&mut self, id: Option<ArraySizesId>) {
        self.array_sizes = id;
    }

    /// Allocate a private descriptor holding `sizes`.
    pub fn new_array_sizes(&mut self, sizes: ArraySizes, arena: &mut TypeArena) {
        self.array_sizes = Some(arena.alloc_array_sizes(sizes));
    }

    pub fn members_id(&self) -> Option<MembersId> {
        self.members
    }

    pub fn set_members_id(&mut self, id: Option<MembersId>) {
        self.members = id;
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    pub fn set_field_name(&mut self, name: &str) {
        self.field_name = Some(name.to_string());
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn set_type_name(&mut self, name: &str) {
        self.type_name = Some(name.to_string());
    }

    /// Mark as a true 1-component vector.
    pub fn make_vector(&mut self) {
        self.vector1 = true;
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_vector() && !self.is_matrix() && !self.is_struct() && !self.is_array()
    }

    pub fn is_scalar_or_vec1(&self) -> bool {
        self.is_scalar() || self.vector1
    }

    pub fn is_vector(&self) -> bool {
        self.vector_size > 1 || self.vector1
    }

    pub fn is_matrix(&self) -> bool {
        self.matrix_cols > 0
    }

    pub fn is_array(&self) -> bool {
        self.array_sizes.is_some()
    }

    pub fn is_struct(&self) -> bool {
        self.members.is_some()
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self.basic, BasicType::Sampler | BasicType::AtomicUint)
    }

    pub fn is_image(&self) -> bool {
        self.basic == BasicType::Sampler && self.sampler.is_image()
    }

    pub fn is_subpass(&self) -> bool {
        self.basic == BasicType::Sampler && self.sampler.is_subpass()
    }

    pub fn is_explicitly_sized_array(&self, arena: &TypeArena) -> bool {
        match self.array_sizes {
            Some(id) => arena.array_sizes(id).is_outer_sized(),
            None => false,
        }
    }

    /// Unsized outer dimension that will adopt a size from use.
    pub fn is_implicitly_sized_array(&self, arena: &TypeArena) -> bool {
        match self.array_sizes {
            Some(id) => {
                !arena.array_sizes(id).is_outer_sized()
                    && self.qualifier.storage != StorageQualifier::Buffer
            }
            None => false,
        }
    }

    /// Unsized outer dimension of a shader-storage buffer member; sized
    /// only at run time, never adopted.
    pub fn is_runtime_sized_array(&self, arena: &TypeArena) -> bool {
        match self.array_sizes {
            Some(id) => {
                !arena.array_sizes(id).is_outer_sized()
                    && self.qualifier.storage == StorageQualifier::Buffer
            }
            None => false,
        }
    }

    /// Void a member out of existence; rendering and lookup skip it.
    pub fn hide_member(&mut self) {
        self.basic = BasicType::Void;
        self.vector_size = 1;
    }

    pub fn is_hidden_member(&self) -> bool {
        self.basic == BasicType::Void
    }

    /// True when this type, or any member reachable from it, satisfies
    /// the predicate.
    pub fn contains<P>(&self, arena: &TypeArena, pred: P) -> bool
    where
        P: Fn(&Type) -> bool + Copy,
    {
        if pred(self) {
            return true;
        }
        match self.members {
            Some(id) => arena.members(id).iter().any(|m| m.contains(arena, pred)),
            None => false,
        }
    }

    pub fn contains_basic_type(&self, arena: &TypeArena, basic: BasicType) -> bool {
        self.contains(arena, |t| t.basic == basic)
    }

    pub fn contains_array(&self, arena: &TypeArena) -> bool {
        self.contains(arena, |t| t.is_array())
    }

    pub fn contains_structure(&self, arena: &TypeArena) -> bool {
        match self.members {
            Some(id) => arena.members(id).iter().any(|m| m.contains(arena, |t| t.is_struct())),
            None => false,
        }
    }

    pub fn contains_implicitly_sized_array(&self, arena: &TypeArena) -> bool {
        self.contains(arena, |t| t.is_implicitly_sized_array(arena))
    }

    pub fn contains_opaque(&self, arena: &TypeArena) -> bool {
        self.contains(arena, |t| t.is_opaque())
    }

    /// Recursively reset qualifiers to temporary, through struct members.
    pub fn make_temporary(&mut self, arena: &mut TypeArena) {
        self.qualifier.make_temporary();
        if let Some(id) = self.members {
            for i in 0..arena.members(id).len() {
                let mut member = arena.members(id)[i].clone();
                member.make_temporary(arena);
                arena.members_mut(id)[i] = member;
            }
        }
    }

    /// Promote implicit sizes to explicit ones through the type tree.
    pub fn adopt_implicit_array_sizes(&self, arena: &mut TypeArena) {
        if let Some(id) = self.array_sizes {
            if self.is_implicitly_sized_array(arena) {
                let size = arena.array_sizes(id).implicit_size();
                arena.array_sizes_mut(id).change_outer_size(size);
            }
        }
        if let Some(id) = self.members {
            for i in 0..arena.members(id).len() {
                let member = arena.members(id)[i].clone();
                member.adopt_implicit_array_sizes(arena);
            }
        }
    }

    /// Do two struct/block types match: same name, same member names and
    /// types, recursively. Sharing one member list short-circuits to true.
    pub fn same_struct_type(&self, other: &Type, arena: &TypeArena) -> bool {
        if self.members == other.members {
            return true;
        }
        let (Some(a), Some(b)) = (self.members, other.members) else {
            return false;
        };
        if self.type_name != other.type_name {
            return false;
        }
        let (left, right) = (arena.members(a), arena.members(b));
        if left.len() != right.len() {
            return false;
        }
        left.iter().zip(right).all(|(l, r)| {
            l.field_name == r.field_name && l.same_type(r, arena)
        })
    }

    /// Match in every way except arrayness.
    pub fn same_element_type(&self, other: &Type, arena: &TypeArena) -> bool {
        self.basic == other.basic && self.same_element_shape(other, arena)
    }

    fn same_element_shape(&self, other: &Type, arena: &TypeArena) -> bool {
        self.sampler == other.sampler
            && self.vector_size == other.vector_size
            && self.matrix_cols == other.matrix_cols
            && self.matrix_rows == other.matrix_rows
            && self.vector1 == other.vector1
            && self.same_struct_type(other, arena)
    }

    /// Dimension-wise array match.
    pub fn same_arrayness(&self, other: &Type, arena: &TypeArena) -> bool {
        match (self.array_sizes, other.array_sizes) {
            (None, None) => true,
            (Some(a), Some(b)) => arena.array_sizes(a) == arena.array_sizes(b),
            _ => false,
        }
    }

    /// Full type equality (shape, element and arrayness; not qualification).
    pub fn same_type(&self, other: &Type, arena: &TypeArena) -> bool {
        self.same_element_type(other, arena) && self.same_arrayness(other, arena)
    }

    /// Total component count: 1 per scalar, `vectorSize` per vector,
    /// cols x rows per matrix, member sum for aggregates, multiplied by
    /// the cumulative array size when arrayed.
    pub fn component_count(&self, arena: &TypeArena) -> u32 {
        let mut components = match self.members {
            Some(id) => arena
                .members(id)
                .iter()
                .map(|m| m.component_count(arena))
                .sum(),
            None => {
                if self.matrix_cols > 0 {
                    u32::from(self.matrix_cols) * u32::from(self.matrix_rows)
                } else {
                    u32::from(self.vector_size)
                }
            }
        };
        if let Some(id) = self.array_sizes {
            components *= arena.array_sizes(id).cumulative_size();
        }
        components
    }

    /// The GLSL spelling of the element type (sampler descriptors render
    /// their canonical name).
    pub fn basic_type_string(&self) -> String {
        if self.basic == BasicType::Sampler {
            self.sampler.type_name()
        } else {
            self.basic.glsl_name().to_string()
        }
    }

    /// Deterministic human-readable rendering of the whole type, used for
    /// diagnostics and overload mangling. Clause order is fixed: layout,
    /// invariant/precise, interpolation, auxiliary, memory, storage,
    /// array dimensions, precision, shape, basic type, built-in name, and
    /// a `{member, ...}` suffix for aggregates.
    pub fn complete_string(&self, arena: &TypeArena) -> String {
        let mut s = String::new();
        let q = &self.qualifier;

        if q.layout.is_set() {
            s.push_str("layout(");
            if let Some(location) = q.layout.location {
                s.push_str(&format!(" location={}", location));
                if let Some(component) = q.layout.component {
                    s.push_str(&format!(" component={}", component));
                }
                if let Some(index) = q.layout.index {
                    s.push_str(&format!(" index={}", index));
                }
            }
            if let Some(set) = q.layout.set {
                s.push_str(&format!(" set={}", set));
            }
            if let Some(binding) = q.layout.binding {
                s.push_str(&format!(" binding={}", binding));
            }
            if let Some(stream) = q.layout.stream {
                s.push_str(&format!(" stream={}", stream));
            }
            if let Some(matrix) = q.layout.matrix {
                s.push_str(&format!(" {}", matrix.glsl_name()));
            }
            if let Some(packing) = q.layout.packing {
                s.push_str(&format!(" {}", packing.glsl_name()));
            }
            if let Some(offset) = q.layout.offset {
                s.push_str(&format!(" offset={}", offset));
            }
            if let Some(align) = q.layout.align {
                s.push_str(&format!(" align={}", align));
            }
            if let Some(fmt) = q.layout.format {
                s.push_str(&format!(" {}", fmt.glsl_name()));
            }
            if let Some(xfb_buffer) = q.layout.xfb_buffer {
                if q.layout.xfb_offset.is_some() {
                    s.push_str(&format!(" xfb_buffer={}", xfb_buffer));
                }
            }
            if let Some(xfb_offset) = q.layout.xfb_offset {
                s.push_str(&format!(" xfb_offset={}", xfb_offset));
            }
            if let Some(xfb_stride) = q.layout.xfb_stride {
                s.push_str(&format!(" xfb_stride={}", xfb_stride));
            }
            if let Some(attachment) = q.layout.attachment {
                s.push_str(&format!(" input_attachment_index={}", attachment));
            }
            if let Some(id) = q.layout.spec_constant_id {
                s.push_str(&format!(" constant_id={}", id));
            }
            if q.layout.push_constant {
                s.push_str(" push_constant");
            }
            s.push(')');
        }

        if q.invariant {
            s.push_str(" invariant");
        }
        if q.no_contraction {
            s.push_str(" noContraction");
        }
        if q.centroid {
            s.push_str(" centroid");
        }
        if q.smooth {
            s.push_str(" smooth");
        }
        if q.flat {
            s.push_str(" flat");
        }
        if q.nopersp {
            s.push_str(" noperspective");
        }
        if q.patch {
            s.push_str(" patch");
        }
        if q.sample {
            s.push_str(" sample");
        }
        if q.coherent {
            s.push_str(" coherent");
        }
        if q.volatil {
            s.push_str(" volatile");
        }
        if q.restrict {
            s.push_str(" restrict");
        }
        if q.readonly {
            s.push_str(" readonly");
        }
        if q.writeonly {
            s.push_str(" writeonly");
        }
        if q.spec_constant {
            s.push_str(" specialization-constant");
        }
        s.push(' ');
        s.push_str(q.storage.glsl_name());

        if let Some(id) = self.array_sizes {
            let sizes = arena.array_sizes(id);
            for i in 0..sizes.num_dims() {
                match sizes.dim_size(i) {
                    Some(size) => s.push_str(&format!(" {}-element array of", size)),
                    None => s.push_str(" implicitly-sized array of"),
                }
            }
        }
        if q.precision != Precision::None {
            s.push_str(&format!(" {}", q.precision.glsl_name()));
        }
        if self.is_matrix() {
            s.push_str(&format!(" {}X{} matrix of", self.matrix_cols, self.matrix_rows));
        } else if self.is_vector() {
            s.push_str(&format!(" {}-component vector of", self.vector_size));
        }

        s.push(' ');
        s.push_str(&self.basic_type_string());

        if q.builtin != BuiltIn::None {
            s.push(' ');
            s.push_str(q.builtin.glsl_name());
        }

        if let Some(id) = self.members {
            s.push('{');
            let members = arena.members(id);
            for (i, member) in members.iter().enumerate() {
                if member.is_hidden_member() {
                    continue;
                }
                s.push_str(&member.complete_string(arena));
                s.push(' ');
                s.push_str(member.field_name().unwrap_or(""));
                if i < members.len() - 1 {
                    s.push_str(", ");
                }
            }
            s.push('}');
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplerDim;

    #[test]
    fn test_scalar_vector_matrix_classification() {
        let scalar = Type::new(BasicType::Float, StorageQualifier::Temporary);
        assert!(scalar.is_scalar());
        assert!(!scalar.is_vector());

        let vec3 = Type::vector(BasicType::Float, StorageQualifier::Temporary, 3);
        assert!(vec3.is_vector());
        assert!(!vec3.is_scalar());

        let mat = Type::matrix(BasicType::Float, StorageQualifier::Temporary, 2, 3);
        assert!(mat.is_matrix());
        assert!(!mat.is_vector());
    }

    #[test]
    fn test_vec1_distinct_from_scalar() {
        let mut v1 = Type::new(BasicType::Float, StorageQualifier::Temporary);
        assert!(v1.is_scalar());
        v1.make_vector();
        assert!(v1.is_vector());
        assert!(v1.is_scalar_or_vec1());
        assert_eq!(v1.vector_size(), 1);
    }

    #[test]
    fn test_matrix_dereference_honors_row_major() {
        let mut arena = TypeArena::new();
        let mat = Type::matrix(BasicType::Float, StorageQualifier::Temporary, 2, 3);

        let column = Type::dereferenced(&mat, 0, false, &mut arena);
        assert!(column.is_vector());
        assert_eq!(column.vector_size(), 3);

        let row = Type::dereferenced(&mat, 0, true, &mut arena);
        assert_eq!(row.vector_size(), 2);
    }

    #[test]
    fn test_vector_dereference_to_scalar() {
        let mut arena = TypeArena::new();
        let vec2 = Type::vector(BasicType::Int, StorageQualifier::Temporary, 2);
        let elem = Type::dereferenced(&vec2, 1, false, &mut arena);
        assert!(elem.is_scalar());
    }

    #[test]
    fn test_array_dereference_keeps_inner_dims() {
        let mut arena = TypeArena::new();
        let mut sizes = ArraySizes::with_outer(Some(2));
        sizes.add_inner_size(Some(5));
        let id = arena.alloc_array_sizes(sizes);

        let mut arr = Type::vector(BasicType::Float, StorageQualifier::Temporary, 4);
        arr.set_array_sizes_id(Some(id));

        let inner = Type::dereferenced(&arr, 0, false, &mut arena);
        assert!(inner.is_array());
        // the remaining dimension lives in a private descriptor
        assert_ne!(inner.array_sizes_id(), Some(id));
        let inner_id = inner.array_sizes_id().expect("still arrayed");
        assert_eq!(arena.array_sizes(inner_id).outer_size(), Some(5));

        let elem = Type::dereferenced(&inner, 0, false, &mut arena);
        assert!(!elem.is_array());
        assert!(elem.is_vector());
    }

    #[test]
    fn test_component_count() {
        let mut arena = TypeArena::new();

        let mat = Type::matrix(BasicType::Float, StorageQualifier::Temporary, 2, 3);
        assert_eq!(mat.component_count(&arena), 6);

        let mut arr = mat.clone();
        let id = arena.alloc_array_sizes(ArraySizes::with_outer(Some(4)));
        arr.set_array_sizes_id(Some(id));
        assert_eq!(arr.component_count(&arena), 24);

        let mut a = Type::vector(BasicType::Float, StorageQualifier::Temporary, 3);
        a.set_field_name("a");
        let mut b = Type::new(BasicType::Float, StorageQualifier::Temporary);
        let bid = arena.alloc_array_sizes(ArraySizes::with_outer(Some(5)));
        b.set_array_sizes_id(Some(bid));
        b.set_field_name("b");
        let members = arena.alloc_members(alloc::vec![a, b]);
        let st = Type::structure(members, "S");
        assert_eq!(st.component_count(&arena), 8);
    }

    #[test]
    fn test_runtime_vs_implicit_sizing() {
        let mut arena = TypeArena::new();
        let id = arena.alloc_array_sizes(ArraySizes::with_outer(None));

        let mut implicit = Type::new(BasicType::Float, StorageQualifier::VaryingIn);
        implicit.set_array_sizes_id(Some(id));
        assert!(implicit.is_implicitly_sized_array(&arena));
        assert!(!implicit.is_runtime_sized_array(&arena));

        let mut runtime = Type::new(BasicType::Float, StorageQualifier::Buffer);
        runtime.set_array_sizes_id(Some(id));
        assert!(runtime.is_runtime_sized_array(&arena));
        assert!(!runtime.is_implicitly_sized_array(&arena));
    }

    #[test]
    fn test_complete_string_ordering() {
        let arena = TypeArena::new();
        let mut ty = Type::vector(BasicType::Float, StorageQualifier::VaryingOut, 4);
        ty.qualifier_mut().layout.location = Some(2);
        ty.qualifier_mut().flat = true;
        let s = ty.complete_string(&arena);
        assert_eq!(s, "layout( location=2) flat out 4-component vector of float");
    }

    #[test]
    fn test_sampler_type_string() {
        let arena = TypeArena::new();
        let mut sampler = Sampler::default();
        sampler.set_combined(BasicType::Uint, SamplerDim::Dim2D, true, false, false);
        let ty = Type::sampler_type(sampler, StorageQualifier::Uniform, None);
        assert_eq!(ty.basic_type_string(), "usampler2DArray");
        assert!(ty.is_opaque());
    }

    #[test]
    fn test_merge_type_clones_array_but_shares_struct() {
        let mut arena = TypeArena::new();
        let sizes_id = arena.alloc_array_sizes(ArraySizes::with_outer(Some(3)));

        let mut member = Type::new(BasicType::Float, StorageQualifier::Temporary);
        member.set_field_name("f");
        let members_id = arena.alloc_members(alloc::vec![member]);
        let mut user_def = Type::structure(members_id, "S");
        user_def.set_type_name("S");

        let mut parent = ParsedType::new();
        parent.basic = BasicType::Struct;
        parent.array_sizes = Some(sizes_id);
        parent.user_def = Some(user_def);

        let mut ty = Type::new(BasicType::Void, StorageQualifier::Temporary);
        ty.merge_type(&parent, &mut arena);

        assert_eq!(ty.basic(), BasicType::Struct);
        // array descriptor is a private clone, struct reference is shared
        assert_ne!(ty.array_sizes_id(), Some(sizes_id));
        assert_eq!(ty.members_id(), Some(members_id));
        assert_eq!(ty.type_name(), Some("S"));
    }
}
