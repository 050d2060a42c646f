//! Array dimension descriptors.

use alloc::vec::Vec;

/// The dimensions of an array type, outermost first.
///
/// A `None` dimension is unsized: either implicitly sized (its size will
/// be adopted from use before the end of the compilation) or, for
/// shader-storage buffer members, runtime sized. Which of the two it is
/// depends on the owning type's storage qualifier, so the distinction is
/// made by [`Type`](crate::Type), not here.
///
/// Descriptors live in the [`TypeArena`](crate::TypeArena) and are
/// shared by id across every type that uses the same array, so sizing
/// one use sizes them all.
#[derive(Debug, Clone, Default)]
pub struct ArraySizes {
    dims: Vec<Option<u32>>,
    /// Largest index seen through an implicitly-sized use.
    implicit_size: u32,
}

impl ArraySizes {
    pub fn new() -> ArraySizes {
        ArraySizes::default()
    }

    /// A one-dimensional descriptor; `None` means unsized.
    pub fn with_outer(size: Option<u32>) -> ArraySizes {
        ArraySizes {
            dims: alloc::vec![size],
            implicit_size: 0,
        }
    }

    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    pub fn outer_size(&self) -> Option<u32> {
        self.dims.first().copied().flatten()
    }

    pub fn is_outer_sized(&self) -> bool {
        matches!(self.dims.first(), Some(Some(_)))
    }

    /// Size of dimension `i` (0 = outermost); `None` when unsized.
    pub fn dim_size(&self, i: usize) -> Option<u32> {
        self.dims.get(i).copied().flatten()
    }

    pub fn change_outer_size(&mut self, size: u32) {
        if let Some(outer) = self.dims.first_mut() {
            *outer = Some(size);
        }
    }

    /// Append an inner (rightmost) dimension.
    pub fn add_inner_size(&mut self, size: Option<u32>) {
        self.dims.push(size);
    }

    /// Prepend all of `outer`'s dimensions outside the existing ones.
    pub fn add_outer_sizes(&mut self, outer: &ArraySizes) {
        let mut dims = outer.dims.clone();
        dims.extend_from_slice(&self.dims);
        self.dims = dims;
    }

    /// The descriptor for one level of dereference: everything but the
    /// outer dimension.
    pub fn copy_dereferenced(&self) -> ArraySizes {
        ArraySizes {
            dims: self.dims.iter().skip(1).copied().collect(),
            implicit_size: 0,
        }
    }

    /// Product of all dimension sizes; an unsized dimension contributes 0.
    pub fn cumulative_size(&self) -> u32 {
        self.dims.iter().map(|d| d.unwrap_or(0)).product()
    }

    pub fn implicit_size(&self) -> u32 {
        self.implicit_size
    }

    pub fn set_implicit_size(&mut self, size: u32) {
        self.implicit_size = self.implicit_size.max(size);
    }

    pub fn has_unsized(&self) -> bool {
        self.dims.iter().any(|d| d.is_none())
    }

    /// Dimension-wise match excluding the outer dimension.
    pub fn same_inner_arrayness(&self, other: &ArraySizes) -> bool {
        self.dims.len() == other.dims.len() && self.dims[1..] == other.dims[1..]
    }
}

impl PartialEq for ArraySizes {
    fn eq(&self, other: &Self) -> bool {
        // implicit size is bookkeeping, not part of the type
        self.dims == other.dims
    }
}

impl Eq for ArraySizes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_and_dims() {
        let mut a = ArraySizes::with_outer(Some(4));
        a.add_inner_size(Some(3));
        assert_eq!(a.num_dims(), 2);
        assert_eq!(a.outer_size(), Some(4));
        assert_eq!(a.dim_size(1), Some(3));
        assert_eq!(a.cumulative_size(), 12);
    }

    #[test]
    fn test_unsized_then_adopted() {
        let mut a = ArraySizes::with_outer(None);
        assert!(!a.is_outer_sized());
        assert!(a.has_unsized());
        a.set_implicit_size(3);
        a.set_implicit_size(2); // never shrinks
        assert_eq!(a.implicit_size(), 3);
        a.change_outer_size(a.implicit_size());
        assert_eq!(a.outer_size(), Some(3));
        assert!(!a.has_unsized());
    }

    #[test]
    fn test_dereference_drops_outer() {
        let mut a = ArraySizes::with_outer(Some(2));
        a.add_inner_size(Some(5));
        let inner = a.copy_dereferenced();
        assert_eq!(inner.num_dims(), 1);
        assert_eq!(inner.outer_size(), Some(5));
    }

    #[test]
    fn test_add_outer_sizes_prepends() {
        let mut inner = ArraySizes::with_outer(Some(5));
        let outer = ArraySizes::with_outer(Some(2));
        inner.add_outer_sizes(&outer);
        assert_eq!(inner.num_dims(), 2);
        assert_eq!(inner.outer_size(), Some(2));
        assert_eq!(inner.dim_size(1), Some(5));
    }

    #[test]
    fn test_equality_ignores_implicit_size() {
        let mut a = ArraySizes::with_outer(None);
        let b = ArraySizes::with_outer(None);
        a.set_implicit_size(7);
        assert_eq!(a, b);
    }
}
