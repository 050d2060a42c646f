//! The built-in symbol table.
//!
//! A flat name → declaration map holding the built-in level of the
//! compilation's symbol table: variables with their types, and
//! functions as overload sets. The registry populates it from generated
//! text and the tagging pass mutates qualifiers, operator bindings and
//! extension requirements in place.

use std::collections::BTreeMap;

use glc_ast::Operator;
use glc_types::{Type, TypeArena};

use crate::{RegistryError, RegistryResult};

/// One function overload: return type and parameter types.
#[derive(Debug, Clone)]
pub struct Prototype {
    pub return_type: Type,
    pub params: Vec<Type>,
}

impl Prototype {
    pub fn same_params(&self, other: &Prototype, arena: &TypeArena) -> bool {
        self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.same_type(b, arena))
    }
}

/// What a symbol is: a variable or a function overload set.
#[derive(Debug, Clone)]
pub enum SymbolKind {
    Variable {
        ty: Type,
        /// Folded value of scalar integer constants, so later
        /// declarations can be sized by name (`gl_MaxPatchVertices`).
        value: Option<i64>,
    },
    Function {
        prototypes: Vec<Prototype>,
    },
}

/// A named entry in the symbol table.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
    /// Extensions, any one of which legalizes use of this symbol when
    /// the version alone does not.
    extensions: Vec<&'static str>,
    /// Operator the parser substitutes for calls to this overload set.
    op: Option<Operator>,
}

impl Symbol {
    pub fn variable(name: &str, ty: Type) -> Symbol {
        Symbol {
            name: name.to_string(),
            kind: SymbolKind::Variable { ty, value: None },
            extensions: Vec::new(),
            op: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    /// The variable's type; `None` for functions.
    pub fn ty(&self) -> Option<&Type> {
        match &self.kind {
            SymbolKind::Variable { ty, .. } => Some(ty),
            SymbolKind::Function { .. } => None,
        }
    }

    /// Mutable access for the tagging pass.
    pub fn ty_mut(&mut self) -> Option<&mut Type> {
        match &mut self.kind {
            SymbolKind::Variable { ty, .. } => Some(ty),
            SymbolKind::Function { .. } => None,
        }
    }

    pub fn constant_value(&self) -> Option<i64> {
        match &self.kind {
            SymbolKind::Variable { value, .. } => *value,
            SymbolKind::Function { .. } => None,
        }
    }

    pub fn set_constant_value(&mut self, new_value: i64) {
        if let SymbolKind::Variable { value, .. } = &mut self.kind {
            *value = Some(new_value);
        }
    }

    pub fn prototypes(&self) -> &[Prototype] {
        match &self.kind {
            SymbolKind::Function { prototypes } => prototypes,
            SymbolKind::Variable { .. } => &[],
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        self.op
    }

    pub fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }
}

/// The name → declaration registry for built-ins.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
    #[cfg(debug_assertions)]
    missed_tags: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Insert a variable. Re-declaration keeps the first entry (built-in
    /// text is allowed to re-declare across stage strings).
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.entry(symbol.name.clone()).or_insert(symbol);
    }

    /// Add one overload to a function's set.
    ///
    /// Re-declaring an existing overload with the same return type is
    /// harmless and ignored; the same parameter list with a different
    /// return type is the one self-contradiction the registry must
    /// never produce, and is rejected.
    pub fn insert_prototype(
        &mut self,
        name: &str,
        prototype: Prototype,
        arena: &TypeArena,
    ) -> RegistryResult<()> {
        let symbol = self
            .symbols
            .entry(name.to_string())
            .or_insert_with(|| Symbol {
                name: name.to_string(),
                kind: SymbolKind::Function {
                    prototypes: Vec::new(),
                },
                extensions: Vec::new(),
                op: None,
            });
        let SymbolKind::Function { prototypes } = &mut symbol.kind else {
            return Err(RegistryError::conflicting_prototype(name));
        };
        for existing in prototypes.iter() {
            if existing.same_params(&prototype, arena) {
                if existing.return_type.same_type(&prototype.return_type, arena) {
                    return Ok(());
                }
                return Err(RegistryError::conflicting_prototype(name));
            }
        }
        prototypes.push(prototype);
        Ok(())
    }

    /// Record that use of the named variable needs one of `extensions`.
    /// Silently does nothing when the name is not declared.
    pub fn set_variable_extensions(&mut self, name: &str, extensions: &[&'static str]) {
        match self.symbols.get_mut(name) {
            Some(symbol) => symbol.extensions = extensions.to_vec(),
            None => self.note_missed_tag(name),
        }
    }

    /// Record that use of the named function needs one of `extensions`.
    /// Silently does nothing when the name is not declared.
    pub fn set_function_extensions(&mut self, name: &str, extensions: &[&'static str]) {
        self.set_variable_extensions(name, extensions)
    }

    /// Bind a built-in function name to an operator, so call resolution
    /// can replace the call node with an operator node. Silently does
    /// nothing when the name is not declared.
    pub fn relate_to_operator(&mut self, name: &str, op: Operator) {
        match self.symbols.get_mut(name) {
            Some(symbol) => symbol.op = Some(op),
            None => self.note_missed_tag(name),
        }
    }

    #[cfg(debug_assertions)]
    pub(crate) fn note_missed_tag(&mut self, name: &str) {
        self.missed_tags.push(name.to_string());
    }

    #[cfg(not(debug_assertions))]
    pub(crate) fn note_missed_tag(&mut self, _name: &str) {}

    /// Debug-build accounting of tagging calls that found no target;
    /// the production behavior is the silent no-op.
    #[cfg(debug_assertions)]
    pub fn take_missed_tags(&mut self) -> Vec<String> {
        std::mem::take(&mut self.missed_tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glc_types::{BasicType, StorageQualifier};

    fn float_ty() -> Type {
        Type::new(BasicType::Float, StorageQualifier::Global)
    }

    fn int_ty() -> Type {
        Type::new(BasicType::Int, StorageQualifier::Global)
    }

    #[test]
    fn test_variable_insert_and_find() {
        let mut table = SymbolTable::new();
        table.insert(Symbol::variable("gl_FragDepth", float_ty()));
        assert!(table.find("gl_FragDepth").is_some());
        assert!(table.find("gl_FragColor").is_none());
    }

    #[test]
    fn test_overload_set_grows() {
        let arena = TypeArena::new();
        let mut table = SymbolTable::new();
        table
            .insert_prototype(
                "clamp",
                Prototype {
                    return_type: float_ty(),
                    params: vec![float_ty(), float_ty(), float_ty()],
                },
                &arena,
            )
            .unwrap();
        table
            .insert_prototype(
                "clamp",
                Prototype {
                    return_type: int_ty(),
                    params: vec![int_ty(), int_ty(), int_ty()],
                },
                &arena,
            )
            .unwrap();
        assert_eq!(table.find("clamp").unwrap().prototypes().len(), 2);
    }

    #[test]
    fn test_identical_redeclaration_is_harmless() {
        let arena = TypeArena::new();
        let mut table = SymbolTable::new();
        let proto = Prototype {
            return_type: float_ty(),
            params: vec![float_ty()],
        };
        table.insert_prototype("sin", proto.clone(), &arena).unwrap();
        table.insert_prototype("sin", proto, &arena).unwrap();
        assert_eq!(table.find("sin").unwrap().prototypes().len(), 1);
    }

    #[test]
    fn test_conflicting_return_type_rejected() {
        let arena = TypeArena::new();
        let mut table = SymbolTable::new();
        table
            .insert_prototype(
                "frob",
                Prototype {
                    return_type: float_ty(),
                    params: vec![float_ty()],
                },
                &arena,
            )
            .unwrap();
        let err = table.insert_prototype(
            "frob",
            Prototype {
                return_type: int_ty(),
                params: vec![float_ty()],
            },
            &arena,
        );
        assert_eq!(err, Err(RegistryError::conflicting_prototype("frob")));
    }

    #[test]
    fn test_tagging_absent_name_is_a_no_op() {
        let mut table = SymbolTable::new();
        table.relate_to_operator("notDeclared", Operator::Texture);
        table.set_variable_extensions("alsoNotDeclared", &["GL_EXT_whatever"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_relate_to_operator_binds() {
        let arena = TypeArena::new();
        let mut table = SymbolTable::new();
        table
            .insert_prototype(
                "texture",
                Prototype {
                    return_type: float_ty(),
                    params: vec![float_ty()],
                },
                &arena,
            )
            .unwrap();
        table.relate_to_operator("texture", Operator::Texture);
        assert_eq!(
            table.find("texture").unwrap().operator(),
            Some(Operator::Texture)
        );
    }
}
