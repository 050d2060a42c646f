//! Lowering of parsed built-in text into the symbol table.
//!
//! The generated declarations are ordinary GLSL, so they go through the
//! same parser as user shaders; this module walks the resulting syntax
//! tree and turns every prototype, variable, and block into a symbol.

use std::collections::BTreeMap;

use glsl::parser::Parse;
use glsl::syntax;

use glc_types::{
    ArraySizes, BasicType, ImageFormat, LayoutPacking, MatrixLayout, ParsedType, Precision,
    Qualifier, Sampler, SamplerDim, StorageQualifier, Type, TypeArena,
};

use crate::{Prototype, RegistryError, RegistryResult, Symbol, SymbolTable};

/// Parse `source` and add every declaration it contains to `table`.
///
/// Call once for the cross-stage string and once for the relevant
/// per-stage string. Later duplicates of an already-seen declaration
/// are ignored; a prototype contradicting an earlier one is an error.
pub fn populate(table: &mut SymbolTable, arena: &mut TypeArena, source: &str) -> RegistryResult<()> {
    if source.trim().is_empty() {
        return Ok(());
    }
    let unit = syntax::TranslationUnit::parse(source)
        .map_err(|e| RegistryError::parse(format!("{:?}", e)))?;

    let mut lowering = Lowering {
        table,
        arena,
        user_types: BTreeMap::new(),
    };
    for decl in (unit.0).0.iter() {
        lowering.external_declaration(decl)?;
    }
    Ok(())
}

struct Lowering<'a> {
    table: &'a mut SymbolTable,
    arena: &'a mut TypeArena,
    /// Struct types declared earlier in the text, by type name.
    user_types: BTreeMap<String, Type>,
}

impl Lowering<'_> {
    fn external_declaration(&mut self, decl: &syntax::ExternalDeclaration) -> RegistryResult<()> {
        match decl {
            syntax::ExternalDeclaration::Declaration(decl) => self.declaration(decl),
            // built-in text has no function bodies or preprocessor lines
            syntax::ExternalDeclaration::FunctionDefinition(_)
            | syntax::ExternalDeclaration::Preprocessor(_) => Ok(()),
        }
    }

    fn declaration(&mut self, decl: &syntax::Declaration) -> RegistryResult<()> {
        match decl {
            syntax::Declaration::FunctionPrototype(proto) => self.function_prototype(proto),
            syntax::Declaration::InitDeclaratorList(list) => self.declarator_list(list),
            syntax::Declaration::Block(block) => self.block(block),
            syntax::Declaration::Precision(..) | syntax::Declaration::Global(..) => Ok(()),
        }
    }

    fn function_prototype(&mut self, proto: &syntax::FunctionPrototype) -> RegistryResult<()> {
        let return_type = self.fully_specified_type(&proto.ty, None)?;
        let mut params = Vec::new();
        for param in &proto.parameters {
            match param {
                syntax::FunctionParameterDeclaration::Named(qualifier, declarator) => {
                    params.push(self.parameter_type(
                        qualifier.as_ref(),
                        &declarator.ty,
                        declarator.ident.array_spec.as_ref(),
                    )?);
                }
                syntax::FunctionParameterDeclaration::Unnamed(qualifier, ty) => {
                    params.push(self.parameter_type(qualifier.as_ref(), ty, None)?);
                }
            }
        }
        // a lone `void` parameter list means no parameters
        if params.len() == 1 && params[0].basic() == BasicType::Void {
            params.clear();
        }
        self.table.insert_prototype(
            &proto.name.0,
            Prototype {
                return_type,
                params,
            },
            self.arena,
        )
    }

    fn declarator_list(&mut self, list: &syntax::InitDeclaratorList) -> RegistryResult<()> {
        let head = &list.head;
        let parsed = self.parsed_type(&head.ty, None)?;

        let Some(name) = &head.name else {
            // a bare struct definition; registering the type name is all
            return Ok(());
        };

        let mut ty = Type::from_parsed(parsed.clone());
        if let Some(spec) = &head.array_specifier {
            let outer = self.array_sizes(spec)?;
            self.push_outer_dims(&mut ty, outer);
        }
        let mut symbol = Symbol::variable(&name.0, ty);
        if let Some(value) = head.initializer.as_ref().and_then(constant_int) {
            symbol.set_constant_value(value);
        }
        self.table.insert(symbol);

        for declarator in &list.tail {
            // each further name inherits the shared parts of the head type
            let mut ty = Type::new(BasicType::Void, StorageQualifier::Temporary);
            ty.merge_type(&parsed, self.arena);
            if let Some(spec) = &declarator.ident.array_spec {
                let outer = self.array_sizes(spec)?;
                self.push_outer_dims(&mut ty, outer);
            }
            let mut symbol = Symbol::variable(&declarator.ident.ident.0, ty);
            if let Some(value) = declarator.initializer.as_ref().and_then(constant_int) {
                symbol.set_constant_value(value);
            }
            self.table.insert(symbol);
        }
        Ok(())
    }

    fn block(&mut self, block: &syntax::Block) -> RegistryResult<()> {
        let qualifier = self.type_qualifier(&block.qualifier, false);
        let mut members = Vec::new();
        for field in &block.fields {
            members.extend(self.struct_members(field)?);
        }

        match &block.identifier {
            Some(instance) => {
                let members_id = self.arena.alloc_members(members);
                let mut ty = Type::block(members_id, &block.name.0, qualifier);
                if let Some(spec) = &instance.array_spec {
                    let sizes = self.array_sizes(spec)?;
                    ty.new_array_sizes(sizes, self.arena);
                }
                self.table.insert(Symbol::variable(&instance.ident.0, ty));
            }
            None => {
                // anonymous block: members are directly visible
                for mut member in members {
                    member.qualifier_mut().merge(&qualifier);
                    let name = member.field_name().unwrap_or_default().to_string();
                    self.table.insert(Symbol::variable(&name, member));
                }
            }
        }
        Ok(())
    }

    fn struct_members(&mut self, field: &syntax::StructFieldSpecifier) -> RegistryResult<Vec<Type>> {
        let mut base = ParsedType::new();
        if let Some(qualifier) = &field.qualifier {
            base.qualifier = self.type_qualifier(qualifier, false);
        }
        self.type_specifier(&field.ty, &mut base)?;

        let mut members = Vec::new();
        for ident in (field.identifiers).0.iter() {
            let mut ty = Type::from_parsed(base.clone());
            if let Some(spec) = &ident.array_spec {
                let sizes = self.array_sizes(spec)?;
                self.push_outer_dims(&mut ty, sizes);
            }
            ty.set_field_name(&ident.ident.0);
            members.push(ty);
        }
        Ok(members)
    }

    fn parameter_type(
        &mut self,
        qualifier: Option<&syntax::TypeQualifier>,
        ty: &syntax::TypeSpecifier,
        array_spec: Option<&syntax::ArraySpecifier>,
    ) -> RegistryResult<Type> {
        let mut parsed = ParsedType::new();
        parsed.qualifier = match qualifier {
            Some(q) => self.type_qualifier(q, true),
            None => Qualifier::with_storage(StorageQualifier::In),
        };
        self.type_specifier(ty, &mut parsed)?;
        let mut ty = Type::from_parsed(parsed);
        if let Some(spec) = array_spec {
            let sizes = self.array_sizes(spec)?;
            self.push_outer_dims(&mut ty, sizes);
        }
        Ok(ty)
    }

    fn fully_specified_type(
        &mut self,
        ty: &syntax::FullySpecifiedType,
        _name: Option<&str>,
    ) -> RegistryResult<Type> {
        Ok(Type::from_parsed(self.parsed_type(ty, None)?))
    }

    fn parsed_type(
        &mut self,
        ty: &syntax::FullySpecifiedType,
        _name: Option<&str>,
    ) -> RegistryResult<ParsedType> {
        let mut parsed = ParsedType::new();
        parsed.qualifier = match &ty.qualifier {
            Some(q) => self.type_qualifier(q, false),
            None => Qualifier::with_storage(StorageQualifier::Global),
        };
        self.type_specifier(&ty.ty, &mut parsed)?;
        Ok(parsed)
    }

    /// Apply a type specifier (and its array suffix) onto `parsed`.
    fn type_specifier(
        &mut self,
        spec: &syntax::TypeSpecifier,
        parsed: &mut ParsedType,
    ) -> RegistryResult<()> {
        self.type_specifier_non_array(&spec.ty, parsed)?;
        if let Some(array) = &spec.array_specifier {
            let sizes = self.array_sizes(array)?;
            let id = self.arena.alloc_array_sizes(sizes);
            parsed.array_sizes = Some(id);
        }
        Ok(())
    }

    fn type_specifier_non_array(
        &mut self,
        spec: &syntax::TypeSpecifierNonArray,
        parsed: &mut ParsedType,
    ) -> RegistryResult<()> {
        use syntax::TypeSpecifierNonArray as T;

        // scalar, vector and matrix shapes
        let shaped = match spec {
            T::Void => Some((BasicType::Void, 1, 0, 0)),
            T::Bool => Some((BasicType::Bool, 1, 0, 0)),
            T::Int => Some((BasicType::Int, 1, 0, 0)),
            T::UInt => Some((BasicType::Uint, 1, 0, 0)),
            T::Float => Some((BasicType::Float, 1, 0, 0)),
            T::Double => Some((BasicType::Double, 1, 0, 0)),
            T::Vec2 => Some((BasicType::Float, 2, 0, 0)),
            T::Vec3 => Some((BasicType::Float, 3, 0, 0)),
            T::Vec4 => Some((BasicType::Float, 4, 0, 0)),
            T::DVec2 => Some((BasicType::Double, 2, 0, 0)),
            T::DVec3 => Some((BasicType::Double, 3, 0, 0)),
            T::DVec4 => Some((BasicType::Double, 4, 0, 0)),
            T::BVec2 => Some((BasicType::Bool, 2, 0, 0)),
            T::BVec3 => Some((BasicType::Bool, 3, 0, 0)),
            T::BVec4 => Some((BasicType::Bool, 4, 0, 0)),
            T::IVec2 => Some((BasicType::Int, 2, 0, 0)),
            T::IVec3 => Some((BasicType::Int, 3, 0, 0)),
            T::IVec4 => Some((BasicType::Int, 4, 0, 0)),
            T::UVec2 => Some((BasicType::Uint, 2, 0, 0)),
            T::UVec3 => Some((BasicType::Uint, 3, 0, 0)),
            T::UVec4 => Some((BasicType::Uint, 4, 0, 0)),
            T::Mat2 => Some((BasicType::Float, 0, 2, 2)),
            T::Mat3 => Some((BasicType::Float, 0, 3, 3)),
            T::Mat4 => Some((BasicType::Float, 0, 4, 4)),
            T::Mat23 => Some((BasicType::Float, 0, 2, 3)),
            T::Mat24 => Some((BasicType::Float, 0, 2, 4)),
            T::Mat32 => Some((BasicType::Float, 0, 3, 2)),
            T::Mat34 => Some((BasicType::Float, 0, 3, 4)),
            T::Mat42 => Some((BasicType::Float, 0, 4, 2)),
            T::Mat43 => Some((BasicType::Float, 0, 4, 3)),
            T::DMat2 => Some((BasicType::Double, 0, 2, 2)),
            T::DMat3 => Some((BasicType::Double, 0, 3, 3)),
            T::DMat4 => Some((BasicType::Double, 0, 4, 4)),
            T::DMat23 => Some((BasicType::Double, 0, 2, 3)),
            T::DMat24 => Some((BasicType::Double, 0, 2, 4)),
            T::DMat32 => Some((BasicType::Double, 0, 3, 2)),
            T::DMat34 => Some((BasicType::Double, 0, 3, 4)),
            T::DMat42 => Some((BasicType::Double, 0, 4, 2)),
            T::DMat43 => Some((BasicType::Double, 0, 4, 3)),
            _ => None,
        };
        if let Some((basic, vector, cols, rows)) = shaped {
            parsed.basic = basic;
            if cols > 0 {
                parsed.set_matrix(cols, rows);
            } else if vector > 1 {
                parsed.set_vector(vector);
            }
            return Ok(());
        }

        if *spec == T::AtomicUInt {
            parsed.basic = BasicType::AtomicUint;
            return Ok(());
        }

        if let Some(sampler) = keyword_sampler(spec) {
            parsed.basic = BasicType::Sampler;
            parsed.sampler = sampler;
            return Ok(());
        }

        match spec {
            T::Struct(def) => {
                let members_id = {
                    let mut members = Vec::new();
                    for field in (def.fields).0.iter() {
                        members.extend(self.struct_members(field)?);
                    }
                    self.arena.alloc_members(members)
                };
                let name = def
                    .name
                    .as_ref()
                    .map(|n| n.0.clone())
                    .unwrap_or_default();
                let ty = Type::structure(members_id, &name);
                if !name.is_empty() {
                    self.user_types.insert(name, ty.clone());
                }
                parsed.basic = BasicType::Struct;
                parsed.user_def = Some(ty);
                Ok(())
            }
            T::TypeName(name) => {
                if let Some(ty) = self.user_types.get(&name.0) {
                    parsed.basic = ty.basic();
                    parsed.user_def = Some(ty.clone());
                    return Ok(());
                }
                if let Some(sampler) = named_sampler(&name.0) {
                    parsed.basic = BasicType::Sampler;
                    parsed.sampler = sampler;
                    return Ok(());
                }
                Err(RegistryError::unknown_type(&name.0))
            }
            _ => Err(RegistryError::unknown_type(format!("{:?}", spec))),
        }
    }

    fn type_qualifier(&mut self, qualifier: &syntax::TypeQualifier, param: bool) -> Qualifier {
        let mut q = Qualifier::with_storage(if param {
            StorageQualifier::In
        } else {
            StorageQualifier::Global
        });
        for spec in (qualifier.qualifiers).0.iter() {
            match spec {
                syntax::TypeQualifierSpec::Storage(storage) => {
                    self.storage_qualifier(storage, param, &mut q)
                }
                syntax::TypeQualifierSpec::Layout(layout) => self.layout_qualifier(layout, &mut q),
                syntax::TypeQualifierSpec::Precision(precision) => {
                    q.precision = match precision {
                        syntax::PrecisionQualifier::High => Precision::High,
                        syntax::PrecisionQualifier::Medium => Precision::Medium,
                        syntax::PrecisionQualifier::Low => Precision::Low,
                    }
                }
                syntax::TypeQualifierSpec::Interpolation(interp) => match interp {
                    syntax::InterpolationQualifier::Smooth => q.smooth = true,
                    syntax::InterpolationQualifier::Flat => q.flat = true,
                    syntax::InterpolationQualifier::NoPerspective => q.nopersp = true,
                },
                syntax::TypeQualifierSpec::Invariant => q.invariant = true,
                syntax::TypeQualifierSpec::Precise => q.no_contraction = true,
            }
        }
        q
    }

    fn storage_qualifier(
        &mut self,
        storage: &syntax::StorageQualifier,
        param: bool,
        q: &mut Qualifier,
    ) {
        use syntax::StorageQualifier as S;
        match storage {
            S::Const => {
                q.storage = if param {
                    StorageQualifier::ConstReadOnly
                } else {
                    StorageQualifier::Const
                }
            }
            S::In => {
                q.storage = if param {
                    StorageQualifier::In
                } else {
                    StorageQualifier::VaryingIn
                }
            }
            S::Out => {
                q.storage = if param {
                    StorageQualifier::Out
                } else {
                    StorageQualifier::VaryingOut
                }
            }
            S::InOut => q.storage = StorageQualifier::InOut,
            S::Uniform => q.storage = StorageQualifier::Uniform,
            S::Buffer => q.storage = StorageQualifier::Buffer,
            S::Shared => q.storage = StorageQualifier::Shared,
            // the pre-130 spellings of the pipeline interface
            S::Attribute => q.storage = StorageQualifier::VaryingIn,
            S::Varying => q.storage = StorageQualifier::VaryingOut,
            S::Centroid => q.centroid = true,
            S::Patch => q.patch = true,
            S::Sample => q.sample = true,
            S::Coherent => q.coherent = true,
            S::Volatile => q.volatil = true,
            S::Restrict => q.restrict = true,
            S::ReadOnly => q.readonly = true,
            S::WriteOnly => q.writeonly = true,
            S::Subroutine(_) => {}
        }
    }

    fn layout_qualifier(&mut self, layout: &syntax::LayoutQualifier, q: &mut Qualifier) {
        for id in (layout.ids).0.iter() {
            match id {
                syntax::LayoutQualifierSpec::Shared => {
                    q.layout.packing = Some(LayoutPacking::Shared)
                }
                syntax::LayoutQualifierSpec::Identifier(ident, value) => {
                    let value = value
                        .as_deref()
                        .and_then(expr_int)
                        .and_then(|v| u32::try_from(v).ok());
                    self.layout_id(&ident.0, value, q);
                }
            }
        }
    }

    fn layout_id(&mut self, name: &str, value: Option<u32>, q: &mut Qualifier) {
        match name {
            "location" => q.layout.location = value,
            "component" => q.layout.component = value,
            "set" => q.layout.set = value,
            "binding" => q.layout.binding = value,
            "index" => q.layout.index = value,
            "stream" => q.layout.stream = value,
            "xfb_buffer" => q.layout.xfb_buffer = value,
            "xfb_stride" => q.layout.xfb_stride = value,
            "xfb_offset" => q.layout.xfb_offset = value,
            "input_attachment_index" => q.layout.attachment = value,
            "constant_id" => q.layout.spec_constant_id = value,
            "offset" => q.layout.offset = value.map(|v| v as i32),
            "align" => q.layout.align = value.map(|v| v as i32),
            "push_constant" => q.layout.push_constant = true,
            "std140" => q.layout.packing = Some(LayoutPacking::Std140),
            "std430" => q.layout.packing = Some(LayoutPacking::Std430),
            "packed" => q.layout.packing = Some(LayoutPacking::Packed),
            "row_major" => q.layout.matrix = Some(MatrixLayout::RowMajor),
            "column_major" => q.layout.matrix = Some(MatrixLayout::ColumnMajor),
            other => {
                if let Some(format) = image_format(other) {
                    q.layout.format = Some(format);
                }
                // unknown layout ids are ignored, not errors
            }
        }
    }

    fn array_sizes(&mut self, spec: &syntax::ArraySpecifier) -> RegistryResult<ArraySizes> {
        let mut sizes = ArraySizes::new();
        for dimension in (spec.dimensions).0.iter() {
            match dimension {
                syntax::ArraySpecifierDimension::Unsized => sizes.add_inner_size(None),
                syntax::ArraySpecifierDimension::ExplicitlySized(expr) => {
                    let size = match expr_int(expr) {
                        Some(value) => u32::try_from(value).ok(),
                        // a constant name, e.g. gl_MaxPatchVertices
                        None => self.named_constant(expr),
                    };
                    sizes.add_inner_size(size);
                }
            }
        }
        Ok(sizes)
    }

    fn named_constant(&self, expr: &syntax::Expr) -> Option<u32> {
        if let syntax::Expr::Variable(name) = expr {
            let value = self.table.find(&name.0)?.constant_value()?;
            return u32::try_from(value).ok();
        }
        None
    }

    /// Add declarator-level dimensions outside any the type already has.
    fn push_outer_dims(&mut self, ty: &mut Type, outer: ArraySizes) {
        match ty.array_sizes_id() {
            Some(id) => self.arena.array_sizes_mut(id).add_outer_sizes(&outer),
            None => ty.new_array_sizes(outer, self.arena),
        }
    }
}

fn constant_int(initializer: &syntax::Initializer) -> Option<i64> {
    match initializer {
        syntax::Initializer::Simple(expr) => expr_int(expr),
        syntax::Initializer::List(_) => None,
    }
}

fn expr_int(expr: &syntax::Expr) -> Option<i64> {
    match expr {
        syntax::Expr::IntConst(v) => Some(i64::from(*v)),
        syntax::Expr::UIntConst(v) => Some(i64::from(*v)),
        syntax::Expr::Unary(syntax::UnaryOp::Minus, inner) => expr_int(inner).map(|v| -v),
        _ => None,
    }
}

/// Image format layout identifiers.
fn image_format(name: &str) -> Option<ImageFormat> {
    use ImageFormat::*;
    Some(match name {
        "rgba32f" => Rgba32f,
        "rgba16f" => Rgba16f,
        "rg32f" => Rg32f,
        "rg16f" => Rg16f,
        "r11f_g11f_b10f" => R11fG11fB10f,
        "r32f" => R32f,
        "r16f" => R16f,
        "rgba16" => Rgba16,
        "rgb10_a2" => Rgb10A2,
        "rgba8" => Rgba8,
        "rg16" => Rg16,
        "rg8" => Rg8,
        "r16" => R16,
        "r8" => R8,
        "rgba16_snorm" => Rgba16Snorm,
        "rgba8_snorm" => Rgba8Snorm,
        "rg16_snorm" => Rg16Snorm,
        "rg8_snorm" => Rg8Snorm,
        "r16_snorm" => R16Snorm,
        "r8_snorm" => R8Snorm,
        "rgba32i" => Rgba32i,
        "rgba16i" => Rgba16i,
        "rgba8i" => Rgba8i,
        "rg32i" => Rg32i,
        "rg16i" => Rg16i,
        "rg8i" => Rg8i,
        "r32i" => R32i,
        "r16i" => R16i,
        "r8i" => R8i,
        "rgba32ui" => Rgba32ui,
        "rgba16ui" => Rgba16ui,
        "rgba8ui" => Rgba8ui,
        "rg32ui" => Rg32ui,
        "rg16ui" => Rg16ui,
        "rgb10_a2ui" => Rgb10A2ui,
        "rg8ui" => Rg8ui,
        "r32ui" => R32ui,
        "r16ui" => R16ui,
        "r8ui" => R8ui,
        _ => return None,
    })
}

/// Opaque types the grammar knows as keywords.
fn keyword_sampler(spec: &syntax::TypeSpecifierNonArray) -> Option<Sampler> {
    use syntax::TypeSpecifierNonArray as T;
    use BasicType::{Float, Int, Uint};
    use SamplerDim::{Buffer, Cube, Dim1D, Dim2D, Dim3D, Rect};

    // (basic, dim, arrayed, shadow, ms, image)
    let (basic, dim, arrayed, shadow, ms, image) = match spec {
        T::Sampler1D => (Float, Dim1D, false, false, false, false),
        T::Sampler2D => (Float, Dim2D, false, false, false, false),
        T::Sampler3D => (Float, Dim3D, false, false, false, false),
        T::SamplerCube => (Float, Cube, false, false, false, false),
        T::Sampler2DRect => (Float, Rect, false, false, false, false),
        T::SamplerBuffer => (Float, Buffer, false, false, false, false),
        T::Sampler1DArray => (Float, Dim1D, true, false, false, false),
        T::Sampler2DArray => (Float, Dim2D, true, false, false, false),
        T::SamplerCubeArray => (Float, Cube, true, false, false, false),
        T::Sampler2DMS => (Float, Dim2D, false, false, true, false),
        T::Sampler2DMSArray => (Float, Dim2D, true, false, true, false),
        T::Sampler1DShadow => (Float, Dim1D, false, true, false, false),
        T::Sampler2DShadow => (Float, Dim2D, false, true, false, false),
        T::Sampler2DRectShadow => (Float, Rect, false, true, false, false),
        T::Sampler1DArrayShadow => (Float, Dim1D, true, true, false, false),
        T::Sampler2DArrayShadow => (Float, Dim2D, true, true, false, false),
        T::SamplerCubeShadow => (Float, Cube, false, true, false, false),
        T::SamplerCubeArrayShadow => (Float, Cube, true, true, false, false),
        T::ISampler1D => (Int, Dim1D, false, false, false, false),
        T::ISampler2D => (Int, Dim2D, false, false, false, false),
        T::ISampler3D => (Int, Dim3D, false, false, false, false),
        T::ISamplerCube => (Int, Cube, false, false, false, false),
        T::ISampler2DRect => (Int, Rect, false, false, false, false),
        T::ISamplerBuffer => (Int, Buffer, false, false, false, false),
        T::ISampler1DArray => (Int, Dim1D, true, false, false, false),
        T::ISampler2DArray => (Int, Dim2D, true, false, false, false),
        T::ISamplerCubeArray => (Int, Cube, true, false, false, false),
        T::ISampler2DMS => (Int, Dim2D, false, false, true, false),
        T::ISampler2DMSArray => (Int, Dim2D, true, false, true, false),
        T::USampler1D => (Uint, Dim1D, false, false, false, false),
        T::USampler2D => (Uint, Dim2D, false, false, false, false),
        T::USampler3D => (Uint, Dim3D, false, false, false, false),
        T::USamplerCube => (Uint, Cube, false, false, false, false),
        T::USampler2DRect => (Uint, Rect, false, false, false, false),
        T::USamplerBuffer => (Uint, Buffer, false, false, false, false),
        T::USampler1DArray => (Uint, Dim1D, true, false, false, false),
        T::USampler2DArray => (Uint, Dim2D, true, false, false, false),
        T::USamplerCubeArray => (Uint, Cube, true, false, false, false),
        T::USampler2DMS => (Uint, Dim2D, false, false, true, false),
        T::USampler2DMSArray => (Uint, Dim2D, true, false, true, false),
        T::Image1D => (Float, Dim1D, false, false, false, true),
        T::Image2D => (Float, Dim2D, false, false, false, true),
        T::Image3D => (Float, Dim3D, false, false, false, true),
        T::ImageCube => (Float, Cube, false, false, false, true),
        T::Image2DRect => (Float, Rect, false, false, false, true),
        T::ImageBuffer => (Float, Buffer, false, false, false, true),
        T::Image1DArray => (Float, Dim1D, true, false, false, true),
        T::Image2DArray => (Float, Dim2D, true, false, false, true),
        T::ImageCubeArray => (Float, Cube, true, false, false, true),
        T::Image2DMS => (Float, Dim2D, false, false, true, true),
        T::Image2DMSArray => (Float, Dim2D, true, false, true, true),
        T::IImage1D => (Int, Dim1D, false, false, false, true),
        T::IImage2D => (Int, Dim2D, false, false, false, true),
        T::IImage3D => (Int, Dim3D, false, false, false, true),
        T::IImageCube => (Int, Cube, false, false, false, true),
        T::IImage2DRect => (Int, Rect, false, false, false, true),
        T::IImageBuffer => (Int, Buffer, false, false, false, true),
        T::IImage1DArray => (Int, Dim1D, true, false, false, true),
        T::IImage2DArray => (Int, Dim2D, true, false, false, true),
        T::IImageCubeArray => (Int, Cube, true, false, false, true),
        T::IImage2DMS => (Int, Dim2D, false, false, true, true),
        T::IImage2DMSArray => (Int, Dim2D, true, false, true, true),
        T::UImage1D => (Uint, Dim1D, false, false, false, true),
        T::UImage2D => (Uint, Dim2D, false, false, false, true),
        T::UImage3D => (Uint, Dim3D, false, false, false, true),
        T::UImageCube => (Uint, Cube, false, false, false, true),
        T::UImage2DRect => (Uint, Rect, false, false, false, true),
        T::UImageBuffer => (Uint, Buffer, false, false, false, true),
        T::UImage1DArray => (Uint, Dim1D, true, false, false, true),
        T::UImage2DArray => (Uint, Dim2D, true, false, false, true),
        T::UImageCubeArray => (Uint, Cube, true, false, false, true),
        T::UImage2DMS => (Uint, Dim2D, false, false, true, true),
        T::UImage2DMSArray => (Uint, Dim2D, true, false, true, true),
        _ => return None,
    };

    let mut sampler = Sampler::default();
    if image {
        sampler.set_image(basic, dim, arrayed, shadow, ms);
    } else {
        sampler.set_combined(basic, dim, arrayed, shadow, ms);
    }
    Some(sampler)
}

/// Opaque types the grammar does not know: the Vulkan-only subpass
/// input and sampler-free texture spellings, which reach the syntax
/// tree as plain type names.
fn named_sampler(name: &str) -> Option<Sampler> {
    let (basic, rest) = if let Some(rest) = name.strip_prefix('i') {
        (BasicType::Int, rest)
    } else if let Some(rest) = name.strip_prefix('u') {
        (BasicType::Uint, rest)
    } else {
        (BasicType::Float, name)
    };

    if let Some(rest) = rest.strip_prefix("subpassInput") {
        let ms = rest == "MS";
        if !ms && !rest.is_empty() {
            return None;
        }
        let mut sampler = Sampler::default();
        sampler.set_subpass(basic, ms);
        return Some(sampler);
    }

    if let Some(rest) = rest.strip_prefix("texture") {
        let (dim, rest) = parse_dim(rest)?;
        let ms = rest.contains("MS");
        let arrayed = rest.contains("Array");
        let mut sampler = Sampler::default();
        sampler.set_texture(basic, dim, arrayed, false, ms);
        return Some(sampler);
    }

    None
}

fn parse_dim(rest: &str) -> Option<(SamplerDim, &str)> {
    if let Some(rest) = rest.strip_prefix("2DRect") {
        return Some((SamplerDim::Rect, rest));
    }
    if let Some(rest) = rest.strip_prefix("1D") {
        return Some((SamplerDim::Dim1D, rest));
    }
    if let Some(rest) = rest.strip_prefix("2D") {
        return Some((SamplerDim::Dim2D, rest));
    }
    if let Some(rest) = rest.strip_prefix("3D") {
        return Some((SamplerDim::Dim3D, rest));
    }
    if let Some(rest) = rest.strip_prefix("Cube") {
        return Some((SamplerDim::Cube, rest));
    }
    if let Some(rest) = rest.strip_prefix("Buffer") {
        return Some((SamplerDim::Buffer, rest));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolKind;

    #[test]
    fn test_populate_prototypes_build_overload_sets() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            "float sin(float angle);vec2 sin(vec2 angle);vec3 sin(vec3 angle);",
        )
        .unwrap();
        let sin = table.find("sin").unwrap();
        assert_eq!(sin.prototypes().len(), 3);
        assert_eq!(sin.prototypes()[1].params[0].vector_size(), 2);
    }

    #[test]
    fn test_populate_variables_and_constants() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            "const int gl_MaxDrawBuffers = 8;highp vec4 gl_Position;",
        )
        .unwrap();
        assert_eq!(
            table.find("gl_MaxDrawBuffers").unwrap().constant_value(),
            Some(8)
        );
        let position = table.find("gl_Position").unwrap().ty().unwrap();
        assert_eq!(position.vector_size(), 4);
        assert_eq!(position.qualifier().precision, Precision::High);
    }

    #[test]
    fn test_populate_block_with_instance_array_sized_by_constant() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            concat!(
                "const int gl_MaxPatchVertices = 32;",
                "in gl_PerVertex {vec4 gl_Position;float gl_PointSize;} gl_in[gl_MaxPatchVertices];",
            ),
        )
        .unwrap();
        let gl_in = table.find("gl_in").unwrap().ty().unwrap();
        assert!(gl_in.is_array());
        let sizes = arena.array_sizes(gl_in.array_sizes_id().unwrap());
        assert_eq!(sizes.outer_size(), Some(32));
        assert_eq!(arena.members(gl_in.members_id().unwrap()).len(), 2);
    }

    #[test]
    fn test_populate_anonymous_block_hoists_members() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            "out gl_PerVertex {vec4 gl_Position;float gl_PointSize;float gl_ClipDistance[];};",
        )
        .unwrap();
        assert!(table.find("gl_Position").is_some());
        let clip = table.find("gl_ClipDistance").unwrap().ty().unwrap();
        assert!(clip.is_array());
        assert_eq!(
            table.find("gl_Position").unwrap().ty().unwrap().qualifier().storage,
            StorageQualifier::VaryingOut
        );
    }

    #[test]
    fn test_populate_struct_type_then_use() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            concat!(
                "struct gl_DepthRangeParameters {float near;float far;float diff;};",
                "uniform gl_DepthRangeParameters gl_DepthRange;",
            ),
        )
        .unwrap();
        let depth_range = table.find("gl_DepthRange").unwrap().ty().unwrap();
        assert!(depth_range.is_struct());
        assert_eq!(
            depth_range.qualifier().storage,
            StorageQualifier::Uniform
        );
        assert_eq!(arena.members(depth_range.members_id().unwrap()).len(), 3);
    }

    #[test]
    fn test_populate_unnamed_out_parameter() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        populate(
            &mut table,
            &mut arena,
            "float frexp(highp float, out highp int);",
        )
        .unwrap();
        let frexp = table.find("frexp").unwrap();
        let SymbolKind::Function { prototypes } = frexp.kind() else {
            panic!("frexp should be a function");
        };
        assert_eq!(prototypes[0].params.len(), 2);
        assert_eq!(
            prototypes[0].params[1].qualifier().storage,
            StorageQualifier::Out
        );
    }

    #[test]
    fn test_populate_unknown_type_name_is_reported() {
        let mut table = SymbolTable::new();
        let mut arena = TypeArena::new();
        let result = populate(&mut table, &mut arena, "void f(mysteryType);");
        assert!(matches!(result, Err(RegistryError::UnknownType(_))));
    }

    #[test]
    fn test_named_sampler_spellings() {
        let subpass = named_sampler("subpassInput").unwrap();
        assert!(subpass.is_subpass());
        let ms = named_sampler("usubpassInputMS").unwrap();
        assert!(ms.ms);
        assert_eq!(ms.basic, BasicType::Uint);

        let texture_buffer = named_sampler("textureBuffer").unwrap();
        assert!(texture_buffer.is_texture());
        assert_eq!(texture_buffer.dim, SamplerDim::Buffer);

        assert!(named_sampler("noSuchThing").is_none());
    }
}
