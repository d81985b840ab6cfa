use crate::ast;
use crate::schema::GraphQLOperationType;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::FragmentRegistry;

/// The type that selections at some point in a document are made against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypeContext<'schema> {
    Known(&'schema GraphQLType),
    /// The enclosing type could not be determined (an unknown field, an
    /// undefined type condition, a missing root type, ...). Nothing below an
    /// `Unknown` context is type-checked.
    Unknown,
}
impl<'schema> TypeContext<'schema> {
    pub fn graphql_type(&self) -> Option<&'schema GraphQLType> {
        match self {
            Self::Known(type_) => Some(type_),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}
impl<'schema> std::convert::From<Option<&'schema GraphQLType>> for TypeContext<'schema> {
    fn from(value: Option<&'schema GraphQLType>) -> Self {
        match value {
            Some(type_) => Self::Known(type_),
            None => Self::Unknown,
        }
    }
}

/// Tracks the [`TypeContext`] of the node currently being visited during a
/// document traversal.
///
/// Every `enter_*` method pushes exactly one context and every one of them
/// is undone by a single call to [`TypeInfo::leave()`]. Fragment spreads are
/// resolved to their fragment's type condition but never expanded, so
/// cyclic fragments cannot cause unbounded traversal.
#[derive(Debug)]
pub struct TypeInfo<'schema> {
    schema: &'schema Schema,
    type_stack: Vec<TypeContext<'schema>>,
}
impl<'schema> TypeInfo<'schema> {
    /// The context selections are currently made against, or
    /// [`TypeContext::Unknown`] outside of any definition.
    pub fn current_type(&self) -> TypeContext<'schema> {
        self.type_stack
            .last()
            .copied()
            .unwrap_or(TypeContext::Unknown)
    }

    pub fn depth(&self) -> usize {
        self.type_stack.len()
    }

    /// Enter a field selected against the current context and push the
    /// named type its sub-selections are made against.
    pub fn enter_field(&mut self, field: &ast::operation::Field) {
        let field_type = self.field_return_type(self.current_type(), &field.name);
        self.type_stack.push(field_type);
    }

    pub fn enter_fragment_definition(
        &mut self,
        fragment: &ast::operation::FragmentDefinition,
    ) {
        let type_condition = self.type_condition_type(&fragment.type_condition);
        self.type_stack.push(type_condition);
    }

    pub fn enter_fragment_spread(
        &mut self,
        spread: &ast::operation::FragmentSpread,
        fragments: &FragmentRegistry<'_>,
    ) {
        let spread_type = match fragments.get(&spread.fragment_name) {
            Some(fragment) => self.type_condition_type(&fragment.type_condition),
            None => TypeContext::Unknown,
        };
        self.type_stack.push(spread_type);
    }

    /// An inline fragment without a type condition inherits the enclosing
    /// context.
    pub fn enter_inline_fragment(
        &mut self,
        inline_fragment: &ast::operation::InlineFragment,
    ) {
        let fragment_type = match &inline_fragment.type_condition {
            Some(type_condition) => self.type_condition_type(type_condition),
            None => self.current_type(),
        };
        self.type_stack.push(fragment_type);
    }

    pub fn enter_operation_definition(
        &mut self,
        operation: &ast::operation::OperationDefinition,
    ) {
        let operation_type = match operation {
            ast::operation::OperationDefinition::Mutation(_) =>
                GraphQLOperationType::Mutation,
            ast::operation::OperationDefinition::Query(_)
                | ast::operation::OperationDefinition::SelectionSet(_) =>
                GraphQLOperationType::Query,
            ast::operation::OperationDefinition::Subscription(_) =>
                GraphQLOperationType::Subscription,
        };

        let root_type = self.schema
            .root_operation_type(operation_type)
            .and_then(|obj_type| self.schema.get_type(obj_type.name()));
        if root_type.is_none() {
            log::trace!(
                "The schema defines no {operation_type} root type; fields of \
                this operation will not be type-checked.",
            );
        }
        self.type_stack.push(root_type.into());
    }

    /// The context a field named `field_name` selected against
    /// `parent_type` resolves to.
    ///
    /// `__typename` resolves to `String`. Introspection types are not
    /// modeled, so `__schema` and `__type` resolve to
    /// [`TypeContext::Unknown`]. So does any field selected against a union,
    /// a leaf type or an unknown context.
    pub fn field_return_type(
        &self,
        parent_type: TypeContext<'schema>,
        field_name: &str,
    ) -> TypeContext<'schema> {
        let TypeContext::Known(parent_type) = parent_type else {
            return TypeContext::Unknown;
        };

        if field_name == "__typename" {
            return if parent_type.is_composite() {
                self.schema.get_type("String").into()
            } else {
                TypeContext::Unknown
            };
        }

        parent_type.fields()
            .and_then(|fields| fields.get(field_name))
            .and_then(|field| field.return_type(self.schema))
            .into()
    }

    pub fn leave(&mut self) {
        self.type_stack.pop();
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
        }
    }

    fn type_condition_type(
        &self,
        type_condition: &ast::operation::TypeCondition,
    ) -> TypeContext<'schema> {
        let ast::operation::TypeCondition::On(type_name) = type_condition;
        self.schema.get_type(type_name).into()
    }
}
