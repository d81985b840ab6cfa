use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

impl ObjectType {
    /// Whether this object type directly declares that it implements the
    /// interface with the given name.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    /// The [`InterfaceType`]s implemented by this [`ObjectType`], in the order
    /// they were declared.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.0.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(schema).ok())
            .filter_map(|iface_type| iface_type.as_interface())
            .collect()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`loc::SourceLocation`] indicating where this [`ObjectType`] was
    /// defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.0.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the [`ObjectType`] in
    /// the schema. Diagnostics that list field names rely on this ordering.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all [`InterfaceType`]s implemented by this [`ObjectType`].
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
