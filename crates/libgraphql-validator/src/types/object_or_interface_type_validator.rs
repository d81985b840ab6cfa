use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::Parameter;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        self.validate_implemented_interfaces();
        self.errors
    }

    fn validate_field_types(&mut self) {
        for field in self.type_.fields.values() {
            let field_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            match self.types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field.name().to_string(),
                            input_type_name: field_type_name.to_string(),
                            parent_type_name: self.type_.name.to_string(),
                        }
                    ),

                Some(_) => (),

                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field.type_annotation().ref_location().to_owned(),
                    undefined_type_name: field_type_name.to_string(),
                }),
            }

            for param in field.parameters().values() {
                self.validate_parameter_type(param);
            }
        }
    }

    fn validate_implemented_interfaces(&mut self) {
        let type_name = self.type_.name.as_str();
        for iface_ref in &self.type_.interfaces {
            let iface_name = iface_ref.name();
            let Some(iface_type) = self.types_map.get(iface_name) else {
                self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    type_name: type_name.to_string(),
                    undefined_interface_name: iface_name.to_string(),
                    loc: iface_ref.ref_location().to_owned(),
                });
                continue;
            };

            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    non_interface_type_name: iface_name.to_string(),
                    loc: iface_ref.ref_location().to_owned(),
                });
                continue;
            };

            // Every field of the interface must also be declared on the
            // implementing type, along with every parameter of that field
            // and with an equivalent type.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for (field_name, iface_field) in iface.fields() {
                let Some(type_field) = self.type_.fields.get(field_name) else {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        def_location: self.type_.def_location.to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    });
                    continue;
                };

                for (param_name, iface_param) in iface_field.parameters() {
                    let Some(type_param) = type_field.parameters().get(param_name) else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                def_location: type_field.def_location().to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                missing_parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                        continue;
                    };

                    let expected = iface_param.type_annotation();
                    let actual = type_param.type_annotation();
                    if !actual.is_equivalent_to(expected) {
                        self.errors.push(
                            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                                def_location: type_param.def_location().to_owned(),
                                expected_parameter_type: expected.to_string(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                invalid_parameter_type: actual.to_string(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }
            }
        }
    }

    fn validate_parameter_type(&mut self, param: &Parameter) {
        let param_type_name =
            param.type_annotation()
                .innermost_named_type_annotation()
                .graphql_type_name();
        match self.types_map.get(param_type_name) {
            Some(param_type) if !param_type.is_input_type() =>
                self.errors.push(
                    TypeValidationError::InvalidParameterWithOutputOnlyType {
                        def_location: param.def_location().to_owned(),
                        parameter_name: param.name().to_string(),
                        outputonly_type_name: param_type_name.to_string(),
                    }
                ),

            Some(_) => (),

            None => self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: param.type_annotation().ref_location().to_owned(),
                undefined_type_name: param_type_name.to_string(),
            }),
        }
    }
}
