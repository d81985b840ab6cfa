mod fields_on_correct_type;

pub use fields_on_correct_type::FieldSelectionError;
pub use fields_on_correct_type::FieldsOnCorrectType;
