pub mod ast;
mod file_reader;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod suggestion;
pub mod types;
pub mod validation;

pub use file_reader::ReadContentError;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use validation::Diagnostic;
pub use validation::validate;
pub use validation::Validator;
