// Career blueprint intake: field rules, section composition, the aggregate
// validator and the option catalog it checks enumerated answers against.
// Everything below `handlers` is pure and performs no I/O.

pub mod error;
pub mod handlers;
pub mod models;
pub mod options;
pub mod rules;
pub mod section;
pub mod validator;

pub use error::ValidationErrors;
pub use options::OptionCatalog;
pub use validator::validate_submission;
