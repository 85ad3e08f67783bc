mod response;

pub use response::{exit_code_for_error, print_error};
