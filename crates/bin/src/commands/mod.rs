//! Command implementations, one module per subcommand.

pub mod amend;
pub mod checkout;
pub mod labels;
pub mod log;
pub mod verify;
