pub mod check;
mod command_result;
pub mod generate;
pub mod helper;
pub mod init;

pub use command_result::*;
