pub mod clock;
pub mod config;
pub mod employee;
pub mod init;
pub mod log;
pub mod reset;
pub mod status;
