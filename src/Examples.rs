//! examples of usage of SecTanODE
/// solutions, local and global truncation errors
pub mod ivp_error_examples;
