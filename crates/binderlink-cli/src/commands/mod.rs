pub mod expand;
pub mod filter;
pub mod thread;
