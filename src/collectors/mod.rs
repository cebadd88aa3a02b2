pub mod btrfs;
pub mod df;
pub mod memory;
pub mod packages;
pub mod processes;
