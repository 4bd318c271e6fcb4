//! Application layer: the workbench shell around the kernel store.

pub mod workbench;

pub use workbench::Workbench;
