//! Artifact emission: the virtual-module source text and the TypeScript
//! declaration file.

pub mod declaration;
pub mod module;
