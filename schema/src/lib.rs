// Snapdex Schema - Shared type definitions
// This crate contains the data types that cross the engine boundary:
// the classification service produces a CreatureDefinition, the engine
// consumes it, and the persistence store round-trips it.

// Re-export the main types
pub use battle_data::*;
pub use creature_data::*;
pub use creature_types::*;

pub mod battle_data;
pub mod creature_data;
pub mod creature_types;
