//=========================================================================
// World
//=========================================================================
//
// Entity storage and the possessable capability.
//
// Architecture:
//   World
//     └─ entities: HashMap<EntityId, Box<dyn Possessable>>
//          ├─ Dark     (EntityKind::Fallback)
//          └─ PushBox  (EntityKind::Standard)
//
//=========================================================================

//=== Module Declarations =================================================

mod entities;
mod eye;
mod possessable;
mod store;
mod template;

//=== Public API ==========================================================

pub use entities::{BodyType, Dark, DarkBody, PushBox};
pub use eye::Eye;
pub use possessable::{DeathOutcome, EntityId, EntityKind, Possessable};
pub use store::World;
pub use template::{DarkTemplate, FallbackTemplate};
