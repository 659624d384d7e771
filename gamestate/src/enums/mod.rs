//! Closed sets of symbolic values the game reports (characters, stages, menus, actions, and so
//! on).
//!
//! Raw values from the producer are converted with `From<uN>`; anything outside the known set
//! becomes that enum's "unknown" variant rather than failing.
//!
//! Deserializing is stricter. The serde impls come from `serde_repr`, which errors on a number
//! outside the set instead of falling back to "unknown", so serialized snapshots only round trip
//! values that were already known when written.

mod action;
pub use action::Action;

mod character;
pub use character::Character;

mod controller_status;
pub use controller_status::ControllerStatus;

mod menu;
pub use menu::{Menu, SubMenu};

mod projectile_type;
pub use projectile_type::ProjectileType;

mod stage;
pub use stage::Stage;
