// Core of the random champion picker: ownership records, pool reconciliation,
// the draw loop, the pick ledger and the session loop that ties them together.

pub mod console;
pub mod draw;
pub mod error;
pub mod ledger;
pub mod menu;
pub mod ownership;
pub mod pool;
pub mod role;
pub mod selection;
pub mod session;
pub mod source;
pub mod store;

pub use console::{Console, ScriptedConsole};
pub use draw::DrawOutcome;
pub use error::{PickerError, SelectionError, StoreError};
pub use role::{PlayStyle, Role, Tier};
pub use session::Session;
pub use source::{ChampionSource, FetchError, StaticSource};
pub use store::IniStore;
