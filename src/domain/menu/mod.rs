// ============================================================
// MENU DOMAIN LAYER
// ============================================================
// Records ingested from the menu dataset and the typed view the
// batch job works with. No I/O, no async.

mod menu_item;
mod menu_record;

pub use menu_item::MenuItem;
pub use menu_record::{MenuField, MenuRecord};
