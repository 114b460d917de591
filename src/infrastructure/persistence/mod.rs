//! Click store implementations.

mod memory;
mod pg_click_ledger;

pub use memory::MemoryClickLedger;
pub use pg_click_ledger::PgClickLedger;
