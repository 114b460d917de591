//! Repository traits decoupling the domain from storage backends.

mod click_ledger;
mod key_store;

pub use click_ledger::ClickLedger;
pub use key_store::KeyStore;

#[cfg(test)]
pub use click_ledger::MockClickLedger;
#[cfg(test)]
pub use key_store::MockKeyStore;
