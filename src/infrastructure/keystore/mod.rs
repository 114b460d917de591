//! Key-value store client implementations.

mod memory;
mod redis_key_store;

pub use memory::MemoryKeyStore;
pub use redis_key_store::RedisKeyStore;
