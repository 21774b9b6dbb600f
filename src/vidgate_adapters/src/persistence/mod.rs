pub mod in_memory_identity_store;

pub use in_memory_identity_store::InMemoryIdentityStore;
