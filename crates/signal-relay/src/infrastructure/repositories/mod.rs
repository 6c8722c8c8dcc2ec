mod in_memory_signal;

pub use in_memory_signal::InMemorySignalStore;
