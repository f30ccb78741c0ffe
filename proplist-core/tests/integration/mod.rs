mod memory_store;
mod sync_engine_tests;
