pub mod file_state;
pub mod inmemory_repo;
