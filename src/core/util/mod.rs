pub mod available_threads;
pub mod partition_bands;
