pub mod display_factory;
