pub mod vegetation;
pub mod logger;
