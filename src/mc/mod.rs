pub mod mc_engine;
pub mod path_generator;
pub mod payoffs;
