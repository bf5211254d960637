pub mod asset;
pub mod catalog;
pub mod config;
pub mod db;
pub mod encode;
pub mod error;
pub mod fabricate;
pub mod generator;
pub mod logger;
