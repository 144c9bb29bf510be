//! Инфраструктурный слой вокруг движка крэпса:
//! - RNG-реализации `DiceSource`;
//! - конфигурация сессии (дефолты + окружение).

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
