//! Доменная модель крэпса: фишки, игрок, лимиты, бросок, фазы раунда.

pub mod chips;
pub mod limits;
pub mod player;
pub mod roll;
pub mod round;

// Номер раунда внутри сессии.
pub type RoundId = u64;

pub use chips::*;
pub use limits::*;
pub use player::*;
pub use roll::*;
pub use round::*;
