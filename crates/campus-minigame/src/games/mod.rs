//! Concrete minigame models.

pub mod catch_ball;
pub mod sort_serve;

pub use catch_ball::CatchBall;
pub use sort_serve::{Flavor, Glass, PourError, SortServe};
