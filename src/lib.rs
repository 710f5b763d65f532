pub mod error;
pub mod factory;
pub mod maze;
pub mod operations;
pub mod site;

pub use error::{MazeError, Result};
pub use factory::{EnchantedMazeFactory, MazeFactory, StandardMazeFactory};
pub use maze::Maze;
