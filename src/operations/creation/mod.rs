mod create_maze;

pub use create_maze::CreateMaze;
