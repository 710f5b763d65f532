mod door_state;
mod enter;

pub use door_state::{CloseDoor, OpenDoor};
pub use enter::Enter;
