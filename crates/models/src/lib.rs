pub mod attendance;
pub mod days;
pub mod lesson;
pub mod role;
pub mod time_slot;
