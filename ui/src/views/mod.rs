mod home;
pub use home::Home;

mod manage_event;
pub use manage_event::ManageEvent;
