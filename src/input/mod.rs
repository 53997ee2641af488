pub mod dispatcher;
pub mod hover;

pub use dispatcher::handle_input;
pub use hover::HoverTracker;
