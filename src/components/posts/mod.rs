mod action;
mod reducer;
mod state;

pub use action::PostAction;
pub use reducer::reduce;
pub use state::State;
