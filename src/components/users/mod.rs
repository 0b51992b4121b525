mod reducer;

pub use reducer::{reduce, UsersAction, UsersState};
