mod reducer;

pub use reducer::{reduce, AuthAction, AuthState};
