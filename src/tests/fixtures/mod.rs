pub mod credentials;
pub mod instants;
pub mod state;
