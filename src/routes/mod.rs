pub mod matches;
pub mod news;
pub mod players;
pub mod teams;
