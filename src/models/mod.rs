pub mod matches;
pub mod news;
pub mod player;
pub mod team;
