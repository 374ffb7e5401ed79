pub(crate) mod matches;
pub(crate) mod news;
pub(crate) mod players;
pub(crate) mod teams;
