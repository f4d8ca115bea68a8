pub mod release;
pub mod tierlist;
