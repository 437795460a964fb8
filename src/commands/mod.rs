pub mod add;
pub mod day;
pub mod delete;
pub mod edit;
pub mod export;
pub mod month;
