pub mod db;
pub mod item {
    pub mod entity;
    pub mod query;
    pub mod repository;
}
