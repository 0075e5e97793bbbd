pub mod app {
    pub mod routes;
}
pub mod error;
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
