pub mod hostinfo;
pub mod models;
pub mod openapi;
pub mod routes;
