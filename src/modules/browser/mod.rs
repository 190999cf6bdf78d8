pub mod category;
pub mod middleware;
pub mod routes;
pub mod template;
