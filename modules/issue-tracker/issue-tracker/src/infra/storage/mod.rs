pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

#[cfg(test)]
mod mapper_test;

pub use db::connect;
pub use sea_orm_repo::SeaOrmIssuesRepository;
