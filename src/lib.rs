pub mod argument_parsing;
pub mod db;
pub mod error;
pub mod postgres_queries;
pub mod report;
pub mod shared_queries;
pub mod sqlite_queries;
