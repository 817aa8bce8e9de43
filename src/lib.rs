pub mod corpus;
pub mod download;
pub mod error;
pub mod lang;
pub mod tables;
pub mod update;
pub mod version;
