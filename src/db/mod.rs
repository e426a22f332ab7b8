pub mod db;
pub mod entries;
pub mod migrations;
