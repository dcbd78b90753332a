mod common;
mod tables;
