pub mod runners;
