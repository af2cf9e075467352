pub mod bikes;
