pub mod board;
pub mod health;
pub mod index;
pub mod puzzles;
