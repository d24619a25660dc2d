pub mod fish;

pub use fish::Fish;
