pub mod editor;
pub mod frames;
pub mod scanner;
