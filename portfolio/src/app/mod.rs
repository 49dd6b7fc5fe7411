pub mod contact;
pub mod hero;
pub mod navigation;
