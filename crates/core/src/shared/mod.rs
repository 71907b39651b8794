pub mod constants;
pub mod face_box;
pub mod point;
pub mod segment;
