pub mod alternative;
pub mod feedback;
pub mod hearing;
