pub mod enums;
pub mod normalize;
