pub mod catalogue;
pub mod normalize;
