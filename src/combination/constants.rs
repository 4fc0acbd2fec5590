// Bounds of the digit alphabet and of the combination sizes
pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 9;
pub const MAX_DIGIT: u8 = 9;
pub const DIGIT_COUNT: u64 = 10;
