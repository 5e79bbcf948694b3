pub mod calibrate;
pub mod round;
pub mod score;
