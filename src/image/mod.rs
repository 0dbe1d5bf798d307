pub mod f32;
pub mod frame;
pub mod io;

pub use self::f32::ImageF32;
pub use self::frame::Frame;
