pub mod error;
pub mod interrupt;
pub mod outputs;
pub mod sliding_window;
pub mod stream_processor;
