pub mod consumer;
pub mod observer;
pub mod producer;

pub use consumer::Consumer;
pub use observer::Observer;
pub use producer::Producer;
