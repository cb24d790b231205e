mod session;
mod viewport;

pub use session::Session;
pub use viewport::Viewport;
