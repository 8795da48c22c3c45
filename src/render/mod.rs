pub mod context;
pub mod environment;
pub mod file;
pub mod functions;

pub use context::build_context;
pub use environment::load_environment;
pub use file::render_template;
