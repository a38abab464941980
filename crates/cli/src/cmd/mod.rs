mod generate;
mod render;

pub use generate::cmd_generate;
pub use render::cmd_render;
