mod arrow;
mod square;

pub use arrow::render_arrow;
pub use square::render_square;
