mod walker;

pub use walker::walk;
