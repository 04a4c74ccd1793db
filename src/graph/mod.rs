pub mod cycle;
pub mod walk;
