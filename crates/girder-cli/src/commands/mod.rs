pub mod architectures;
pub mod new;
