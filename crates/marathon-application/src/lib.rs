pub mod usecase;


pub use crate::usecase::MarathonUseCase;
