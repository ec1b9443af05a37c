// Application layer - use-case interactors over injected ports

pub mod clip_interactor;

pub use clip_interactor::ClipInteractor;
