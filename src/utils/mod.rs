pub mod debounce;
pub mod palette;
