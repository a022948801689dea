pub mod reg;
pub mod template;
pub mod width;
