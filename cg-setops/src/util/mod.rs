mod config;
mod fpa;

#[doc(inline)]
pub use config::MbcConfig;
#[doc(inline)]
pub use fpa::FPA;
