pub mod batch;
pub mod convert;
pub mod inspect;
