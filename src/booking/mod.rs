pub mod confirmation;
pub mod form;
pub mod ids;
pub mod lookup;
pub mod pricing;
pub mod submit;
