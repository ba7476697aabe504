pub mod city;
pub mod density;
pub mod shift;
pub mod specialization;
pub mod staffing;
pub mod transport;
pub mod visit;
