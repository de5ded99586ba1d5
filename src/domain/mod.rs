// Pain & trend analyzer
pub mod analysis;

// Pain classification
pub mod pain;

// Records and backend wire types
pub mod records;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
