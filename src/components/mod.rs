// Export components
pub mod ctftime;
pub mod scheduled_events;

// Re-export the CTFtime handle
pub use ctftime::CtftimeHandle;
