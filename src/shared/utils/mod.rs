// Utility functions
// Browser glue (no-ops off the browser)

pub mod dom;
