// Domain types and value objects
pub mod date_window;
pub mod symbol;
pub mod timeframe;

// Re-export commonly used types
pub use date_window::DateWindow;
pub use symbol::MarketSymbol;
pub use timeframe::Timeframe;
