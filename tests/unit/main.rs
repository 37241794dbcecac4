// Unit tests for the Markdown tools
//
// Organized by component:
// - mock_api: in-memory BinanceApi double shared by every module
// - formatter: Markdown formatting utilities
// - market: announcements and tickers (public endpoints)
// - account: spot, futures and margin tools
// - wallet: deposit address, deposit and withdrawal history
// - portfolio: asset distribution snapshot

pub mod mock_api;

pub mod formatter_tests;
pub mod market_tests;
pub mod portfolio_tests;
