//! addiction-rs: Addiction Solitaire rules engine
//!
//! Goals:
//! - Deterministic play when seeded, for tests and replays
//! - Presentation-agnostic engine: front-ends observe through [`engine::GameObserver`]
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and play a move
//! ```
//! use addiction::engine::EventLog;
//! use addiction::game::{Game, GameConfig, GameStatus, ShuffleLimit};
//!
//! let config = GameConfig { shuffles: ShuffleLimit::Limited(3), seed: Some(42) };
//! let mut game = Game::with_observer(config, EventLog::new());
//! game.new_game().unwrap();
//! assert_eq!(game.board().occupied_count(), 48);
//!
//! if game.selected().is_some() {
//!     game.move_selected_card().unwrap();
//!     assert!(game.moves() == 1 || game.status() != GameStatus::InProgress);
//! }
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin addiction -- --shuffles 3
//! ```

pub mod board;
pub mod cards;
pub mod clock;
pub mod deck;
pub mod engine;
pub mod game;
pub mod history;
pub mod logging;
pub mod navigation;
pub mod rules;
pub mod settings;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
