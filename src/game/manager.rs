//! The game state manager.
//!
//! `MemoryGame` owns the board and is the only thing that mutates it. A host
//! (any renderer) drives it with three calls:
//!
//! - `start_new_game` / `restart` / `set_pair_count` to deal
//! - `select_card` for each tap
//! - `advance` to move time forward so opened pairs resolve
//!
//! and reads back through `state`, `snapshot`, or subscribed events.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{GameConfig, MemoryGame, SelectOutcome};
//!
//! let mut game = MemoryGame::new(GameConfig::new().with_seed(7)).unwrap();
//! game.start_new_game(2).unwrap();
//! assert_eq!(game.state().len(), 4);
//!
//! assert!(matches!(game.select_card(0), SelectOutcome::Revealed { index: 0 }));
//! assert!(game.select_card(1).ticket().is_some());
//! assert_eq!(game.state().moves(), 1);
//!
//! game.advance(Duration::from_millis(650));
//! assert!(!game.state().is_evaluating());
//! ```

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::outcome::{IgnoreReason, ResolutionOutcome, ResolutionTicket, SelectOutcome};
use super::timer::ResolutionTimer;
use crate::cards::{deal, Card, Symbol, SymbolAlphabet};
use crate::core::config::{GameConfig, PairCount};
use crate::core::entity::CardIdAllocator;
use crate::core::error::Result;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{GameState, GameStats};
use crate::events::{EventBus, GameEvent, SubscriptionId};

/// Owns one memory-matching board and applies every state transition.
#[derive(Debug)]
pub struct MemoryGame {
    config: GameConfig,
    alphabet: SymbolAlphabet,
    state: GameState,
    rng: GameRng,
    ids: CardIdAllocator,
    timer: ResolutionTimer,
    events: EventBus,
}

impl MemoryGame {
    /// Create a manager using the default emoji alphabet.
    ///
    /// No board is dealt until `start_new_game` or `restart` is called.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_alphabet(config, SymbolAlphabet::default())
    }

    /// Create a manager dealing from `alphabet`.
    ///
    /// Fails with `GameError::Configuration` if the alphabet cannot cover
    /// every pair count the config offers.
    pub fn with_alphabet(config: GameConfig, alphabet: SymbolAlphabet) -> Result<Self> {
        if let Err(err) = config.validate(&alphabet) {
            warn!(error = %err, "rejected game configuration");
            return Err(err);
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            config,
            alphabet,
            state: GameState::empty(),
            rng,
            ids: CardIdAllocator::new(),
            timer: ResolutionTimer::new(),
            events: EventBus::new(),
        })
    }

    // === Dealing ===

    /// Deal a fresh board of `pair_count` pairs (clamped to at least 2).
    ///
    /// Discards the previous board entirely, including any pair still
    /// waiting to resolve. On error the previous board is left as it was.
    pub fn start_new_game(&mut self, pair_count: u32) -> Result<()> {
        let pairs = PairCount::clamped(pair_count);
        let cards = match deal(&self.alphabet, pairs, &mut self.rng, &mut self.ids) {
            Ok(cards) => cards,
            Err(err) => {
                warn!(error = %err, requested = pair_count, "cannot deal new game");
                return Err(err);
            }
        };

        self.install(GameState::dealt(cards, pairs, self.state.generation().next()));
        Ok(())
    }

    /// Deal a new board with the configured pair count ("New Game").
    pub fn restart(&mut self) -> Result<()> {
        self.start_new_game(self.config.pair_count.get())
    }

    /// Change the configured pair count and deal a board with it.
    ///
    /// The configuration only changes if the deal succeeds.
    pub fn set_pair_count(&mut self, pair_count: u32) -> Result<()> {
        self.start_new_game(pair_count)?;
        self.config.pair_count = PairCount::clamped(pair_count);
        Ok(())
    }

    /// Deal a board laid out exactly as `layout`, face-down.
    ///
    /// Every symbol must appear exactly twice and the board must hold at
    /// least [`PairCount::MIN`] pairs. Used to replay a known board. On error
    /// the current board is left as it was.
    pub fn start_with_layout(&mut self, layout: impl IntoIterator<Item = Symbol>) -> Result<()> {
        let cards = layout
            .into_iter()
            .map(|symbol| Card::new(self.ids.alloc(), symbol))
            .collect();
        let state = GameState::laid_out(cards, self.state.generation().next())?;
        state.check_invariants()?;

        self.install(state);
        Ok(())
    }

    fn install(&mut self, state: GameState) {
        self.timer.cancel();
        self.state = state;

        debug!(
            generation = %self.state.generation(),
            pair_count = self.state.pair_count(),
            "dealt new game"
        );
        self.events.emit(&GameEvent::GameStarted {
            generation: self.state.generation(),
            pair_count: self.state.pair_count(),
        });
    }

    // === Taps ===

    /// Process a tap on the card at `index`.
    ///
    /// Taps on missing, matched, or face-up cards, and any tap while a pair
    /// is resolving, are ignored and leave the state untouched.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        if let Some(reason) = self.ignore_reason(index) {
            trace!(index, ?reason, "ignored tap");
            return SelectOutcome::Ignored(reason);
        }

        match self.state.pending_first() {
            None => {
                self.state.open_first(index);
                debug!(index, "revealed first card");
                self.emit_revealed(index);
                SelectOutcome::Revealed { index }
            }
            Some(first) => {
                let moves = self.state.open_second(index);
                let ticket = self.timer.schedule(
                    self.state.generation(),
                    first,
                    index,
                    self.config.resolve_delay,
                );
                debug!(first, second = index, moves, due = ?ticket.due, "pair opened");

                self.emit_revealed(index);
                self.events.emit(&GameEvent::PairAttempted {
                    first,
                    second: index,
                    moves,
                });
                SelectOutcome::PairPending(ticket)
            }
        }
    }

    fn ignore_reason(&self, index: usize) -> Option<IgnoreReason> {
        let Some(card) = self.state.card(index) else {
            return Some(IgnoreReason::OutOfRange);
        };

        if self.state.is_evaluating() {
            Some(IgnoreReason::Busy)
        } else if card.is_selectable() {
            None
        } else if card.matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if self.state.pending_first() == Some(index) {
            Some(IgnoreReason::SameCard)
        } else {
            Some(IgnoreReason::AlreadyFaceUp)
        }
    }

    fn emit_revealed(&mut self, index: usize) {
        if let Some(card) = self.state.card(index) {
            let event = GameEvent::CardRevealed {
                index,
                card: card.clone(),
            };
            self.events.emit(&event);
        }
    }

    // === Resolution ===

    /// Move the game clock forward, resolving the open pair once it is due.
    ///
    /// Returns the resolution if one fired.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ResolutionOutcome> {
        let ticket = self.timer.advance(elapsed)?;
        Some(self.settle(ticket))
    }

    /// Apply a resolution ticket directly, ignoring the clock.
    ///
    /// For hosts that run their own timer. Tickets from an earlier game, or
    /// that were already resolved, return `ResolutionOutcome::Stale`.
    pub fn resolve(&mut self, ticket: &ResolutionTicket) -> ResolutionOutcome {
        if ticket.generation != self.state.generation() {
            trace!(
                ticket = %ticket.generation,
                current = %self.state.generation(),
                "discarded resolution from earlier game"
            );
            return ResolutionOutcome::Stale;
        }

        match self.timer.take_matching(ticket) {
            Some(ticket) => self.settle(ticket),
            None => {
                trace!(first = ticket.first, second = ticket.second, "resolution already applied");
                ResolutionOutcome::Stale
            }
        }
    }

    /// Resolve the open pair now, without waiting for the delay.
    pub fn resolve_pending(&mut self) -> Option<ResolutionOutcome> {
        let ticket = self.timer.take()?;
        Some(self.settle(ticket))
    }

    /// The pair waiting to resolve, if any.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<&ResolutionTicket> {
        self.timer.pending()
    }

    fn settle(&mut self, ticket: ResolutionTicket) -> ResolutionOutcome {
        if ticket.generation != self.state.generation() {
            return ResolutionOutcome::Stale;
        }

        let (first, second) = (ticket.first, ticket.second);
        if self.state.settle(first, second) {
            let matched_pairs = self.state.matched_pairs();
            let won = self.state.is_won();
            debug!(first, second, matched_pairs, won, "pair matched");

            self.events.emit(&GameEvent::PairMatched {
                first,
                second,
                matched_pairs,
            });
            if won {
                self.events.emit(&GameEvent::GameWon {
                    moves: self.state.moves(),
                });
            }
            ResolutionOutcome::Matched { first, second, won }
        } else {
            debug!(first, second, "pair mismatched");
            self.events.emit(&GameEvent::PairMismatched { first, second });
            ResolutionOutcome::Mismatched { first, second }
        }
    }

    // === Read access ===

    /// Current board, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the board. Cheap: cards are a persistent vector.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Move and match counters.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.state.stats()
    }

    /// All pairs found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Symbols this manager deals from.
    #[must_use]
    pub fn alphabet(&self) -> &SymbolAlphabet {
        &self.alphabet
    }

    /// RNG position, enough to reproduce the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Subscriptions ===

    /// Call `listener` for every event from now on.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Stop delivering events to a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
