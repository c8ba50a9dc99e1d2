//! Infinite carousels.
//!
//! A strip of items rendered as `[clone_last, real_1 .. real_N, clone_first]`
//! looks endless: when scrolling settles on a clone, the controller jumps
//! (without animation) to the real item the clone duplicates.
//!
//! Bounded strips ([`track`]) are the plain variant: they stop at both ends,
//! step by most of a page, and disable the arrow at whichever end is reached.
//!
//! | Piece | Role |
//! |---|---|
//! | [`geometry`] | Pure math: centered index, center offsets, step width, clone mapping |
//! | [`strip`] | [`ScrollStrip`] host trait + [`FixedStrip`] in-memory layout |
//! | [`debounce`] | Last-writer-wins settle timer |
//! | [`controller`] | [`CarouselController`], the state machine |
//! | [`tabs`] | [`TabDisplay`] collaborator + [`TabPanels`] |
//! | [`track`] | [`TrackController`] for bounded strips, [`ButtonState`] |
//! | [`replay`] | Drive a controller through a scripted event sequence |

pub mod controller;
pub mod debounce;
pub mod geometry;
pub mod replay;
pub mod strip;
pub mod tabs;
pub mod track;

pub use controller::{CarouselController, CarouselItem, Direction, LayoutUnavailable, Phase, SettleOutcome};
pub use geometry::{ItemGeometry, Viewport};
pub use replay::{InvalidEvent, Replay, ReplayFrame, StripEvent, TrackFrame, TrackReplay, replay, replay_track};
pub use strip::{FixedStrip, ScrollBehavior, ScrollStrip};
pub use tabs::{TabDisplay, TabPanels};
pub use track::{ButtonState, ScrollTrack, TrackController};
