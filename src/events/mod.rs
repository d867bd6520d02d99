//! # Events Module
//!
//! Progress reporting over a channel, so the scanner stays UI-agnostic.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Scan(ScanEvent::FileHashed { path, .. }) = event {
//!             println!("hashed {}", path.display());
//!         }
//!     }
//! });
//!
//! finder.run_with_events(&root, &sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
