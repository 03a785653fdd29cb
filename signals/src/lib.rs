/*!
Reactive value cells with optional, transparently encrypted persistence.

A [`Signal`] holds exactly one value. [`Get`] reads it synchronously,
[`Signal::set`] and [`Signal::update`] replace it, and [`Subscribe`] registers
zero-argument listeners that run after every change. A change is detected by
strict identity ([`Same`]): primitives compare by value, `Arc`-shared
composites by pointer. Setting the same value again does nothing.

# Basic usage

```rust
use keepsake_signals::*;
use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};

let count = Signal::new(0);
let renders = Arc::new(AtomicUsize::new(0));
let subscription = {
    let renders = renders.clone();
    count.subscribe(move || { renders.fetch_add(1, Ordering::SeqCst); })
};

count.set(1);
count.update(|n| n + 1);
count.set(2); // unchanged, no notification
assert_eq!(count.get(), 2);
assert_eq!(renders.load(Ordering::SeqCst), 2);

subscription.unsubscribe();
count.set(3);
assert_eq!(renders.load(Ordering::SeqCst), 2);
```

# Persistence

With a persist key, the signal loads its slot once at construction and
writes it after every change, before listeners run. Persistence is best
effort: failures are logged with `tracing` and never reach the caller, and
the in-memory value is always authoritative.

```rust
use keepsake_signals::*;
use keepsake_storage::MemoryStore;
use std::sync::Arc;

let store = Arc::new(MemoryStore::new());
let options = SignalOptions::new().persist_key("counter").store(store.clone());

let counter = Signal::with_options(0, options.clone());
counter.set(5);

let reloaded = Signal::with_options(999, options);
assert_eq!(reloaded.get(), 5);
```

Encrypted signals seal the stored payload with the given secret, the
`KEEPSAKE_SECRET` environment variable, or the embedded
[`DEFAULT_SECRET`](keepsake_codec::DEFAULT_SECRET), in that order. The
embedded default is public and only obfuscates.

# Threading

Listeners run synchronously on the thread that made the change, with no
internal lock held, so a listener may read, set, subscribe or unsubscribe the
same signal. Concurrent writers to one signal are not ordered; callers
serialize them if they care. The store write happens under the value's write
lock, so whichever change lands last in memory is also the one left in the
slot. Notifications from concurrent writers may still interleave.
*/

mod broadcast;
mod config;
mod error;
mod options;
mod persistence;
mod same;
mod signal;
mod subscription;
mod traits;
mod value;

pub use broadcast::{IntoListener, Listener};
pub use config::*;
pub use error::*;
pub use options::*;
pub use same::*;
pub use signal::*;
pub use subscription::*;
pub use traits::*;
