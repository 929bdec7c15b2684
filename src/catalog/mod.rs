//! Catalog codec - parse and render PO-style catalog text.
//!
//! Decoding scans lines for anchored `msgid "<text>"` / `msgstr "<text>"`
//! pairs and is deliberately lenient: lines that match neither pattern, and
//! `msgstr` lines with no pending `msgid`, are skipped silently. Malformed
//! input lowers the emitted pair count; it never raises an error. Encoding
//! renders one `msgid` line per message in document order.
//!
//! ## Example
//!
//! ```
//! let text = "msgid \"Hello\"\nmsgstr \"Hola\"\n# comment\nmsgid \"Bye\"\nmsgstr \"Adios\"\n";
//! let pairs: Vec<_> = poboard::catalog::decode(text).collect();
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[0].source, "Hello");
//! assert_eq!(pairs[1].target, "Adios");
//! ```

mod decode;
mod encode;

pub use decode::{decode, Pair, Pairs};
pub use encode::encode;
