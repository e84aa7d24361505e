//! Quote manager engine: storage, remote sync and effect execution.
mod engine;
mod export;
mod fetch;
mod persist;
mod schedule;
mod storage;
mod store;
mod types;

pub use engine::{EngineConfig, EngineError, EngineHandle, DEFAULT_SYNC_PERIOD};
pub use export::{export_quotes, read_import_file, ExportError, EXPORT_FILENAME};
pub use fetch::{FetchSettings, RemoteSource, ReqwestRemote, DEFAULT_ENDPOINT};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use schedule::PeriodicTask;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use store::{QuoteStore, SessionStore, FILTER_KEY, LAST_VIEWED_KEY, QUOTES_KEY};
pub use types::{EngineEvent, FailureKind, FetchError, RemoteRecord, SyncCycle};
