//! Transaction-scoped providers over the block store tables.
//!
//! Each provider wraps a borrowed transaction. Read operations are available on any
//! [`DbTx`](reth_db_api::transaction::DbTx), writes need a
//! [`DbTxMut`](reth_db_api::transaction::DbTxMut).

mod block_provider;
pub(crate) use block_provider::BlockProvider;

mod cursor_provider;
pub(crate) use cursor_provider::CursorProvider;
