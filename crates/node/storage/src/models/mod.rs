//! Database table schemas used by the block store.
//!
//! The tables are registered using [`reth_db_api::table::TableInfo`] and grouped into a
//! [`reth_db_api::TableSet`] for database initialization via Reth's storage-api.

mod codec;

mod block;
pub use block::{BlockHashes, Blocks, StoredBlock, StoredHeight};

mod cursor;
pub use cursor::{CursorKey, Cursors};

/// Implements [`reth_db_api::table::TableInfo`] for one or more table types that implement
/// [`reth_db_api::table::Table`].
///
/// # Example
/// ```ignore
/// impl_table_info!(Blocks, Cursors);
/// ```
macro_rules! impl_table_info {
    ($($table:ty),+ $(,)?) => {
        $(
            impl reth_db_api::table::TableInfo for $table
            where
                $table: reth_db_api::table::Table,
            {
                fn name(&self) -> &'static str {
                    <$table as reth_db_api::table::Table>::NAME
                }

                fn is_dupsort(&self) -> bool {
                    <$table as reth_db_api::table::Table>::DUPSORT
                }
            }
        )+
    };
}

/// Declares a struct representing a collection of tables and implements [`reth_db_api::TableSet`]
/// for it, so it can be passed to `init_db_for::<_, YourTableSet>()`.
macro_rules! impl_table_set {
    (
        $(#[$outer:meta])*
        $set_name:ident, $($table:ty),+ $(,)?
    ) => {
        $(#[$outer])*
        #[derive(Debug)]
        pub(crate) struct $set_name;

        impl reth_db_api::TableSet for $set_name {
            fn tables() -> Box<dyn Iterator<Item = Box<dyn reth_db_api::table::TableInfo>>> {
                Box::new(vec![
                    $(
                        Box::new(<$table>::default()) as Box<dyn reth_db_api::table::TableInfo>
                    ),*
                ].into_iter())
            }
        }
    };
}

impl_table_info!(Blocks, BlockHashes, Cursors);

impl_table_set!(
    /// Every table of the block store.
    Tables,
    Blocks,
    BlockHashes,
    Cursors
);
