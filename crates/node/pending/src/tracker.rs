//! The pending header tracker.

use crate::{Metrics, PendingHeadersError, PendingRange};
use rollnode_primitives::SignedHeader;
use rollnode_storage::{BlockStorageReader, StorageError, SubmissionProgressStorage};
use std::{
    iter::FusedIterator,
    ops::RangeInclusive,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, error, info, warn};

/// Tracks which stored headers still have to be submitted to the data availability layer.
///
/// The tracker owns the last submitted height. The store owns the height cursor. Everything
/// in between is pending. The in-memory copy of the last submitted height is guarded by a
/// mutex, and the store height is read while that mutex is held, so every range handed out
/// is consistent with both cursors at one instant.
///
/// Share it behind an [`Arc`]; it is [`Send`] and [`Sync`] whenever the store is.
#[derive(Debug)]
pub struct PendingHeaders<S> {
    store: Arc<S>,
    last_submitted: Mutex<u64>,
}

impl<S> PendingHeaders<S>
where
    S: BlockStorageReader + SubmissionProgressStorage,
{
    /// Creates a tracker over `store`, resuming from the persisted last submitted height.
    pub fn new(store: Arc<S>) -> Result<Self, PendingHeadersError> {
        let confirmed = store.last_submitted_height().inspect_err(|err| {
            error!(target: "pending_headers", %err, "Failed to load last submitted height");
        })?;
        let height = store.height();
        if confirmed > height {
            error!(
                target: "pending_headers",
                confirmed,
                height,
                "Last submitted height is above the store height"
            );
            return Err(PendingHeadersError::InconsistentState { confirmed, height });
        }

        let tracker = Self { store, last_submitted: Mutex::new(confirmed) };
        let range = tracker.pending_range();
        info!(target: "pending_headers", last_submitted = confirmed, height, pending = range.len(), "Loaded pending headers");
        Metrics::record_range(&range);
        Ok(tracker)
    }

    /// The last submitted height only changes inside [`Self::mark_submitted`], which never
    /// leaves it half updated, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.last_submitted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the range of heights that are stored but not yet submitted.
    pub fn pending_range(&self) -> PendingRange {
        let confirmed = self.lock();
        PendingRange::new(confirmed.saturating_add(1), self.store.height())
    }

    /// Returns an iterator over the pending headers in increasing height order.
    ///
    /// The range is captured when this is called; headers stored afterwards are picked up
    /// by the next call. Headers are loaded lazily, one store read per item. The iterator
    /// ends after the first error and never skips a height.
    pub fn pending_headers(&self) -> PendingHeadersIter<S> {
        let range = self.pending_range();
        debug!(target: "pending_headers", %range, "Iterating pending headers");
        PendingHeadersIter { store: Arc::clone(&self.store), heights: range.heights(), done: false }
    }

    /// Collects every pending header, failing on the first missing or unreadable one.
    pub fn get_pending_headers(&self) -> Result<Vec<SignedHeader>, PendingHeadersError> {
        self.pending_headers().collect()
    }

    /// Records that every header up to and including `up_to` was submitted.
    ///
    /// `up_to` must lie in `[last_submitted_height, store height]`; marking the current last
    /// submitted height again is a no-op. The new height is persisted before the in-memory
    /// copy moves, so a failed write leaves the tracker unchanged.
    pub fn mark_submitted(&self, up_to: u64) -> Result<(), PendingHeadersError> {
        let mut confirmed = self.lock();
        let height = self.store.height();

        if up_to < *confirmed || up_to > height {
            warn!(
                target: "pending_headers",
                requested = up_to,
                confirmed = *confirmed,
                height,
                "Rejected submitted height outside the pending range"
            );
            return Err(PendingHeadersError::InvalidSubmittedHeight {
                requested: up_to,
                confirmed: *confirmed,
                height,
            });
        }
        if up_to == *confirmed {
            debug!(target: "pending_headers", height = up_to, "Headers already marked as submitted");
            return Ok(());
        }

        self.store.set_last_submitted_height(up_to).inspect_err(|err| {
            error!(target: "pending_headers", height = up_to, %err, "Failed to persist last submitted height");
        })?;
        let previous = core::mem::replace(&mut *confirmed, up_to);

        let range = PendingRange::new(up_to.saturating_add(1), height);
        info!(
            target: "pending_headers",
            from = previous.saturating_add(1),
            to = up_to,
            remaining = range.len(),
            "Marked headers as submitted"
        );
        Metrics::record_range(&range);
        Ok(())
    }

    /// Returns the number of pending headers.
    pub fn num_pending(&self) -> u64 {
        self.pending_range().len()
    }

    /// Returns `true` if every stored header has been submitted.
    pub fn is_empty(&self) -> bool {
        self.pending_range().is_empty()
    }

    /// Returns the height of the last header confirmed as submitted.
    pub fn last_submitted_height(&self) -> u64 {
        *self.lock()
    }
}

/// Iterator over pending headers, returned by [`PendingHeaders::pending_headers`].
#[derive(Debug)]
pub struct PendingHeadersIter<S> {
    store: Arc<S>,
    heights: RangeInclusive<u64>,
    done: bool,
}

impl<S: BlockStorageReader> Iterator for PendingHeadersIter<S> {
    type Item = Result<SignedHeader, PendingHeadersError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let height = self.heights.next()?;

        match self.store.get_block_data(height) {
            Ok((header, _, signature)) => Some(Ok(SignedHeader::new(header, signature))),
            Err(StorageError::EntryNotFound(_)) => {
                self.done = true;
                error!(target: "pending_headers", height, "Pending header missing from store");
                Some(Err(PendingHeadersError::MissingHeader { height }))
            }
            Err(err) => {
                self.done = true;
                error!(target: "pending_headers", height, %err, "Failed to load pending header");
                Some(Err(err.into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (_, upper) = self.heights.size_hint();
        (0, upper)
    }
}

impl<S: BlockStorageReader> FusedIterator for PendingHeadersIter<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingLayer;
    use alloy_primitives::B256;
    use mockall::mock;
    use rollnode_primitives::{BlockData, Header, Signature, test_utils::random_block};
    use rollnode_storage::{
        BlockStorageWriter, ChainDb,
        test_utils::{fill_block_store, temp_chain_db},
    };
    use rstest::rstest;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    mock! {
        pub Store {}

        impl BlockStorageReader for Store {
            fn get_block_data(&self, height: u64) -> Result<(Header, BlockData, Signature), StorageError>;
            fn get_block_by_hash(&self, hash: B256) -> Result<(Header, BlockData, Signature), StorageError>;
            fn height(&self) -> u64;
        }

        impl SubmissionProgressStorage for Store {
            fn last_submitted_height(&self) -> Result<u64, StorageError>;
            fn set_last_submitted_height(&self, height: u64) -> Result<(), StorageError>;
        }
    }

    fn tracker_with_blocks(count: u64) -> (TempDir, Arc<ChainDb>, PendingHeaders<ChainDb>) {
        let (dir, db) = temp_chain_db();
        let db = Arc::new(db);
        fill_block_store(&*db, "test-chain", 1, count).unwrap();
        let tracker = PendingHeaders::new(Arc::clone(&db)).unwrap();
        (dir, db, tracker)
    }

    fn stored_block(height: u64) -> (Header, BlockData, Signature) {
        let (signed, data) = random_block(height, 0, "test-chain");
        (signed.header, data, signed.signature)
    }

    #[test]
    fn test_submission_round() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let (_dir, db) = temp_chain_db();
            let db = Arc::new(db);
            let blocks = fill_block_store(&*db, "test-chain", 1, 3).unwrap();
            let tracker = PendingHeaders::new(Arc::clone(&db)).unwrap();

            assert_eq!(tracker.pending_range(), PendingRange::new(1, 3));
            let headers = tracker.get_pending_headers().unwrap();
            let heights: Vec<_> = headers.iter().map(SignedHeader::height).collect();
            assert_eq!(heights, vec![1, 2, 3]);
            for (header, (expected, _)) in headers.iter().zip(&blocks) {
                assert_eq!(header, expected);
            }

            tracker.mark_submitted(2).unwrap();
            assert_eq!(tracker.pending_range(), PendingRange::new(3, 3));
            let headers = tracker.get_pending_headers().unwrap();
            assert_eq!(headers.len(), 1);
            assert_eq!(headers[0], blocks[2].0);
            assert_eq!(tracker.num_pending(), 1);
            assert_eq!(db.last_submitted_height().unwrap(), 2);
        });

        let marked = layer.find("Marked headers as submitted");
        assert_eq!(marked.len(), 1);
        let event = &marked[0];
        assert_eq!(event.level, Level::INFO);
        assert_eq!(event.target, "pending_headers");
        assert_eq!(event.field("from"), Some("1"));
        assert_eq!(event.field("to"), Some("2"));
        assert_eq!(event.field("remaining"), Some("1"));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_pending_range_after_mark(#[case] submitted: u64) {
        let (_dir, _db, tracker) = tracker_with_blocks(5);
        assert_eq!(tracker.pending_range(), PendingRange::new(1, 5));

        tracker.mark_submitted(submitted).unwrap();
        assert_eq!(tracker.pending_range(), PendingRange::new(submitted + 1, 5));
        assert_eq!(tracker.num_pending(), 5 - submitted);
        assert_eq!(tracker.last_submitted_height(), submitted);
        assert_eq!(tracker.is_empty(), submitted == 5);

        let heights: Vec<_> =
            tracker.pending_headers().map(|header| header.unwrap().height()).collect();
        assert_eq!(heights, (submitted + 1..=5).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_store() {
        let (_dir, _db, tracker) = tracker_with_blocks(0);
        assert_eq!(tracker.pending_range(), PendingRange::new(1, 0));
        assert!(tracker.is_empty());
        assert_eq!(tracker.pending_headers().count(), 0);
        tracker.mark_submitted(0).unwrap();
    }

    #[test]
    fn test_mark_submitted_out_of_range() {
        let (_dir, db, tracker) = tracker_with_blocks(4);
        tracker.mark_submitted(3).unwrap();

        let below = tracker.mark_submitted(2);
        assert!(matches!(
            below,
            Err(PendingHeadersError::InvalidSubmittedHeight { requested: 2, confirmed: 3, height: 4 })
        ));
        let above = tracker.mark_submitted(5);
        assert!(matches!(
            above,
            Err(PendingHeadersError::InvalidSubmittedHeight { requested: 5, confirmed: 3, height: 4 })
        ));

        assert_eq!(tracker.last_submitted_height(), 3);
        assert_eq!(tracker.pending_range(), PendingRange::new(4, 4));
        assert_eq!(db.last_submitted_height().unwrap(), 3);
    }

    #[test]
    fn test_mark_submitted_same_height_is_noop() {
        let (_dir, _db, tracker) = tracker_with_blocks(4);
        tracker.mark_submitted(2).unwrap();
        tracker.mark_submitted(2).unwrap();
        assert_eq!(tracker.pending_range(), PendingRange::new(3, 4));
    }

    #[test]
    fn test_range_follows_store_height() {
        let (_dir, db, tracker) = tracker_with_blocks(2);
        tracker.mark_submitted(2).unwrap();
        assert!(tracker.is_empty());

        fill_block_store(&*db, "test-chain", 3, 2).unwrap();
        assert_eq!(tracker.pending_range(), PendingRange::new(3, 4));
    }

    #[test]
    fn test_iterator_captures_range() {
        let (_dir, db, tracker) = tracker_with_blocks(2);
        let iter = tracker.pending_headers();

        fill_block_store(&*db, "test-chain", 3, 1).unwrap();
        assert_eq!(iter.count(), 2);

        // A fresh iterator sees the new header.
        assert_eq!(tracker.pending_headers().count(), 3);
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chaindb");

        {
            let db = Arc::new(ChainDb::new(&path).unwrap());
            fill_block_store(&*db, "test-chain", 1, 5).unwrap();
            let tracker = PendingHeaders::new(db).unwrap();
            tracker.mark_submitted(3).unwrap();
        }

        let db = Arc::new(ChainDb::new(&path).unwrap());
        let tracker = PendingHeaders::new(db).unwrap();
        assert_eq!(tracker.last_submitted_height(), 3);
        assert_eq!(tracker.pending_range(), PendingRange::new(4, 5));
        let heights: Vec<_> =
            tracker.get_pending_headers().unwrap().iter().map(SignedHeader::height).collect();
        assert_eq!(heights, vec![4, 5]);
    }

    #[test]
    fn test_missing_header_stops_iteration() {
        let mut store = MockStore::new();
        store.expect_last_submitted_height().returning(|| Ok(0));
        store.expect_height().return_const(3u64);
        store
            .expect_get_block_data()
            .withf(|height| *height == 1)
            .returning(|height| Ok(stored_block(height)));
        store
            .expect_get_block_data()
            .withf(|height| *height == 2)
            .returning(|_| Err(StorageError::EntryNotFound("block at height 2".to_string())));

        let tracker = PendingHeaders::new(Arc::new(store)).unwrap();
        let mut iter = tracker.pending_headers();

        assert_eq!(iter.next().unwrap().unwrap().height(), 1);
        assert!(matches!(
            iter.next(),
            Some(Err(PendingHeadersError::MissingHeader { height: 2 }))
        ));
        assert!(iter.next().is_none());
        assert!(matches!(
            tracker.get_pending_headers(),
            Err(PendingHeadersError::MissingHeader { height: 2 })
        ));
    }

    #[test]
    fn test_storage_error_is_propagated() {
        let mut store = MockStore::new();
        store.expect_last_submitted_height().returning(|| Ok(0));
        store.expect_height().return_const(2u64);
        store
            .expect_get_block_data()
            .returning(|_| Err(StorageError::InvalidBlock("corrupted".to_string())));

        let tracker = PendingHeaders::new(Arc::new(store)).unwrap();
        let result = tracker.get_pending_headers();
        assert!(matches!(
            result,
            Err(PendingHeadersError::Storage(StorageError::InvalidBlock(_)))
        ));
    }

    #[test]
    fn test_inconsistent_persisted_state() {
        let mut store = MockStore::new();
        store.expect_last_submitted_height().returning(|| Ok(5));
        store.expect_height().return_const(3u64);

        let result = PendingHeaders::new(Arc::new(store));
        assert!(matches!(
            result,
            Err(PendingHeadersError::InconsistentState { confirmed: 5, height: 3 })
        ));
    }

    #[test]
    fn test_failed_persist_leaves_state_unchanged() {
        let mut store = MockStore::new();
        store.expect_last_submitted_height().returning(|| Ok(1));
        store.expect_height().return_const(4u64);
        store
            .expect_set_last_submitted_height()
            .withf(|height| *height == 3)
            .times(1)
            .returning(|_| Err(StorageError::ConflictError("write failed".to_string())));

        let tracker = PendingHeaders::new(Arc::new(store)).unwrap();
        let result = tracker.mark_submitted(3);

        assert!(matches!(result, Err(PendingHeadersError::Storage(_))));
        assert_eq!(tracker.last_submitted_height(), 1);
        assert_eq!(tracker.pending_range(), PendingRange::new(2, 4));
    }

    #[test]
    fn test_mark_submitted_at_max_height() {
        let mut store = MockStore::new();
        store.expect_last_submitted_height().returning(|| Ok(u64::MAX - 2));
        store.expect_height().return_const(u64::MAX);
        store
            .expect_set_last_submitted_height()
            .withf(|height| *height == u64::MAX)
            .times(1)
            .returning(|_| Ok(()));

        let tracker = PendingHeaders::new(Arc::new(store)).unwrap();
        tracker.mark_submitted(u64::MAX).unwrap();

        assert_eq!(tracker.last_submitted_height(), u64::MAX);
        assert_eq!(tracker.pending_range().to, u64::MAX);
    }

    #[test]
    fn test_concurrent_production_and_submission() {
        const BLOCKS: u64 = 40;
        let (_dir, db, tracker) = tracker_with_blocks(0);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for height in 1..=BLOCKS {
                    let (signed, data) = random_block(height, 1, "test-chain");
                    db.save_block_data(&signed.header, &data, &signed.signature).unwrap();
                    db.set_height(height).unwrap();
                }
            });

            scope.spawn(|| {
                let mut next = 1;
                while next <= BLOCKS {
                    let headers = tracker.get_pending_headers().unwrap();
                    for header in &headers {
                        assert_eq!(header.height(), next);
                        next += 1;
                    }
                    if let Some(last) = headers.last() {
                        tracker.mark_submitted(last.height()).unwrap();
                    }
                    std::thread::yield_now();
                }
            });
        });

        assert!(tracker.is_empty());
        assert_eq!(tracker.last_submitted_height(), BLOCKS);
        assert_eq!(db.last_submitted_height().unwrap(), BLOCKS);
    }
}
