//! Shared, swappable extractor handle.
//!
//! A compiled extractor never changes. To pick up a new catalog, build a new
//! [`Extractor`] and [`replace`](SharedExtractor::replace) the current one.
//! Readers that already hold a snapshot keep using the old extractor until
//! they drop it.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::gazetteer::extractor::Extractor;

/// A cloneable handle to the current extractor.
#[derive(Clone, Debug)]
pub struct SharedExtractor {
    current: Arc<RwLock<Arc<Extractor>>>,
}

impl SharedExtractor {
    pub fn new(extractor: Extractor) -> Self {
        SharedExtractor {
            current: Arc::new(RwLock::new(Arc::new(extractor))),
        }
    }

    /// A snapshot of the current extractor.
    pub fn current(&self) -> Arc<Extractor> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new extractor, returning the previous one.
    pub fn replace(&self, extractor: Extractor) -> Arc<Extractor> {
        let extractor = Arc::new(extractor);
        debug!(
            "Replacing extractor ({} place names)",
            extractor.dictionary().len()
        );
        std::mem::replace(&mut *self.current.write(), extractor)
    }

    /// Extract with the current extractor.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.current().extract(text)
    }
}

impl From<Extractor> for SharedExtractor {
    fn from(extractor: Extractor) -> Self {
        Self::new(extractor)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::gazetteer::dictionary::Dictionary;

    fn extractor(names: &[&str]) -> Extractor {
        Extractor::new(Dictionary::new(names.iter().copied())).unwrap()
    }

    #[test]
    fn test_replace() {
        let shared = SharedExtractor::new(extractor(&["Ribe"]));
        let snapshot = shared.current();
        assert_eq!(shared.extract("Ribe og Vejle"), vec!["Ribe"]);

        let previous = shared.replace(extractor(&["Vejle"]));
        assert!(Arc::ptr_eq(&previous, &snapshot));
        assert_eq!(shared.extract("Ribe og Vejle"), vec!["Vejle"]);

        // Old snapshots are unaffected
        assert_eq!(snapshot.extract("Ribe og Vejle"), vec!["Ribe"]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedExtractor::from(extractor(&["Odense", "Fyn"]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..100)
                        .map(|_| shared.extract("Fra Odense til Fyn").len())
                        .sum::<usize>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 200);
        }
    }
}
