pub mod capabilities;
pub mod errors;
pub mod index;
pub mod ledger;
pub mod projection;
pub mod store;

pub use passerelle_models as models;

use errors::Error;

use index::SearchIndex;

use ledger::ProgressLedger;

use store::ContentStore;

use tracing::debug;

/// One user session over the community portal.
///
/// Owns the only mutable state, the content store and the progress
/// ledger, and hands out read-only views over them. Presentation
/// variants share this one instance instead of re-declaring their own
/// copies of the content.
#[derive(Default)]
pub struct Hub {
    store: ContentStore,
    ledger: ProgressLedger,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: ProgressLedger) -> Self {
        Self {
            store: ContentStore::new(),
            ledger,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    pub fn index(&self) -> SearchIndex<'_> {
        SearchIndex::new(&self.store)
    }

    /// Record a module completion on the ledger.
    pub fn complete_module(&mut self, module_id: &str) -> Result<bool, Error> {
        self.ledger.complete_module(module_id)
    }

    /// Gate check as a result, for callers that propagate with `?`.
    ///
    /// The boolean form is [`ProgressLedger::can_access`].
    pub fn navigate(&self, feature_id: &str) -> Result<(), Error> {
        if self.ledger.can_access(feature_id) {
            return Ok(());
        }

        debug!(feature = feature_id, keys = self.ledger.keys(), "gate denied");

        Err(Error::GateDenied {
            feature: feature_id.to_owned(),
            required: self.ledger.required_keys(feature_id),
            held: self.ledger.keys(),
        })
    }

    /// Mutable access to the store, gated behind the hub feature.
    ///
    /// All content mutations go through here so a caller without keys
    /// cannot reach them.
    pub fn content(&mut self) -> Result<&mut ContentStore, Error> {
        self.navigate("hub")?;

        Ok(&mut self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use errors::ErrorKind;

    use models::media::PostPayload;

    #[test]
    fn content_access_is_gated_behind_keys() {
        let mut hub = Hub::new();

        let denied = hub.content().unwrap_err();
        assert_eq!(denied.kind(), ErrorKind::GateDenied);

        hub.complete_module("school").unwrap();

        let post = hub
            .content()
            .unwrap()
            .create_post(
                "Sarah M.",
                "Arrival",
                PostPayload::Text {
                    body: "Finally in Lyon!".into(),
                },
            )
            .unwrap()
            .id;

        assert!(hub.store().post(post).is_some());
    }

    #[test]
    fn navigate_reports_the_shortfall() {
        let hub = Hub::new();

        match hub.navigate("translate") {
            Err(Error::GateDenied {
                feature,
                required,
                held,
            }) => {
                assert_eq!(feature, "translate");
                assert_eq!(required, 1);
                assert_eq!(held, 0);
            }
            other => panic!("expected gate denial, got {other:?}"),
        }

        assert!(hub.navigate("checklist").is_ok());
    }
}
